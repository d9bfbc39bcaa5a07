use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

use base64::prelude::{Engine, BASE64_STANDARD};
use rustls_pemfile::Item;
use tokio::process::Command;

use google_cloud_token::BoxError;

/// Location of the endpoint verification metadata, relative to the home directory.
pub const CONTEXT_AWARE_METADATA_PATH: &str = ".secureConnect/context_aware_metadata.json";

/// Supplies the client certificate chain and private key, both PEM encoded.
pub type ClientCertSource = Arc<dyn Fn() -> Result<ClientCertificate, BoxError> + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("context aware metadata io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("cert provider command is empty")]
    EmptyCommand,

    #[error("cert provider command failed: {0}")]
    CommandFailed(String),

    #[error("invalid pem in cert provider output: {0}")]
    InvalidPem(std::io::Error),

    #[error("no certificate found in cert provider output")]
    MissingCertificate,

    #[error("no private key found in cert provider output")]
    MissingPrivateKey,
}

#[derive(Clone)]
pub struct ClientCertificate {
    cert_pem: Vec<u8>,
    key_pem: Vec<u8>,
}

impl Debug for ClientCertificate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCertificate")
            .field("cert_pem_len", &self.cert_pem.len())
            .finish_non_exhaustive()
    }
}

impl ClientCertificate {
    pub fn new(cert_pem: impl Into<Vec<u8>>, key_pem: impl Into<Vec<u8>>) -> Self {
        Self {
            cert_pem: cert_pem.into(),
            key_pem: key_pem.into(),
        }
    }

    pub fn cert_pem(&self) -> &[u8] {
        &self.cert_pem
    }

    pub fn key_pem(&self) -> &[u8] {
        &self.key_pem
    }

    /// Collects every certificate of `output`, in order, and its first private key.
    pub fn from_pem_output(output: &[u8]) -> Result<Self, Error> {
        let mut cert_pem = String::new();
        let mut key_pem = None;
        for item in rustls_pemfile::read_all(&mut &output[..]) {
            match item.map_err(Error::InvalidPem)? {
                Item::X509Certificate(cert) => cert_pem.push_str(&encode_pem("CERTIFICATE", &cert)),
                Item::Pkcs1Key(key) if key_pem.is_none() => {
                    key_pem = Some(encode_pem("RSA PRIVATE KEY", key.secret_pkcs1_der()))
                }
                Item::Pkcs8Key(key) if key_pem.is_none() => {
                    key_pem = Some(encode_pem("PRIVATE KEY", key.secret_pkcs8_der()))
                }
                Item::Sec1Key(key) if key_pem.is_none() => {
                    key_pem = Some(encode_pem("EC PRIVATE KEY", key.secret_sec1_der()))
                }
                _ => {}
            }
        }
        if cert_pem.is_empty() {
            return Err(Error::MissingCertificate);
        }
        let key_pem = key_pem.ok_or(Error::MissingPrivateKey)?;
        Ok(Self::new(cert_pem, key_pem))
    }
}

fn encode_pem(label: &str, der: &[u8]) -> String {
    let encoded = BASE64_STANDARD.encode(der);
    let mut pem = format!("-----BEGIN {label}-----\n");
    // 64 columns per line, as in RFC 7468
    for line in encoded.as_bytes().chunks(64) {
        pem.push_str(&String::from_utf8_lossy(line));
        pem.push('\n');
    }
    pem.push_str(&format!("-----END {label}-----\n"));
    pem
}

#[derive(serde::Deserialize, Debug)]
struct ContextAwareMetadata {
    #[serde(default)]
    cert_provider_command: Vec<String>,
}

/// The platform default client certificate, provisioned by endpoint verification.
///
/// When the metadata file does not exist there is no default certificate and the
/// caller falls back to server authenticated TLS.
#[derive(Debug, Clone)]
pub struct DefaultCertSource {
    metadata_path: Option<PathBuf>,
}

impl Default for DefaultCertSource {
    fn default() -> Self {
        Self {
            metadata_path: home::home_dir().map(|home| home.join(CONTEXT_AWARE_METADATA_PATH)),
        }
    }
}

impl DefaultCertSource {
    pub fn with_metadata_path(path: impl Into<PathBuf>) -> Self {
        Self {
            metadata_path: Some(path.into()),
        }
    }

    pub fn has_default_client_cert(&self) -> bool {
        self.metadata_path.as_ref().map(|p| p.is_file()).unwrap_or(false)
    }

    /// Runs the cert provider command and returns its certificate, or `None` without metadata.
    pub async fn load(&self) -> Result<Option<ClientCertificate>, Error> {
        let path = match &self.metadata_path {
            Some(path) if path.is_file() => path,
            _ => {
                tracing::debug!("no context aware metadata, client certificate is not used");
                return Ok(None);
            }
        };
        let metadata: ContextAwareMetadata = serde_json::from_slice(&tokio::fs::read(path).await?)?;
        let (program, args) = metadata
            .cert_provider_command
            .split_first()
            .ok_or(Error::EmptyCommand)?;

        tracing::debug!("running cert provider command {program}");
        let output = Command::new(program).args(args).output().await?;
        if !output.status.success() {
            return Err(Error::CommandFailed(format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        ClientCertificate::from_pem_output(&output.stdout).map(Some)
    }
}
