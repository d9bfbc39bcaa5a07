use std::fmt::{Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "auth")]
pub use google_cloud_auth;
use google_cloud_gax::cert::{ClientCertSource, DefaultCertSource};
use google_cloud_gax::conn::{ConnectionOptions, Error};
use google_cloud_token::TokenSourceProvider;

use crate::grpc::apiv1::kms_client::Client as KmsGrpcClient;
use crate::grpc::apiv1::transport::{Transport, TransportConfig};
use crate::grpc::apiv1::{KMS, MTLS_ENDPOINT};

/// Environment variable selecting whether the mutual TLS endpoint is used.
pub const USE_MTLS_ENV: &str = "GOOGLE_API_USE_MTLS";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unsupported {USE_MTLS_ENV} value: {0}, must be one of never, auto or always")]
pub struct InvalidMtlsMode(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MtlsMode {
    Never,
    #[default]
    Auto,
    Always,
}

impl FromStr for MtlsMode {
    type Err = InvalidMtlsMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(MtlsMode::Never),
            "" | "auto" => Ok(MtlsMode::Auto),
            "always" => Ok(MtlsMode::Always),
            _ => Err(InvalidMtlsMode(s.to_string())),
        }
    }
}

impl MtlsMode {
    /// Reads [`USE_MTLS_ENV`]. Unset means [`MtlsMode::Auto`].
    pub fn from_env() -> Result<Self, InvalidMtlsMode> {
        match std::env::var(USE_MTLS_ENV) {
            Ok(v) => v.parse(),
            Err(_) => Ok(MtlsMode::default()),
        }
    }
}

pub struct ClientConfig {
    pub endpoint: String,
    /// Resolved from the environment when `None`.
    pub token_source_provider: Option<Box<dyn TokenSourceProvider>>,
    pub api_mtls_endpoint: Option<String>,
    pub client_cert_source: Option<ClientCertSource>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("token_source_provider", &self.token_source_provider)
            .field("api_mtls_endpoint", &self.api_mtls_endpoint)
            .field("client_cert_source", &self.client_cert_source.is_some())
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: KMS.to_string(),
            token_source_provider: None,
            api_mtls_endpoint: None,
            client_cert_source: None,
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ClientConfig {
    /// Switches to the mutual TLS endpoint according to [`USE_MTLS_ENV`].
    ///
    /// `auto` switches only when a client certificate is available, either from
    /// `client_cert_source` or from the default certificate source.
    pub fn with_mtls_from_env(mut self) -> Result<Self, InvalidMtlsMode> {
        let use_mtls = match MtlsMode::from_env()? {
            MtlsMode::Never => false,
            MtlsMode::Always => true,
            MtlsMode::Auto => {
                self.client_cert_source.is_some() || DefaultCertSource::default().has_default_client_cert()
            }
        };
        if use_mtls {
            tracing::debug!("using mutual tls endpoint {MTLS_ENDPOINT}");
            self.api_mtls_endpoint = Some(MTLS_ENDPOINT.to_string());
        }
        Ok(self)
    }

    pub fn with_client_cert_source(mut self, source: ClientCertSource) -> Self {
        self.client_cert_source = Some(source);
        self
    }

    fn into_transport_config(self) -> TransportConfig {
        TransportConfig {
            host: self.endpoint,
            credentials: self.token_source_provider,
            channel: None,
            api_mtls_endpoint: self.api_mtls_endpoint,
            client_cert_source: self.client_cert_source,
            conn_options: ConnectionOptions {
                timeout: self.timeout,
                connect_timeout: self.connect_timeout,
            },
        }
    }
}

#[cfg(feature = "auth")]
impl ClientConfig {
    pub async fn with_auth(self) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new(Self::auth_config()).await?;
        Ok(self.with_token_source(ts))
    }

    pub async fn with_credentials(
        self,
        credentials: google_cloud_auth::credentials::CredentialsFile,
    ) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new_with_credentials(
            Self::auth_config(),
            Box::new(credentials),
        )
        .await?;
        Ok(self.with_token_source(ts))
    }

    fn with_token_source(mut self, ts: google_cloud_auth::token::DefaultTokenSourceProvider) -> Self {
        self.token_source_provider = Some(Box::new(ts));
        self
    }

    fn auth_config() -> google_cloud_auth::project::Config<'static> {
        google_cloud_auth::project::Config::default().with_scopes(&crate::grpc::apiv1::SCOPES)
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    kms_client: KmsGrpcClient,
}

impl Client {
    pub async fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = Transport::new(config.into_transport_config()).await?;
        Ok(Self::with_transport(transport))
    }

    /// Wraps an existing transport, e.g. one built over a caller supplied channel.
    pub fn with_transport(transport: Transport) -> Self {
        Self {
            kms_client: KmsGrpcClient::new(transport),
        }
    }
}

impl Deref for Client {
    type Target = KmsGrpcClient;

    fn deref(&self) -> &Self::Target {
        &self.kms_client
    }
}

impl DerefMut for Client {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.kms_client
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use serial_test::serial;

    use google_cloud_gax::cert::{ClientCertificate, CONTEXT_AWARE_METADATA_PATH};
    use google_cloud_token::{BoxError, StaticTokenSourceProvider};

    use super::*;

    #[ctor::ctor]
    fn init() {
        let _ = tracing_subscriber::fmt().try_init();
    }

    fn with_env<R>(mode: Option<&str>, home: &std::path::Path, f: impl FnOnce() -> R) -> R {
        temp_env::with_vars(
            [
                (USE_MTLS_ENV, mode.map(std::ffi::OsStr::new)),
                ("HOME", Some(home.as_os_str())),
            ],
            f,
        )
    }

    #[test]
    fn test_mtls_mode_from_str() {
        assert_eq!(Ok(MtlsMode::Never), "never".parse());
        assert_eq!(Ok(MtlsMode::Auto), "auto".parse());
        assert_eq!(Ok(MtlsMode::Always), "ALWAYS".parse());
        assert_eq!(Ok(MtlsMode::Auto), "".parse());
        assert_eq!(Err(InvalidMtlsMode("sometimes".to_string())), "sometimes".parse::<MtlsMode>());
    }

    #[test]
    #[serial]
    fn test_mtls_never() {
        let home = tempfile::tempdir().unwrap();
        let config = with_env(Some("never"), home.path(), || ClientConfig::default().with_mtls_from_env()).unwrap();
        assert_eq!(None, config.api_mtls_endpoint);
    }

    #[test]
    #[serial]
    fn test_mtls_always() {
        let home = tempfile::tempdir().unwrap();
        let config = with_env(Some("always"), home.path(), || ClientConfig::default().with_mtls_from_env()).unwrap();
        assert_eq!(Some(MTLS_ENDPOINT), config.api_mtls_endpoint.as_deref());
    }

    #[test]
    #[serial]
    fn test_mtls_auto_without_certificate() {
        let home = tempfile::tempdir().unwrap();
        let config = with_env(None, home.path(), || ClientConfig::default().with_mtls_from_env()).unwrap();
        assert_eq!(None, config.api_mtls_endpoint);
    }

    #[test]
    #[serial]
    fn test_mtls_auto_with_cert_source() {
        let home = tempfile::tempdir().unwrap();
        let source: ClientCertSource = Arc::new(|| -> Result<ClientCertificate, BoxError> {
            Ok(ClientCertificate::new("cert", "key"))
        });
        let config = with_env(Some("auto"), home.path(), || {
            ClientConfig::default().with_client_cert_source(source).with_mtls_from_env()
        })
        .unwrap();
        assert_eq!(Some(MTLS_ENDPOINT), config.api_mtls_endpoint.as_deref());
    }

    #[test]
    #[serial]
    fn test_mtls_auto_with_default_certificate() {
        let home = tempfile::tempdir().unwrap();
        let metadata = home.path().join(CONTEXT_AWARE_METADATA_PATH);
        fs::create_dir_all(metadata.parent().unwrap()).unwrap();
        fs::write(&metadata, r#"{"cert_provider_command":["cat","cert.pem"]}"#).unwrap();

        let config = with_env(Some("auto"), home.path(), || ClientConfig::default().with_mtls_from_env()).unwrap();
        assert_eq!(Some(MTLS_ENDPOINT), config.api_mtls_endpoint.as_deref());
    }

    #[test]
    #[serial]
    fn test_mtls_invalid_mode() {
        let home = tempfile::tempdir().unwrap();
        let result = with_env(Some("yes"), home.path(), || ClientConfig::default().with_mtls_from_env());
        assert_eq!(InvalidMtlsMode("yes".to_string()), result.unwrap_err());
    }

    #[tokio::test]
    async fn test_new_client() {
        let config = ClientConfig {
            token_source_provider: Some(Box::new(StaticTokenSourceProvider::new("ya29.test"))),
            ..Default::default()
        };
        let client = Client::new(config).await.unwrap();
        assert_eq!("cloudkms.googleapis.com:443", client.transport().host());
        assert!(!client.transport().is_channel_created());
    }
}
