use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tonic::transport::Endpoint;

use google_cloud_gax::cert::{ClientCertSource, DefaultCertSource};
use google_cloud_gax::conn::{
    connect_lazy, create_channel, create_endpoint, with_default_port, Channel, ConnectionOptions, Error,
};
use google_cloud_googleapis::cloud::kms::v1::{
    AsymmetricDecryptRequest, AsymmetricDecryptResponse, AsymmetricSignRequest, AsymmetricSignResponse,
    CreateCryptoKeyRequest, CreateCryptoKeyVersionRequest, CreateImportJobRequest, CreateKeyRingRequest, CryptoKey,
    CryptoKeyVersion, DecryptRequest, DecryptResponse, DestroyCryptoKeyVersionRequest, EncryptRequest,
    EncryptResponse, GetCryptoKeyRequest, GetCryptoKeyVersionRequest, GetImportJobRequest, GetKeyRingRequest,
    GetPublicKeyRequest, ImportCryptoKeyVersionRequest, ImportJob, KeyRing, ListCryptoKeyVersionsRequest,
    ListCryptoKeyVersionsResponse, ListCryptoKeysRequest, ListCryptoKeysResponse, ListImportJobsRequest,
    ListImportJobsResponse, ListKeyRingsRequest, ListKeyRingsResponse, PublicKey, RestoreCryptoKeyVersionRequest,
    UpdateCryptoKeyPrimaryVersionRequest, UpdateCryptoKeyRequest, UpdateCryptoKeyVersionRequest,
};
use google_cloud_token::{TokenSource, TokenSourceProvider};

use crate::grpc::apiv1::method::Method;
use crate::grpc::apiv1::stub::{StubCache, UnaryStub};
use crate::grpc::apiv1::KMS;

/// How the transport reaches the service.
pub struct TransportConfig {
    /// Defaults to `cloudkms.googleapis.com`. `:443` is appended when no port is given.
    pub host: String,
    /// Resolved from the environment when not set and no channel is given.
    pub credentials: Option<Box<dyn TokenSourceProvider>>,
    /// A ready channel. When set, `credentials` are ignored.
    pub channel: Option<Channel>,
    /// Mutual TLS endpoint. Overrides `host`.
    pub api_mtls_endpoint: Option<String>,
    /// Client certificate for the mutual TLS endpoint. Ignored without `api_mtls_endpoint`.
    pub client_cert_source: Option<ClientCertSource>,
    pub conn_options: ConnectionOptions,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            host: KMS.to_string(),
            credentials: None,
            channel: None,
            api_mtls_endpoint: None,
            client_cert_source: None,
            conn_options: ConnectionOptions::default(),
        }
    }
}

impl Debug for TransportConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConfig")
            .field("host", &self.host)
            .field("credentials", &self.credentials)
            .field("channel", &self.channel.is_some())
            .field("api_mtls_endpoint", &self.api_mtls_endpoint)
            .field("client_cert_source", &self.client_cert_source.is_some())
            .field("conn_options", &self.conn_options)
            .finish()
    }
}

enum ChannelState {
    Ready(Channel),
    Lazy {
        endpoint: Endpoint,
        token_source: Option<Arc<dyn TokenSource>>,
        channel: OnceCell<Channel>,
    },
}

struct Inner {
    host: String,
    channel: ChannelState,
    stubs: StubCache,
}

/// gRPC transport of the key management service.
///
/// Holds one channel and hands out one memoized [`UnaryStub`] per remote method.
/// Cloning is cheap and clones share the channel and the stubs.
#[derive(Clone)]
pub struct Transport {
    inner: Arc<Inner>,
}

impl Debug for Transport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("host", &self.inner.host)
            .field("channel_created", &self.is_channel_created())
            .field("stubs", &self.inner.stubs)
            .finish()
    }
}

impl Transport {
    pub async fn new(config: TransportConfig) -> Result<Self, Error> {
        if let Some(channel) = config.channel {
            if config.credentials.is_some() {
                tracing::debug!("a channel was supplied, the credentials are ignored");
            }
            return Ok(Self::with_state(with_default_port(&config.host), ChannelState::Ready(channel)));
        }

        if let Some(mtls_endpoint) = config.api_mtls_endpoint {
            let host = with_default_port(&mtls_endpoint);
            let token_source = resolve_token_source(config.credentials)
                .await
                .map_err(|e| Error::MutualTls(format!("failed to resolve credentials: {e}")))?;
            let identity = match config.client_cert_source {
                Some(source) => Some(
                    source().map_err(|e| Error::MutualTls(format!("client_cert_source failed: {e}")))?,
                ),
                None => DefaultCertSource::default()
                    .load()
                    .await
                    .map_err(|e| Error::MutualTls(format!("default client certificate: {e}")))?,
            };
            let channel = create_channel(&host, token_source, identity.as_ref(), &config.conn_options)?;
            return Ok(Self::with_state(host, ChannelState::Ready(channel)));
        }

        let host = with_default_port(&config.host);
        let token_source = resolve_token_source(config.credentials).await?;
        let endpoint = create_endpoint(&host, None, &config.conn_options)?;
        Ok(Self::with_state(
            host,
            ChannelState::Lazy {
                endpoint,
                token_source,
                channel: OnceCell::new(),
            },
        ))
    }

    fn with_state(host: String, channel: ChannelState) -> Self {
        Self {
            inner: Arc::new(Inner {
                host,
                channel,
                stubs: StubCache::default(),
            }),
        }
    }

    /// The target address, including the port.
    pub fn host(&self) -> &str {
        &self.inner.host
    }

    /// The channel shared by every stub, created on first use.
    /// Must be called from within a tokio runtime.
    pub fn grpc_channel(&self) -> Channel {
        match &self.inner.channel {
            ChannelState::Ready(channel) => channel.clone(),
            ChannelState::Lazy {
                endpoint,
                token_source,
                channel,
            } => channel.get_or_init(|| connect_lazy(endpoint, token_source.clone())).clone(),
        }
    }

    pub fn is_channel_created(&self) -> bool {
        match &self.inner.channel {
            ChannelState::Ready(_) => true,
            ChannelState::Lazy { channel, .. } => channel.get().is_some(),
        }
    }

    pub fn stubs(&self) -> &StubCache {
        &self.inner.stubs
    }

    fn stub<Req, Resp>(&self, method: Method) -> Arc<UnaryStub<Req, Resp>>
    where
        Req: prost::Message + 'static,
        Resp: prost::Message + Default + 'static,
    {
        self.inner.stubs.get_or_insert_with(method, || {
            tracing::debug!("creating stub {}", method.path());
            UnaryStub::new(method, self.grpc_channel())
        })
    }

    pub fn list_key_rings(&self) -> Arc<UnaryStub<ListKeyRingsRequest, ListKeyRingsResponse>> {
        self.stub(Method::ListKeyRings)
    }

    pub fn list_crypto_keys(&self) -> Arc<UnaryStub<ListCryptoKeysRequest, ListCryptoKeysResponse>> {
        self.stub(Method::ListCryptoKeys)
    }

    pub fn list_crypto_key_versions(
        &self,
    ) -> Arc<UnaryStub<ListCryptoKeyVersionsRequest, ListCryptoKeyVersionsResponse>> {
        self.stub(Method::ListCryptoKeyVersions)
    }

    pub fn list_import_jobs(&self) -> Arc<UnaryStub<ListImportJobsRequest, ListImportJobsResponse>> {
        self.stub(Method::ListImportJobs)
    }

    pub fn get_key_ring(&self) -> Arc<UnaryStub<GetKeyRingRequest, KeyRing>> {
        self.stub(Method::GetKeyRing)
    }

    pub fn get_crypto_key(&self) -> Arc<UnaryStub<GetCryptoKeyRequest, CryptoKey>> {
        self.stub(Method::GetCryptoKey)
    }

    pub fn get_crypto_key_version(&self) -> Arc<UnaryStub<GetCryptoKeyVersionRequest, CryptoKeyVersion>> {
        self.stub(Method::GetCryptoKeyVersion)
    }

    pub fn get_public_key(&self) -> Arc<UnaryStub<GetPublicKeyRequest, PublicKey>> {
        self.stub(Method::GetPublicKey)
    }

    pub fn get_import_job(&self) -> Arc<UnaryStub<GetImportJobRequest, ImportJob>> {
        self.stub(Method::GetImportJob)
    }

    pub fn create_key_ring(&self) -> Arc<UnaryStub<CreateKeyRingRequest, KeyRing>> {
        self.stub(Method::CreateKeyRing)
    }

    pub fn create_crypto_key(&self) -> Arc<UnaryStub<CreateCryptoKeyRequest, CryptoKey>> {
        self.stub(Method::CreateCryptoKey)
    }

    pub fn create_crypto_key_version(&self) -> Arc<UnaryStub<CreateCryptoKeyVersionRequest, CryptoKeyVersion>> {
        self.stub(Method::CreateCryptoKeyVersion)
    }

    pub fn import_crypto_key_version(&self) -> Arc<UnaryStub<ImportCryptoKeyVersionRequest, CryptoKeyVersion>> {
        self.stub(Method::ImportCryptoKeyVersion)
    }

    pub fn create_import_job(&self) -> Arc<UnaryStub<CreateImportJobRequest, ImportJob>> {
        self.stub(Method::CreateImportJob)
    }

    pub fn update_crypto_key(&self) -> Arc<UnaryStub<UpdateCryptoKeyRequest, CryptoKey>> {
        self.stub(Method::UpdateCryptoKey)
    }

    pub fn update_crypto_key_version(&self) -> Arc<UnaryStub<UpdateCryptoKeyVersionRequest, CryptoKeyVersion>> {
        self.stub(Method::UpdateCryptoKeyVersion)
    }

    pub fn encrypt(&self) -> Arc<UnaryStub<EncryptRequest, EncryptResponse>> {
        self.stub(Method::Encrypt)
    }

    pub fn decrypt(&self) -> Arc<UnaryStub<DecryptRequest, DecryptResponse>> {
        self.stub(Method::Decrypt)
    }

    pub fn asymmetric_sign(&self) -> Arc<UnaryStub<AsymmetricSignRequest, AsymmetricSignResponse>> {
        self.stub(Method::AsymmetricSign)
    }

    pub fn asymmetric_decrypt(&self) -> Arc<UnaryStub<AsymmetricDecryptRequest, AsymmetricDecryptResponse>> {
        self.stub(Method::AsymmetricDecrypt)
    }

    pub fn update_crypto_key_primary_version(&self) -> Arc<UnaryStub<UpdateCryptoKeyPrimaryVersionRequest, CryptoKey>> {
        self.stub(Method::UpdateCryptoKeyPrimaryVersion)
    }

    pub fn destroy_crypto_key_version(&self) -> Arc<UnaryStub<DestroyCryptoKeyVersionRequest, CryptoKeyVersion>> {
        self.stub(Method::DestroyCryptoKeyVersion)
    }

    pub fn restore_crypto_key_version(&self) -> Arc<UnaryStub<RestoreCryptoKeyVersionRequest, CryptoKeyVersion>> {
        self.stub(Method::RestoreCryptoKeyVersion)
    }
}

async fn resolve_token_source(
    credentials: Option<Box<dyn TokenSourceProvider>>,
) -> Result<Option<Arc<dyn TokenSource>>, Error> {
    if let Some(provider) = credentials {
        return Ok(Some(provider.token_source()));
    }
    default_token_source().await
}

#[cfg(feature = "auth")]
async fn default_token_source() -> Result<Option<Arc<dyn TokenSource>>, Error> {
    use google_cloud_auth::project::Config;
    use google_cloud_auth::token::DefaultTokenSourceProvider;

    tracing::debug!("no credentials were supplied, resolving them from the environment");
    let provider = DefaultTokenSourceProvider::new(Config::default().with_scopes(&crate::grpc::apiv1::SCOPES))
        .await
        .map_err(|e| Error::Auth(Box::new(e)))?;
    Ok(Some(provider.token_source()))
}

#[cfg(not(feature = "auth"))]
async fn default_token_source() -> Result<Option<Arc<dyn TokenSource>>, Error> {
    tracing::debug!("no credentials were supplied, calls will be rejected as unauthenticated");
    Ok(Some(google_cloud_token::NopeTokenSourceProvider::default().token_source()))
}
