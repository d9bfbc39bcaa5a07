use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use http::header::AUTHORIZATION;
use http::{HeaderValue, Request};
use tonic::body::BoxBody;
use tonic::transport::{Channel as TonicChannel, ClientTlsConfig, Endpoint, Identity};
use tonic::{Code, Status};
use tower::filter::{AsyncFilter, AsyncFilterLayer, AsyncPredicate};
use tower::util::Either;
use tower::{BoxError, ServiceBuilder};

use google_cloud_token::TokenSource;

use crate::cert::ClientCertificate;

pub const DEFAULT_PORT: u16 = 443;

/// The channel shared by every stub of a service. `Left` attaches a token per call, `Right` is used as is.
pub type Channel = Either<AsyncFilter<TonicChannel, AsyncAuthInterceptor>, TonicChannel>;

#[derive(Clone, Debug)]
pub struct AsyncAuthInterceptor {
    token_source: Arc<dyn TokenSource>,
}

impl AsyncAuthInterceptor {
    pub fn new(token_source: Arc<dyn TokenSource>) -> Self {
        Self { token_source }
    }
}

impl AsyncPredicate<Request<BoxBody>> for AsyncAuthInterceptor {
    type Future = Pin<Box<dyn Future<Output = Result<Self::Request, BoxError>> + Send>>;
    type Request = Request<BoxBody>;

    fn check(&mut self, request: Request<BoxBody>) -> Self::Future {
        let ts = self.token_source.clone();
        Box::pin(async move {
            let token = ts
                .token()
                .await
                .map_err(|e| Status::new(Code::Unauthenticated, format!("token error: {e:?}")))?;
            let token_header = HeaderValue::from_str(token.as_str())
                .map_err(|e| Status::new(Code::Unauthenticated, format!("token error: {e:?}")))?;
            let (mut parts, body) = request.into_parts();
            parts.headers.insert(AUTHORIZATION, token_header);
            Ok(Request::from_parts(parts, body))
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("tonic error : {0}")]
    TonicTransport(#[from] tonic::transport::Error),

    #[error("invalid host: {0}")]
    InvalidHost(String),

    #[error("mutual tls setup failed: {0}")]
    MutualTls(String),
}

#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ConnectionOptions {
    fn apply(&self, mut endpoint: Endpoint) -> Endpoint {
        endpoint = match self.timeout {
            Some(t) => endpoint.timeout(t),
            None => endpoint,
        };
        endpoint = match self.connect_timeout {
            Some(t) => endpoint.connect_timeout(t),
            None => endpoint,
        };
        endpoint
    }
}

/// Appends `:443` unless the host already carries a port.
pub fn with_default_port(host: &str) -> String {
    if split_port(host).1.is_some() {
        host.to_string()
    } else {
        format!("{host}:{DEFAULT_PORT}")
    }
}

/// The host without its port, used as the TLS server name.
pub fn domain_name(host: &str) -> &str {
    split_port(host).0
}

fn split_port(host: &str) -> (&str, Option<u16>) {
    match host.rsplit_once(':') {
        Some((domain, port)) if !domain.is_empty() => match port.parse::<u16>() {
            Ok(port) => (domain, Some(port)),
            Err(_) => (host, None),
        },
        _ => (host, None),
    }
}

/// Validates `host` and prepares a TLS endpoint for it without connecting.
///
/// A client `identity` turns the endpoint into a mutual TLS one; a broken certificate or key
/// fails here with [`Error::MutualTls`] instead of on the first call.
pub fn create_endpoint(
    host: &str,
    identity: Option<&ClientCertificate>,
    conn_options: &ConnectionOptions,
) -> Result<Endpoint, Error> {
    let host = with_default_port(host);
    let endpoint =
        TonicChannel::from_shared(format!("https://{host}")).map_err(|_| Error::InvalidHost(host.clone()))?;

    let mut tls_config = ClientTlsConfig::new()
        .with_webpki_roots()
        .domain_name(domain_name(&host));
    let endpoint = match identity {
        Some(cert) => {
            tls_config = tls_config.identity(Identity::from_pem(cert.cert_pem(), cert.key_pem()));
            endpoint
                .tls_config(tls_config)
                .map_err(|e| Error::MutualTls(format!("invalid client certificate: {e}")))?
        }
        None => endpoint.tls_config(tls_config)?,
    };
    Ok(conn_options.apply(endpoint))
}

/// Creates a channel from `endpoint` that connects on first use.
/// Must be called from within a tokio runtime.
pub fn connect_lazy(endpoint: &Endpoint, token_source: Option<Arc<dyn TokenSource>>) -> Channel {
    tracing::debug!("creating channel: uri={}", endpoint.uri());
    with_token_source(endpoint.connect_lazy(), token_source)
}

/// Builds a TLS channel to `host` that connects on first use.
pub fn create_channel(
    host: &str,
    token_source: Option<Arc<dyn TokenSource>>,
    identity: Option<&ClientCertificate>,
    conn_options: &ConnectionOptions,
) -> Result<Channel, Error> {
    let endpoint = create_endpoint(host, identity, conn_options)?;
    Ok(connect_lazy(&endpoint, token_source))
}

/// Builds a plaintext channel, e.g. for an emulator or an in-process server.
pub fn create_emulator_channel(host: &str, conn_options: &ConnectionOptions) -> Result<Channel, Error> {
    let endpoint =
        TonicChannel::from_shared(format!("http://{host}")).map_err(|_| Error::InvalidHost(host.to_string()))?;
    tracing::debug!("creating plaintext channel: host={host}");
    Ok(plain(conn_options.apply(endpoint).connect_lazy()))
}

/// Wraps an already connected tonic channel without any auth layer.
pub fn plain(con: TonicChannel) -> Channel {
    ServiceBuilder::new()
        .option_layer::<AsyncFilterLayer<AsyncAuthInterceptor>>(None)
        .service(con)
}

/// Wraps `con` so that every call carries a token from `token_source`.
pub fn with_token_source(con: TonicChannel, token_source: Option<Arc<dyn TokenSource>>) -> Channel {
    // use GCP token per call
    let auth_layer = token_source.map(|ts| AsyncFilterLayer::new(AsyncAuthInterceptor::new(ts)));
    ServiceBuilder::new().option_layer(auth_layer).service(con)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use google_cloud_token::BoxError as TokenError;

    use super::*;

    #[derive(Debug)]
    struct FixedToken;

    #[async_trait]
    impl TokenSource for FixedToken {
        async fn token(&self) -> Result<String, TokenError> {
            Ok("Bearer fixed".to_string())
        }
    }

    #[derive(Debug)]
    struct BrokenToken;

    #[async_trait]
    impl TokenSource for BrokenToken {
        async fn token(&self) -> Result<String, TokenError> {
            Err("expired refresh token".into())
        }
    }

    #[test]
    fn test_default_port() {
        assert_eq!("cloudkms.googleapis.com:443", with_default_port("cloudkms.googleapis.com"));
        assert_eq!("localhost:8080", with_default_port("localhost:8080"));
        assert_eq!("cloudkms.mtls.googleapis.com", domain_name("cloudkms.mtls.googleapis.com:443"));
        assert_eq!("cloudkms.googleapis.com", domain_name("cloudkms.googleapis.com"));
    }

    #[tokio::test]
    async fn test_auth_interceptor_sets_header() {
        let mut interceptor = AsyncAuthInterceptor::new(Arc::new(FixedToken));
        let request = Request::new(tonic::body::empty_body());
        let request = interceptor.check(request).await.unwrap();
        assert_eq!("Bearer fixed", request.headers().get(AUTHORIZATION).unwrap());
    }

    #[tokio::test]
    async fn test_auth_interceptor_rejects_on_token_error() {
        let mut interceptor = AsyncAuthInterceptor::new(Arc::new(BrokenToken));
        let err = interceptor.check(Request::new(tonic::body::empty_body())).await.unwrap_err();
        let status = err.downcast::<Status>().unwrap();
        assert_eq!(Code::Unauthenticated, status.code());
        assert!(status.message().contains("expired refresh token"));
    }

    #[tokio::test]
    async fn test_create_channel_is_lazy() {
        let channel = create_channel("cloudkms.googleapis.com", Some(Arc::new(FixedToken)), None, &Default::default());
        assert!(matches!(channel, Ok(Either::A(_))));
        let channel = create_channel("cloudkms.googleapis.com", None, None, &Default::default());
        assert!(matches!(channel, Ok(Either::B(_))));
    }

    #[test]
    fn test_create_endpoint_appends_port() {
        let endpoint = create_endpoint("cloudkms.googleapis.com", None, &Default::default()).unwrap();
        assert_eq!("cloudkms.googleapis.com:443", endpoint.uri().authority().unwrap().as_str());
        let endpoint = create_endpoint("localhost:8443", None, &Default::default()).unwrap();
        assert_eq!("localhost:8443", endpoint.uri().authority().unwrap().as_str());
    }

    #[tokio::test]
    async fn test_create_channel_invalid_identity() {
        let cert = ClientCertificate::new(b"not a cert".to_vec(), b"not a key".to_vec());
        match create_channel("cloudkms.mtls.googleapis.com", None, Some(&cert), &Default::default()) {
            Err(Error::MutualTls(message)) => assert!(message.contains("invalid client certificate")),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_create_emulator_channel_invalid_host() {
        match create_emulator_channel("bad host", &Default::default()) {
            Err(Error::InvalidHost(host)) => assert_eq!("bad host", host),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }
}
