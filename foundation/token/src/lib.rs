use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait]
pub trait TokenSource: Send + Sync + Debug {
    /// token returns the value of the `authorization` header, e.g. `Bearer ya29...`
    async fn token(&self) -> Result<String, BoxError>;
}

/// Credentials as seen by the transport layer.
pub trait TokenSourceProvider: Send + Sync + Debug {
    /// token returns the token source implementation
    fn token_source(&self) -> Arc<dyn TokenSource>;
}

/// Provider used when no credentials were configured.
/// Every token request fails, so calls are rejected as unauthenticated instead of going out anonymously.
#[derive(Debug, Default)]
pub struct NopeTokenSourceProvider {}

#[derive(Debug)]
struct NopeTokenSource;

#[async_trait]
impl TokenSource for NopeTokenSource {
    async fn token(&self) -> Result<String, BoxError> {
        Err("no token source provider is specified. use ClientConfig::with_auth or with_credentials".into())
    }
}

impl TokenSourceProvider for NopeTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        Arc::new(NopeTokenSource)
    }
}

/// Token source that always returns the same header value.
/// Useful for pre-fetched access tokens such as the one produced by an OAuth authorization-code exchange.
#[derive(Clone)]
pub struct StaticTokenSourceProvider {
    ts: Arc<StaticTokenSource>,
}

#[derive(Clone)]
struct StaticTokenSource {
    value: String,
}

impl Debug for StaticTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticTokenSource")
    }
}

impl Debug for StaticTokenSourceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticTokenSourceProvider")
    }
}

impl StaticTokenSourceProvider {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            ts: Arc::new(StaticTokenSource {
                value: format!("Bearer {}", access_token.into()),
            }),
        }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<String, BoxError> {
        Ok(self.value.clone())
    }
}

impl TokenSourceProvider for StaticTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        self.ts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_nope_token_source_rejects() {
        let ts = NopeTokenSourceProvider::default().token_source();
        assert!(ts.token().await.is_err());
    }

    #[tokio::test]
    async fn test_static_token_source() {
        let provider = StaticTokenSourceProvider::new("abc");
        let ts = provider.token_source();
        assert_eq!("Bearer abc", ts.token().await.unwrap());
        assert_eq!("StaticTokenSourceProvider", format!("{provider:?}"));
    }
}
