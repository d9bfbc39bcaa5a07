use async_trait::async_trait;

use crate::error::Error;
use crate::token::Token;
use crate::token_source::TokenSource;

/// Caches the last token and only asks `target` again once it is about to expire.
#[derive(Debug)]
pub struct ReuseTokenSource {
    target: Box<dyn TokenSource>,
    current_token: std::sync::RwLock<Token>,
    guard: tokio::sync::Mutex<()>,
}

impl ReuseTokenSource {
    pub(crate) fn new(target: Box<dyn TokenSource>, token: Token) -> Self {
        Self {
            target,
            current_token: std::sync::RwLock::new(token),
            guard: tokio::sync::Mutex::new(()),
        }
    }

    fn cached(&self) -> Option<Token> {
        let token = self.current_token.read().ok()?;
        token.valid().then(|| token.clone())
    }
}

#[async_trait]
impl TokenSource for ReuseTokenSource {
    async fn token(&self) -> Result<Token, Error> {
        if let Some(token) = self.cached() {
            return Ok(token);
        }

        // only a single task refreshes
        let _locking = self.guard.lock().await;
        if let Some(token) = self.cached() {
            return Ok(token);
        }

        let token = self.target.token().await?;
        tracing::debug!("token refresh success : expiry={:?}", token.expiry);
        let mut current = self.current_token.write().map_err(|_| Error::InvalidToken)?;
        *current = token.clone();
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use time::OffsetDateTime;

    use super::*;

    #[derive(Debug, Default)]
    struct CountingSource {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TokenSource for CountingSource {
        async fn token(&self) -> Result<Token, Error> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Token {
                access_token: format!("token-{n}"),
                token_type: "Bearer".to_string(),
                expiry: Some(OffsetDateTime::now_utc() + time::Duration::hours(1)),
            })
        }
    }

    #[tokio::test]
    async fn test_reuses_valid_token() {
        let calls = Arc::new(AtomicUsize::new(0));
        let initial = Token {
            access_token: "initial".to_string(),
            token_type: "Bearer".to_string(),
            expiry: Some(OffsetDateTime::now_utc() + time::Duration::hours(1)),
        };
        let ts = ReuseTokenSource::new(Box::new(CountingSource { calls: calls.clone() }), initial);
        assert_eq!("initial", ts.token().await.unwrap().access_token);
        assert_eq!("initial", ts.token().await.unwrap().access_token);
        assert_eq!(0, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_refreshes_expired_token() {
        let calls = Arc::new(AtomicUsize::new(0));
        let expired = Token {
            access_token: "expired".to_string(),
            token_type: "Bearer".to_string(),
            expiry: Some(OffsetDateTime::now_utc() - time::Duration::minutes(1)),
        };
        let ts = ReuseTokenSource::new(Box::new(CountingSource { calls: calls.clone() }), expired);
        assert_eq!("token-0", ts.token().await.unwrap().access_token);
        assert_eq!("token-0", ts.token().await.unwrap().access_token);
        assert_eq!(1, calls.load(Ordering::SeqCst));
    }
}
