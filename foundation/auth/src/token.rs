use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_token::{BoxError, TokenSource, TokenSourceProvider};

use crate::credentials::CredentialsFile;
use crate::error::Error;
use crate::project::{create_token_source_from_credentials, create_token_source_from_project, project, Config, Project};
use crate::token_source::TokenSource as InternalTokenSource;

pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

#[derive(Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expiry: Option<time::OffsetDateTime>,
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}

impl Token {
    pub fn value(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub fn valid(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }

    fn expired(&self) -> bool {
        match self.expiry {
            None => false,
            Some(s) => {
                let now = time::OffsetDateTime::now_utc();
                let exp = s + time::Duration::seconds(-10);
                now > exp
            }
        }
    }
}

/// Credentials resolved from the environment (or from an explicit credentials file),
/// exposed to the transport as a [`TokenSourceProvider`].
pub struct DefaultTokenSourceProvider {
    ts: Arc<DefaultTokenSource>,
    pub project_id: Option<String>,
    pub source_credentials: Option<Box<CredentialsFile>>,
}

impl Debug for DefaultTokenSourceProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultTokenSourceProvider")
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl DefaultTokenSourceProvider {
    pub async fn new(config: Config<'_>) -> Result<Self, Error> {
        let project = project().await?;
        let inner = create_token_source_from_project(&project, config).await?;

        let (project_id, source_credentials) = match project {
            Project::FromMetadataServer(info) => (info.project_id, None),
            Project::FromFile(cred) => (
                cred.project_id.as_ref().or(cred.quota_project_id.as_ref()).cloned(),
                Some(cred),
            ),
        };
        Ok(Self {
            ts: Arc::new(DefaultTokenSource { inner: inner.into() }),
            project_id,
            source_credentials,
        })
    }

    /// Creates source using existing credentials file
    pub async fn new_with_credentials(config: Config<'_>, credentials: Box<CredentialsFile>) -> Result<Self, Error> {
        let inner = create_token_source_from_credentials(&credentials, &config).await?;
        Ok(Self {
            ts: Arc::new(DefaultTokenSource { inner: inner.into() }),
            project_id: credentials.project_id.clone(),
            source_credentials: Some(credentials),
        })
    }
}

impl TokenSourceProvider for DefaultTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        self.ts.clone()
    }
}

#[derive(Debug, Clone)]
pub struct DefaultTokenSource {
    inner: Arc<dyn InternalTokenSource>,
}

#[async_trait]
impl TokenSource for DefaultTokenSource {
    async fn token(&self) -> Result<String, BoxError> {
        let token = self.inner.token().await?;
        Ok(token.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expiry: Option<time::OffsetDateTime>) -> Token {
        Token {
            access_token: "ya29.secret".to_string(),
            token_type: "Bearer".to_string(),
            expiry,
        }
    }

    #[test]
    fn test_token_value() {
        assert_eq!("Bearer ya29.secret", token(None).value());
    }

    #[test]
    fn test_token_expires_ten_seconds_early() {
        let now = time::OffsetDateTime::now_utc();
        assert!(token(Some(now + time::Duration::minutes(1))).valid());
        assert!(!token(Some(now + time::Duration::seconds(5))).valid());
        assert!(!token(Some(now - time::Duration::seconds(1))).valid());
    }

    #[test]
    fn test_debug_hides_access_token() {
        assert!(!format!("{:?}", token(None)).contains("ya29"));
    }
}
