use async_trait::async_trait;

use crate::credentials::CredentialsFile;
use crate::error::Error;
use crate::misc::UnwrapOrEmpty;
use crate::token::{Token, TOKEN_URL};
use crate::token_source::{check_response_status, default_http_client, InternalToken, TokenSource};

/// Refresh-token credentials, as produced by an OAuth2 authorization-code exchange
/// or `gcloud auth application-default login`.
pub struct UserAccountTokenSource {
    client_id: String,
    client_secret: String,
    token_url: String,
    refresh_token: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for UserAccountTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAccountTokenSource")
            .field("client_id", &self.client_id)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

impl UserAccountTokenSource {
    pub(crate) fn new(cred: &CredentialsFile) -> Result<Self, Error> {
        let refresh_token = match &cred.refresh_token {
            Some(t) if !t.is_empty() => t.clone(),
            _ => return Err(Error::RefreshTokenIsRequired),
        };
        Ok(Self {
            client_id: cred.client_id.unwrap_or_empty(),
            client_secret: cred.client_secret.unwrap_or_empty(),
            token_url: cred.token_uri.clone().unwrap_or_else(|| TOKEN_URL.to_string()),
            refresh_token,
            client: default_http_client()?,
        })
    }
}

#[async_trait]
impl TokenSource for UserAccountTokenSource {
    async fn token(&self) -> Result<Token, Error> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", self.refresh_token.as_str()),
        ];
        let now = time::OffsetDateTime::now_utc();
        let response = self.client.post(self.token_url.as_str()).form(&form).send().await?;
        Ok(check_response_status(response)
            .await?
            .json::<InternalToken>()
            .await?
            .to_token(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_is_required() {
        let cred = CredentialsFile::new_from_str(r#"{"type":"authorized_user","client_id":"id","refresh_token":""}"#)
            .unwrap();
        assert!(matches!(
            UserAccountTokenSource::new(&cred),
            Err(Error::RefreshTokenIsRequired)
        ));
    }

    #[test]
    fn test_default_token_url() {
        let cred =
            CredentialsFile::new_from_str(r#"{"type":"authorized_user","client_id":"id","refresh_token":"secret_refresh"}"#)
                .unwrap();
        let ts = UserAccountTokenSource::new(&cred).unwrap();
        assert_eq!(TOKEN_URL, ts.token_url);
        assert!(!format!("{ts:?}").contains("secret_refresh"));
    }
}
