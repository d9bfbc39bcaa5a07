pub mod authorized_user_token_source;
pub mod compute_token_source;
pub mod reuse_token_source;
pub mod service_account_token_source;

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::{Error, TokenErrorResponse};
use crate::token::Token;

/// Source of OAuth2 access tokens, one implementation per credential type.
#[async_trait]
pub trait TokenSource: Send + Sync + Debug {
    async fn token(&self) -> Result<Token, Error>;
}

fn default_http_client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder().timeout(Duration::from_secs(3)).build()?)
}

/// Checks whether an HTTP response is successful and returns it,
/// or turns the OAuth2 error body into [`Error::TokenErrorResponse`].
async fn check_response_status(response: Response) -> Result<Response, Error> {
    let error = match response.error_for_status_ref() {
        Ok(_) => return Ok(response),
        Err(error) => error,
    };

    let status = response.status();
    Err(response
        .json::<TokenErrorResponse>()
        .await
        .map(|body| Error::TokenErrorResponse {
            status: status.as_u16(),
            error: body.error,
            error_description: body.error_description,
        })
        .unwrap_or(Error::HttpError(error)))
}

#[derive(Clone, Deserialize)]
struct InternalToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
}

impl InternalToken {
    fn to_token(&self, now: OffsetDateTime) -> Token {
        Token {
            access_token: self.access_token.clone(),
            token_type: self.token_type.clone(),
            expiry: self.expires_in.map(|s| now + time::Duration::seconds(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_token_expiry() {
        let now = OffsetDateTime::now_utc();
        let it: InternalToken =
            serde_json::from_str(r#"{"access_token":"ya29.x","token_type":"Bearer","expires_in":3599}"#).unwrap();
        let token = it.to_token(now);
        assert_eq!("ya29.x", token.access_token);
        assert_eq!(Some(now + time::Duration::seconds(3599)), token.expiry);
        assert!(token.valid());
    }

    #[test]
    fn test_internal_token_without_expiry() {
        let it: InternalToken = serde_json::from_str(r#"{"access_token":"ya29.x","token_type":"Bearer"}"#).unwrap();
        let token = it.to_token(OffsetDateTime::now_utc());
        assert!(token.expiry.is_none());
        assert!(token.valid());
    }
}
