use std::fmt::Debug;

use async_trait::async_trait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::credentials::CredentialsFile;
use crate::error::Error;
use crate::misc::UnwrapOrEmpty;
use crate::token::{Token, TOKEN_URL};
use crate::token_source::{check_response_status, default_http_client, InternalToken, TokenSource};

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'a str>,
    aud: &'a str,
    exp: i64,
    iat: i64,
}

impl Claims<'_> {
    fn sign(&self, key: &SigningKey) -> Result<String, Error> {
        let mut header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256);
        header.kid = Some(key.id.clone());
        Ok(jsonwebtoken::encode(&header, self, &key.pk)?)
    }
}

struct SigningKey {
    email: String,
    id: String,
    pk: jsonwebtoken::EncodingKey,
}

impl SigningKey {
    fn new(cred: &CredentialsFile) -> Result<Self, Error> {
        Ok(Self {
            email: cred.client_email.unwrap_or_empty(),
            id: cred.private_key_id.unwrap_or_empty(),
            pk: cred.try_to_private_key()?,
        })
    }
}

/// Self-signed JWT sent directly as the access token; no round trip to the token endpoint.
/// Used when an audience such as `https://cloudkms.googleapis.com/` is configured.
pub struct ServiceAccountTokenSource {
    key: SigningKey,
    audience: String,
}

impl Debug for ServiceAccountTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountTokenSource")
            .field("email", &self.key.email)
            .field("audience", &self.audience)
            .finish()
    }
}

impl ServiceAccountTokenSource {
    pub(crate) fn new(cred: &CredentialsFile, audience: &str) -> Result<Self, Error> {
        Ok(Self {
            key: SigningKey::new(cred)?,
            audience: audience.to_string(),
        })
    }
}

#[async_trait]
impl TokenSource for ServiceAccountTokenSource {
    async fn token(&self) -> Result<Token, Error> {
        let iat = OffsetDateTime::now_utc();
        let exp = iat + time::Duration::hours(1);

        let access_token = Claims {
            iss: &self.key.email,
            sub: Some(&self.key.email),
            scope: None,
            aud: &self.audience,
            exp: exp.unix_timestamp(),
            iat: iat.unix_timestamp(),
        }
        .sign(&self.key)?;

        Ok(Token {
            access_token,
            token_type: "Bearer".to_string(),
            expiry: Some(exp),
        })
    }
}

/// OAuth 2.0 JWT-bearer flow: a signed assertion is exchanged for an access token at `token_uri`.
pub struct OAuth2ServiceAccountTokenSource {
    key: SigningKey,
    scopes: String,
    token_url: String,
    sub: Option<String>,
    client: reqwest::Client,
}

impl Debug for OAuth2ServiceAccountTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2ServiceAccountTokenSource")
            .field("email", &self.key.email)
            .field("scopes", &self.scopes)
            .field("token_url", &self.token_url)
            .field("sub", &self.sub)
            .finish()
    }
}

impl OAuth2ServiceAccountTokenSource {
    pub(crate) fn new(cred: &CredentialsFile, scopes: &str, sub: Option<&str>) -> Result<Self, Error> {
        Ok(Self {
            key: SigningKey::new(cred)?,
            scopes: scopes.to_string(),
            token_url: cred.token_uri.clone().unwrap_or_else(|| TOKEN_URL.to_string()),
            sub: sub.map(str::to_string),
            client: default_http_client()?,
        })
    }
}

#[async_trait]
impl TokenSource for OAuth2ServiceAccountTokenSource {
    async fn token(&self) -> Result<Token, Error> {
        let iat = OffsetDateTime::now_utc();
        let exp = iat + time::Duration::hours(1);

        let assertion = Claims {
            iss: &self.key.email,
            sub: self.sub.as_deref(),
            scope: Some(&self.scopes),
            aud: &self.token_url,
            exp: exp.unix_timestamp(),
            iat: iat.unix_timestamp(),
        }
        .sign(&self.key)?;

        let form = [("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())];
        let response = self.client.post(self.token_url.as_str()).form(&form).send().await?;
        Ok(check_response_status(response)
            .await?
            .json::<InternalToken>()
            .await?
            .to_token(iat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_skip_empty_fields() {
        let claims = Claims {
            iss: "sa@example.iam.gserviceaccount.com",
            sub: None,
            scope: None,
            aud: "https://cloudkms.googleapis.com/",
            exp: 2,
            iat: 1,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("sub").is_none());
        assert!(json.get("scope").is_none());
        assert_eq!("https://cloudkms.googleapis.com/", json["aud"]);
    }

    #[test]
    fn test_invalid_private_key() {
        let cred = CredentialsFile::new_from_str(
            r#"{"type":"service_account","client_email":"sa@example.com","private_key":"not a pem"}"#,
        )
        .unwrap();
        assert!(matches!(
            ServiceAccountTokenSource::new(&cred, "aud"),
            Err(Error::JwtError(_))
        ));
    }
}
