use std::env::VarError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("scopes is required if the audience is none")]
    ScopeOrAudienceRequired,

    #[error("unsupported account {0}")]
    UnsupportedAccountType(String),

    #[error("refresh token is required for user account credentials")]
    RefreshTokenIsRequired,

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    #[error("credentials file io error: {0}")]
    CredentialsIOError(std::io::Error),

    #[error(transparent)]
    VarError(#[from] VarError),

    #[error("user home directory not found")]
    NoHomeDirectoryFound,

    #[error("private key is required")]
    NoPrivateKeyFound,

    #[error("invalid token")]
    InvalidToken,

    #[error("token endpoint responded {status}: {error} {error_description:?}")]
    TokenErrorResponse {
        status: u16,
        error: String,
        error_description: Option<String>,
    },
}

/// Error body returned by the OAuth2 token endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct TokenErrorResponse {
    pub(crate) error: String,
    #[serde(default)]
    pub(crate) error_description: Option<String>,
}
