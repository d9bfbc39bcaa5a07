use async_trait::async_trait;
use google_cloud_metadata::{metadata_host, METADATA_FLAVOR_KEY, METADATA_GOOGLE};
use urlencoding::encode;

use crate::error::Error;
use crate::token::Token;
use crate::token_source::{check_response_status, default_http_client, InternalToken, TokenSource};

/// Access tokens of the instance's default service account, served by the GCE metadata server.
#[derive(Debug)]
pub struct ComputeTokenSource {
    token_url: String,
    client: reqwest::Client,
}

impl ComputeTokenSource {
    pub(crate) fn new(scope: &str) -> Result<Self, Error> {
        Ok(Self {
            token_url: format!(
                "http://{}/computeMetadata/v1/instance/service-accounts/default/token?scopes={}",
                metadata_host(),
                encode(scope)
            ),
            client: default_http_client()?,
        })
    }
}

#[async_trait]
impl TokenSource for ComputeTokenSource {
    async fn token(&self) -> Result<Token, Error> {
        let now = time::OffsetDateTime::now_utc();
        let response = self
            .client
            .get(self.token_url.as_str())
            .header(METADATA_FLAVOR_KEY, METADATA_GOOGLE)
            .send()
            .await?;
        Ok(check_response_status(response)
            .await?
            .json::<InternalToken>()
            .await?
            .to_token(now))
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_token_url_encodes_scopes() {
        temp_env::with_var("GCE_METADATA_HOST", Some("127.0.0.1:8989"), || {
            let ts = ComputeTokenSource::new("https://www.googleapis.com/auth/cloud-platform").unwrap();
            assert_eq!(
                "http://127.0.0.1:8989/computeMetadata/v1/instance/service-accounts/default/token?scopes=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fcloud-platform",
                ts.token_url
            );
        });
    }
}
