use std::time::Duration;

use reqwest::header::USER_AGENT;
use tokio::net::lookup_host;
use tokio::sync::OnceCell;

pub const METADATA_IP: &str = "169.254.169.254";
pub const METADATA_HOST_ENV: &str = "GCE_METADATA_HOST";
pub const METADATA_GOOGLE_HOST: &str = "metadata.google.internal:80";
pub const METADATA_FLAVOR_KEY: &str = "Metadata-Flavor";
pub const METADATA_GOOGLE: &str = "Google";

const USER_AGENT_VALUE: &str = "cloudkms-rs/0.1";

static ON_GCE: OnceCell<bool> = OnceCell::const_new();

static PROJECT_ID: OnceCell<String> = OnceCell::const_new();

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid response code: {0}")]
    InvalidResponse(u16),
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
}

/// Host of the metadata server, honoring `GCE_METADATA_HOST`.
pub fn metadata_host() -> String {
    std::env::var(METADATA_HOST_ENV).unwrap_or_else(|_| METADATA_IP.to_string())
}

/// on_gce reports whether this process runs on Google Compute Engine.
/// The check runs once per process.
pub async fn on_gce() -> bool {
    *ON_GCE.get_or_init(check_on_gce).await
}

async fn check_on_gce() -> bool {
    // The user explicitly said they're on GCE, so trust them.
    if std::env::var(METADATA_HOST_ENV).is_ok() {
        return true;
    }

    if let Ok(client) = http_client() {
        if let Ok(response) = client.get(format!("http://{METADATA_IP}")).send().await {
            let flavored = response
                .headers()
                .get(METADATA_FLAVOR_KEY)
                .map(|v| v == METADATA_GOOGLE)
                .unwrap_or(false);
            if response.status().is_success() && flavored {
                return true;
            }
        }
    }

    match lookup_host(METADATA_GOOGLE_HOST).await {
        Ok(mut addrs) => addrs.any(|addr| addr.ip().to_string() == METADATA_IP),
        Err(e) => {
            tracing::trace!("metadata host lookup failed: {e}");
            false
        }
    }
}

/// project_id returns the project of the instance, or an empty string when unavailable.
pub async fn project_id() -> String {
    match PROJECT_ID.get_or_try_init(|| get_trimmed("project/project-id")).await {
        Ok(s) => s.clone(),
        Err(e) => {
            tracing::debug!("failed to read project id from metadata server: {e}");
            String::new()
        }
    }
}

/// get fetches `computeMetadata/v1/{suffix}`.
pub async fn get(suffix: &str) -> Result<String, Error> {
    let url = format!("http://{}/computeMetadata/v1/{}", metadata_host(), suffix);
    let response = http_client()?
        .get(url)
        .header(METADATA_FLAVOR_KEY, METADATA_GOOGLE)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .send()
        .await?;

    if response.status().is_success() {
        return Ok(response.text().await?);
    }
    Err(Error::InvalidResponse(response.status().as_u16()))
}

async fn get_trimmed(suffix: &str) -> Result<String, Error> {
    Ok(get(suffix).await?.trim().to_string())
}

fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(Duration::from_secs(3)).build()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_metadata_host_from_env() {
        temp_env::with_var(METADATA_HOST_ENV, Some("127.0.0.1:8989"), || {
            assert_eq!("127.0.0.1:8989", metadata_host());
        });
        temp_env::with_var_unset(METADATA_HOST_ENV, || {
            assert_eq!(METADATA_IP, metadata_host());
        });
    }

    #[tokio::test]
    #[serial]
    async fn test_on_gce_trusts_env() {
        temp_env::async_with_vars([(METADATA_HOST_ENV, Some("127.0.0.1:8989"))], async {
            assert!(check_on_gce().await);
        })
        .await;
    }

    #[tokio::test]
    #[serial]
    async fn test_get_unreachable_host() {
        temp_env::async_with_vars([(METADATA_HOST_ENV, Some("127.0.0.1:1"))], async {
            match get("project/project-id").await {
                Err(Error::HttpError(_)) => {}
                other => panic!("unexpected result {other:?}"),
            }
        })
        .await;
    }
}
