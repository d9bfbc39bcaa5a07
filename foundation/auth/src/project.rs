use google_cloud_metadata::on_gce;

use crate::credentials::CredentialsFile;
use crate::error::Error;
use crate::misc::EMPTY;
use crate::token_source::authorized_user_token_source::UserAccountTokenSource;
use crate::token_source::compute_token_source::ComputeTokenSource;
use crate::token_source::reuse_token_source::ReuseTokenSource;
use crate::token_source::service_account_token_source::{
    OAuth2ServiceAccountTokenSource, ServiceAccountTokenSource,
};
use crate::token_source::TokenSource;

pub(crate) const SERVICE_ACCOUNT_KEY: &str = "service_account";
pub(crate) const USER_CREDENTIALS_KEY: &str = "authorized_user";

#[derive(Debug, Clone, Default)]
pub struct Config<'a> {
    audience: Option<&'a str>,
    scopes: Option<&'a [&'a str]>,
    sub: Option<&'a str>,
}

impl<'a> Config<'a> {
    pub fn scopes_to_string(&self, sep: &str) -> String {
        match self.scopes {
            Some(s) => s.join(sep),
            None => EMPTY.to_string(),
        }
    }

    pub fn with_audience(mut self, value: &'a str) -> Self {
        self.audience = Some(value);
        self
    }

    pub fn with_scopes(mut self, value: &'a [&'a str]) -> Self {
        self.scopes = Some(value);
        self
    }

    pub fn with_sub(mut self, value: &'a str) -> Self {
        self.sub = Some(value);
        self
    }
}

#[derive(Clone)]
pub struct ProjectInfo {
    pub project_id: Option<String>,
}

#[derive(Clone)]
pub enum Project {
    FromFile(Box<CredentialsFile>),
    FromMetadataServer(ProjectInfo),
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Project::FromFile(_) => write!(f, "Project::FromFile"),
            Project::FromMetadataServer(_) => write!(f, "Project::FromMetadataServer"),
        }
    }
}

impl Project {
    pub fn project_id(&self) -> Option<&String> {
        match self {
            Self::FromFile(file) => file.project_id.as_ref(),
            Self::FromMetadataServer(info) => info.project_id.as_ref(),
        }
    }
}

/// project returns the credentials file found in the environment, or the project info of the metadata server.
pub async fn project() -> Result<Project, Error> {
    match CredentialsFile::new().await {
        Ok(credentials) => Ok(Project::FromFile(Box::new(credentials))),
        Err(e) => {
            tracing::debug!("no credentials file: {e}");
            if on_gce().await {
                let project_id = google_cloud_metadata::project_id().await;
                Ok(Project::FromMetadataServer(ProjectInfo {
                    project_id: if project_id.is_empty() { None } else { Some(project_id) },
                }))
            } else {
                Err(e)
            }
        }
    }
}

/// Creates token source using provided credentials file.
/// The first token is fetched eagerly so that broken credentials fail here rather than on the first RPC.
pub async fn create_token_source_from_credentials(
    credentials: &CredentialsFile,
    config: &Config<'_>,
) -> Result<Box<dyn TokenSource>, Error> {
    let ts = credentials_from_json_with_params(credentials, config)?;
    let token = ts.token().await?;
    Ok(Box::new(ReuseTokenSource::new(ts, token)))
}

pub async fn create_token_source_from_project(
    project: &Project,
    config: Config<'_>,
) -> Result<Box<dyn TokenSource>, Error> {
    match project {
        Project::FromFile(file) => create_token_source_from_credentials(file, &config).await,
        Project::FromMetadataServer(_) => {
            if config.scopes.is_none() {
                return Err(Error::ScopeOrAudienceRequired);
            }
            let ts = ComputeTokenSource::new(config.scopes_to_string(",").as_str())?;
            let token = ts.token().await?;
            Ok(Box::new(ReuseTokenSource::new(Box::new(ts), token)))
        }
    }
}

pub(crate) fn credentials_from_json_with_params(
    credentials: &CredentialsFile,
    config: &Config<'_>,
) -> Result<Box<dyn TokenSource>, Error> {
    match credentials.tp.as_str() {
        SERVICE_ACCOUNT_KEY => match config.audience {
            None => {
                if config.scopes.is_none() {
                    return Err(Error::ScopeOrAudienceRequired);
                }
                tracing::debug!("using service account oauth2 flow");
                let source =
                    OAuth2ServiceAccountTokenSource::new(credentials, config.scopes_to_string(" ").as_str(), config.sub)?;
                Ok(Box::new(source))
            }
            Some(audience) => {
                tracing::debug!("using self-signed jwt for {audience}");
                Ok(Box::new(ServiceAccountTokenSource::new(credentials, audience)?))
            }
        },
        USER_CREDENTIALS_KEY => Ok(Box::new(UserAccountTokenSource::new(credentials)?)),
        _ => Err(Error::UnsupportedAccountType(credentials.tp.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];

    #[test]
    fn test_scopes_to_string() {
        let scopes = ["a", "b"];
        let config = Config::default().with_scopes(&scopes);
        assert_eq!("a b", config.scopes_to_string(" "));
        assert_eq!("a,b", config.scopes_to_string(","));
        assert_eq!("", Config::default().scopes_to_string(" "));
    }

    #[test]
    fn test_unsupported_account_type() {
        let cred = CredentialsFile::new_from_str(r#"{"type":"external_account"}"#).unwrap();
        let config = Config::default().with_scopes(&SCOPES);
        match credentials_from_json_with_params(&cred, &config) {
            Err(Error::UnsupportedAccountType(tp)) => assert_eq!("external_account", tp),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_service_account_requires_scope_or_audience() {
        let cred = CredentialsFile::new_from_str(r#"{"type":"service_account","private_key":"x"}"#).unwrap();
        assert!(matches!(
            credentials_from_json_with_params(&cred, &Config::default()),
            Err(Error::ScopeOrAudienceRequired)
        ));
    }

    #[test]
    fn test_authorized_user_source() {
        let cred =
            CredentialsFile::new_from_str(r#"{"type":"authorized_user","client_id":"id","refresh_token":"rt"}"#)
                .unwrap();
        let ts = credentials_from_json_with_params(&cred, &Config::default()).unwrap();
        assert!(format!("{ts:?}").starts_with("UserAccountTokenSource"));
    }
}
