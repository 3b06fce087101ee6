use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::Backend;
use crate::error::{Result, StorageError};
use crate::models::{AccessToken, NewCompetition, Profile, Session};
use crate::repository::{
    competition::CompetitionRepository, profile::ProfileRepository, session::SessionRepository,
};

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Service root, e.g. `https://xyzcompany.example.co`
    pub url: String,
    /// Public (anon) API key sent with every request
    pub api_key: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Handle to the hosted auth + table service. Created once per process;
/// clones share the same connection pool.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = config.url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(StorageError::Config(format!(
                "backend url must start with http:// or https://, got '{}'",
                config.url
            )));
        }
        if config.api_key.trim().is_empty() {
            return Err(StorageError::Config("backend api key is empty".to_string()));
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                api_key: config.api_key.trim().to_string(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.inner.base_url, table)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.inner.base_url, path)
    }

    /// Request carrying the API key, authorized as the user when a token is
    /// given and as the anonymous role otherwise.
    pub(crate) fn request(
        &self,
        method: Method,
        url: &str,
        access_token: Option<&AccessToken>,
    ) -> RequestBuilder {
        let bearer = access_token
            .map(AccessToken::as_str)
            .unwrap_or(self.inner.api_key.as_str());

        self.inner
            .http
            .request(method, url)
            .header("apikey", &self.inner.api_key)
            .bearer_auth(bearer)
    }
}

/// Error bodies differ between the table API (`message`) and the auth API
/// (`msg`, `error_description`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// Passes successful responses through and turns the rest into
/// [`StorageError::Backend`] carrying the backend's own message.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = backend_message(status, &text);
    tracing::warn!(status = %status, "Backend request failed: {}", message);

    Err(StorageError::Backend { status, message })
}

fn backend_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.msg).or(b.error_description).or(b.error))
        .or_else(|| {
            let body = body.trim();
            (!body.is_empty()).then(|| body.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown backend error")
                .to_string()
        })
}

#[async_trait::async_trait]
impl Backend for BackendClient {
    async fn get_session(&self, access_token: Option<&AccessToken>) -> Result<Option<Session>> {
        let Some(token) = access_token else {
            tracing::debug!("No access token presented");
            return Ok(None);
        };

        let user = SessionRepository::new(self).current_user(token).await?;

        Ok(user.map(|user| Session {
            access_token: token.clone(),
            user,
        }))
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>> {
        ProfileRepository::new(self)
            .find_by_id(&session.access_token, session.user_id())
            .await
    }

    async fn upsert_profile(&self, session: &Session, profile: &Profile) -> Result<()> {
        ProfileRepository::new(self)
            .upsert(&session.access_token, profile)
            .await
    }

    async fn insert_competition(
        &self,
        session: &Session,
        competition: &NewCompetition,
    ) -> Result<()> {
        CompetitionRepository::new(self)
            .create(&session.access_token, competition)
            .await
    }
}
