use reqwest::{Method, StatusCode};

use crate::client::{BackendClient, check_status};
use crate::error::Result;
use crate::models::{AccessToken, AuthUser};

pub struct SessionRepository<'a> {
    client: &'a BackendClient,
}

impl<'a> SessionRepository<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Look up the user behind `token`. A rejected or expired token is not
    /// an error, it just means nobody is signed in.
    pub async fn current_user(&self, token: &AccessToken) -> Result<Option<AuthUser>> {
        let response = self
            .client
            .request(Method::GET, &self.client.auth_url("user"), Some(token))
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            tracing::debug!("Auth service rejected the access token");
            return Ok(None);
        }

        let body = check_status(response).await?.bytes().await?;
        let user: AuthUser = serde_json::from_slice(&body)?;
        tracing::debug!(user_id = %user.id, "Session resolved");

        Ok(Some(user))
    }
}
