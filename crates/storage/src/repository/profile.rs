use reqwest::Method;
use uuid::Uuid;

use crate::client::{BackendClient, check_status};
use crate::error::Result;
use crate::models::{AccessToken, PROFILES_TABLE, Profile};

pub struct ProfileRepository<'a> {
    client: &'a BackendClient,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Find the profile keyed by `user_id`, `None` if it was never saved
    pub async fn find_by_id(&self, token: &AccessToken, user_id: Uuid) -> Result<Option<Profile>> {
        let id_filter = format!("eq.{}", user_id);

        let response = self
            .client
            .request(Method::GET, &self.client.rest_url(PROFILES_TABLE), Some(token))
            .query(&[
                ("select", Profile::COLUMNS),
                ("id", id_filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let body = check_status(response).await?.bytes().await?;
        let rows: Vec<Profile> = serde_json::from_slice(&body)?;

        Ok(rows.into_iter().next())
    }

    /// Insert the row, or replace it when one with the same id exists
    pub async fn upsert(&self, token: &AccessToken, profile: &Profile) -> Result<()> {
        let response = self
            .client
            .request(Method::POST, &self.client.rest_url(PROFILES_TABLE), Some(token))
            .query(&[("on_conflict", "id")])
            .header("prefer", "resolution=merge-duplicates,return=minimal")
            .json(profile)
            .send()
            .await?;

        check_status(response).await?;
        tracing::info!(user_id = %profile.id, "Profile saved");

        Ok(())
    }
}
