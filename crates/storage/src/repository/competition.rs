use reqwest::Method;

use crate::client::{BackendClient, check_status};
use crate::error::Result;
use crate::models::{AccessToken, COMPETITIONS_TABLE, NewCompetition};

pub struct CompetitionRepository<'a> {
    client: &'a BackendClient,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Create a new competition. Nothing checks for an existing one first.
    pub async fn create(&self, token: &AccessToken, competition: &NewCompetition) -> Result<()> {
        let response = self
            .client
            .request(
                Method::POST,
                &self.client.rest_url(COMPETITIONS_TABLE),
                Some(token),
            )
            .header("prefer", "return=minimal")
            .json(competition)
            .send()
            .await?;

        check_status(response).await?;
        tracing::info!(
            organizer_id = %competition.organizer_id,
            "Competition '{}' created",
            competition.name
        );

        Ok(())
    }
}
