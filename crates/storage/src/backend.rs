use crate::error::{Result, StorageError};
use crate::models::{AccessToken, NewCompetition, Profile, Session};

/// Operations the forms need from the hosted backend.
///
/// Every call is one request/response. Table operations take the resolved
/// [`Session`] so they run with the user's credentials and the backend can
/// enforce row ownership.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Resolves the signed-in user. `Ok(None)` when there is no token or the
    /// auth service rejects it.
    async fn get_session(&self, access_token: Option<&AccessToken>) -> Result<Option<Session>>;

    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>>;

    async fn upsert_profile(&self, session: &Session, profile: &Profile) -> Result<()>;

    async fn insert_competition(
        &self,
        session: &Session,
        competition: &NewCompetition,
    ) -> Result<()>;
}

/// Like [`Backend::get_session`], but a missing session is an error.
pub async fn require_session(
    backend: &dyn Backend,
    access_token: Option<&AccessToken>,
) -> Result<Session> {
    backend
        .get_session(access_token)
        .await?
        .ok_or(StorageError::NoSession)
}
