use axum::http::StatusCode;
use std::sync::Mutex;
use storage::{
    Backend,
    error::{Result, StorageError},
    models::{AccessToken, AuthUser, NewCompetition, Profile, Session},
};
use uuid::Uuid;

pub const USER_ID: &str = "3d2c1b0a-9f8e-4d7c-b6a5-443322110000";
pub const TOKEN: &str = "signed-in-token";

pub fn user_id() -> Uuid {
    Uuid::parse_str(USER_ID).unwrap()
}

pub fn token() -> AccessToken {
    AccessToken::parse(TOKEN).unwrap()
}

/// In-memory stand-in for the hosted backend that records every write.
#[derive(Default)]
pub struct FakeBackend {
    pub signed_in: bool,
    pub stored_profile: Option<Profile>,
    pub read_error: Option<String>,
    pub write_error: Option<String>,
    pub session_lookups: Mutex<usize>,
    pub upserts: Mutex<Vec<Profile>>,
    pub inserts: Mutex<Vec<NewCompetition>>,
}

impl FakeBackend {
    pub fn signed_in() -> Self {
        Self {
            signed_in: true,
            ..Default::default()
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.stored_profile = Some(profile);
        self
    }

    pub fn failing_reads(mut self, message: &str) -> Self {
        self.read_error = Some(message.to_string());
        self
    }

    pub fn failing_writes(mut self, message: &str) -> Self {
        self.write_error = Some(message.to_string());
        self
    }

    pub fn lookups(&self) -> usize {
        *self.session_lookups.lock().unwrap()
    }

    pub fn upserted(&self) -> Vec<Profile> {
        self.upserts.lock().unwrap().clone()
    }

    pub fn inserted(&self) -> Vec<NewCompetition> {
        self.inserts.lock().unwrap().clone()
    }
}

fn backend_error(message: &str) -> StorageError {
    StorageError::Backend {
        status: StatusCode::BAD_REQUEST,
        message: message.to_string(),
    }
}

#[async_trait::async_trait]
impl Backend for FakeBackend {
    async fn get_session(&self, access_token: Option<&AccessToken>) -> Result<Option<Session>> {
        *self.session_lookups.lock().unwrap() += 1;

        Ok(match access_token {
            Some(token) if self.signed_in => Some(Session {
                access_token: token.clone(),
                user: AuthUser {
                    id: user_id(),
                    email: Some("athlete@example.com".to_string()),
                    role: Some("authenticated".to_string()),
                },
            }),
            _ => None,
        })
    }

    async fn fetch_profile(&self, _session: &Session) -> Result<Option<Profile>> {
        if let Some(message) = &self.read_error {
            return Err(backend_error(message));
        }
        Ok(self.stored_profile.clone())
    }

    async fn upsert_profile(&self, _session: &Session, profile: &Profile) -> Result<()> {
        if let Some(message) = &self.write_error {
            return Err(backend_error(message));
        }
        self.upserts.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn insert_competition(
        &self,
        _session: &Session,
        competition: &NewCompetition,
    ) -> Result<()> {
        if let Some(message) = &self.write_error {
            return Err(backend_error(message));
        }
        self.inserts.lock().unwrap().push(competition.clone());
        Ok(())
    }
}
