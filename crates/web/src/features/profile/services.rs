use serde::Serialize;
use storage::{
    Backend,
    dto::profile::ProfileForm,
    error::Result,
    models::AccessToken,
    require_session,
};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::status::FormStatus;

/// Athlete profile editor: loads the signed-in user's profile into editable
/// fields and saves them back with an upsert keyed by the user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileEditor {
    pub form: ProfileForm,
    #[serde(flatten)]
    pub status: FormStatus,
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: ProfileForm) -> Self {
        Self {
            form,
            status: FormStatus::default(),
        }
    }

    /// Populate the fields from the stored profile. Without a session the
    /// error is surfaced and nothing is fetched.
    pub async fn mount(&mut self, backend: &dyn Backend, token: Option<&AccessToken>) {
        self.status.begin();

        match load_profile(backend, token).await {
            Ok(form) => {
                self.form = form;
                self.status.settle();
            }
            Err(e) => {
                tracing::warn!("Loading profile failed: {}", e);
                self.status.fail(&e);
            }
        }
    }

    /// Save the current fields. They are kept as entered either way.
    pub async fn submit(&mut self, backend: &dyn Backend, token: Option<&AccessToken>) {
        self.status.begin();

        match save_profile(backend, token, &self.form).await {
            Ok(()) => self.status.succeed(),
            Err(e) => {
                tracing::warn!("Saving profile failed: {}", e);
                self.status.fail(&e);
            }
        }
    }
}

async fn load_profile(backend: &dyn Backend, token: Option<&AccessToken>) -> Result<ProfileForm> {
    let session = require_session(backend, token).await?;
    let profile = backend.fetch_profile(&session).await?;

    Ok(profile.map(ProfileForm::from).unwrap_or_default())
}

async fn save_profile(
    backend: &dyn Backend,
    token: Option<&AccessToken>,
    form: &ProfileForm,
) -> Result<()> {
    form.validate()?;

    let session = require_session(backend, token).await?;
    let profile = form.to_profile(session.user_id())?;

    backend.upsert_profile(&session, &profile).await
}
