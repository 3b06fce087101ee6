use serde::Serialize;
use storage::{
    Backend,
    dto::competition::CompetitionForm,
    error::Result,
    models::AccessToken,
    require_session,
};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::status::FormStatus;

/// Competition creator: submit-only form that inserts one hidden
/// competition owned by the signed-in organizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct CompetitionCreator {
    pub form: CompetitionForm,
    #[serde(flatten)]
    pub status: FormStatus,
}

impl CompetitionCreator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: CompetitionForm) -> Self {
        Self {
            form,
            status: FormStatus::default(),
        }
    }

    /// On success the form goes back to its defaults; on failure the
    /// entered values stay so the organizer can fix and resubmit.
    pub async fn submit(&mut self, backend: &dyn Backend, token: Option<&AccessToken>) {
        self.status.begin();

        match create_competition(backend, token, &self.form).await {
            Ok(()) => {
                self.form = CompetitionForm::default();
                self.status.succeed();
            }
            Err(e) => {
                tracing::warn!("Creating competition failed: {}", e);
                self.status.fail(&e);
            }
        }
    }
}

async fn create_competition(
    backend: &dyn Backend,
    token: Option<&AccessToken>,
    form: &CompetitionForm,
) -> Result<()> {
    form.validate()?;

    let session = require_session(backend, token).await?;
    let competition = form.to_new_competition(session.user_id())?;

    backend.insert_competition(&session, &competition).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, token, user_id};
    use chrono::NaiveDate;
    use storage::dto::competition::current_year;

    fn entered() -> CompetitionForm {
        CompetitionForm {
            name: "Paris Streetlifting Open".to_string(),
            year: Some(2027),
            start_date: "2027-05-01".to_string(),
            end_date: "2027-05-02".to_string(),
            sport: "streetlifting".to_string(),
            venue: "Halle Carpentier".to_string(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            level_of_competition: "international".to_string(),
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let creator = CompetitionCreator::new();
        assert_eq!(creator.form.year, Some(current_year()));
        assert_eq!(creator.form.name, "");
        assert_eq!(creator.status, FormStatus::default());
    }

    #[tokio::test]
    async fn test_submit_without_session_never_inserts() {
        let backend = FakeBackend::signed_out();
        let mut creator = CompetitionCreator::with_form(entered());

        creator.submit(&backend, Some(&token())).await;

        assert_eq!(creator.status.error.as_deref(), Some("No active session found"));
        assert!(backend.inserted().is_empty());
        assert_eq!(creator.form, entered());
    }

    #[tokio::test]
    async fn test_submit_success_resets_form() {
        let backend = FakeBackend::signed_in();
        let mut creator = CompetitionCreator::with_form(entered());

        creator.submit(&backend, Some(&token())).await;

        assert!(creator.status.success);
        assert!(!creator.status.loading);
        assert_eq!(creator.status.error, None);
        assert_eq!(creator.form, CompetitionForm::default());
        assert_eq!(creator.form.year, Some(current_year()));

        let inserts = backend.inserted();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].name, "Paris Streetlifting Open");
        assert_eq!(inserts[0].year, Some(2027));
        assert_eq!(inserts[0].start_date, NaiveDate::from_ymd_opt(2027, 5, 1));
    }

    #[tokio::test]
    async fn test_payload_is_hidden_and_owned_by_session_user() {
        let backend = FakeBackend::signed_in();
        let mut creator = CompetitionCreator::with_form(entered());

        creator.submit(&backend, Some(&token())).await;

        let inserts = backend.inserted();
        assert!(!inserts[0].is_public);
        assert_eq!(inserts[0].organizer_id, user_id());
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_entered_values() {
        let backend = FakeBackend::signed_in()
            .failing_writes("duplicate key value violates unique constraint \"competitions_name_key\"");
        let mut creator = CompetitionCreator::with_form(entered());

        creator.submit(&backend, Some(&token())).await;

        assert!(!creator.status.success);
        assert_eq!(
            creator.status.error.as_deref(),
            Some("duplicate key value violates unique constraint \"competitions_name_key\"")
        );
        assert_eq!(creator.form, entered());
    }

    #[tokio::test]
    async fn test_each_submit_inserts_again() {
        let backend = FakeBackend::signed_in();

        for _ in 0..2 {
            let mut creator = CompetitionCreator::with_form(entered());
            creator.submit(&backend, Some(&token())).await;
            assert!(creator.status.success);
        }

        assert_eq!(backend.inserted().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected_before_session_lookup() {
        let backend = FakeBackend::signed_in();
        let mut creator = CompetitionCreator::with_form(CompetitionForm {
            name: String::new(),
            ..entered()
        });

        creator.submit(&backend, Some(&token())).await;

        assert_eq!(creator.status.error.as_deref(), Some("name: Name is required"));
        assert_eq!(backend.lookups(), 0);
        assert!(backend.inserted().is_empty());
    }
}
