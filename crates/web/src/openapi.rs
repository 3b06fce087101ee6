use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::profile::handlers::mount_profile,
        features::profile::handlers::submit_profile,
        features::competitions::handlers::new_competition,
        features::competitions::handlers::create_competition,
    ),
    components(
        schemas(
            storage::dto::profile::ProfileForm,
            storage::dto::competition::CompetitionForm,
            storage::models::Profile,
            storage::models::NewCompetition,
            features::status::FormStatus,
            features::profile::services::ProfileEditor,
            features::competitions::services::CompetitionCreator,
        )
    ),
    tags(
        (name = "profile", description = "Athlete profile editor"),
        (name = "competitions", description = "Competition creation form"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
