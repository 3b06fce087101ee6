use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use storage::dto::profile::ProfileForm;

use crate::error::{WebError, WebResult};
use crate::features::status::respond;
use crate::middleware::auth::SessionToken;
use crate::state::AppState;

use super::services::ProfileEditor;

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile editor populated with the stored profile", body = ProfileEditor),
        (status = 401, description = "No active session found", body = ProfileEditor),
        (status = 502, description = "Backend reported an error", body = ProfileEditor)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "profile"
)]
pub async fn mount_profile(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Response {
    let mut editor = ProfileEditor::new();
    editor.mount(state.backend.as_ref(), token.as_ref()).await;

    respond(&editor.status, StatusCode::OK, &editor)
}

#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = ProfileForm,
    responses(
        (status = 200, description = "Profile saved", body = ProfileEditor),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "No active session found", body = ProfileEditor),
        (status = 422, description = "Form constraints not met", body = ProfileEditor),
        (status = 502, description = "Backend reported an error", body = ProfileEditor)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "profile"
)]
pub async fn submit_profile(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    payload: Result<Json<ProfileForm>, JsonRejection>,
) -> WebResult<Response> {
    let Json(form) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;

    let mut editor = ProfileEditor::with_form(form);
    editor.submit(state.backend.as_ref(), token.as_ref()).await;

    Ok(respond(&editor.status, StatusCode::OK, &editor))
}
