use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use storage::dto::competition::CompetitionForm;

use crate::error::{WebError, WebResult};
use crate::features::status::respond;
use crate::middleware::auth::SessionToken;
use crate::state::AppState;

use super::services::CompetitionCreator;

#[utoipa::path(
    get,
    path = "/api/competitions/new",
    responses(
        (status = 200, description = "Blank competition form with the current year pre-filled", body = CompetitionCreator)
    ),
    tag = "competitions"
)]
pub async fn new_competition() -> Json<CompetitionCreator> {
    Json(CompetitionCreator::new())
}

#[utoipa::path(
    post,
    path = "/api/competitions",
    request_body = CompetitionForm,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Competition created, form reset", body = CompetitionCreator),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "No active session found", body = CompetitionCreator),
        (status = 422, description = "Form constraints not met", body = CompetitionCreator),
        (status = 502, description = "Backend reported an error", body = CompetitionCreator)
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    payload: Result<Json<CompetitionForm>, JsonRejection>,
) -> WebResult<Response> {
    let Json(form) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;

    let mut creator = CompetitionCreator::with_form(form);
    creator.submit(state.backend.as_ref(), token.as_ref()).await;

    Ok(respond(&creator.status, StatusCode::CREATED, &creator))
}
