use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use storage::error::{ErrorKind, StorageError};
use utoipa::ToSchema;

use crate::error::status_for;

/// Loading/error/success flags shared by both form components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
    #[serde(skip)]
    failure: Option<ErrorKind>,
}

impl FormStatus {
    /// Called before the first backend round trip of an action.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = false;
        self.failure = None;
    }

    /// Read finished without anything to report.
    pub fn settle(&mut self) {
        self.loading = false;
    }

    pub fn succeed(&mut self) {
        self.loading = false;
        self.success = true;
    }

    pub fn fail(&mut self, error: &StorageError) {
        self.loading = false;
        self.success = false;
        self.error = Some(error.user_message());
        self.failure = Some(error.kind());
    }

    pub fn failure(&self) -> Option<ErrorKind> {
        self.failure
    }
}

/// Serializes a component view, picking the status code from its outcome.
pub fn respond<T: Serialize>(status: &FormStatus, ok: StatusCode, view: &T) -> Response {
    let code = status.failure().map(status_for).unwrap_or(ok);
    (code, Json(view)).into_response()
}
