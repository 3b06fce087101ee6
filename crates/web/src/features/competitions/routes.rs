use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_competition, new_competition};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_competition))
        .route("/new", get(new_competition))
}
