use axum::{Router, routing::get};

use super::handlers::{mount_profile, submit_profile};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(mount_profile).put(submit_profile))
}
