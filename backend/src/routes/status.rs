//! Banner and readiness route definitions

use axum::{routing::get, Router};

use crate::handlers::*;
use crate::state::AppState;

pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/status", get(api_status))
}
