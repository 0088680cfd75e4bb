//! Contact request route definitions

use axum::{
    routing::{any, get, post},
    Router,
};

use crate::handlers::*;
use crate::state::AppState;

pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact-request", post(create_contact_request))
        .route("/api/contact-requests", get(list_contact_requests))
        .route("/api/contact-requests/summary", get(contact_summary))
        // keeps `/api/:catalog/:id` from claiming single-request paths
        .route("/api/contact-requests/:id", any(not_found))
        .route(
            "/api/contact-requests/:id/process",
            post(mark_contact_processed),
        )
}
