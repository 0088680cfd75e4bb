//! Loan catalog route definitions
//!
//! One set of routes serves every category; the `:catalog` segment
//! (`consumer-loans`, `mortgage-loans`, `preferential-loans`) selects the table.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::*;
use crate::state::AppState;

pub fn loan_routes() -> Router<AppState> {
    Router::new()
        .route("/api/:catalog", get(list_loans).post(create_loan))
        .route(
            "/api/:catalog/:id",
            get(get_loan).put(update_loan).delete(delete_loan),
        )
        .route("/api/:catalog/init", post(init_catalog))
        .route("/api/:catalog/seed", post(seed_catalog))
}
