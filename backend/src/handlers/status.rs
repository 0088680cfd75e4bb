//! Banner and readiness probe

use axum::{extract::State, http::StatusCode, Json};

use crate::db::Database;
use crate::models::{Envelope, EnvelopeStatus, NoPayload, StatusPayload};

pub async fn root() -> Json<Envelope<NoPayload>> {
    Json(Envelope::success(
        "AurumBank API is working!",
        NoPayload::default(),
    ))
}

/// Liveness/readiness probe: 200 with the database reachable, 503 otherwise
pub async fn api_status(State(db): State<Database>) -> (StatusCode, Json<Envelope<StatusPayload>>) {
    let version = env!("CARGO_PKG_VERSION").to_string();

    if db.is_healthy().await {
        (
            StatusCode::OK,
            Json(Envelope::success(
                "AurumBank API is working!",
                StatusPayload {
                    database: "connected".to_string(),
                    version,
                },
            )),
        )
    } else {
        tracing::error!("Status probe failed: database unreachable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Envelope {
                status: EnvelopeStatus::Error,
                message: "Database is unreachable".to_string(),
                payload: StatusPayload {
                    database: "disconnected".to_string(),
                    version,
                },
            }),
        )
    }
}
