//! Contact request handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::loans::{json_body, parse_id};
use crate::contact::{ContactStore, ContactSummary, NewContactRequest};
use crate::error::ApiResult;
use crate::middleware::AdminUser;
use crate::models::{ContactList, ContactPayload, Envelope};

/// Record a customer's call-back request
pub async fn create_contact_request(
    State(store): State<Arc<ContactStore>>,
    payload: Result<Json<NewContactRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<ContactPayload>>)> {
    let request = json_body(payload)?;
    let request = store.append(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(
            "Request received, a manager will contact you soon",
            ContactPayload { request },
        )),
    ))
}

/// All contact requests, newest first (admin only)
pub async fn list_contact_requests(
    AdminUser(admin_id): AdminUser,
    State(store): State<Arc<ContactStore>>,
) -> ApiResult<Json<Envelope<ContactList>>> {
    let requests = store.list_all().await?;
    tracing::debug!(admin_id, count = requests.len(), "Contact requests listed");

    Ok(Json(Envelope::success(
        format!("Found {} contact requests", requests.len()),
        ContactList {
            count: requests.len(),
            requests,
        },
    )))
}

/// Unprocessed and total request counts (admin only)
pub async fn contact_summary(
    AdminUser(_): AdminUser,
    State(store): State<Arc<ContactStore>>,
) -> ApiResult<Json<Envelope<ContactSummary>>> {
    let summary = store.count_unprocessed().await?;

    Ok(Json(Envelope::success(
        format!(
            "{} of {} requests are unprocessed",
            summary.unprocessed, summary.total
        ),
        summary,
    )))
}

/// Mark a request as handled (admin only)
pub async fn mark_contact_processed(
    AdminUser(admin_id): AdminUser,
    State(store): State<Arc<ContactStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<ContactPayload>>> {
    let request = store.mark_processed(parse_id(&id)?).await?;
    tracing::info!(admin_id, id = request.id, "Contact request processed by admin");

    Ok(Json(Envelope::success(
        format!("Request {} marked as processed", request.id),
        ContactPayload { request },
    )))
}
