use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use validator::Validate;

/// Processing state of a contact request
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "contact_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Processed,
}

/// Customer request for a call back
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub id: i32,
    pub telegram_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub status: ContactStatus,
}

/// Body of `POST /api/contact-request`
#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct NewContactRequest {
    #[validate(range(min = 1))]
    pub telegram_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Unprocessed and total request counts
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactSummary {
    pub unprocessed: i64,
    pub total: i64,
}

impl ContactSummary {
    /// Summarize an already fetched request list
    pub fn from_requests(requests: &[ContactRequest]) -> Self {
        let unprocessed = requests
            .iter()
            .filter(|r| r.status == ContactStatus::New)
            .count();

        Self {
            unprocessed: unprocessed as i64,
            total: requests.len() as i64,
        }
    }
}
