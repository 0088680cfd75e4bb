//! Response envelope and payload models for the AurumBank API

use serde::{Deserialize, Serialize};

use crate::catalog::LoanRecord;
use crate::contact::ContactRequest;

/// Outcome tag carried by every response body
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
    Info,
}

/// `{"status", "message", ...payload}` response body
///
/// The payload's fields are flattened next to `status` and `message`, so a loan
/// list answers `{"status": "success", "message": "...", "count": 3, "loans": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            payload,
        }
    }

    pub fn info(message: impl Into<String>, payload: T) -> Self {
        Self {
            status: EnvelopeStatus::Info,
            message: message.into(),
            payload,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoanList {
    pub count: usize,
    pub loans: Vec<LoanRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoanPayload {
    pub loan: LoanRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedPayload {
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountPayload {
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactList {
    pub count: usize,
    pub requests: Vec<ContactRequest>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactPayload {
    pub request: ContactRequest,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusPayload {
    pub database: String,
    pub version: String,
}

/// Empty payload for plain acknowledgements
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct NoPayload {}
