//! HTTP client for the admin-status contract used by the Telegram bot
//!
//! The bot fetches `/api/contact-requests` as an administrator and counts the
//! `new` entries itself; [`ContactStatsClient`] does exactly that.

use std::time::Duration;
use thiserror::Error;

use crate::contact::ContactSummary;
use crate::middleware::TELEGRAM_USER_HEADER;
use crate::models::{ContactList, Envelope};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API answered {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Clone)]
pub struct ContactStatsClient {
    http: reqwest::Client,
    base_url: String,
    admin_id: i64,
}

impl ContactStatsClient {
    pub fn new(base_url: &str, admin_id: i64) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_id,
        })
    }

    pub fn requests_url(&self) -> String {
        format!("{}/api/contact-requests", self.base_url)
    }

    /// Fetch every request and count the unprocessed ones client-side
    pub async fn fetch_summary(&self) -> Result<ContactSummary, ClientError> {
        let response = self
            .http
            .get(self.requests_url())
            .header(TELEGRAM_USER_HEADER, self.admin_id.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| status.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Envelope<ContactList> = response.json().await?;
        let summary = ContactSummary::from_requests(&body.payload.requests);

        tracing::debug!(
            unprocessed = summary.unprocessed,
            total = summary.total,
            "Fetched contact request summary"
        );

        Ok(summary)
    }
}

/// Admin-facing status text, as the bot replies to its admin command
pub fn format_summary(summary: &ContactSummary) -> String {
    format!(
        "Unprocessed requests: {}\nTotal requests: {}",
        summary.unprocessed, summary.total
    )
}
