//! Admin authorization
//!
//! Callers identify themselves with their Telegram user id in the
//! `X-Telegram-User-Id` header; an [`AdminPolicy`] decides whether that id may
//! use the admin endpoints.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::ApiError;

/// Header carrying the caller's Telegram user id
pub const TELEGRAM_USER_HEADER: &str = "x-telegram-user-id";

/// Capability check: may `user_id` act as an administrator?
pub trait AdminPolicy: Send + Sync {
    fn is_admin(&self, user_id: i64) -> bool;
}

/// Fixed allow-list of admin ids, loaded from configuration
#[derive(Debug, Clone, Default)]
pub struct AdminIdList {
    ids: BTreeSet<i64>,
}

impl AdminIdList {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl AdminPolicy for AdminIdList {
    fn is_admin(&self, user_id: i64) -> bool {
        self.ids.contains(&user_id)
    }
}

/// Parse the caller id out of request headers, if present and numeric
pub fn caller_id(parts: &Parts) -> Option<i64> {
    parts
        .headers
        .get(TELEGRAM_USER_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<i64>().ok())
}

/// Extractor that only succeeds for administrators
///
/// ```rust,ignore
/// async fn admin_only(AdminUser(user_id): AdminUser) -> impl IntoResponse {
///     format!("Hello, admin {}", user_id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    Arc<dyn AdminPolicy>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user_id = caller_id(parts).ok_or_else(|| {
            ApiError::Unauthorized("X-Telegram-User-Id header with a numeric id required".to_string())
        })?;

        let policy = Arc::<dyn AdminPolicy>::from_ref(state);
        if !policy.is_admin(user_id) {
            tracing::warn!(user_id, "Admin access denied");
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }

        Ok(AdminUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_admin_id_list() {
        let policy = AdminIdList::new([111, 222]);
        assert!(policy.is_admin(111));
        assert!(!policy.is_admin(333));
        assert!(AdminIdList::default().is_empty());
    }

    #[test]
    fn test_caller_id_parsing() {
        let (parts, _) = Request::builder()
            .header(TELEGRAM_USER_HEADER, " 12345 ")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(caller_id(&parts), Some(12345));

        let (parts, _) = Request::builder()
            .header(TELEGRAM_USER_HEADER, "alice")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(caller_id(&parts), None);

        let (parts, _) = Request::builder().body(()).unwrap().into_parts();
        assert_eq!(caller_id(&parts), None);
    }
}
