//! Middleware for the AurumBank API
//!
//! Request tracing, security headers and admin authorization.

pub mod auth;
mod security;
mod tracing;

pub use auth::{AdminIdList, AdminPolicy, AdminUser, TELEGRAM_USER_HEADER};
pub use security::security_headers;
pub use self::tracing::request_tracing;
