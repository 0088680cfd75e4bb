//! Envelope answers for unmatched paths and methods

use axum::http::{Method, Uri};

use crate::error::ApiError;

pub(crate) fn route_not_found(path: &str) -> ApiError {
    ApiError::NotFound(format!("No route for {}", path))
}

pub async fn not_found(uri: Uri) -> ApiError {
    route_not_found(uri.path())
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} is not allowed on {}", method, uri.path()))
}
