//! Route handlers
//!
//! The data endpoints speak the wire records of `vacation-db`, so the HTTP
//! repositories can sit directly on top of this server.

pub mod auth;
pub mod departments;
pub mod health;
pub mod users;
pub mod vacation_requests;

use axum::http::Uri;
use vacation_common::AppError;

use crate::response::ApiError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found(format!("route {}", uri.path())).into()
}

/// Reject a body whose id disagrees with the path
fn ensure_same_id(path_id: &str, body_id: &str) -> Result<(), ApiError> {
    if path_id == body_id {
        Ok(())
    } else {
        Err(ApiError::invalid_body(format!(
            "id '{body_id}' does not match the path id '{path_id}'"
        )))
    }
}
