//! Response types and error handling for API endpoints
//!
//! Every failure is rendered as `{"error": {"code", "message", "details"?}}`.
//! Details are computed for every error but only travel in the body when the
//! details middleware is installed (development).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;
use vacation_common::{AppError, ErrorResponse};
use vacation_core::{DomainError, SharedDomainError};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::InvalidQuery(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidBody(_) => "INVALID_REQUEST_BODY",
        }
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Diagnostic payload for the `details` field
    fn details(&self) -> Option<Value> {
        match self {
            Self::App(AppError::Domain(e)) => domain_details(e),
            Self::App(AppError::Internal(e)) => Some(json!({ "cause": format!("{e:#}") })),
            Self::App(AppError::Config(e)) => Some(json!({ "cause": e.to_string() })),
            Self::App(AppError::Io(e)) => Some(json!({ "cause": e.to_string() })),
            _ => None,
        }
    }
}

fn domain_details(e: &DomainError) -> Option<Value> {
    match e {
        DomainError::Validation(v) => Some(json!({ "field": v.field() })),
        DomainError::InvalidInput { field, .. } => Some(json!({ "field": field })),
        DomainError::InvalidStatusTransition {
            current, target, ..
        } => Some(json!({ "current": current, "target": target })),
        DomainError::NotFound {
            resource,
            identifier,
        } => Some(json!({ "resource": resource, "identifier": identifier })),
        DomainError::InfrastructureFailure { source_message, .. } => {
            source_message.as_ref().map(|cause| json!({ "cause": cause }))
        }
        DomainError::Unauthorized(_) | DomainError::Unexpected(_) => None,
    }
}

impl From<SharedDomainError> for ApiError {
    fn from(err: SharedDomainError) -> Self {
        Self::App(AppError::from(err))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::App(AppError::from(err))
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: ErrorResponse,
}

/// The same body with its details filled in
///
/// Carried as a response extension; [`crate::middleware::expose_error_details`]
/// swaps it in as the body.
#[derive(Debug, Clone)]
pub struct DetailedErrorBody(pub ErrorBody);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let error = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: None,
        };
        let detailed = self.details().map(|details| {
            DetailedErrorBody(ErrorBody {
                error: ErrorResponse {
                    details: Some(details),
                    ..error.clone()
                },
            })
        });

        let mut response = (status, Json(ErrorBody { error })).into_response();
        if let Some(detailed) = detailed {
            response.extensions_mut().insert(detailed);
        }
        response
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
