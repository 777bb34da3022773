//! Application error types
//!
//! Wraps domain errors together with the failures that only exist outside
//! the domain (configuration, I/O, session handling) and assigns each an
//! HTTP status and a stable code.

use serde::{Deserialize, Serialize};
use std::fmt;
use vacation_core::{DomainError, SharedDomainError};

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Session errors
    #[error("Missing authentication")]
    MissingAuth,

    #[error("Invalid or expired session")]
    InvalidSession,

    // Request errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors, kept shared so the original error survives the wrap
    #[error(transparent)]
    Domain(SharedDomainError),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingAuth | Self::InvalidSession => 401,
            Self::NotFound(_) => 404,
            Self::Io(_) | Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) => domain_status(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAuth => "MISSING_AUTH",
            Self::InvalidSession => "INVALID_SESSION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

fn domain_status(e: &DomainError) -> u16 {
    if e.is_not_found() {
        404
    } else if e.is_authorization() {
        403
    } else if e.is_validation() || e.is_invalid_input() || e.is_transition() {
        400
    } else if e.is_infrastructure() {
        502
    } else {
        500
    }
}

impl From<SharedDomainError> for AppError {
    fn from(err: SharedDomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err.share())
    }
}

/// Error response structure for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<serde_json::Value>,
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
