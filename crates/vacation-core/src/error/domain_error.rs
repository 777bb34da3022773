//! Domain errors - error types for the domain layer

use std::sync::Arc;

use thiserror::Error;

use super::validation_error::ValidationError;
use super::SharedDomainError;
use crate::entities::VacationStatus;

/// Default message for access-control failures without a specific explanation
pub const DEFAULT_UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // =========================================================================
    // State Transition Errors
    // =========================================================================
    #[error("Invalid status transition from {current} to {target}{}", suffix(.reason))]
    InvalidStatusTransition {
        current: VacationStatus,
        target: VacationStatus,
        reason: Option<String>,
    },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("{0}")]
    Unauthorized(String),

    // =========================================================================
    // Lookup / Input Errors
    // =========================================================================
    #[error("{}", not_found_message(.resource, .identifier))]
    NotFound {
        resource: String,
        identifier: Option<String>,
    },

    #[error("Invalid {field}{}", suffix(.reason))]
    InvalidInput {
        field: String,
        reason: Option<String>,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("{message}{}", suffix(.source_message))]
    InfrastructureFailure {
        message: String,
        source_message: Option<String>,
    },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

fn suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!(": {detail}"),
        _ => String::new(),
    }
}

fn not_found_message(resource: &str, identifier: &Option<String>) -> String {
    match identifier {
        Some(id) => format!("{resource} with identifier '{id}' not found"),
        None => format!("{resource} not found"),
    }
}

impl DomainError {
    /// Create a "not found" error for a resource and its identifier
    pub fn not_found(resource: impl Into<String>, identifier: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.into(),
            identifier: Some(identifier.to_string()),
        }
    }

    /// Create a "not found" error for a resource without an identifier
    pub fn resource_not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            identifier: None,
        }
    }

    /// Create an access-control error with a specific message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create an access-control error with the default message
    pub fn unauthorized_access() -> Self {
        Self::Unauthorized(DEFAULT_UNAUTHORIZED_MESSAGE.to_string())
    }

    /// Create an invalid input error for a field
    pub fn invalid_input(field: impl Into<String>, reason: Option<&str>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.map(str::to_string),
        }
    }

    /// Create an invalid status transition error
    pub fn invalid_transition(
        current: VacationStatus,
        target: VacationStatus,
        reason: Option<&str>,
    ) -> Self {
        Self::InvalidStatusTransition {
            current,
            target,
            reason: reason.map(str::to_string),
        }
    }

    /// Wrap a network or storage failure, keeping the original message
    pub fn infrastructure(message: impl Into<String>, source: impl ToString) -> Self {
        Self::InfrastructureFailure {
            message: message.into(),
            source_message: Some(source.to_string()),
        }
    }

    /// Wrap a failure that did not originate in the domain
    pub fn unexpected(message: impl ToString) -> Self {
        Self::Unexpected(message.to_string())
    }

    /// Move this error into its shared, identity-preserving form
    pub fn share(self) -> SharedDomainError {
        Arc::new(self)
    }

    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.code(),
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::InfrastructureFailure { .. } => "INFRASTRUCTURE_FAILURE",
            Self::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if this is a rejected state transition
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::InvalidStatusTransition { .. })
    }

    /// Check if this is a client-side input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Check if this wraps an infrastructure failure
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::InfrastructureFailure { .. })
    }

    /// Check if this wraps a non-domain failure
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Unexpected(_))
    }

    /// Borrow the validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
