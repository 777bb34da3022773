//! Domain errors - the single failure channel of the domain and use-case layers
//!
//! Errors are raised as owned [`DomainError`] values and converted into a
//! [`SharedDomainError`] the first time they cross a `?`. From then on the
//! same allocation travels up the call stack, so a caller can always tell
//! (via [`std::sync::Arc::ptr_eq`]) that it received the original error.

mod domain_error;
mod validation_error;

use std::sync::Arc;

pub use domain_error::DomainError;
pub use validation_error::ValidationError;

/// Reference-counted domain error, moved (never cloned into a new value) across layers
pub type SharedDomainError = Arc<DomainError>;

/// Result type returned by use cases and repositories
pub type DomainResult<T> = Result<T, SharedDomainError>;

/// Error when parsing a domain enum from its wire representation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
