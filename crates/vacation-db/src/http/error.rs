//! Mapping of HTTP failures onto domain errors
//!
//! Classification uses the structured status code only; the body is read for
//! its message and never inspected to decide the error kind.

use reqwest::StatusCode;
use serde::Deserialize;
use vacation_common::ErrorResponse;
use vacation_core::DomainError;

/// Error body produced by `vacation-api`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorResponse,
}

/// The request never produced a response (connect error, timeout, ...)
pub(crate) fn transport_error(path: &str, err: &reqwest::Error) -> DomainError {
    let message = if err.is_timeout() {
        format!("Request to {path} timed out")
    } else {
        format!("Request to {path} failed")
    };
    DomainError::infrastructure(message, err)
}

/// The response body could not be decoded
pub(crate) fn decode_error(path: &str, err: &reqwest::Error) -> DomainError {
    DomainError::infrastructure(format!("Unexpected response from {path}"), err)
}

/// A non-success status returned by the server
pub(crate) fn status_error(status: StatusCode, path: &str, body: &str) -> DomainError {
    let message = error_message(status, body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DomainError::unauthorized(message),
        StatusCode::NOT_FOUND => DomainError::not_found("Resource", path),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            DomainError::invalid_input("request", Some(&message))
        }
        _ => DomainError::infrastructure(
            format!("Request to {path} failed with status {}", status.as_u16()),
            message,
        ),
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}
