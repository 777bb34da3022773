//! Entity <-> record mappers
//!
//! - `From<&Entity> for Record`: prepare an entity for the wire
//! - `TryFrom<Record> for Entity`: rebuild a domain object, rejecting
//!   records that violate a domain invariant

mod department;
mod user;
mod vacation_request;

use vacation_core::DomainError;

/// Error for a record that cannot be turned back into an entity
pub(crate) fn malformed(kind: &str, id: &str, cause: impl ToString) -> DomainError {
    DomainError::infrastructure(format!("Malformed {kind} record '{id}'"), cause)
}
