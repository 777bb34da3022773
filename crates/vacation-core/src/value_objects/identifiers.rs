//! Entity identifiers
//!
//! Each entity kind gets its own string-backed newtype so a [`UserId`] can never
//! be passed where a [`VacationRequestId`] is expected. Identifiers are opaque:
//! seeded fixtures use readable values ("manager-1"), new entities get a UUID.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Generates: struct, new(), generate(), parse(), as_str(), Display, From.
// ---------------------------------------------------------------------------
macro_rules! entity_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier value
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a fresh random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Parse user input, returning `None` for blank values
            pub fn parse(value: &str) -> Option<Self> {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Self(trimmed.to_string()))
                }
            }

            /// Returns the identifier as a string slice
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the raw string
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

entity_id! {
    /// Identifies a user account (collaborator, manager or admin)
    UserId
}

entity_id! {
    /// Identifies a department
    DepartmentId
}

entity_id! {
    /// Identifies a vacation request
    VacationRequestId
}
