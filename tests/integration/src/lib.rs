//! Integration test utilities for the vacation server
//!
//! Starts the API on an ephemeral port and wires the HTTP repositories
//! against it, so use cases can be driven end to end.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
