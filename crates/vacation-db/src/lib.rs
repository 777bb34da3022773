//! # vacation-db
//!
//! Data layer implementing the repository traits of `vacation-core`.
//!
//! ## Overview
//!
//! Two interchangeable data sources are provided:
//!
//! - [`memory`]: a seeded in-process store with simulated latency
//! - [`http`]: a `reqwest` client for the REST contract served by `vacation-api`
//!
//! Both exchange entities through the camelCase wire [`models`] and the
//! [`mappers`] that convert them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vacation_db::memory::{LatencyProfile, MemoryDatabase, MemoryUserRepository};
//!
//! let db = Arc::new(MemoryDatabase::seeded()?);
//! let users = MemoryUserRepository::new(db, LatencyProfile::none());
//! ```

pub mod http;
pub mod mappers;
pub mod memory;
pub mod models;

// Re-export commonly used types
pub use http::{
    HttpAuthRepository, HttpClient, HttpDepartmentRepository, HttpUserRepository,
    HttpVacationRepository,
};
pub use memory::{
    LatencyProfile, MemoryAuthRepository, MemoryDatabase, MemoryDepartmentRepository,
    MemoryStorageAdapter, MemoryUserRepository, MemoryVacationRepository,
};
