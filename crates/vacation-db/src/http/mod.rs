//! HTTP data source
//!
//! Repository implementations backed by the REST contract served by
//! `vacation-api` (or any compatible backend). The session token returned by
//! `POST /auth/login` is kept in a [`StorageAdapter`] and sent as a bearer
//! token on every later request.
//!
//! [`StorageAdapter`]: vacation_core::StorageAdapter

mod auth;
mod client;
mod department;
mod error;
mod user;
mod vacation;

pub use auth::HttpAuthRepository;
pub use client::{HttpClient, SESSION_TOKEN_KEY};
pub use department::HttpDepartmentRepository;
pub use user::HttpUserRepository;
pub use vacation::HttpVacationRepository;
