//! # vacation-core
//!
//! Domain layer containing entities, value objects, the domain error taxonomy,
//! and the repository/storage traits that infrastructure implements.
//! This crate has zero dependencies on infrastructure (HTTP, storage engines, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    id_equals, Department, Entity, NewUser, NewVacationRequest, PersistedVacationRequest, User,
    UserRole, UserStatus, VacationRequest, VacationStatus,
};
pub use error::{DomainError, DomainResult, ParseEnumError, SharedDomainError, ValidationError};
pub use traits::{
    get_json, set_json, AuthRepository, DepartmentRepository, RepoResult, StorageAdapter,
    UserRepository, VacationRepository,
};
pub use value_objects::{
    parse_calendar_date, DateRange, DepartmentId, Email, Password, PasswordPolicy, PasswordRule,
    UserId, VacationRequestId,
};
