//! # vacation-service
//!
//! Application layer containing the use cases, their DTOs, and the
//! [`ServiceContext`] that wires repositories into them.
//!
//! Every use case follows the same shape: load, authorize, mutate, persist.
//! Failures travel as [`vacation_core::SharedDomainError`] so that the error
//! a repository or entity raised is the very one the caller receives.

pub mod bootstrap;
pub mod context;
pub mod dto;
pub mod use_cases;

pub use bootstrap::bootstrap;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use use_cases::{
    ApproveVacationUseCase, CancelVacationUseCase, CreateDepartmentUseCase,
    GetAllVacationsUseCase, GetManagerDashboardUseCase, GetUserProfileUseCase,
    GetVacationDetailsUseCase, GetVacationHistoryUseCase, ListDepartmentsUseCase, LoginUseCase,
    LogoutUseCase, RejectVacationUseCase, RequestVacationUseCase,
};
