//! Data transfer objects exchanged with use-case callers
//!
//! - Request DTOs carry raw, primitive-typed input; use cases validate it
//! - Response DTOs are plain snapshots of entities (dates as ISO strings)
//! - Mappers convert domain entities into response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ApproveVacationDto, CancelVacationDto, CreateDepartmentDto, LoginDto, RejectVacationDto,
    RequestVacationDto, VacationFilters,
};
pub use responses::{DepartmentDto, UserDto, VacationRequestDto};
