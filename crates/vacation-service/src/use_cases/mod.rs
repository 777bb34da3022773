//! Use cases
//!
//! Each use case borrows the [`ServiceContext`] and exposes a single
//! `execute` method returning [`DomainResult`]. Errors raised by entities and
//! repositories are propagated untouched.

mod approve_vacation;
mod cancel_vacation;
mod create_department;
mod get_all_vacations;
mod get_manager_dashboard;
mod get_user_profile;
mod get_vacation_details;
mod get_vacation_history;
mod list_departments;
mod login;
mod logout;
mod reject_vacation;
mod request_vacation;

#[cfg(test)]
mod test_support;

pub use approve_vacation::ApproveVacationUseCase;
pub use cancel_vacation::CancelVacationUseCase;
pub use create_department::CreateDepartmentUseCase;
pub use get_all_vacations::GetAllVacationsUseCase;
pub use get_manager_dashboard::GetManagerDashboardUseCase;
pub use get_user_profile::GetUserProfileUseCase;
pub use get_vacation_details::GetVacationDetailsUseCase;
pub use get_vacation_history::GetVacationHistoryUseCase;
pub use list_departments::ListDepartmentsUseCase;
pub use login::LoginUseCase;
pub use logout::LogoutUseCase;
pub use reject_vacation::RejectVacationUseCase;
pub use request_vacation::RequestVacationUseCase;

use vacation_core::{
    DomainError, DomainResult, User, UserId, VacationRequest, VacationRequestId,
};

use crate::context::ServiceContext;
use crate::dto::VacationRequestDto;

/// Trim a required identifier, rejecting blank input
fn required<'a>(field: &str, raw: &'a str) -> Result<&'a str, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input(field, Some("must not be empty")));
    }
    Ok(trimmed)
}

async fn load_user(ctx: &ServiceContext, id: &UserId) -> DomainResult<User> {
    ctx.user_repo()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", id).into())
}

async fn load_request(
    ctx: &ServiceContext,
    id: &VacationRequestId,
) -> DomainResult<VacationRequest> {
    ctx.vacation_repo()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Vacation request", id).into())
}

/// Most recently created first; ties keep their original order
fn newest_first(requests: &mut [VacationRequest]) {
    requests.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

fn to_dtos(requests: &[VacationRequest]) -> Vec<VacationRequestDto> {
    requests.iter().map(VacationRequestDto::from).collect()
}
