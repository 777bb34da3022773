//! Entity to DTO mappers

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use vacation_core::{Department, User, VacationRequest};

use super::responses::{DepartmentDto, UserDto, VacationRequestDto};

fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ============================================================================
// User
// ============================================================================

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            registration_number: user.registration_number().to_string(),
            name: user.name().to_string(),
            email: user.email().value().to_string(),
            role: user.role().as_str().to_string(),
            status: user.status().as_str().to_string(),
            department_id: user.department_id().to_string(),
            manager_id: user.manager_id().map(ToString::to_string),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Vacation request
// ============================================================================

impl VacationRequestDto {
    /// Map a request, evaluating expiry against an explicit "today"
    pub fn from_entity_on(request: &VacationRequest, today: NaiveDate) -> Self {
        Self {
            id: request.id().to_string(),
            requester_id: request.requester_id().to_string(),
            reviewer_id: request.reviewer_id().map(ToString::to_string),
            start_date: iso_date(request.start_date()),
            end_date: iso_date(request.end_date()),
            observation: request.observation().map(str::to_string),
            status: request.status().as_str().to_string(),
            created_at: iso_timestamp(request.created_at()),
            updated_at: iso_timestamp(request.updated_at()),
            reviewed_at: request.reviewed_at().map(iso_timestamp),
            rejection_reason: request.rejection_reason().map(str::to_string),
            days: request.days(),
            is_expired: request.is_expired_on(today),
        }
    }
}

impl From<&VacationRequest> for VacationRequestDto {
    fn from(request: &VacationRequest) -> Self {
        Self::from_entity_on(request, Utc::now().date_naive())
    }
}

impl From<VacationRequest> for VacationRequestDto {
    fn from(request: VacationRequest) -> Self {
        Self::from(&request)
    }
}

// ============================================================================
// Department
// ============================================================================

impl From<&Department> for DepartmentDto {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id().to_string(),
            name: department.name().to_string(),
            manager_id: department.manager_id().map(ToString::to_string),
            created_at: iso_timestamp(department.created_at()),
            updated_at: iso_timestamp(department.updated_at()),
        }
    }
}
