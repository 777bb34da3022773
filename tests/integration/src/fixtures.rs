//! Test fixtures
//!
//! Seeded identities plus builders for the DTOs the tests submit.

use vacation_service::dto::{
    ApproveVacationDto, CancelVacationDto, LoginDto, RejectVacationDto, RequestVacationDto,
};

pub use vacation_db::memory::seed::{
    ADMIN_EMAIL, ADMIN_ID, APPROVED_REQUEST_ID, COLLABORATOR_EMAIL, COLLABORATOR_ID,
    DEMO_PASSWORD, ENGINEERING_DEPARTMENT_ID, INACTIVE_USER_ID, MANAGER_EMAIL, MANAGER_ID,
    PENDING_REQUEST_ID, SECOND_COLLABORATOR_ID, SECOND_PENDING_REQUEST_ID,
};

/// Credentials of a seeded account
pub fn login(email: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
    }
}

pub fn vacation(requester_id: &str, start: &str, end: &str) -> RequestVacationDto {
    RequestVacationDto {
        requester_id: requester_id.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        observation: None,
    }
}

pub fn approve(request_id: &str, reviewer_id: &str) -> ApproveVacationDto {
    ApproveVacationDto {
        request_id: request_id.to_string(),
        reviewer_id: reviewer_id.to_string(),
    }
}

pub fn reject(request_id: &str, reviewer_id: &str, reason: &str) -> RejectVacationDto {
    RejectVacationDto {
        request_id: request_id.to_string(),
        reviewer_id: reviewer_id.to_string(),
        reason: reason.to_string(),
    }
}

pub fn cancel(request_id: &str, requester_id: &str) -> CancelVacationDto {
    CancelVacationDto {
        request_id: request_id.to_string(),
        requester_id: requester_id.to_string(),
    }
}
