//! Request DTOs for use cases

use serde::{Deserialize, Serialize};
use vacation_core::VacationStatus;

// ============================================================================
// Auth
// ============================================================================

/// Credentials submitted at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Vacation requests
// ============================================================================

/// Submission of a new vacation request; dates are ISO-8601 strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestVacationDto {
    pub requester_id: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub observation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveVacationDto {
    pub request_id: String,
    pub reviewer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectVacationDto {
    pub request_id: String,
    pub reviewer_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelVacationDto {
    pub request_id: String,
    pub requester_id: String,
}

/// Optional filters for the admin listing
///
/// `start_date` keeps requests starting on or after the date, `end_date`
/// keeps requests ending on or before it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationFilters {
    #[serde(default)]
    pub status: Option<VacationStatus>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

// ============================================================================
// Departments
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentDto {
    /// The administrator performing the operation
    pub requester_id: String,
    pub name: String,
    #[serde(default)]
    pub manager_id: Option<String>,
}
