//! Response DTOs returned by use cases

use serde::{Deserialize, Serialize};

/// Snapshot of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub registration_number: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub department_id: String,
    pub manager_id: Option<String>,
}

/// Snapshot of a vacation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequestDto {
    pub id: String,
    pub requester_id: String,
    pub reviewer_id: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub observation: Option<String>,
    pub status: String,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
    pub reviewed_at: Option<String>,
    pub rejection_reason: Option<String>,
    /// Inclusive number of calendar days
    pub days: i64,
    /// The first vacation day has already passed
    pub is_expired: bool,
}

/// Snapshot of a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: String,
    pub name: String,
    pub manager_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
