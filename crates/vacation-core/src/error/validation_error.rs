//! Validation failures - one variant per violated rule

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::UserId;

/// A business rule violated by some input
///
/// Every rule has its own variant so callers can match on the exact failure
/// instead of parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email format: '{0}'")]
    InvalidEmailFormat(String),

    #[error("Password does not meet requirements: {}", .0.join("; "))]
    WeakPassword(Vec<String>),

    #[error("Start date ({start}) must be before end date ({end})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Department name is required")]
    DepartmentNameRequired,

    #[error("Inactive user '{0}' cannot request vacations")]
    InactiveUserCannotRequestVacation(UserId),

    #[error("Invalid {field}: '{value}' is not a valid date")]
    InvalidVacationDate { field: &'static str, value: String },

    #[error("A rejection reason is required")]
    RejectionReasonRequired,
}

impl ValidationError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmailFormat(_) => "INVALID_EMAIL_FORMAT",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::DepartmentNameRequired => "DEPARTMENT_NAME_REQUIRED",
            Self::InactiveUserCannotRequestVacation(_) => "INACTIVE_USER_CANNOT_REQUEST_VACATION",
            Self::InvalidVacationDate { .. } => "INVALID_VACATION_DATE",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
        }
    }

    /// Name of the input field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmailFormat(_) => "email",
            Self::WeakPassword(_) => "password",
            Self::InvalidDateRange { .. } => "dateRange",
            Self::DepartmentNameRequired => "name",
            Self::InactiveUserCannotRequestVacation(_) => "requesterId",
            Self::InvalidVacationDate { field, .. } => *field,
            Self::RejectionReasonRequired => "reason",
        }
    }
}
