//! Vacation request wire record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vacation_core::VacationStatus;

/// JSON representation of a vacation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequestRecord {
    pub id: String,
    pub requester_id: String,
    #[serde(default)]
    pub reviewer_id: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub observation: Option<String>,
    pub status: VacationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}
