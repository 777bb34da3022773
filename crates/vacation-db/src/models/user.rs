//! User wire record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vacation_core::{UserRole, UserStatus};

/// JSON representation of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub registration_number: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub department_id: String,
    #[serde(default)]
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
