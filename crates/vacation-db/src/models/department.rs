//! Department wire record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON representation of a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
