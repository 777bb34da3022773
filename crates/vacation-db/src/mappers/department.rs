//! Department entity <-> record mapper

use vacation_core::{Department, DepartmentId, DomainError, UserId};

use super::malformed;
use crate::models::DepartmentRecord;

impl From<&Department> for DepartmentRecord {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id().to_string(),
            name: department.name().to_string(),
            manager_id: department.manager_id().map(ToString::to_string),
            created_at: department.created_at(),
            updated_at: department.updated_at(),
        }
    }
}

impl TryFrom<DepartmentRecord> for Department {
    type Error = DomainError;

    fn try_from(record: DepartmentRecord) -> Result<Self, Self::Error> {
        Department::reconstruct(
            DepartmentId::new(record.id.as_str()),
            &record.name,
            record.manager_id.and_then(|id| UserId::parse(&id)),
            record.created_at,
            record.updated_at,
        )
        .map_err(|e| malformed("department", &record.id, e))
    }
}
