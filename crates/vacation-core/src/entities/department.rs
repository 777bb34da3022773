//! Department entity - an organizational unit with an optional manager

use chrono::{DateTime, Utc};

use super::entity::Entity;
use crate::error::{DomainError, ValidationError};
use crate::value_objects::{DepartmentId, UserId};

/// Department entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    id: DepartmentId,
    name: String,
    manager_id: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Department {
    /// Create a new department; the name is trimmed and must not be empty
    pub fn create(
        id: DepartmentId,
        name: &str,
        manager_id: Option<UserId>,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        Self::reconstruct(id, name, manager_id, now, now)
    }

    /// Rebuild a department from persisted state
    pub fn reconstruct(
        id: DepartmentId,
        name: &str,
        manager_id: Option<UserId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::DepartmentNameRequired.into());
        }

        Ok(Self {
            id,
            name: name.to_string(),
            manager_id,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &DepartmentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manager_id(&self) -> Option<&UserId> {
        self.manager_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> &DepartmentId {
        &self.id
    }
}
