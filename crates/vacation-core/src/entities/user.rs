//! User entity - represents an employee account

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::error::ParseEnumError;
use crate::value_objects::{DepartmentId, Email, UserId};

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Collaborator,
    Manager,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collaborator => "COLLABORATOR",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COLLABORATOR" => Ok(Self::Collaborator),
            "MANAGER" => Ok(Self::Manager),
            "ADMIN" => Ok(Self::Admin),
            other => Err(ParseEnumError::new("user role", other)),
        }
    }
}

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    PendingApproval,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::PendingApproval => "PENDING_APPROVAL",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "PENDING_APPROVAL" => Ok(Self::PendingApproval),
            other => Err(ParseEnumError::new("user status", other)),
        }
    }
}

/// Attributes required to build a [`User`]
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub registration_number: String,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    pub status: UserStatus,
    pub department_id: DepartmentId,
    pub manager_id: Option<UserId>,
}

/// User entity
///
/// Immutable once built: role or status changes produce a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    registration_number: String,
    name: String,
    email: Email,
    role: UserRole,
    status: UserStatus,
    department_id: DepartmentId,
    manager_id: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, stamping both timestamps with the current time
    pub fn create(props: NewUser) -> Self {
        let now = Utc::now();
        Self::reconstruct(props, now, now)
    }

    /// Rebuild a user from persisted state
    pub fn reconstruct(
        props: NewUser,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: props.id,
            registration_number: props.registration_number,
            name: props.name,
            email: props.email,
            role: props.role,
            status: props.status,
            department_id: props.department_id,
            manager_id: props.manager_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn department_id(&self) -> &DepartmentId {
        &self.department_id
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

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    #[inline]
    pub fn is_manager(&self) -> bool {
        self.role == UserRole::Manager
    }

    #[inline]
    pub fn is_collaborator(&self) -> bool {
        self.role == UserRole::Collaborator
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Managers and admins may approve or reject vacation requests
    pub fn can_review_vacations(&self) -> bool {
        self.is_manager() || self.is_admin()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}
