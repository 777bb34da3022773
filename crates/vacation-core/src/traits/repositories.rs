//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (seeded in-memory store or HTTP backend).
//! Lookups by id return `Option`; callers decide whether absence is an error.

use async_trait::async_trait;

use crate::entities::{Department, User, VacationRequest, VacationStatus};
use crate::error::DomainResult;
use crate::value_objects::{DepartmentId, Email, Password, UserId, VacationRequestId};

/// Result type for repository operations
pub type RepoResult<T> = DomainResult<T>;

// ============================================================================
// Auth Repository
// ============================================================================

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Authenticate with credentials, returning the signed-in user
    async fn login(&self, email: &Email, password: &Password) -> RepoResult<User>;

    /// End the current session
    ///
    /// Transport and storage failures are not domain errors, so they are
    /// reported untyped and classified by the caller.
    async fn logout(&self) -> anyhow::Result<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> RepoResult<Option<User>>;

    /// Insert or replace a user
    async fn save(&self, user: &User) -> RepoResult<()>;

    /// List members of a department
    async fn find_by_department_id(&self, department_id: &DepartmentId) -> RepoResult<Vec<User>>;

    /// List direct reports of a manager
    async fn find_by_manager_id(&self, manager_id: &UserId) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Vacation Repository
// ============================================================================

#[async_trait]
pub trait VacationRepository: Send + Sync {
    /// Insert or replace a request (last write wins)
    async fn save(&self, request: &VacationRequest) -> RepoResult<()>;

    /// Find request by ID
    async fn find_by_id(&self, id: &VacationRequestId) -> RepoResult<Option<VacationRequest>>;

    /// All requests submitted by a user
    async fn find_by_requester_id(&self, requester_id: &UserId) -> RepoResult<Vec<VacationRequest>>;

    /// Pending requests submitted by the manager's direct reports
    async fn find_pending_by_manager_id(&self, manager_id: &UserId)
        -> RepoResult<Vec<VacationRequest>>;

    /// Requests submitted by a user in a given status
    async fn find_by_requester_id_and_status(
        &self,
        requester_id: &UserId,
        status: VacationStatus,
    ) -> RepoResult<Vec<VacationRequest>>;

    /// Every request in the system
    async fn find_all(&self) -> RepoResult<Vec<VacationRequest>>;
}

// ============================================================================
// Department Repository
// ============================================================================

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find department by ID
    async fn find_by_id(&self, id: &DepartmentId) -> RepoResult<Option<Department>>;

    /// Every department
    async fn list_all(&self) -> RepoResult<Vec<Department>>;

    /// Insert or replace a department
    async fn save(&self, department: &Department) -> RepoResult<()>;
}
