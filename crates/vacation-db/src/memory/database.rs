//! Shared in-memory tables

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use vacation_common::AppResult;
use vacation_core::{
    Department, DepartmentId, Email, User, UserId, VacationRequest, VacationRequestId,
};

use super::seed;

/// Process-local tables shared by the memory repositories
///
/// Ordered maps keep listings deterministic.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    pub(crate) users: RwLock<BTreeMap<UserId, User>>,
    pub(crate) departments: RwLock<BTreeMap<DepartmentId, Department>>,
    pub(crate) vacation_requests: RwLock<BTreeMap<VacationRequestId, VacationRequest>>,
    /// Normalized email -> Argon2 hash
    credentials: RwLock<HashMap<String, String>>,
}

impl MemoryDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database loaded with the demo fixtures
    ///
    /// # Errors
    /// Returns an error if the fixtures cannot be parsed or hashed
    pub fn seeded() -> AppResult<Self> {
        let db = Self::new();
        seed::load(&db)?;
        Ok(db)
    }

    /// Register or replace the login credentials for an email
    pub fn set_credentials(&self, email: &Email, password_hash: String) {
        self.credentials
            .write()
            .insert(email.value().to_string(), password_hash);
    }

    pub(crate) fn password_hash(&self, email: &Email) -> Option<String> {
        self.credentials.read().get(email.value()).cloned()
    }

    pub(crate) fn put_user(&self, user: User) {
        self.users.write().insert(user.id().clone(), user);
    }

    pub(crate) fn put_department(&self, department: Department) {
        self.departments
            .write()
            .insert(department.id().clone(), department);
    }

    pub(crate) fn put_vacation_request(&self, request: VacationRequest) {
        self.vacation_requests
            .write()
            .insert(request.id().clone(), request);
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    /// Number of stored vacation requests
    pub fn vacation_request_count(&self) -> usize {
        self.vacation_requests.read().len()
    }
}
