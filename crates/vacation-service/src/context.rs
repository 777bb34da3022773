//! Service context - dependency container for use cases
//!
//! Built once at startup (see [`crate::bootstrap`]) and lent to every use
//! case by reference.

use std::sync::Arc;

use vacation_common::{AppError, AppResult};
use vacation_core::{AuthRepository, DepartmentRepository, UserRepository, VacationRepository};

/// Repositories shared by all use cases
#[derive(Clone)]
pub struct ServiceContext {
    auth_repo: Arc<dyn AuthRepository>,
    user_repo: Arc<dyn UserRepository>,
    vacation_repo: Arc<dyn VacationRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
}

impl ServiceContext {
    pub fn new(
        auth_repo: Arc<dyn AuthRepository>,
        user_repo: Arc<dyn UserRepository>,
        vacation_repo: Arc<dyn VacationRepository>,
        department_repo: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            auth_repo,
            user_repo,
            vacation_repo,
            department_repo,
        }
    }

    /// Start building a context piece by piece
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn auth_repo(&self) -> &dyn AuthRepository {
        self.auth_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn vacation_repo(&self) -> &dyn VacationRepository {
        self.vacation_repo.as_ref()
    }

    pub fn department_repo(&self) -> &dyn DepartmentRepository {
        self.department_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating a ServiceContext, e.g. with test doubles
#[derive(Default)]
pub struct ServiceContextBuilder {
    auth_repo: Option<Arc<dyn AuthRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    vacation_repo: Option<Arc<dyn VacationRepository>>,
    department_repo: Option<Arc<dyn DepartmentRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth_repo(mut self, repo: Arc<dyn AuthRepository>) -> Self {
        self.auth_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn vacation_repo(mut self, repo: Arc<dyn VacationRepository>) -> Self {
        self.vacation_repo = Some(repo);
        self
    }

    pub fn department_repo(mut self, repo: Arc<dyn DepartmentRepository>) -> Self {
        self.department_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `AppError::Internal` if any repository is missing
    pub fn build(self) -> AppResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.auth_repo.ok_or_else(|| missing("auth_repo"))?,
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.vacation_repo.ok_or_else(|| missing("vacation_repo"))?,
            self.department_repo.ok_or_else(|| missing("department_repo"))?,
        ))
    }
}

fn missing(name: &str) -> AppError {
    AppError::internal(anyhow::anyhow!("{name} is required"))
}
