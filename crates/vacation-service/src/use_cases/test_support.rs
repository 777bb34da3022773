//! Test doubles and fixtures shared by the use-case tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use vacation_core::{
    AuthRepository, DepartmentId, Email, NewUser, Password, PersistedVacationRequest, RepoResult,
    SharedDomainError, User, UserId, UserRole, UserStatus, VacationRepository, VacationRequest,
    VacationRequestId, VacationStatus,
};
use vacation_db::{
    LatencyProfile, MemoryAuthRepository, MemoryDatabase, MemoryDepartmentRepository,
    MemoryUserRepository, MemoryVacationRepository,
};

use crate::bootstrap::memory_context;
use crate::context::ServiceContext;

/// Context over freshly seeded memory repositories, without latency
pub fn seeded_context() -> ServiceContext {
    let db = Arc::new(MemoryDatabase::seeded().unwrap());
    memory_context(db, LatencyProfile::none())
}

/// Context over empty memory repositories
pub fn empty_context() -> ServiceContext {
    memory_context(Arc::new(MemoryDatabase::new()), LatencyProfile::none())
}

/// Seeded context whose vacation repository is replaced
pub fn context_with_vacations(repo: Arc<dyn VacationRepository>) -> ServiceContext {
    let db = Arc::new(MemoryDatabase::seeded().unwrap());
    let none = LatencyProfile::none();
    ServiceContext::builder()
        .auth_repo(Arc::new(MemoryAuthRepository::new(db.clone(), none)))
        .user_repo(Arc::new(MemoryUserRepository::new(db.clone(), none)))
        .department_repo(Arc::new(MemoryDepartmentRepository::new(db, none)))
        .vacation_repo(repo)
        .build()
        .unwrap()
}

/// Context whose auth repository is replaced
pub fn context_with_auth(repo: Arc<dyn AuthRepository>) -> ServiceContext {
    let db = Arc::new(MemoryDatabase::new());
    let none = LatencyProfile::none();
    ServiceContext::builder()
        .auth_repo(repo)
        .user_repo(Arc::new(MemoryUserRepository::new(db.clone(), none)))
        .vacation_repo(Arc::new(MemoryVacationRepository::new(db.clone(), none)))
        .department_repo(Arc::new(MemoryDepartmentRepository::new(db, none)))
        .build()
        .unwrap()
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

pub fn user(id: &str, role: UserRole, department: &str, manager: Option<&str>) -> User {
    User::create(NewUser {
        id: UserId::new(id),
        registration_number: format!("REG-{id}"),
        name: format!("User {id}"),
        email: Email::create(&format!("{id}@company.com")).unwrap(),
        role,
        status: UserStatus::Active,
        department_id: DepartmentId::new(department),
        manager_id: manager.map(UserId::new),
    })
}

pub fn request(
    id: &str,
    requester: &str,
    status: VacationStatus,
    created_at: DateTime<Utc>,
) -> VacationRequest {
    VacationRequest::reconstruct(PersistedVacationRequest {
        id: VacationRequestId::new(id),
        requester_id: UserId::new(requester),
        reviewer_id: None,
        start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 5).unwrap(),
        observation: None,
        status,
        created_at,
        updated_at: created_at,
        reviewed_at: None,
        rejection_reason: None,
    })
    .unwrap()
}

// ============================================================================
// Auth
// ============================================================================

/// Auth repository returning canned results
pub struct MockAuthRepository {
    user: Option<User>,
    login_error: Option<SharedDomainError>,
    logout_error: Option<String>,
    logins: Mutex<Vec<(String, String)>>,
}

impl MockAuthRepository {
    pub fn returning(user: User) -> Self {
        Self {
            user: Some(user),
            login_error: None,
            logout_error: None,
            logins: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_login(error: SharedDomainError) -> Self {
        Self {
            user: None,
            login_error: Some(error),
            logout_error: None,
            logins: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_logout(message: &str) -> Self {
        Self {
            user: None,
            login_error: None,
            logout_error: Some(message.to_string()),
            logins: Mutex::new(Vec::new()),
        }
    }

    /// Credentials received so far, as (email, password)
    pub fn logins(&self) -> Vec<(String, String)> {
        self.logins.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthRepository for MockAuthRepository {
    async fn login(&self, email: &Email, password: &Password) -> RepoResult<User> {
        self.logins
            .lock()
            .unwrap()
            .push((email.value().to_string(), password.expose().to_string()));

        if let Some(error) = &self.login_error {
            return Err(Arc::clone(error));
        }
        Ok(self.user.clone().unwrap())
    }

    async fn logout(&self) -> anyhow::Result<()> {
        match &self.logout_error {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Vacations
// ============================================================================

/// Vacation repository answering every query with the same requests,
/// or with the same shared error
pub struct StubVacationRepository {
    requests: Vec<VacationRequest>,
    error: Option<SharedDomainError>,
    saved: Mutex<Vec<VacationRequest>>,
}

impl StubVacationRepository {
    pub fn with(requests: Vec<VacationRequest>) -> Self {
        Self {
            requests,
            error: None,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: SharedDomainError) -> Self {
        Self {
            requests: Vec::new(),
            error: Some(error),
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn saved(&self) -> Vec<VacationRequest> {
        self.saved.lock().unwrap().clone()
    }

    fn answer(&self) -> RepoResult<Vec<VacationRequest>> {
        match &self.error {
            Some(error) => Err(Arc::clone(error)),
            None => Ok(self.requests.clone()),
        }
    }
}

#[async_trait]
impl VacationRepository for StubVacationRepository {
    async fn save(&self, request: &VacationRequest) -> RepoResult<()> {
        if let Some(error) = &self.error {
            return Err(Arc::clone(error));
        }
        self.saved.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &VacationRequestId) -> RepoResult<Option<VacationRequest>> {
        Ok(self.answer()?.into_iter().find(|r| r.id() == id))
    }

    async fn find_by_requester_id(&self, _: &UserId) -> RepoResult<Vec<VacationRequest>> {
        self.answer()
    }

    async fn find_pending_by_manager_id(&self, _: &UserId) -> RepoResult<Vec<VacationRequest>> {
        self.answer()
    }

    async fn find_by_requester_id_and_status(
        &self,
        _: &UserId,
        _: VacationStatus,
    ) -> RepoResult<Vec<VacationRequest>> {
        self.answer()
    }

    async fn find_all(&self) -> RepoResult<Vec<VacationRequest>> {
        self.answer()
    }
}
