//! In-memory implementation of UserRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use vacation_core::{DepartmentId, Email, RepoResult, User, UserId, UserRepository};

use super::{LatencyProfile, MemoryDatabase};

#[derive(Clone)]
pub struct MemoryUserRepository {
    db: Arc<MemoryDatabase>,
    latency: LatencyProfile,
}

impl MemoryUserRepository {
    pub fn new(db: Arc<MemoryDatabase>, latency: LatencyProfile) -> Self {
        Self { db, latency }
    }

    fn select(&self, predicate: impl Fn(&User) -> bool) -> Vec<User> {
        self.db
            .users
            .read()
            .values()
            .filter(|u| predicate(u))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &UserId) -> RepoResult<Option<User>> {
        self.latency.before_read().await;
        Ok(self.db.users.read().get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &Email) -> RepoResult<Option<User>> {
        self.latency.before_read().await;
        Ok(self.select(|u| u.email() == email).into_iter().next())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    async fn save(&self, user: &User) -> RepoResult<()> {
        self.latency.before_write().await;
        self.db.put_user(user.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_department_id(&self, department_id: &DepartmentId) -> RepoResult<Vec<User>> {
        self.latency.before_read().await;
        Ok(self.select(|u| u.department_id() == department_id))
    }

    #[instrument(skip(self))]
    async fn find_by_manager_id(&self, manager_id: &UserId) -> RepoResult<Vec<User>> {
        self.latency.before_read().await;
        Ok(self.select(|u| u.manager_id() == Some(manager_id)))
    }
}
