//! In-memory implementation of DepartmentRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use vacation_core::{Department, DepartmentId, DepartmentRepository, RepoResult};

use super::{LatencyProfile, MemoryDatabase};

#[derive(Clone)]
pub struct MemoryDepartmentRepository {
    db: Arc<MemoryDatabase>,
    latency: LatencyProfile,
}

impl MemoryDepartmentRepository {
    pub fn new(db: Arc<MemoryDatabase>, latency: LatencyProfile) -> Self {
        Self { db, latency }
    }
}

#[async_trait]
impl DepartmentRepository for MemoryDepartmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DepartmentId) -> RepoResult<Option<Department>> {
        self.latency.before_read().await;
        Ok(self.db.departments.read().get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Department>> {
        self.latency.before_read().await;
        Ok(self.db.departments.read().values().cloned().collect())
    }

    #[instrument(skip(self, department), fields(department_id = %department.id()))]
    async fn save(&self, department: &Department) -> RepoResult<()> {
        self.latency.before_write().await;
        self.db.put_department(department.clone());
        Ok(())
    }
}
