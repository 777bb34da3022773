//! HTTP implementation of DepartmentRepository

use async_trait::async_trait;
use tracing::instrument;
use vacation_core::{Department, DepartmentId, DepartmentRepository, RepoResult};

use super::HttpClient;
use crate::models::DepartmentRecord;

const COLLECTION: &str = "departments";

#[derive(Clone)]
pub struct HttpDepartmentRepository {
    client: HttpClient,
}

impl HttpDepartmentRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DepartmentRepository for HttpDepartmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DepartmentId) -> RepoResult<Option<Department>> {
        let record: Option<DepartmentRecord> = self
            .client
            .get_optional(&[COLLECTION, id.as_str()])
            .await?;
        Ok(record.map(Department::try_from).transpose()?)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Department>> {
        let records: Vec<DepartmentRecord> = self.client.get(&[COLLECTION], &[]).await?;
        records
            .into_iter()
            .map(|r| Department::try_from(r).map_err(Into::into))
            .collect()
    }

    #[instrument(skip(self, department), fields(department_id = %department.id()))]
    async fn save(&self, department: &Department) -> RepoResult<()> {
        let record = DepartmentRecord::from(department);
        self.client
            .put(&[COLLECTION, department.id().as_str()], &record)
            .await
    }
}
