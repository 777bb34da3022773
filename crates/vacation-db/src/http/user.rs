//! HTTP implementation of UserRepository

use async_trait::async_trait;
use tracing::instrument;
use vacation_core::{DepartmentId, Email, RepoResult, User, UserId, UserRepository};

use super::HttpClient;
use crate::models::UserRecord;

const COLLECTION: &str = "users";

#[derive(Clone)]
pub struct HttpUserRepository {
    client: HttpClient,
}

impl HttpUserRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    async fn list(&self, query: &[(&str, &str)]) -> RepoResult<Vec<User>> {
        let records: Vec<UserRecord> = self.client.get(&[COLLECTION], query).await?;
        records
            .into_iter()
            .map(|r| User::try_from(r).map_err(Into::into))
            .collect()
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &UserId) -> RepoResult<Option<User>> {
        let record: Option<UserRecord> =
            self.client.get_optional(&[COLLECTION, id.as_str()]).await?;
        Ok(record.map(User::try_from).transpose()?)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &Email) -> RepoResult<Option<User>> {
        let users = self.list(&[("email", email.value())]).await?;
        Ok(users.into_iter().next())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    async fn save(&self, user: &User) -> RepoResult<()> {
        let record = UserRecord::from(user);
        self.client
            .put(&[COLLECTION, user.id().as_str()], &record)
            .await
    }

    #[instrument(skip(self))]
    async fn find_by_department_id(&self, department_id: &DepartmentId) -> RepoResult<Vec<User>> {
        self.list(&[("departmentId", department_id.as_str())]).await
    }

    #[instrument(skip(self))]
    async fn find_by_manager_id(&self, manager_id: &UserId) -> RepoResult<Vec<User>> {
        self.list(&[("managerId", manager_id.as_str())]).await
    }
}
