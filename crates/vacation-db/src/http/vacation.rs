//! HTTP implementation of VacationRepository

use async_trait::async_trait;
use tracing::instrument;
use vacation_core::{
    RepoResult, UserId, VacationRepository, VacationRequest, VacationRequestId, VacationStatus,
};

use super::HttpClient;
use crate::models::VacationRequestRecord;

const COLLECTION: &str = "vacation-requests";

#[derive(Clone)]
pub struct HttpVacationRepository {
    client: HttpClient,
}

impl HttpVacationRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    async fn list(&self, query: &[(&str, &str)]) -> RepoResult<Vec<VacationRequest>> {
        let records: Vec<VacationRequestRecord> = self.client.get(&[COLLECTION], query).await?;
        records
            .into_iter()
            .map(|r| VacationRequest::try_from(r).map_err(Into::into))
            .collect()
    }
}

#[async_trait]
impl VacationRepository for HttpVacationRepository {
    #[instrument(
        skip(self, request),
        fields(request_id = %request.id(), status = %request.status())
    )]
    async fn save(&self, request: &VacationRequest) -> RepoResult<()> {
        let record = VacationRequestRecord::from(request);
        self.client
            .put(&[COLLECTION, request.id().as_str()], &record)
            .await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &VacationRequestId) -> RepoResult<Option<VacationRequest>> {
        let record: Option<VacationRequestRecord> = self
            .client
            .get_optional(&[COLLECTION, id.as_str()])
            .await?;
        Ok(record.map(VacationRequest::try_from).transpose()?)
    }

    #[instrument(skip(self))]
    async fn find_by_requester_id(
        &self,
        requester_id: &UserId,
    ) -> RepoResult<Vec<VacationRequest>> {
        self.list(&[("requesterId", requester_id.as_str())]).await
    }

    #[instrument(skip(self))]
    async fn find_pending_by_manager_id(
        &self,
        manager_id: &UserId,
    ) -> RepoResult<Vec<VacationRequest>> {
        self.list(&[
            ("managerId", manager_id.as_str()),
            ("status", VacationStatus::PendingApproval.as_str()),
        ])
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_requester_id_and_status(
        &self,
        requester_id: &UserId,
        status: VacationStatus,
    ) -> RepoResult<Vec<VacationRequest>> {
        self.list(&[
            ("requesterId", requester_id.as_str()),
            ("status", status.as_str()),
        ])
        .await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<VacationRequest>> {
        self.list(&[]).await
    }
}
