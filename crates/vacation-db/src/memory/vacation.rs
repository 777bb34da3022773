//! In-memory implementation of VacationRepository

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};
use vacation_core::{
    RepoResult, UserId, VacationRepository, VacationRequest, VacationRequestId, VacationStatus,
};

use super::{LatencyProfile, MemoryDatabase};

#[derive(Clone)]
pub struct MemoryVacationRepository {
    db: Arc<MemoryDatabase>,
    latency: LatencyProfile,
}

impl MemoryVacationRepository {
    pub fn new(db: Arc<MemoryDatabase>, latency: LatencyProfile) -> Self {
        Self { db, latency }
    }

    fn select(&self, predicate: impl Fn(&VacationRequest) -> bool) -> Vec<VacationRequest> {
        self.db
            .vacation_requests
            .read()
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl VacationRepository for MemoryVacationRepository {
    #[instrument(
        skip(self, request),
        fields(request_id = %request.id(), status = %request.status())
    )]
    async fn save(&self, request: &VacationRequest) -> RepoResult<()> {
        self.latency.before_write().await;
        self.db.put_vacation_request(request.clone());
        debug!("Vacation request stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &VacationRequestId) -> RepoResult<Option<VacationRequest>> {
        self.latency.before_read().await;
        Ok(self.db.vacation_requests.read().get(id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_requester_id(
        &self,
        requester_id: &UserId,
    ) -> RepoResult<Vec<VacationRequest>> {
        self.latency.before_read().await;
        Ok(self.select(|r| r.requester_id() == requester_id))
    }

    #[instrument(skip(self))]
    async fn find_pending_by_manager_id(
        &self,
        manager_id: &UserId,
    ) -> RepoResult<Vec<VacationRequest>> {
        self.latency.before_read().await;

        let reports: HashSet<UserId> = self
            .db
            .users
            .read()
            .values()
            .filter(|u| u.manager_id() == Some(manager_id))
            .map(|u| u.id().clone())
            .collect();

        Ok(self.select(|r| r.is_pending() && reports.contains(r.requester_id())))
    }

    #[instrument(skip(self))]
    async fn find_by_requester_id_and_status(
        &self,
        requester_id: &UserId,
        status: VacationStatus,
    ) -> RepoResult<Vec<VacationRequest>> {
        self.latency.before_read().await;
        Ok(self.select(|r| r.requester_id() == requester_id && r.status() == status))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<VacationRequest>> {
        self.latency.before_read().await;
        Ok(self.select(|_| true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::seed::{
        COLLABORATOR_ID, MANAGER_ID, PENDING_REQUEST_ID, SALES_MANAGER_ID,
        SALES_PENDING_REQUEST_ID, SECOND_PENDING_REQUEST_ID,
    };

    fn repo() -> MemoryVacationRepository {
        let db = Arc::new(MemoryDatabase::seeded().unwrap());
        MemoryVacationRepository::new(db, LatencyProfile::none())
    }

    fn ids(requests: &[VacationRequest]) -> Vec<&str> {
        let mut ids: Vec<&str> = requests.iter().map(|r| r.id().as_str()).collect();
        ids.sort_unstable();
        ids
    }

    #[tokio::test]
    async fn test_pending_by_manager_only_covers_reports() {
        let repo = repo();

        let engineering = repo
            .find_pending_by_manager_id(&UserId::new(MANAGER_ID))
            .await
            .unwrap();
        assert_eq!(
            ids(&engineering),
            vec![PENDING_REQUEST_ID, SECOND_PENDING_REQUEST_ID]
        );

        let sales = repo
            .find_pending_by_manager_id(&UserId::new(SALES_MANAGER_ID))
            .await
            .unwrap();
        assert_eq!(ids(&sales), vec![SALES_PENDING_REQUEST_ID]);
    }

    #[tokio::test]
    async fn test_requester_filters() {
        let repo = repo();
        let requester = UserId::new(COLLABORATOR_ID);

        let all = repo.find_by_requester_id(&requester).await.unwrap();
        assert_eq!(all.len(), 3);

        let approved = repo
            .find_by_requester_id_and_status(&requester, VacationStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].status(), VacationStatus::Approved);
    }

    #[tokio::test]
    async fn test_save_is_last_write_wins() {
        let repo = repo();
        let id = VacationRequestId::new(PENDING_REQUEST_ID);
        let mut request = repo.find_by_id(&id).await.unwrap().unwrap();

        request.cancel().unwrap();
        repo.save(&request).await.unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.status(), VacationStatus::Cancelled);
        assert_eq!(repo.find_all().await.unwrap().len(), 6);
    }
}
