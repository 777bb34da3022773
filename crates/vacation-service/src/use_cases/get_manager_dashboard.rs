//! Pending requests awaiting a manager's review

use std::collections::HashSet;

use tracing::{debug, instrument};
use vacation_core::{DepartmentId, DomainResult, UserId, VacationRequest};

use super::{required, to_dtos};
use crate::context::ServiceContext;
use crate::dto::VacationRequestDto;

pub struct GetManagerDashboardUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetManagerDashboardUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Requests pending for the manager, restricted to members of the
    /// department other than the manager
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        manager_id: &str,
        department_id: &str,
    ) -> DomainResult<Vec<VacationRequestDto>> {
        let manager_id = UserId::new(required("managerId", manager_id)?);
        let department_id = DepartmentId::new(required("departmentId", department_id)?);

        let pending = self
            .ctx
            .vacation_repo()
            .find_pending_by_manager_id(&manager_id)
            .await?;
        let members = self
            .ctx
            .user_repo()
            .find_by_department_id(&department_id)
            .await?;

        let member_ids: HashSet<&UserId> = members
            .iter()
            .map(|member| member.id())
            .filter(|id| **id != manager_id)
            .collect();

        let mut requests: Vec<VacationRequest> = pending
            .into_iter()
            .filter(|request| member_ids.contains(request.requester_id()))
            .collect();
        requests.sort_by(|a, b| {
            b.is_pending()
                .cmp(&a.is_pending())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });

        debug!(count = requests.len(), "Loaded manager dashboard");
        Ok(to_dtos(&requests))
    }
}
