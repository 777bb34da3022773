//! Approve a pending vacation request

use tracing::{info, instrument, warn};
use vacation_core::{DomainError, DomainResult, UserId, VacationRequestId};

use super::{load_request, load_user, required};
use crate::context::ServiceContext;
use crate::dto::{ApproveVacationDto, VacationRequestDto};

pub struct ApproveVacationUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ApproveVacationUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Approve on behalf of a manager or administrator
    #[instrument(
        skip(self, dto),
        fields(request_id = %dto.request_id, reviewer_id = %dto.reviewer_id)
    )]
    pub async fn execute(&self, dto: ApproveVacationDto) -> DomainResult<VacationRequestDto> {
        let request_id = VacationRequestId::new(required("requestId", &dto.request_id)?);
        let reviewer_id = UserId::new(required("reviewerId", &dto.reviewer_id)?);

        let mut request = load_request(self.ctx, &request_id).await?;
        let reviewer = load_user(self.ctx, &reviewer_id).await?;

        if !reviewer.can_review_vacations() {
            warn!(role = %reviewer.role(), "Approval denied");
            return Err(DomainError::unauthorized(
                "Only managers or administrators can approve vacation requests",
            )
            .into());
        }

        request.approve(reviewer_id)?;
        self.ctx.vacation_repo().save(&request).await?;

        info!("Vacation request approved");
        Ok(VacationRequestDto::from(&request))
    }
}
