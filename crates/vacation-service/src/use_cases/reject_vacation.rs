//! Reject a pending vacation request

use tracing::{info, instrument, warn};
use vacation_core::{DomainError, DomainResult, UserId, VacationRequestId};

use super::{load_request, load_user, required};
use crate::context::ServiceContext;
use crate::dto::{RejectVacationDto, VacationRequestDto};

pub struct RejectVacationUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RejectVacationUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reject with a reason; a blank reason leaves the request pending
    #[instrument(
        skip(self, dto),
        fields(request_id = %dto.request_id, reviewer_id = %dto.reviewer_id)
    )]
    pub async fn execute(&self, dto: RejectVacationDto) -> DomainResult<VacationRequestDto> {
        let request_id = VacationRequestId::new(required("requestId", &dto.request_id)?);
        let reviewer_id = UserId::new(required("reviewerId", &dto.reviewer_id)?);

        let mut request = load_request(self.ctx, &request_id).await?;
        let reviewer = load_user(self.ctx, &reviewer_id).await?;

        if !reviewer.can_review_vacations() {
            warn!(role = %reviewer.role(), "Rejection denied");
            return Err(DomainError::unauthorized(
                "Only managers or administrators can reject vacation requests",
            )
            .into());
        }

        request.reject(reviewer_id, &dto.reason)?;
        self.ctx.vacation_repo().save(&request).await?;

        info!("Vacation request rejected");
        Ok(VacationRequestDto::from(&request))
    }
}
