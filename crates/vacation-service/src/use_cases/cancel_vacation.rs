//! Withdraw a pending vacation request

use tracing::{info, instrument, warn};
use vacation_core::{DomainError, DomainResult, UserId, VacationRequestId};

use super::{load_request, required};
use crate::context::ServiceContext;
use crate::dto::{CancelVacationDto, VacationRequestDto};

pub struct CancelVacationUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CancelVacationUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Only the requester may cancel, and only while the request is pending
    #[instrument(
        skip(self, dto),
        fields(request_id = %dto.request_id, requester_id = %dto.requester_id)
    )]
    pub async fn execute(&self, dto: CancelVacationDto) -> DomainResult<VacationRequestDto> {
        let request_id = VacationRequestId::new(required("requestId", &dto.request_id)?);
        let requester_id = UserId::new(required("requesterId", &dto.requester_id)?);

        let mut request = load_request(self.ctx, &request_id).await?;

        if request.requester_id() != &requester_id {
            warn!(owner = %request.requester_id(), "Cancellation denied");
            return Err(
                DomainError::unauthorized("Only the requester can cancel this vacation request")
                    .into(),
            );
        }

        request.cancel()?;
        self.ctx.vacation_repo().save(&request).await?;

        info!("Vacation request cancelled");
        Ok(VacationRequestDto::from(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vacation_core::VacationStatus;
    use vacation_db::memory::seed::{
        APPROVED_REQUEST_ID, COLLABORATOR_ID, MANAGER_ID, PENDING_REQUEST_ID,
    };

    use crate::use_cases::test_support::seeded_context;

    fn dto(request_id: &str, requester_id: &str) -> CancelVacationDto {
        CancelVacationDto {
            request_id: request_id.to_string(),
            requester_id: requester_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_requester_cancels_pending_request() {
        let ctx = seeded_context();
        let cancelled = CancelVacationUseCase::new(&ctx)
            .execute(dto(PENDING_REQUEST_ID, COLLABORATOR_ID))
            .await
            .unwrap();
        assert_eq!(cancelled.status, "CANCELLED");
        assert!(cancelled.reviewer_id.is_none());
    }

    #[tokio::test]
    async fn test_someone_else_cannot_cancel() {
        let ctx = seeded_context();
        let err = CancelVacationUseCase::new(&ctx)
            .execute(dto(PENDING_REQUEST_ID, MANAGER_ID))
            .await
            .unwrap_err();
        assert!(err.is_authorization());
        assert_eq!(
            err.to_string(),
            "Only the requester can cancel this vacation request"
        );
    }

    #[tokio::test]
    async fn test_approved_request_cannot_be_cancelled() {
        let ctx = seeded_context();
        let err = CancelVacationUseCase::new(&ctx)
            .execute(dto(APPROVED_REQUEST_ID, COLLABORATOR_ID))
            .await
            .unwrap_err();
        match err.as_ref() {
            DomainError::InvalidStatusTransition { current, target, .. } => {
                assert_eq!(*current, VacationStatus::Approved);
                assert_eq!(*target, VacationStatus::Cancelled);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancelling_twice_fails() {
        let ctx = seeded_context();
        let use_case = CancelVacationUseCase::new(&ctx);
        use_case
            .execute(dto(PENDING_REQUEST_ID, COLLABORATOR_ID))
            .await
            .unwrap();
        let err = use_case
            .execute(dto(PENDING_REQUEST_ID, COLLABORATOR_ID))
            .await
            .unwrap_err();
        assert!(err.is_transition());
    }
}
