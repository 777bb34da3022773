//! Read a single vacation request owned by the caller

use tracing::{instrument, warn};
use vacation_core::{DomainError, DomainResult, UserId, VacationRequestId};

use super::{load_request, required};
use crate::context::ServiceContext;
use crate::dto::VacationRequestDto;

pub struct GetVacationDetailsUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetVacationDetailsUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        request_id: &str,
        requester_id: &str,
    ) -> DomainResult<VacationRequestDto> {
        let request_id = VacationRequestId::new(required("requestId", request_id)?);
        let requester_id = UserId::new(required("requesterId", requester_id)?);

        let request = load_request(self.ctx, &request_id).await?;

        if request.requester_id() != &requester_id {
            warn!(owner = %request.requester_id(), "Details denied");
            return Err(DomainError::unauthorized_access().into());
        }

        Ok(VacationRequestDto::from(&request))
    }
}
