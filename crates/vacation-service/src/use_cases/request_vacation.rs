//! Submit a new vacation request

use tracing::{info, instrument, warn};
use vacation_core::{
    parse_calendar_date, DomainError, DomainResult, NewVacationRequest, UserId, ValidationError,
    VacationRequest, VacationRequestId,
};

use super::{load_user, required};
use crate::context::ServiceContext;
use crate::dto::{RequestVacationDto, VacationRequestDto};

pub struct RequestVacationUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RequestVacationUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a pending request for an active user
    #[instrument(skip(self, dto), fields(requester_id = %dto.requester_id))]
    pub async fn execute(&self, dto: RequestVacationDto) -> DomainResult<VacationRequestDto> {
        let requester_id = UserId::new(required("requesterId", &dto.requester_id)?);
        let requester = load_user(self.ctx, &requester_id).await?;

        if !requester.is_active() {
            warn!(status = %requester.status(), "Inactive user tried to request a vacation");
            return Err(DomainError::from(
                ValidationError::InactiveUserCannotRequestVacation(requester_id),
            )
            .into());
        }

        let start_date = parse_date("startDate", &dto.start_date)?;
        let end_date = parse_date("endDate", &dto.end_date)?;

        let request = VacationRequest::create(NewVacationRequest {
            id: VacationRequestId::generate(),
            requester_id,
            start_date,
            end_date,
            observation: dto.observation,
        })?;

        self.ctx.vacation_repo().save(&request).await?;

        info!(request_id = %request.id(), days = request.days(), "Vacation requested");
        Ok(VacationRequestDto::from(&request))
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<chrono::NaiveDate, DomainError> {
    parse_calendar_date(raw).ok_or_else(|| {
        ValidationError::InvalidVacationDate {
            field,
            value: raw.to_string(),
        }
        .into()
    })
}
