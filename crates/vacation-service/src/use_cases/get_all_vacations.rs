//! Organization-wide listing for administrators

use chrono::NaiveDate;
use tracing::{debug, instrument, warn};
use vacation_core::{parse_calendar_date, DomainError, DomainResult, UserId};

use super::{load_user, newest_first, required, to_dtos};
use crate::context::ServiceContext;
use crate::dto::{VacationFilters, VacationRequestDto};

pub struct GetAllVacationsUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetAllVacationsUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every request matching the filters, newest first
    #[instrument(skip(self, filters))]
    pub async fn execute(
        &self,
        caller_id: &str,
        filters: VacationFilters,
    ) -> DomainResult<Vec<VacationRequestDto>> {
        let caller_id = UserId::new(required("callerId", caller_id)?);
        let caller = load_user(self.ctx, &caller_id).await?;

        if !caller.is_admin() {
            warn!(role = %caller.role(), "Organization-wide listing denied");
            return Err(DomainError::unauthorized(
                "Only administrators can view all vacation requests",
            )
            .into());
        }

        let from = filter_date("startDate", filters.start_date.as_deref())?;
        let until = filter_date("endDate", filters.end_date.as_deref())?;

        let mut requests = self.ctx.vacation_repo().find_all().await?;
        requests.retain(|request| {
            filters.status.is_none_or(|status| request.status() == status)
                && from.is_none_or(|from| request.start_date() >= from)
                && until.is_none_or(|until| request.end_date() <= until)
        });
        newest_first(&mut requests);

        debug!(count = requests.len(), "Loaded all vacation requests");
        Ok(to_dtos(&requests))
    }
}

fn filter_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_calendar_date(raw)
            .map(Some)
            .ok_or_else(|| DomainError::invalid_input(field, Some("not a valid date"))),
    }
}
