//! A user's own vacation requests

use tracing::{debug, instrument};
use vacation_core::{DomainResult, UserId};

use super::{newest_first, required, to_dtos};
use crate::context::ServiceContext;
use crate::dto::VacationRequestDto;

pub struct GetVacationHistoryUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetVacationHistoryUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every request made by the user, newest first
    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str) -> DomainResult<Vec<VacationRequestDto>> {
        let user_id = UserId::new(required("userId", user_id)?);

        let mut requests = self.ctx.vacation_repo().find_by_requester_id(&user_id).await?;
        newest_first(&mut requests);

        debug!(count = requests.len(), "Loaded vacation history");
        Ok(to_dtos(&requests))
    }
}
