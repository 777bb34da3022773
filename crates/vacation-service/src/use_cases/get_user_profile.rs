//! Read a user's profile

use tracing::instrument;
use vacation_core::{DomainResult, UserId};

use super::{load_user, required};
use crate::context::ServiceContext;
use crate::dto::UserDto;

pub struct GetUserProfileUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetUserProfileUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str) -> DomainResult<UserDto> {
        let user_id = UserId::new(required("userId", user_id)?);
        let user = load_user(self.ctx, &user_id).await?;
        Ok(UserDto::from(&user))
    }
}
