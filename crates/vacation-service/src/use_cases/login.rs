//! Sign in with email and password

use tracing::{info, instrument};
use vacation_core::{DomainResult, Email, Password};

use crate::context::ServiceContext;
use crate::dto::{LoginDto, UserDto};

pub struct LoginUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LoginUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate the credentials' shape, then authenticate
    ///
    /// Login only requires a non-empty password: accounts may predate the
    /// strong password policy.
    #[instrument(skip(self, dto))]
    pub async fn execute(&self, dto: LoginDto) -> DomainResult<UserDto> {
        let email = Email::create(&dto.email)?;
        let password = Password::credential(&dto.password)?;

        let user = self.ctx.auth_repo().login(&email, &password).await?;

        info!(user_id = %user.id(), role = %user.role(), "User logged in");
        Ok(UserDto::from(&user))
    }
}
