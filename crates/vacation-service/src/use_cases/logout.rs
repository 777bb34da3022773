//! End the current session

use tracing::{info, instrument, warn};
use vacation_core::{DomainError, DomainResult};

use crate::context::ServiceContext;

pub struct LogoutUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LogoutUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign out; failures are reported as [`DomainError::Unexpected`]
    /// carrying the original message chain
    #[instrument(skip(self))]
    pub async fn execute(&self) -> DomainResult<()> {
        match self.ctx.auth_repo().logout().await {
            Ok(()) => {
                info!("User logged out");
                Ok(())
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Logout failed");
                Err(DomainError::unexpected(format!("{e:#}")).into())
            }
        }
    }
}
