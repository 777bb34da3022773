//! Create a department

use tracing::{info, instrument, warn};
use vacation_core::{Department, DepartmentId, DomainError, DomainResult, UserId};

use super::{load_user, required};
use crate::context::ServiceContext;
use crate::dto::{CreateDepartmentDto, DepartmentDto};

pub struct CreateDepartmentUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CreateDepartmentUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Administrators only; a given manager must exist
    #[instrument(skip(self, dto), fields(requester_id = %dto.requester_id))]
    pub async fn execute(&self, dto: CreateDepartmentDto) -> DomainResult<DepartmentDto> {
        let requester_id = UserId::new(required("requesterId", &dto.requester_id)?);
        let requester = load_user(self.ctx, &requester_id).await?;

        if !requester.is_admin() {
            warn!(role = %requester.role(), "Department creation denied");
            return Err(
                DomainError::unauthorized("Only administrators can create departments").into(),
            );
        }

        let manager_id = match dto.manager_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                let manager = load_user(self.ctx, &UserId::new(id)).await?;
                Some(manager.id().clone())
            }
            _ => None,
        };

        let department = Department::create(DepartmentId::generate(), &dto.name, manager_id)?;
        self.ctx.department_repo().save(&department).await?;

        info!(department_id = %department.id(), name = department.name(), "Department created");
        Ok(DepartmentDto::from(&department))
    }
}
