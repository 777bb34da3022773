//! Department listing

use tracing::instrument;
use vacation_core::DomainResult;

use crate::context::ServiceContext;
use crate::dto::DepartmentDto;

pub struct ListDepartmentsUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ListDepartmentsUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All departments ordered by name
    #[instrument(skip(self))]
    pub async fn execute(&self) -> DomainResult<Vec<DepartmentDto>> {
        let mut departments = self.ctx.department_repo().list_all().await?;
        departments.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(departments.iter().map(DepartmentDto::from).collect())
    }
}
