//! Department handlers

use axum::{
    extract::{Path, State},
    Json,
};
use vacation_common::AppError;
use vacation_core::{Department, DepartmentId};
use vacation_db::models::DepartmentRecord;

use super::ensure_same_id;
use crate::extractors::JsonBody;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// GET /departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentRecord>>> {
    let departments = state.service_context().department_repo().list_all().await?;
    Ok(Json(departments.iter().map(DepartmentRecord::from).collect()))
}

/// GET /departments/:department_id
pub async fn get_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> ApiResult<Json<DepartmentRecord>> {
    let department = state
        .service_context()
        .department_repo()
        .find_by_id(&DepartmentId::new(department_id.as_str()))
        .await?
        .ok_or_else(|| AppError::not_found(format!("department {department_id}")))?;

    Ok(Json(DepartmentRecord::from(&department)))
}

/// PUT /departments/:department_id
pub async fn put_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
    JsonBody(record): JsonBody<DepartmentRecord>,
) -> ApiResult<NoContent> {
    ensure_same_id(&department_id, &record.id)?;
    let department =
        Department::try_from(record).map_err(|e| ApiError::invalid_body(e.to_string()))?;

    state
        .service_context()
        .department_repo()
        .save(&department)
        .await?;
    Ok(NoContent)
}
