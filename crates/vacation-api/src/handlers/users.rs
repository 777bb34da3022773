//! User handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use vacation_common::AppError;
use vacation_core::{DepartmentId, Email, User, UserId};
use vacation_db::models::UserRecord;

use super::ensure_same_id;
use crate::extractors::JsonBody;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Exactly one lookup key is honored, in this order
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub email: Option<String>,
    pub department_id: Option<String>,
    pub manager_id: Option<String>,
}

/// Find users by email, department, or manager
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<Vec<UserRecord>>> {
    let repo = state.service_context().user_repo();

    let users: Vec<User> = if let Some(email) = query.email {
        let email = Email::create(&email)?;
        repo.find_by_email(&email).await?.into_iter().collect()
    } else if let Some(department_id) = query.department_id {
        repo.find_by_department_id(&DepartmentId::new(department_id))
            .await?
    } else if let Some(manager_id) = query.manager_id {
        repo.find_by_manager_id(&UserId::new(manager_id)).await?
    } else {
        return Err(ApiError::invalid_query(
            "one of email, departmentId or managerId is required",
        ));
    };

    Ok(Json(users.iter().map(UserRecord::from).collect()))
}

/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserRecord>> {
    let user = state
        .service_context()
        .user_repo()
        .find_by_id(&UserId::new(user_id.as_str()))
        .await?
        .ok_or_else(|| AppError::not_found(format!("user {user_id}")))?;

    Ok(Json(UserRecord::from(&user)))
}

/// Create or replace a user
///
/// PUT /users/:user_id
pub async fn put_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonBody(record): JsonBody<UserRecord>,
) -> ApiResult<NoContent> {
    ensure_same_id(&user_id, &record.id)?;
    let user = User::try_from(record).map_err(|e| ApiError::invalid_body(e.to_string()))?;

    state.service_context().user_repo().save(&user).await?;
    Ok(NoContent)
}
