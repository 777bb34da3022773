//! Authentication handlers
//!
//! Login verifies the credentials against the store and opens a bearer
//! session; logout closes it.

use axum::{extract::State, Json};
use tracing::info;
use vacation_core::{Email, Password};
use vacation_db::models::{LoginRequest, LoginResponse, UserRecord};

use crate::extractors::{JsonBody, SessionUser};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = Email::create(&request.email)?;
    let password = Password::credential(&request.password)?;

    let user = state
        .service_context()
        .auth_repo()
        .login(&email, &password)
        .await?;

    let token = state.sessions().open(user.id().clone());
    info!(user_id = %user.id(), "Session opened");

    Ok(Json(LoginResponse {
        token,
        user: UserRecord::from(&user),
    }))
}

/// Close the caller's session
///
/// POST /auth/logout
pub async fn logout(State(state): State<AppState>, session: SessionUser) -> ApiResult<NoContent> {
    state.sessions().close(&session.token);
    info!(user_id = %session.user_id, "Session closed");
    Ok(NoContent)
}
