//! Session extractor
//!
//! Resolves the bearer token in the Authorization header against the
//! [`SessionStore`](crate::state::SessionStore).

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;
use vacation_common::AppError;
use vacation_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// User behind a valid bearer session
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: UserId,
    pub token: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let user_id = app_state.sessions().resolve(token).ok_or_else(|| {
            warn!("Unknown session token");
            AppError::InvalidSession
        })?;

        Ok(SessionUser {
            user_id,
            token: token.to_string(),
        })
    }
}
