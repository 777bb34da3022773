//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, auth, departments, health, users, vacation_requests};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(vacation_request_routes())
        .merge(department_routes())
        .fallback(handlers::not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user).put(users::put_user))
}

fn vacation_request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vacation-requests",
            get(vacation_requests::list_vacation_requests),
        )
        .route(
            "/vacation-requests/:request_id",
            get(vacation_requests::get_vacation_request)
                .put(vacation_requests::put_vacation_request),
        )
}

fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(departments::list_departments))
        .route(
            "/departments/:department_id",
            get(departments::get_department).put(departments::put_department),
        )
}
