//! Server setup and initialization
//!
//! The server always serves a freshly seeded in-memory store.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use vacation_common::{AppConfig, AppError};
use vacation_db::{LatencyProfile, MemoryDatabase};
use vacation_service::bootstrap::memory_context;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let expose_details = state.config().app.env.is_development();
    apply_middleware(create_router(), expose_details).with_state(state)
}

/// Seed the store and wire the service context
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let db = Arc::new(MemoryDatabase::seeded()?);
    info!(
        users = db.user_count(),
        vacation_requests = db.vacation_request_count(),
        "In-memory store seeded"
    );

    let context = memory_context(db, LatencyProfile::from(&config.latency));
    Ok(AppState::new(context, config))
}

/// Serve `app` on an already bound listener until Ctrl-C
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let state = create_app_state(config)?;
    let app = create_app(state);

    let listener = TcpListener::bind(&address).await?;
    run_server(app, listener).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
