//! Application state
//!
//! Holds the shared state for the Axum application: the service context over
//! the store, the configuration, and the open sessions.

mod sessions;

use std::sync::Arc;

use vacation_common::AppConfig;
use vacation_service::ServiceContext;

pub use sessions::SessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            sessions: Arc::new(SessionStore::new()),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("sessions", &self.sessions.len())
            .finish()
    }
}
