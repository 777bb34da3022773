//! Composition root
//!
//! Turns an [`AppConfig`] into a ready [`ServiceContext`] backed by either the
//! seeded in-memory store or the HTTP backend.

use std::sync::Arc;

use tracing::info;
use vacation_common::{AppConfig, AppResult, ConfigError, DataSourceKind};
use vacation_core::StorageAdapter;
use vacation_db::{
    HttpAuthRepository, HttpClient, HttpDepartmentRepository, HttpUserRepository,
    HttpVacationRepository, LatencyProfile, MemoryAuthRepository, MemoryDatabase,
    MemoryDepartmentRepository, MemoryStorageAdapter, MemoryUserRepository,
    MemoryVacationRepository,
};

use crate::context::ServiceContext;

/// Build the service context selected by `config.data_source`
///
/// # Errors
/// Returns an error if the fixtures cannot be loaded or the HTTP client
/// cannot be created
pub fn bootstrap(config: &AppConfig) -> AppResult<ServiceContext> {
    match config.data_source.kind {
        DataSourceKind::Memory => {
            let db = Arc::new(MemoryDatabase::seeded()?);
            let latency = LatencyProfile::from(&config.latency);
            info!(?latency, "Using in-memory data source");
            Ok(memory_context(db, latency))
        }
        DataSourceKind::Http => {
            let base_url = config
                .data_source
                .api_base_url
                .clone()
                .ok_or(ConfigError::MissingVar("API_BASE_URL"))?;
            info!(%base_url, "Using HTTP data source");
            let storage: Arc<dyn StorageAdapter> = Arc::new(MemoryStorageAdapter::new());
            let client = HttpClient::new(&base_url, config.data_source.http_timeout(), storage)?;
            Ok(http_context(&client))
        }
    }
}

/// Wire the memory repositories around one shared database
pub fn memory_context(db: Arc<MemoryDatabase>, latency: LatencyProfile) -> ServiceContext {
    ServiceContext::new(
        Arc::new(MemoryAuthRepository::new(Arc::clone(&db), latency)),
        Arc::new(MemoryUserRepository::new(Arc::clone(&db), latency)),
        Arc::new(MemoryVacationRepository::new(Arc::clone(&db), latency)),
        Arc::new(MemoryDepartmentRepository::new(db, latency)),
    )
}

/// Wire the HTTP repositories around one client (and thus one session)
pub fn http_context(client: &HttpClient) -> ServiceContext {
    ServiceContext::new(
        Arc::new(HttpAuthRepository::new(client.clone())),
        Arc::new(HttpUserRepository::new(client.clone())),
        Arc::new(HttpVacationRepository::new(client.clone())),
        Arc::new(HttpDepartmentRepository::new(client.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vacation_core::UserId;
    use vacation_db::memory::seed::ADMIN_ID;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        AppConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_memory_bootstrap_serves_fixtures() {
        let ctx = bootstrap(&config(&[
            ("MEMORY_LATENCY_READ_MS", "0"),
            ("MEMORY_LATENCY_WRITE_MS", "0"),
            ("MEMORY_LATENCY_AUTH_MS", "0"),
        ]))
        .unwrap();

        let admin = ctx.user_repo().find_by_id(&UserId::new(ADMIN_ID)).await.unwrap();
        assert!(admin.unwrap().is_admin());
    }

    #[test]
    fn test_http_bootstrap_builds_client() {
        let ctx = bootstrap(&config(&[
            ("DATA_SOURCE", "http"),
            ("API_BASE_URL", "http://127.0.0.1:9"),
        ]));
        assert!(ctx.is_ok());
    }
}
