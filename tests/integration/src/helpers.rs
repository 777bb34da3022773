//! Test helpers for integration tests
//!
//! Provides a [`TestServer`] running the real application over a freshly
//! seeded store, raw HTTP helpers, and a service context whose repositories
//! talk to that server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use vacation_api::{create_app, create_app_state};
use vacation_common::{AppConfig, Environment};
use vacation_core::StorageAdapter;
use vacation_db::{HttpClient, MemoryStorageAdapter};
use vacation_service::bootstrap::http_context;
use vacation_service::ServiceContext;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config)?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Service context whose repositories call this server
    pub fn context(&self) -> Result<Session> {
        let storage = Arc::new(MemoryStorageAdapter::new());
        let shared: Arc<dyn StorageAdapter> = storage.clone();
        let client = HttpClient::new(&self.base_url(), Duration::from_secs(10), shared)?;

        Ok(Session {
            context: http_context(&client),
            client,
            storage,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    pub async fn post_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).bearer_auth(token).send().await?)
    }

    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.put(&url).json(body).send().await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// HTTP-backed service context plus its session storage
pub struct Session {
    pub context: ServiceContext,
    pub client: HttpClient,
    pub storage: Arc<MemoryStorageAdapter>,
}

impl Session {
    pub async fn token(&self) -> Result<Option<String>> {
        Ok(self.client.session_token().await?)
    }
}

/// Development config without simulated latency
pub fn test_config() -> Result<AppConfig> {
    let mut config = AppConfig::from_lookup(|_| None)?;
    config.app.env = Environment::Development;
    config.latency.read_ms = 0;
    config.latency.write_ms = 0;
    config.latency.auth_ms = 0;
    Ok(config)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
