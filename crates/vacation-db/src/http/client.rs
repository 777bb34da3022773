//! Thin JSON client over `reqwest`

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use vacation_core::{get_json, set_json, DomainError, DomainResult, StorageAdapter};

use super::error::{decode_error, status_error, transport_error};

/// Storage key of the bearer token obtained at login
pub const SESSION_TOKEN_KEY: &str = "auth.token";

/// JSON client bound to one backend base URL
///
/// Paths are given as segments; each segment is percent-encoded on its own so
/// caller-supplied ids can never leave their path position.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Url,
    storage: Arc<dyn StorageAdapter>,
}

impl HttpClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(
        base_url: &str,
        timeout: Duration,
        storage: Arc<dyn StorageAdapter>,
    ) -> DomainResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DomainError::infrastructure("Invalid backend base URL", e))?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::infrastructure(
                "Invalid backend base URL",
                format!("{base_url} cannot carry a path"),
            )
            .into());
        }

        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::infrastructure("Cannot build HTTP client", e))?;

        Ok(Self {
            inner,
            base_url,
            storage,
        })
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub async fn session_token(&self) -> DomainResult<Option<String>> {
        get_json(self.storage.as_ref(), SESSION_TOKEN_KEY).await
    }

    pub async fn store_session_token(&self, token: &str) -> DomainResult<()> {
        set_json(self.storage.as_ref(), SESSION_TOKEN_KEY, token).await
    }

    pub async fn clear_session(&self) -> DomainResult<()> {
        self.storage.remove(SESSION_TOKEN_KEY).await
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    /// `GET` a JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> DomainResult<T> {
        let url = self.url(segments)?;
        let builder = self.request(Method::GET, &url).await?.query(query);
        let response = self.send(builder, url.path()).await?;
        decode(response, url.path()).await
    }

    /// `GET` a single resource, mapping 404 to `None`
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> DomainResult<Option<T>> {
        let url = self.url(segments)?;
        let builder = self.request(Method::GET, &url).await?;
        let response = self.execute(builder, url.path()).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check(response, url.path()).await?;
        decode(response, url.path()).await.map(Some)
    }

    /// `POST` a JSON body and decode the JSON reply
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let builder = self.request(Method::POST, &url).await?.json(body);
        let response = self.send(builder, url.path()).await?;
        decode(response, url.path()).await
    }

    /// `POST` without a body, ignoring the reply
    pub async fn post_empty(&self, segments: &[&str]) -> DomainResult<()> {
        let url = self.url(segments)?;
        let builder = self.request(Method::POST, &url).await?;
        self.send(builder, url.path()).await.map(drop)
    }

    /// `PUT` a JSON body, ignoring the reply
    pub async fn put<B>(&self, segments: &[&str], body: &B) -> DomainResult<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let builder = self.request(Method::PUT, &url).await?.json(body);
        self.send(builder, url.path()).await.map(drop)
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Append encoded segments to the base URL
    pub fn url(&self, segments: &[&str]) -> DomainResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                DomainError::infrastructure("Invalid backend base URL", "cannot carry a path")
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request(&self, method: Method, url: &Url) -> DomainResult<RequestBuilder> {
        let builder = self.inner.request(method, url.clone());

        Ok(match self.session_token().await? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn execute(&self, builder: RequestBuilder, path: &str) -> DomainResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(path, &e))?;
        debug!(path, status = response.status().as_u16(), "HTTP response");
        Ok(response)
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> DomainResult<Response> {
        let response = self.execute(builder, path).await?;
        check(response, path).await
    }
}

async fn check(response: Response, path: &str) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, path, &body).into())
}

async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> DomainResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| decode_error(path, &e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorageAdapter;

    fn client(base_url: &str) -> HttpClient {
        HttpClient::new(
            base_url,
            Duration::from_secs(1),
            Arc::new(MemoryStorageAdapter::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let client = client("http://127.0.0.1:8080");

        let url = client.url(&["vacation-requests", "vr-1#x"]).unwrap();
        assert_eq!(url.path(), "/vacation-requests/vr-1%23x");
        assert_eq!(url.fragment(), None);

        let url = client.url(&["users", "a/b?c"]).unwrap();
        assert_eq!(url.path(), "/users/a%2Fb%3Fc");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_base_path_is_kept() {
        let client = client("http://backend.local/api/");
        let url = client.url(&["departments"]).unwrap();
        assert_eq!(url.as_str(), "http://backend.local/api/departments");
    }

    #[test]
    fn test_invalid_base_url_is_infrastructure() {
        let err = HttpClient::new(
            "not a url",
            Duration::from_secs(1),
            Arc::new(MemoryStorageAdapter::new()),
        )
        .err()
        .unwrap();
        assert!(matches!(*err, DomainError::InfrastructureFailure { .. }));
    }
}
