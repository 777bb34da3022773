//! HTTP implementation of AuthRepository

use anyhow::Context;
use async_trait::async_trait;
use tracing::{info, instrument};
use vacation_core::{AuthRepository, Email, Password, RepoResult, User};

use super::HttpClient;
use crate::models::{LoginRequest, LoginResponse};

#[derive(Clone)]
pub struct HttpAuthRepository {
    client: HttpClient,
}

impl HttpAuthRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &Email, password: &Password) -> RepoResult<User> {
        let body = LoginRequest {
            email: email.value().to_string(),
            password: password.expose().to_string(),
        };
        let response: LoginResponse = self.client.post(&["auth", "login"], &body).await?;

        let user = User::try_from(response.user)?;
        self.client.store_session_token(&response.token).await?;
        info!(user_id = %user.id(), "Session started");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> anyhow::Result<()> {
        if self.client.session_token().await?.is_none() {
            return Ok(());
        }

        let ended = self.client.post_empty(&["auth", "logout"]).await;
        self.client
            .clear_session()
            .await
            .context("Failed to clear the stored session")?;
        ended.context("Logout request failed")?;

        info!("Session ended");
        Ok(())
    }
}
