//! In-memory implementation of AuthRepository

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{info, instrument, warn};
use vacation_common::verify_password;
use vacation_core::{AuthRepository, DomainError, Email, Password, RepoResult, User, UserId};

use super::{LatencyProfile, MemoryDatabase};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Checks credentials against the Argon2 hashes held by [`MemoryDatabase`]
pub struct MemoryAuthRepository {
    db: Arc<MemoryDatabase>,
    latency: LatencyProfile,
    current: RwLock<Option<UserId>>,
}

impl MemoryAuthRepository {
    pub fn new(db: Arc<MemoryDatabase>, latency: LatencyProfile) -> Self {
        Self {
            db,
            latency,
            current: RwLock::new(None),
        }
    }

    /// The user signed in through this repository, if any
    pub fn current_user_id(&self) -> Option<UserId> {
        self.current.read().clone()
    }
}

#[async_trait]
impl AuthRepository for MemoryAuthRepository {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &Email, password: &Password) -> RepoResult<User> {
        self.latency.before_auth().await;

        let Some(hash) = self.db.password_hash(email) else {
            warn!("Login attempt for unknown email");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS).into());
        };

        let matches = verify_password(password.expose(), &hash)
            .map_err(|e| DomainError::infrastructure("Credential check failed", e))?;
        if !matches {
            warn!("Login attempt with wrong password");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS).into());
        }

        let user = self
            .db
            .users
            .read()
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or_else(|| DomainError::not_found("User", email))?;

        *self.current.write() = Some(user.id().clone());
        info!(user_id = %user.id(), "User signed in");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> anyhow::Result<()> {
        self.latency.before_auth().await;

        if let Some(user_id) = self.current.write().take() {
            info!(user_id = %user_id, "User signed out");
        }
        Ok(())
    }
}
