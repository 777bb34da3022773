//! Bearer session tokens issued at login
//!
//! Tokens expire [`SESSION_TTL_HOURS`] after login. Expired entries are
//! dropped when looked up and swept whenever a new session opens.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;
use vacation_core::UserId;

/// Lifetime of a session token
pub const SESSION_TTL_HOURS: i64 = 8;

#[derive(Debug, Clone)]
struct Session {
    user_id: UserId,
    issued_at: DateTime<Utc>,
}

/// Opaque token to user mapping
#[derive(Debug)]
pub struct SessionStore {
    tokens: DashMap<String, Session>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::hours(SESSION_TTL_HOURS))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            tokens: DashMap::new(),
            ttl,
        }
    }

    /// Open a session and return its token
    pub fn open(&self, user_id: UserId) -> String {
        let now = Utc::now();
        self.sweep(now);

        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(
            token.clone(),
            Session {
                user_id,
                issued_at: now,
            },
        );
        token
    }

    pub fn resolve(&self, token: &str) -> Option<UserId> {
        let now = Utc::now();
        let session = self.tokens.get(token).map(|entry| entry.value().clone())?;
        if self.is_expired(&session, now) {
            self.tokens.remove(token);
            return None;
        }
        Some(session.user_id)
    }

    /// Close a session, returning its owner if it was open
    pub fn close(&self, token: &str) -> Option<UserId> {
        let now = Utc::now();
        self.tokens
            .remove(token)
            .filter(|(_, session)| !self.is_expired(session, now))
            .map(|(_, session)| session.user_id)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        session.issued_at + self.ttl <= now
    }

    fn sweep(&self, now: DateTime<Utc>) {
        let before = self.tokens.len();
        self.tokens.retain(|_, session| session.issued_at + self.ttl > now);
        let swept = before.saturating_sub(self.tokens.len());
        if swept > 0 {
            debug!(swept, "Expired sessions removed");
        }
    }
}
