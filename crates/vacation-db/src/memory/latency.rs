//! Simulated network latency

use std::time::Duration;

use vacation_common::LatencyConfig;

/// Delays applied by the in-memory repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatencyProfile {
    pub read: Duration,
    pub write: Duration,
    pub auth: Duration,
}

impl LatencyProfile {
    /// No delay at all, for tests
    pub const fn none() -> Self {
        Self {
            read: Duration::ZERO,
            write: Duration::ZERO,
            auth: Duration::ZERO,
        }
    }

    pub const fn from_millis(read: u64, write: u64, auth: u64) -> Self {
        Self {
            read: Duration::from_millis(read),
            write: Duration::from_millis(write),
            auth: Duration::from_millis(auth),
        }
    }

    pub(crate) async fn before_read(&self) {
        pause(self.read).await;
    }

    pub(crate) async fn before_write(&self) {
        pause(self.write).await;
    }

    pub(crate) async fn before_auth(&self) {
        pause(self.auth).await;
    }
}

impl From<&LatencyConfig> for LatencyProfile {
    fn from(config: &LatencyConfig) -> Self {
        Self::from_millis(config.read_ms, config.write_ms, config.auth_ms)
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
