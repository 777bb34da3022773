//! In-memory data source
//!
//! A seeded, process-local store used for offline development, demos and
//! tests. Every repository shares one [`MemoryDatabase`] and sleeps for a
//! configurable [`LatencyProfile`] before touching it, so callers see the
//! same asynchronous behaviour as with the HTTP backend. Locks are only held
//! inside synchronous sections, never across an `.await`.

mod auth;
mod database;
mod department;
mod latency;
pub mod seed;
mod storage;
mod user;
mod vacation;

pub use auth::MemoryAuthRepository;
pub use database::MemoryDatabase;
pub use department::MemoryDepartmentRepository;
pub use latency::LatencyProfile;
pub use storage::MemoryStorageAdapter;
pub use user::MemoryUserRepository;
pub use vacation::MemoryVacationRepository;
