//! Axum extractors for request handling

mod json;
mod session;

pub use json::JsonBody;
pub use session::SessionUser;
