//! Wire records - the JSON shapes exchanged with the REST backend
//!
//! Field names are camelCase and dates are ISO-8601 strings. Vacation dates
//! stay strings so that both `YYYY-MM-DD` and full timestamps are accepted.

mod department;
mod session;
mod user;
mod vacation_request;

pub use department::DepartmentRecord;
pub use session::{LoginRequest, LoginResponse};
pub use user::UserRecord;
pub use vacation_request::VacationRequestRecord;
