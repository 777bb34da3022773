//! Value objects - immutable, self-validating types that represent domain concepts

mod date_range;
mod email;
mod identifiers;
mod password;

pub use date_range::{parse_calendar_date, DateRange};
pub use email::Email;
pub use identifiers::{DepartmentId, UserId, VacationRequestId};
pub use password::{Password, PasswordPolicy, PasswordRule};
