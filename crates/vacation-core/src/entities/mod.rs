//! Domain entities - identity-bearing business objects

mod department;
mod entity;
mod user;
mod vacation_request;

pub use department::Department;
pub use entity::{id_equals, Entity};
pub use user::{NewUser, User, UserRole, UserStatus};
pub use vacation_request::{
    NewVacationRequest, PersistedVacationRequest, VacationRequest, VacationStatus,
};
