//! Ports implemented by the infrastructure layer

mod repositories;
mod storage;

pub use repositories::{
    AuthRepository, DepartmentRepository, RepoResult, UserRepository, VacationRepository,
};
pub use storage::{get_json, set_json, StorageAdapter};
