//! User entity <-> record mapper

use vacation_core::{DepartmentId, DomainError, Email, NewUser, User, UserId};

use super::malformed;
use crate::models::UserRecord;

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            registration_number: user.registration_number().to_string(),
            name: user.name().to_string(),
            email: user.email().value().to_string(),
            role: user.role(),
            status: user.status(),
            department_id: user.department_id().to_string(),
            manager_id: user.manager_id().map(ToString::to_string),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

impl TryFrom<UserRecord> for User {
    type Error = DomainError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let email = Email::create(&record.email).map_err(|e| malformed("user", &record.id, e))?;

        Ok(User::reconstruct(
            NewUser {
                id: UserId::new(record.id),
                registration_number: record.registration_number,
                name: record.name,
                email,
                role: record.role,
                status: record.status,
                department_id: DepartmentId::new(record.department_id),
                manager_id: record.manager_id.and_then(|id| UserId::parse(&id)),
            },
            record.created_at,
            record.updated_at,
        ))
    }
}
