//! Demo fixtures loaded by [`MemoryDatabase::seeded`]
//!
//! Three departments, users of every role and status, and vacation requests
//! in every status. All seeded accounts share [`DEMO_PASSWORD`].
//!
//! [`MemoryDatabase::seeded`]: super::MemoryDatabase::seeded

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use vacation_common::{hash_password, AppError, AppResult};
use vacation_core::{Department, User, VacationRequest};

use super::MemoryDatabase;
use crate::models::{DepartmentRecord, UserRecord, VacationRequestRecord};

/// Password of every seeded account
pub const DEMO_PASSWORD: &str = "Vacation#2024";

pub const ENGINEERING_DEPARTMENT_ID: &str = "dept-engineering";
pub const SALES_DEPARTMENT_ID: &str = "dept-sales";
pub const HR_DEPARTMENT_ID: &str = "dept-hr";

pub const ADMIN_ID: &str = "admin-1";
pub const ADMIN_EMAIL: &str = "admin@company.com";
pub const MANAGER_ID: &str = "manager-1";
pub const MANAGER_EMAIL: &str = "manager@company.com";
pub const SALES_MANAGER_ID: &str = "manager-2";
pub const COLLABORATOR_ID: &str = "user-1";
pub const COLLABORATOR_EMAIL: &str = "collaborator@company.com";
pub const SECOND_COLLABORATOR_ID: &str = "user-2";
pub const SALES_COLLABORATOR_ID: &str = "user-3";
pub const INACTIVE_USER_ID: &str = "user-4";
pub const PENDING_USER_ID: &str = "user-5";

/// Pending request by [`COLLABORATOR_ID`]
pub const PENDING_REQUEST_ID: &str = "vr-1";
/// Pending request by [`SECOND_COLLABORATOR_ID`]
pub const SECOND_PENDING_REQUEST_ID: &str = "vr-2";
pub const APPROVED_REQUEST_ID: &str = "vr-3";
pub const REJECTED_REQUEST_ID: &str = "vr-4";
/// Pending request in the sales department
pub const SALES_PENDING_REQUEST_ID: &str = "vr-5";
pub const CANCELLED_REQUEST_ID: &str = "vr-6";

fn departments() -> Value {
    json!([
        {
            "id": ENGINEERING_DEPARTMENT_ID,
            "name": "Engineering",
            "managerId": MANAGER_ID,
            "createdAt": "2026-01-05T09:00:00Z",
            "updatedAt": "2026-01-05T09:00:00Z"
        },
        {
            "id": SALES_DEPARTMENT_ID,
            "name": "Sales",
            "managerId": SALES_MANAGER_ID,
            "createdAt": "2026-01-05T09:00:00Z",
            "updatedAt": "2026-01-05T09:00:00Z"
        },
        {
            "id": HR_DEPARTMENT_ID,
            "name": "Human Resources",
            "managerId": ADMIN_ID,
            "createdAt": "2026-01-05T09:00:00Z",
            "updatedAt": "2026-01-05T09:00:00Z"
        }
    ])
}

/// One seeded account: `[id, registration number, name, email]`,
/// `(role, status)` and `(department, manager)`
fn user(identity: [&str; 4], access: (&str, &str), placement: (&str, Option<&str>)) -> Value {
    let [id, number, name, email] = identity;
    let (role, status) = access;
    let (department_id, manager_id) = placement;

    json!({
        "id": id,
        "registrationNumber": number,
        "name": name,
        "email": email,
        "role": role,
        "status": status,
        "departmentId": department_id,
        "managerId": manager_id,
        "createdAt": "2026-01-10T09:00:00Z",
        "updatedAt": "2026-01-10T09:00:00Z"
    })
}

fn users() -> Value {
    json!([
        user(
            [ADMIN_ID, "EMP-0001", "Ana Admin", ADMIN_EMAIL],
            ("ADMIN", "ACTIVE"),
            (HR_DEPARTMENT_ID, None),
        ),
        user(
            [MANAGER_ID, "EMP-0002", "Marcos Manager", MANAGER_EMAIL],
            ("MANAGER", "ACTIVE"),
            (ENGINEERING_DEPARTMENT_ID, Some(ADMIN_ID)),
        ),
        user(
            [SALES_MANAGER_ID, "EMP-0003", "Sofia Sales", "sofia.sales@company.com"],
            ("MANAGER", "ACTIVE"),
            (SALES_DEPARTMENT_ID, Some(ADMIN_ID)),
        ),
        user(
            [COLLABORATOR_ID, "EMP-0004", "Carla Collaborator", COLLABORATOR_EMAIL],
            ("COLLABORATOR", "ACTIVE"),
            (ENGINEERING_DEPARTMENT_ID, Some(MANAGER_ID)),
        ),
        user(
            [SECOND_COLLABORATOR_ID, "EMP-0005", "Diego Developer", "diego@company.com"],
            ("COLLABORATOR", "ACTIVE"),
            (ENGINEERING_DEPARTMENT_ID, Some(MANAGER_ID)),
        ),
        user(
            [SALES_COLLABORATOR_ID, "EMP-0006", "Paula Prospect", "paula@company.com"],
            ("COLLABORATOR", "ACTIVE"),
            (SALES_DEPARTMENT_ID, Some(SALES_MANAGER_ID)),
        ),
        user(
            [INACTIVE_USER_ID, "EMP-0007", "Igor Inactive", "inactive@company.com"],
            ("COLLABORATOR", "INACTIVE"),
            (ENGINEERING_DEPARTMENT_ID, Some(MANAGER_ID)),
        ),
        user(
            [PENDING_USER_ID, "EMP-0008", "Nina Newcomer", "newcomer@company.com"],
            ("COLLABORATOR", "PENDING_APPROVAL"),
            (SALES_DEPARTMENT_ID, Some(SALES_MANAGER_ID)),
        ),
    ])
}

fn vacation_requests() -> Value {
    json!([
        {
            "id": PENDING_REQUEST_ID,
            "requesterId": COLLABORATOR_ID,
            "startDate": "2026-12-21",
            "endDate": "2026-12-31",
            "observation": "Year-end holidays",
            "status": "PENDING_APPROVAL",
            "createdAt": "2026-10-01T10:00:00Z",
            "updatedAt": "2026-10-01T10:00:00Z"
        },
        {
            "id": SECOND_PENDING_REQUEST_ID,
            "requesterId": SECOND_COLLABORATOR_ID,
            "startDate": "2026-11-09",
            "endDate": "2026-11-13",
            "status": "PENDING_APPROVAL",
            "createdAt": "2026-10-05T14:30:00Z",
            "updatedAt": "2026-10-05T14:30:00Z"
        },
        {
            "id": APPROVED_REQUEST_ID,
            "requesterId": COLLABORATOR_ID,
            "reviewerId": MANAGER_ID,
            "startDate": "2026-07-06",
            "endDate": "2026-07-17",
            "observation": "Summer trip",
            "status": "APPROVED",
            "createdAt": "2026-05-02T08:15:00Z",
            "updatedAt": "2026-05-04T11:00:00Z",
            "reviewedAt": "2026-05-04T11:00:00Z"
        },
        {
            "id": REJECTED_REQUEST_ID,
            "requesterId": SECOND_COLLABORATOR_ID,
            "reviewerId": MANAGER_ID,
            "startDate": "2026-08-03",
            "endDate": "2026-08-07",
            "status": "REJECTED",
            "createdAt": "2026-06-10T16:45:00Z",
            "updatedAt": "2026-06-11T09:20:00Z",
            "reviewedAt": "2026-06-11T09:20:00Z",
            "rejectionReason": "Release week, the whole team is needed"
        },
        {
            "id": SALES_PENDING_REQUEST_ID,
            "requesterId": SALES_COLLABORATOR_ID,
            "startDate": "2026-11-23",
            "endDate": "2026-11-27",
            "status": "PENDING_APPROVAL",
            "createdAt": "2026-10-08T12:00:00Z",
            "updatedAt": "2026-10-08T12:00:00Z"
        },
        {
            "id": CANCELLED_REQUEST_ID,
            "requesterId": COLLABORATOR_ID,
            "startDate": "2026-09-14",
            "endDate": "2026-09-18",
            "status": "CANCELLED",
            "createdAt": "2026-08-20T07:30:00Z",
            "updatedAt": "2026-08-25T10:10:00Z"
        }
    ])
}

/// Load every fixture into the database
pub(crate) fn load(db: &MemoryDatabase) -> AppResult<()> {
    for record in parse::<DepartmentRecord>(departments())? {
        db.put_department(Department::try_from(record)?);
    }

    let password_hash = hash_password(DEMO_PASSWORD)?;
    for record in parse::<UserRecord>(users())? {
        let user = User::try_from(record)?;
        db.set_credentials(user.email(), password_hash.clone());
        db.put_user(user);
    }

    for record in parse::<VacationRequestRecord>(vacation_requests())? {
        db.put_vacation_request(VacationRequest::try_from(record)?);
    }

    Ok(())
}

fn parse<T: DeserializeOwned>(fixtures: Value) -> AppResult<Vec<T>> {
    serde_json::from_value(fixtures).map_err(AppError::internal)
}
