//! Use cases driven through the HTTP repositories against a live server
//!
//! Run with: cargo test -p integration-tests --test use_case_tests

use integration_tests::{fixtures::*, TestServer};
use vacation_core::{DomainError, StorageAdapter, ValidationError};
use vacation_db::http::SESSION_TOKEN_KEY;
use vacation_service::dto::VacationFilters;
use vacation_service::{
    ApproveVacationUseCase, CancelVacationUseCase, GetAllVacationsUseCase,
    GetManagerDashboardUseCase, GetUserProfileUseCase, GetVacationDetailsUseCase,
    GetVacationHistoryUseCase, LoginUseCase, LogoutUseCase, RejectVacationUseCase,
    RequestVacationUseCase,
};

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn test_login_stores_session_and_logout_clears_it() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();

    let user = LoginUseCase::new(&session.context)
        .execute(login("  Collaborator@Company.com "))
        .await
        .unwrap();
    assert_eq!(user.id, COLLABORATOR_ID);
    assert_eq!(user.email, COLLABORATOR_EMAIL);
    assert!(session.token().await.unwrap().is_some());

    LogoutUseCase::new(&session.context).execute().await.unwrap();
    assert!(session.token().await.unwrap().is_none());
    assert!(session
        .storage
        .get_raw(SESSION_TOKEN_KEY)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();

    let mut dto = login(ADMIN_EMAIL);
    dto.password = "Nope#1234".to_string();
    let err = LoginUseCase::new(&session.context)
        .execute(dto)
        .await
        .unwrap_err();

    assert!(err.is_authorization());
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(session.token().await.unwrap().is_none());
}

#[tokio::test]
async fn test_logout_after_server_forgot_session_is_unexpected() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();
    session.client.store_session_token("stale-token").await.unwrap();

    let err = LogoutUseCase::new(&session.context)
        .execute()
        .await
        .unwrap_err();

    assert!(err.is_unexpected());
    assert!(err.to_string().contains("Logout request failed"));
    // The local session is cleared regardless
    assert!(session.token().await.unwrap().is_none());
}

// ============================================================================
// Vacation lifecycle
// ============================================================================

#[tokio::test]
async fn test_request_then_approve() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();
    let ctx = &session.context;

    let created = RequestVacationUseCase::new(ctx)
        .execute(vacation(COLLABORATOR_ID, "2027-04-05", "2027-04-09"))
        .await
        .unwrap();
    assert_eq!(created.status, "PENDING_APPROVAL");
    assert_eq!(created.days, 5);

    let dashboard = GetManagerDashboardUseCase::new(ctx)
        .execute(MANAGER_ID, ENGINEERING_DEPARTMENT_ID)
        .await
        .unwrap();
    assert_eq!(dashboard[0].id, created.id);

    let approved = ApproveVacationUseCase::new(ctx)
        .execute(approve(&created.id, MANAGER_ID))
        .await
        .unwrap();
    assert_eq!(approved.status, "APPROVED");

    let details = GetVacationDetailsUseCase::new(ctx)
        .execute(&created.id, COLLABORATOR_ID)
        .await
        .unwrap();
    assert_eq!(details.status, "APPROVED");
    assert_eq!(details.reviewer_id.as_deref(), Some(MANAGER_ID));
    assert_eq!(details.start_date, "2027-04-05");
}

#[tokio::test]
async fn test_reject_requires_reason_over_http() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();
    let ctx = &session.context;

    let err = RejectVacationUseCase::new(ctx)
        .execute(reject(SECOND_PENDING_REQUEST_ID, MANAGER_ID, " "))
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_validation(),
        Some(ValidationError::RejectionReasonRequired)
    ));

    let rejected = RejectVacationUseCase::new(ctx)
        .execute(reject(SECOND_PENDING_REQUEST_ID, MANAGER_ID, "Release week"))
        .await
        .unwrap();
    assert_eq!(rejected.rejection_reason.as_deref(), Some("Release week"));
}

#[tokio::test]
async fn test_terminal_request_cannot_be_cancelled() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();

    let err = CancelVacationUseCase::new(&session.context)
        .execute(cancel(APPROVED_REQUEST_ID, COLLABORATOR_ID))
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        DomainError::InvalidStatusTransition { .. }
    ));
}

#[tokio::test]
async fn test_inactive_user_cannot_request() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();

    let err = RequestVacationUseCase::new(&session.context)
        .execute(vacation(INACTIVE_USER_ID, "2027-01-04", "2027-01-08"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "INACTIVE_USER_CANNOT_REQUEST_VACATION");
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_missing_request_is_not_found_over_http() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();

    let err = GetVacationDetailsUseCase::new(&session.context)
        .execute("vr-404", COLLABORATOR_ID)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "Vacation request with identifier 'vr-404' not found"
    );
}

#[tokio::test]
async fn test_ids_with_reserved_characters_do_not_alias_other_records() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();
    let ctx = &session.context;

    for id in ["vr-1#x", "vr-1?x=1", "vr-1/x", "../vr-1"] {
        let err = GetVacationDetailsUseCase::new(ctx)
            .execute(id, COLLABORATOR_ID)
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{id}: {err}");
    }

    let err = ApproveVacationUseCase::new(ctx)
        .execute(approve(&format!("{PENDING_REQUEST_ID}#x"), MANAGER_ID))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = GetUserProfileUseCase::new(ctx)
        .execute(&format!("{COLLABORATOR_ID}?x"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let untouched = GetVacationDetailsUseCase::new(ctx)
        .execute(PENDING_REQUEST_ID, COLLABORATOR_ID)
        .await
        .unwrap();
    assert_eq!(untouched.status, "PENDING_APPROVAL");
}

#[tokio::test]
async fn test_history_and_admin_listing() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();
    let ctx = &session.context;

    let history = GetVacationHistoryUseCase::new(ctx)
        .execute(SECOND_COLLABORATOR_ID)
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].created_at > history[1].created_at);

    let all = GetAllVacationsUseCase::new(ctx)
        .execute(ADMIN_ID, VacationFilters::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 6);

    let err = GetAllVacationsUseCase::new(ctx)
        .execute(MANAGER_ID, VacationFilters::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Only administrators"));
}

#[tokio::test]
async fn test_transport_failure_is_infrastructure() {
    let server = TestServer::start().await.unwrap();
    let session = server.context().unwrap();
    drop(server);
    // Give the aborted server task a moment to release the port
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let err = GetVacationHistoryUseCase::new(&session.context)
        .execute(COLLABORATOR_ID)
        .await
        .unwrap_err();
    assert!(err.is_infrastructure());
    assert!(err.to_string().starts_with("Request to /vacation-requests failed"));
}
