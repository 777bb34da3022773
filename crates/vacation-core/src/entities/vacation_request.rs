//! Vacation request entity and its approval state machine
//!
//! ```text
//!                   approve()
//!               +-------------> APPROVED
//!               |   reject()
//! PENDING_APPROVAL ----------> REJECTED
//!               |   cancel()
//!               +-------------> CANCELLED
//! ```
//!
//! Every non-pending state is terminal. A failed transition leaves the
//! request untouched.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::error::{DomainError, ParseEnumError, ValidationError};
use crate::value_objects::{DateRange, UserId, VacationRequestId};

/// Lifecycle status of a vacation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VacationStatus {
    PendingApproval,
    Approved,
    Rejected,
    Cancelled,
}

impl VacationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// No transition leaves a terminal status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::PendingApproval)
    }
}

impl fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VacationStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING_APPROVAL" => Ok(Self::PendingApproval),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(ParseEnumError::new("vacation status", other)),
        }
    }
}

/// Input for submitting a new vacation request
#[derive(Debug, Clone)]
pub struct NewVacationRequest {
    pub id: VacationRequestId,
    pub requester_id: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub observation: Option<String>,
}

/// Full persisted state of a vacation request
#[derive(Debug, Clone)]
pub struct PersistedVacationRequest {
    pub id: VacationRequestId,
    pub requester_id: UserId,
    pub reviewer_id: Option<UserId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub observation: Option<String>,
    pub status: VacationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
}

/// Vacation request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationRequest {
    id: VacationRequestId,
    requester_id: UserId,
    reviewer_id: Option<UserId>,
    period: DateRange,
    observation: Option<String>,
    status: VacationStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    reviewed_at: Option<DateTime<Utc>>,
    rejection_reason: Option<String>,
}

impl VacationRequest {
    /// Submit a new request; it always starts pending approval
    pub fn create(input: NewVacationRequest) -> Result<Self, DomainError> {
        let period = DateRange::new(input.start_date, input.end_date)?;
        let now = Utc::now();

        Ok(Self {
            id: input.id,
            requester_id: input.requester_id,
            reviewer_id: None,
            period,
            observation: normalize_text(input.observation),
            status: VacationStatus::PendingApproval,
            created_at: now,
            updated_at: now,
            reviewed_at: None,
            rejection_reason: None,
        })
    }

    /// Rebuild a request from persisted state, keeping its stored status
    pub fn reconstruct(state: PersistedVacationRequest) -> Result<Self, DomainError> {
        let period = DateRange::new(state.start_date, state.end_date)?;

        Ok(Self {
            id: state.id,
            requester_id: state.requester_id,
            reviewer_id: state.reviewer_id,
            period,
            observation: normalize_text(state.observation),
            status: state.status,
            created_at: state.created_at,
            updated_at: state.updated_at,
            reviewed_at: state.reviewed_at,
            rejection_reason: state.rejection_reason,
        })
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Approve a pending request
    pub fn approve(&mut self, reviewer_id: UserId) -> Result<(), DomainError> {
        self.ensure_pending(VacationStatus::Approved)?;

        let now = Utc::now();
        self.status = VacationStatus::Approved;
        self.reviewer_id = Some(reviewer_id);
        self.reviewed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Reject a pending request with a non-blank reason
    pub fn reject(&mut self, reviewer_id: UserId, reason: &str) -> Result<(), DomainError> {
        self.ensure_pending(VacationStatus::Rejected)?;

        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ValidationError::RejectionReasonRequired.into());
        }

        let now = Utc::now();
        self.status = VacationStatus::Rejected;
        self.reviewer_id = Some(reviewer_id);
        self.rejection_reason = Some(reason.to_string());
        self.reviewed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Withdraw a pending request
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.ensure_pending(VacationStatus::Cancelled)?;

        self.status = VacationStatus::Cancelled;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn ensure_pending(&self, target: VacationStatus) -> Result<(), DomainError> {
        if self.status == VacationStatus::PendingApproval {
            return Ok(());
        }
        Err(DomainError::invalid_transition(
            self.status,
            target,
            Some(transition_reason(self.status, target)),
        ))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// True once the first vacation day has passed
    ///
    /// Purely date-based and informational: no transition consults it.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }

    /// Same as [`Self::is_expired`] for an explicit "today"
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        today > self.period.start()
    }

    pub fn can_be_edited(&self) -> bool {
        self.is_pending()
    }

    pub fn can_be_cancelled(&self) -> bool {
        self.is_pending()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == VacationStatus::PendingApproval
    }

    /// Inclusive number of calendar days requested
    pub fn days(&self) -> i64 {
        self.period.days()
    }

    pub fn id(&self) -> &VacationRequestId {
        &self.id
    }

    pub fn requester_id(&self) -> &UserId {
        &self.requester_id
    }

    pub fn reviewer_id(&self) -> Option<&UserId> {
        self.reviewer_id.as_ref()
    }

    pub fn period(&self) -> DateRange {
        self.period
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end()
    }

    pub fn observation(&self) -> Option<&str> {
        self.observation.as_deref()
    }

    pub fn status(&self) -> VacationStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.reviewed_at
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }
}

impl Entity for VacationRequest {
    type Id = VacationRequestId;

    fn id(&self) -> &VacationRequestId {
        &self.id
    }
}

fn normalize_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

fn transition_reason(current: VacationStatus, target: VacationStatus) -> &'static str {
    use VacationStatus::{Approved, Cancelled, Rejected};

    match (current, target) {
        (Approved, Approved) => "Request is already approved",
        (Rejected, Approved) => "Cannot approve a rejected request",
        (Cancelled, Approved) => "Cannot approve a cancelled request",
        (Approved, Rejected) => "Cannot reject an approved request",
        (Rejected, Rejected) => "Request is already rejected",
        (Cancelled, Rejected) => "Cannot reject a cancelled request",
        (_, Cancelled) => "Only pending requests can be cancelled",
        _ => "Transition is not allowed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pending() -> VacationRequest {
        VacationRequest::create(NewVacationRequest {
            id: VacationRequestId::new("vr-1"),
            requester_id: UserId::new("user-1"),
            start_date: date(2024, 7, 1),
            end_date: date(2024, 7, 5),
            observation: Some("  Summer trip  ".to_string()),
        })
        .unwrap()
    }

    fn in_status(status: VacationStatus) -> VacationRequest {
        let mut request = pending();
        match status {
            VacationStatus::PendingApproval => {}
            VacationStatus::Approved => request.approve(UserId::new("mgr-1")).unwrap(),
            VacationStatus::Rejected => request.reject(UserId::new("mgr-1"), "Busy").unwrap(),
            VacationStatus::Cancelled => request.cancel().unwrap(),
        }
        request
    }

    fn assert_transition_error(err: &DomainError, current: VacationStatus, target: VacationStatus) {
        match err {
            DomainError::InvalidStatusTransition {
                current: c,
                target: t,
                ..
            } => {
                assert_eq!(*c, current);
                assert_eq!(*t, target);
            }
            other => panic!("expected InvalidStatusTransition, got {other:?}"),
        }
    }

    #[test]
    fn test_create_starts_pending() {
        let request = pending();
        assert_eq!(request.status(), VacationStatus::PendingApproval);
        assert_eq!(request.observation(), Some("Summer trip"));
        assert_eq!(request.days(), 5);
        assert!(request.reviewer_id().is_none());
        assert!(request.reviewed_at().is_none());
        assert!(request.can_be_edited());
        assert!(request.can_be_cancelled());
    }

    #[test]
    fn test_create_with_equal_dates_fails() {
        let err = VacationRequest::create(NewVacationRequest {
            id: VacationRequestId::new("vr-1"),
            requester_id: UserId::new("user-1"),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 1),
            observation: None,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_blank_observation_is_dropped() {
        let request = VacationRequest::create(NewVacationRequest {
            id: VacationRequestId::new("vr-1"),
            requester_id: UserId::new("user-1"),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 2),
            observation: Some("   ".to_string()),
        })
        .unwrap();
        assert!(request.observation().is_none());
    }

    #[test]
    fn test_approve_records_review() {
        let mut request = pending();
        request.approve(UserId::new("mgr-1")).unwrap();

        assert_eq!(request.status(), VacationStatus::Approved);
        assert_eq!(request.reviewer_id(), Some(&UserId::new("mgr-1")));
        assert!(request.reviewed_at().is_some());
        assert_eq!(request.updated_at(), request.reviewed_at().unwrap());
        assert!(!request.can_be_cancelled());
    }

    #[test]
    fn test_reject_trims_reason() {
        let mut request = pending();
        request
            .reject(UserId::new("mgr-1"), "  Team is short-staffed ")
            .unwrap();

        assert_eq!(request.status(), VacationStatus::Rejected);
        assert_eq!(request.rejection_reason(), Some("Team is short-staffed"));
        assert!(request.reviewed_at().is_some());
    }

    #[test]
    fn test_reject_with_blank_reason_keeps_pending() {
        let mut request = pending();
        let before = request.clone();

        let err = request.reject(UserId::new("mgr-1"), "   ").unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::RejectionReasonRequired)
        ));
        assert_eq!(request, before);
        assert_eq!(request.status(), VacationStatus::PendingApproval);
    }

    #[test]
    fn test_reject_checks_state_before_reason() {
        let mut request = in_status(VacationStatus::Cancelled);
        let err = request.reject(UserId::new("mgr-1"), "").unwrap_err();
        assert_transition_error(&err, VacationStatus::Cancelled, VacationStatus::Rejected);
    }

    #[test]
    fn test_cancel_pending() {
        let mut request = pending();
        request.cancel().unwrap();
        assert_eq!(request.status(), VacationStatus::Cancelled);
        assert!(request.reviewer_id().is_none());
    }

    #[test]
    fn test_terminal_states_reject_every_transition() {
        let terminal = [
            VacationStatus::Approved,
            VacationStatus::Rejected,
            VacationStatus::Cancelled,
        ];

        for status in terminal {
            let original = in_status(status);

            let mut request = original.clone();
            let err = request.approve(UserId::new("mgr-2")).unwrap_err();
            assert_transition_error(&err, status, VacationStatus::Approved);
            assert_eq!(request, original);

            let mut request = original.clone();
            let err = request.reject(UserId::new("mgr-2"), "Nope").unwrap_err();
            assert_transition_error(&err, status, VacationStatus::Rejected);
            assert_eq!(request, original);

            let mut request = original.clone();
            let err = request.cancel().unwrap_err();
            assert_transition_error(&err, status, VacationStatus::Cancelled);
            assert_eq!(request, original);
        }
    }

    #[test]
    fn test_transition_messages() {
        let mut request = in_status(VacationStatus::Cancelled);
        let err = request.approve(UserId::new("mgr-1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status transition from CANCELLED to APPROVED: Cannot approve a cancelled request"
        );

        let mut request = in_status(VacationStatus::Approved);
        let err = request.cancel().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status transition from APPROVED to CANCELLED: Only pending requests can be cancelled"
        );
    }

    #[test]
    fn test_is_expired_is_date_based() {
        let request = pending();
        assert!(!request.is_expired_on(date(2024, 6, 30)));
        assert!(!request.is_expired_on(date(2024, 7, 1)));
        assert!(request.is_expired_on(date(2024, 7, 2)));

        // Status does not matter
        let approved = in_status(VacationStatus::Approved);
        assert!(approved.is_expired_on(date(2024, 7, 2)));
    }

    #[test]
    fn test_reconstruct_keeps_persisted_status() {
        let now = Utc::now();
        let request = VacationRequest::reconstruct(PersistedVacationRequest {
            id: VacationRequestId::new("vr-9"),
            requester_id: UserId::new("user-1"),
            reviewer_id: Some(UserId::new("mgr-1")),
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 12),
            observation: None,
            status: VacationStatus::Rejected,
            created_at: now,
            updated_at: now,
            reviewed_at: Some(now),
            rejection_reason: Some("Overlaps release".to_string()),
        })
        .unwrap();

        assert_eq!(request.status(), VacationStatus::Rejected);
        assert_eq!(request.rejection_reason(), Some("Overlaps release"));
        assert!(!request.can_be_edited());
    }

    #[test]
    fn test_status_parsing() {
        for status in [
            VacationStatus::PendingApproval,
            VacationStatus::Approved,
            VacationStatus::Rejected,
            VacationStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<VacationStatus>().unwrap(), status);
        }
        assert!("PENDING".parse::<VacationStatus>().is_err());
        assert!(VacationStatus::Cancelled.is_terminal());
        assert!(!VacationStatus::PendingApproval.is_terminal());
    }
}
