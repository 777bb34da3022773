//! Vacation request entity <-> record mapper

use vacation_core::{
    parse_calendar_date, DomainError, PersistedVacationRequest, UserId, VacationRequest,
    VacationRequestId,
};

use super::malformed;
use crate::models::VacationRequestRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl From<&VacationRequest> for VacationRequestRecord {
    fn from(request: &VacationRequest) -> Self {
        Self {
            id: request.id().to_string(),
            requester_id: request.requester_id().to_string(),
            reviewer_id: request.reviewer_id().map(ToString::to_string),
            start_date: request.start_date().format(DATE_FORMAT).to_string(),
            end_date: request.end_date().format(DATE_FORMAT).to_string(),
            observation: request.observation().map(str::to_string),
            status: request.status(),
            created_at: request.created_at(),
            updated_at: request.updated_at(),
            reviewed_at: request.reviewed_at(),
            rejection_reason: request.rejection_reason().map(str::to_string),
        }
    }
}

impl TryFrom<VacationRequestRecord> for VacationRequest {
    type Error = DomainError;

    fn try_from(record: VacationRequestRecord) -> Result<Self, Self::Error> {
        let start_date = parse_calendar_date(&record.start_date).ok_or_else(|| {
            malformed(
                "vacation request",
                &record.id,
                format!("bad startDate '{}'", record.start_date),
            )
        })?;
        let end_date = parse_calendar_date(&record.end_date).ok_or_else(|| {
            malformed(
                "vacation request",
                &record.id,
                format!("bad endDate '{}'", record.end_date),
            )
        })?;

        let id = record.id;
        VacationRequest::reconstruct(PersistedVacationRequest {
            id: VacationRequestId::new(id.as_str()),
            requester_id: UserId::new(record.requester_id),
            reviewer_id: record.reviewer_id.and_then(|id| UserId::parse(&id)),
            start_date,
            end_date,
            observation: record.observation,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
            reviewed_at: record.reviewed_at,
            rejection_reason: record.rejection_reason,
        })
        .map_err(|e| malformed("vacation request", &id, e))
    }
}
