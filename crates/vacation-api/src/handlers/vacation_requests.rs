//! Vacation request handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use vacation_common::AppError;
use vacation_core::{UserId, VacationRequest, VacationRequestId, VacationStatus};
use vacation_db::models::VacationRequestRecord;

use super::ensure_same_id;
use crate::extractors::JsonBody;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// `managerId` selects the pending requests of the manager's direct reports;
/// `status` narrows any selection
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationQuery {
    pub requester_id: Option<String>,
    pub manager_id: Option<String>,
    pub status: Option<String>,
}

impl VacationQuery {
    fn status(&self) -> Result<Option<VacationStatus>, ApiError> {
        self.status
            .as_deref()
            .map(|raw| {
                raw.parse::<VacationStatus>()
                    .map_err(|e| ApiError::invalid_query(e.to_string()))
            })
            .transpose()
    }
}

/// GET /vacation-requests
pub async fn list_vacation_requests(
    State(state): State<AppState>,
    Query(query): Query<VacationQuery>,
) -> ApiResult<Json<Vec<VacationRequestRecord>>> {
    let repo = state.service_context().vacation_repo();
    let status = query.status()?;

    let mut requests = match (query.requester_id, query.manager_id, status) {
        (Some(requester_id), _, Some(status)) => {
            repo.find_by_requester_id_and_status(&UserId::new(requester_id), status)
                .await?
        }
        (Some(requester_id), _, None) => {
            repo.find_by_requester_id(&UserId::new(requester_id)).await?
        }
        (None, Some(manager_id), _) => {
            repo.find_pending_by_manager_id(&UserId::new(manager_id))
                .await?
        }
        (None, None, _) => repo.find_all().await?,
    };

    if let Some(status) = status {
        requests.retain(|request| request.status() == status);
    }

    Ok(Json(
        requests.iter().map(VacationRequestRecord::from).collect(),
    ))
}

/// GET /vacation-requests/:request_id
pub async fn get_vacation_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> ApiResult<Json<VacationRequestRecord>> {
    let request = state
        .service_context()
        .vacation_repo()
        .find_by_id(&VacationRequestId::new(request_id.as_str()))
        .await?
        .ok_or_else(|| AppError::not_found(format!("vacation request {request_id}")))?;

    Ok(Json(VacationRequestRecord::from(&request)))
}

/// Create or replace a vacation request
///
/// PUT /vacation-requests/:request_id
pub async fn put_vacation_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    JsonBody(record): JsonBody<VacationRequestRecord>,
) -> ApiResult<NoContent> {
    ensure_same_id(&request_id, &record.id)?;
    let request =
        VacationRequest::try_from(record).map_err(|e| ApiError::invalid_body(e.to_string()))?;

    state.service_context().vacation_repo().save(&request).await?;
    Ok(NoContent)
}
