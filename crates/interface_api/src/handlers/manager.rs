//! Academic manager handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use core_kernel::ClaimId;

use crate::dto::claims::{DecisionReasonRequest, ManagerClaimResponse};
use crate::dto::tracking::ManagerReportResponse;
use crate::{error::ApiError, AppState};

/// Lists the manager queue
pub async fn list_queue(State(state): State<AppState>) -> Json<Vec<ManagerClaimResponse>> {
    let workflow = state.workflow.lock().await;
    Json(
        workflow
            .store()
            .manager_queue()
            .iter()
            .map(ManagerClaimResponse::from)
            .collect(),
    )
}

/// Final approval
pub async fn final_approve(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ManagerClaimResponse>, ApiError> {
    let claim = state
        .workflow
        .lock()
        .await
        .manager_final_approve(id)?
        .ok_or_else(|| not_queued(id))?;

    Ok(Json(ManagerClaimResponse::from(&claim)))
}

/// Returns a claim for clarification; needs a non-blank reason
pub async fn return_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    body: Option<Json<DecisionReasonRequest>>,
) -> Result<Json<ManagerClaimResponse>, ApiError> {
    let reason = body.and_then(|Json(request)| request.reason);
    let claim = state
        .workflow
        .lock()
        .await
        .manager_return(id, reason.as_deref())?
        .ok_or_else(|| not_queued(id))?;

    Ok(Json(ManagerClaimResponse::from(&claim)))
}

/// Manager report as of now
pub async fn report(State(state): State<AppState>) -> Result<Json<ManagerReportResponse>, ApiError> {
    let report = state
        .workflow
        .lock()
        .await
        .statistics()
        .manager_report(Utc::now())?;

    Ok(Json(ManagerReportResponse::from(report)))
}

fn not_queued(id: ClaimId) -> ApiError {
    ApiError::NotFound(format!("Claim {id} is not awaiting final approval"))
}
