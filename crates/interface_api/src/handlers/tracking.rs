//! Tracking and statistics handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::ClaimId;
use domain_claims::ClaimError;

use crate::dto::tracking::{StatisticsResponse, TrackedClaimResponse};
use crate::{error::ApiError, AppState};

/// Lists every tracked claim in submission order
pub async fn list_tracked(State(state): State<AppState>) -> Json<Vec<TrackedClaimResponse>> {
    let workflow = state.workflow.lock().await;
    Json(
        workflow
            .tracking()
            .all()
            .iter()
            .map(TrackedClaimResponse::from)
            .collect(),
    )
}

/// Gets one tracked claim with its next stage
pub async fn get_tracked(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<TrackedClaimResponse>, ApiError> {
    let workflow = state.workflow.lock().await;
    let tracked = workflow.tracking().get(id).ok_or(ClaimError::NotFound(id))?;
    Ok(Json(TrackedClaimResponse::from(tracked)))
}

/// Current counts and approved total
pub async fn statistics(State(state): State<AppState>) -> Result<Json<StatisticsResponse>, ApiError> {
    let snapshot = state.workflow.lock().await.statistics().snapshot()?;
    Ok(Json(StatisticsResponse::from(snapshot)))
}
