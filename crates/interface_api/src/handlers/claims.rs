//! Lecturer and coordinator handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use core_kernel::{ClaimId, RandFormatter};
use domain_claims::export::{export_file_name, pending_csv};
use domain_claims::{ClaimError, ClaimSubmission, DocumentSet};

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Submits a new claim
///
/// Missing lecturer fields and hourly rate fall back to the configured
/// defaults. Any rejected document fails the whole submission.
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let mut documents = DocumentSet::new(state.config.max_document_bytes);
    let rejected = documents.attach_all(
        request
            .documents
            .iter()
            .map(|d| (d.file_name.as_str(), d.size_bytes)),
    );
    if let Some(err) = rejected.into_iter().next() {
        return Err(err.into());
    }

    let submission = ClaimSubmission {
        lecturer_id: request.lecturer_id.unwrap_or(state.config.lecturer_id),
        lecturer_name: request
            .lecturer_name
            .unwrap_or_else(|| state.config.lecturer_name.clone()),
        month: request.month,
        year: request.year,
        hours: request.hours,
        rate: request
            .hourly_rate
            .unwrap_or_else(|| state.config.default_hourly_rate.to_string()),
        notes: request.notes,
        document_count: documents.len(),
    };

    let claim = state.workflow.lock().await.submit(&submission)?;
    Ok((StatusCode::CREATED, Json(ClaimResponse::from(&claim))))
}

/// Lists claims awaiting coordinator review
pub async fn list_pending(State(state): State<AppState>) -> Json<PendingQueueResponse> {
    let workflow = state.workflow.lock().await;
    Json(PendingQueueResponse {
        summary: workflow.statistics().coordinator_summary(),
        claims: workflow
            .store()
            .pending_claims()
            .iter()
            .map(ClaimResponse::from)
            .collect(),
    })
}

/// Gets a pending claim with its details summary
pub async fn get_pending(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimDetailResponse>, ApiError> {
    let workflow = state.workflow.lock().await;
    let claim = workflow
        .store()
        .pending_claim(id)
        .ok_or(ClaimError::NotFound(id))?;

    Ok(Json(ClaimDetailResponse {
        claim: ClaimResponse::from(claim),
        details: claim.details(&RandFormatter),
    }))
}

/// Exports the pending queue as CSV
pub async fn export_pending(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let csv = {
        let workflow = state.workflow.lock().await;
        pending_csv(workflow.store().pending_claims())?
    };
    let disposition = format!("attachment; filename=\"{}\"", export_file_name(&Utc::now()));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

/// Coordinator approval; moves the claim to the manager queue
pub async fn approve_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ManagerClaimResponse>, ApiError> {
    let projection = state
        .workflow
        .lock()
        .await
        .coordinator_approve(id)?
        .ok_or_else(|| not_pending(id))?;

    Ok(Json(ManagerClaimResponse::from(&projection)))
}

/// Coordinator rejection; needs a non-blank reason
pub async fn reject_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    body: Option<Json<DecisionReasonRequest>>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let reason = body.and_then(|Json(request)| request.reason);
    let claim = state
        .workflow
        .lock()
        .await
        .coordinator_reject(id, reason.as_deref())?
        .ok_or_else(|| not_pending(id))?;

    Ok(Json(ClaimResponse::from(&claim)))
}

fn not_pending(id: ClaimId) -> ApiError {
    ApiError::NotFound(format!("Claim {id} is not awaiting coordinator review"))
}
