//! Liveness endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Claims waiting on the coordinator and on the manager
    pub pending_claims: usize,
    pub manager_queue: usize,
}

/// Reports liveness along with current queue depths
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let workflow = state.workflow.lock().await;
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        pending_claims: workflow.store().pending_claims().len(),
        manager_queue: workflow.store().manager_queue().len(),
    })
}
