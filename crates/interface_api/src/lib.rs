//! HTTP API Layer
//!
//! This crate provides the REST API for lecturer claim submission, the
//! two-stage approval workflow and claim tracking, using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for lecturers, coordinators, managers and tracking
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! The workflow sits behind one async mutex, so every request sees and
//! applies a complete transition.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(ApprovalWorkflow::new(config.workflow_config()), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_claims::ApprovalWorkflow;

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{claims, manager, tracking, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<Mutex<ApprovalWorkflow>>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `workflow` - Workflow the service owns from now on
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(workflow: ApprovalWorkflow, config: ApiConfig) -> Router {
    let state = AppState {
        workflow: Arc::new(Mutex::new(workflow)),
        config,
    };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    // Lecturer and coordinator routes
    let claims_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/pending", get(claims::list_pending))
        .route("/pending/export", get(claims::export_pending))
        .route("/pending/:id", get(claims::get_pending))
        .route("/pending/:id/approve", post(claims::approve_claim))
        .route("/pending/:id/reject", post(claims::reject_claim));

    // Academic manager routes
    let manager_routes = Router::new()
        .route("/claims", get(manager::list_queue))
        .route("/claims/:id/approve", post(manager::final_approve))
        .route("/claims/:id/return", post(manager::return_claim))
        .route("/report", get(manager::report));

    // Tracking routes
    let tracking_routes = Router::new()
        .route("/", get(tracking::list_tracked))
        .route("/:id", get(tracking::get_tracked));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/manager", manager_routes)
        .nest("/tracking", tracking_routes)
        .route("/statistics", get(tracking::statistics))
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
