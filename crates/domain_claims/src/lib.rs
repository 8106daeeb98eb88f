//! Lecturer Claims Domain
//!
//! This crate implements the monthly-hours claim lifecycle: a lecturer
//! submits a claim, a programme coordinator approves or rejects it, and an
//! academic manager gives final approval or returns it for clarification.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted -> Pending Coordinator Review -> Approved by Coordinator -> Pending Final Approval
//!                         |                                                |            |
//!                         v                                                v            v
//!              Rejected by Coordinator                              Final Approved   Returned for
//!                                                                                    Clarification
//! ```
//!
//! [`ApprovalWorkflow`] is the only component that mutates state. It owns the
//! [`ClaimStore`] (pending and manager queues) and the [`TrackingRegistry`]
//! (per-claim status label and progress) and updates both in one step per
//! transition. [`StatisticsReporter`] reads a snapshot on demand.

pub mod claim;
pub mod submission;
pub mod store;
pub mod tracking;
pub mod workflow;
pub mod statistics;
pub mod documents;
pub mod export;
pub mod prompt;
pub mod seed;
pub mod error;

pub use claim::{Claim, ClaimStatus, ManagerClaim, NextStage};
pub use submission::{ClaimSubmission, ValidatedSubmission};
pub use store::ClaimStore;
pub use tracking::{Progress, TrackedClaim, TrackingRegistry};
pub use workflow::{ApprovalWorkflow, WorkflowConfig};
pub use statistics::{ClaimStatistics, ManagerReport, StatisticsReporter};
pub use documents::{Document, DocumentSet};
pub use prompt::{ReasonPrompt, ReasonRequest};
pub use error::ClaimError;
