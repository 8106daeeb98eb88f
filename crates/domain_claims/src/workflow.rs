//! Approval workflow state machine
//!
//! Every event is applied completely or not at all. Preconditions are
//! checked against shared borrows first; only then is the store mutated in
//! place, followed by the tracking registry.
//!
//! | Event | From queue | Tracking label | Progress |
//! |---|---|---|---|
//! | submit | - | Pending Coordinator Review | 25 |
//! | coordinator approve | pending | Approved by Coordinator | 66 |
//! | coordinator reject | pending | Rejected by Coordinator | 100 |
//! | manager final approve | manager | Final Approved - Payment Processing | 100 |
//! | manager return | manager | Returned for Clarification | 50 |
//!
//! A claim id missing from the expected queue is a silent no-op: the
//! method returns `Ok(None)` and logs a warning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::{ClaimId, Currency};

use crate::claim::{Claim, ClaimStatus, ManagerClaim};
use crate::error::ClaimError;
use crate::prompt::{ReasonPrompt, ReasonRequest};
use crate::statistics::StatisticsReporter;
use crate::store::ClaimStore;
use crate::submission::ClaimSubmission;
use crate::tracking::{Progress, TrackedClaim, TrackingRegistry};

/// Workflow settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Recorded on manager claims when no coordinator is named
    pub coordinator_name: String,
    /// Currency for rates and amounts
    pub currency: Currency,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            coordinator_name: "Coordinator User".to_string(),
            currency: Currency::ZAR,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApprovalWorkflow {
    config: WorkflowConfig,
    store: ClaimStore,
    tracking: TrackingRegistry,
}

impl ApprovalWorkflow {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            store: ClaimStore::new(),
            tracking: TrackingRegistry::new(),
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn store(&self) -> &ClaimStore {
        &self.store
    }

    pub fn tracking(&self) -> &TrackingRegistry {
        &self.tracking
    }

    pub fn statistics(&self) -> StatisticsReporter<'_> {
        StatisticsReporter::new(&self.store, self.config.currency)
    }

    /// Submits a claim stamped with the current time
    pub fn submit(&mut self, submission: &ClaimSubmission) -> Result<Claim, ClaimError> {
        self.submit_at(submission, Utc::now())
    }

    /// Submits a claim with an explicit submission time
    ///
    /// Allocates the next id, queues the claim for coordinator review and
    /// starts tracking it at 25%.
    pub fn submit_at(
        &mut self,
        submission: &ClaimSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<Claim, ClaimError> {
        let valid = submission.validate(self.config.currency)?;

        let id = self.store.allocate_id();
        let claim = Claim {
            id,
            lecturer_id: valid.lecturer_id,
            lecturer_name: valid.lecturer_name.clone(),
            period: valid.period,
            total_hours: valid.hours,
            amount: valid.amount,
            submitted_at,
            status: ClaimStatus::PendingCoordinatorReview,
            document_count: valid.document_count,
            notes: valid.notes.clone(),
        };

        self.store.insert_pending(claim.clone())?;
        self.tracking.upsert(TrackedClaim {
            id,
            period: claim.period,
            status: claim.status.tracking_label().to_string(),
            progress: Progress::SUBMITTED,
        });

        info!(
            claim_id = %id,
            lecturer = %claim.lecturer_name,
            period = %claim.period,
            amount = %claim.amount,
            documents = claim.document_count,
            "Claim submitted, awaiting coordinator approval"
        );
        Ok(claim)
    }

    /// Coordinator approval using the configured coordinator name
    pub fn coordinator_approve(&mut self, id: ClaimId) -> Result<Option<ManagerClaim>, ClaimError> {
        let coordinator = self.config.coordinator_name.clone();
        self.coordinator_approve_as(id, &coordinator)
    }

    /// Moves a pending claim to the manager queue
    pub fn coordinator_approve_as(
        &mut self,
        id: ClaimId,
        coordinator: &str,
    ) -> Result<Option<ManagerClaim>, ClaimError> {
        let Some(claim) = self.store.pending_claim(id) else {
            warn!(claim_id = %id, "Approve skipped: claim not in pending queue");
            return Ok(None);
        };
        let mut approved = claim.clone();
        approved.update_status(ClaimStatus::ApprovedByCoordinator)?;
        let projection = ManagerClaim::from_approved(&approved, coordinator);

        self.store.promote(projection.clone())?;
        self.track(id, ClaimStatus::ApprovedByCoordinator, Progress::COORDINATOR_APPROVED);

        info!(
            claim_id = %id,
            lecturer = %projection.lecturer_name,
            coordinator,
            "Claim approved by coordinator, moved to manager queue"
        );
        Ok(Some(projection))
    }

    /// Rejects a pending claim; a missing or blank reason aborts
    pub fn coordinator_reject(
        &mut self,
        id: ClaimId,
        reason: Option<&str>,
    ) -> Result<Option<Claim>, ClaimError> {
        let Some(claim) = self.store.pending_claim(id) else {
            warn!(claim_id = %id, "Reject skipped: claim not in pending queue");
            return Ok(None);
        };
        let reason = require_reason(id, reason, "reject")?;
        let mut rejected = claim.clone();
        rejected.update_status(ClaimStatus::RejectedByCoordinator)?;

        self.store.take_pending(id);
        self.track(id, ClaimStatus::RejectedByCoordinator, Progress::COMPLETE);

        info!(claim_id = %id, lecturer = %rejected.lecturer_name, reason, "Claim rejected by coordinator");
        Ok(Some(rejected))
    }

    /// Rejects a pending claim, asking `prompt` for the reason
    ///
    /// The prompt is only consulted when the claim is actually pending.
    pub fn coordinator_reject_with(
        &mut self,
        id: ClaimId,
        prompt: &mut dyn ReasonPrompt,
    ) -> Result<Option<Claim>, ClaimError> {
        if self.store.pending_claim(id).is_none() {
            return self.coordinator_reject(id, None);
        }
        let reason = prompt.ask(&ReasonRequest::rejection(id));
        self.coordinator_reject(id, reason.as_deref())
    }

    /// Gives final approval to a claim in the manager queue
    pub fn manager_final_approve(&mut self, id: ClaimId) -> Result<Option<ManagerClaim>, ClaimError> {
        let Some(claim) = self.store.manager_claim(id) else {
            warn!(claim_id = %id, "Final approval skipped: claim not in manager queue");
            return Ok(None);
        };
        let mut approved = claim.clone();
        approved.update_status(ClaimStatus::FinalApproved)?;

        self.store.decide(approved.clone())?;
        self.track(id, ClaimStatus::FinalApproved, Progress::COMPLETE);

        info!(
            claim_id = %id,
            lecturer = %approved.lecturer_name,
            amount = %approved.amount,
            "Final approval granted, sent for payment processing"
        );
        Ok(Some(approved))
    }

    /// Returns a manager-queue claim for clarification; a missing or blank reason aborts
    ///
    /// The claim leaves the manager queue and is not put back in the pending
    /// queue; the lecturer has to resubmit.
    pub fn manager_return(
        &mut self,
        id: ClaimId,
        reason: Option<&str>,
    ) -> Result<Option<ManagerClaim>, ClaimError> {
        let Some(claim) = self.store.manager_claim(id) else {
            warn!(claim_id = %id, "Return skipped: claim not in manager queue");
            return Ok(None);
        };
        let reason = require_reason(id, reason, "return")?;
        let mut returned = claim.clone();
        returned.update_status(ClaimStatus::ReturnedForClarification)?;

        self.store.decide(returned.clone())?;
        self.track(id, ClaimStatus::ReturnedForClarification, Progress::RETURNED);

        info!(claim_id = %id, reason, "Claim returned for clarification");
        Ok(Some(returned))
    }

    /// Returns a manager-queue claim, asking `prompt` for the reason
    pub fn manager_return_with(
        &mut self,
        id: ClaimId,
        prompt: &mut dyn ReasonPrompt,
    ) -> Result<Option<ManagerClaim>, ClaimError> {
        if self.store.manager_claim(id).is_none() {
            return self.manager_return(id, None);
        }
        let reason = prompt.ask(&ReasonRequest::return_for_clarification(id));
        self.manager_return(id, reason.as_deref())
    }

    /// Tracking update that follows a store move
    fn track(&mut self, id: ClaimId, status: ClaimStatus, progress: Progress) {
        if !self.tracking.update(id, status.tracking_label(), progress) {
            warn!(claim_id = %id, "No tracking entry for claim");
        }
    }
}

fn require_reason<'a>(
    id: ClaimId,
    reason: Option<&'a str>,
    action: &'static str,
) -> Result<&'a str, ClaimError> {
    match reason.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => {
            warn!(claim_id = %id, action, "Aborted: no reason given");
            Err(ClaimError::ReasonRequired { action, claim_id: id })
        }
    }
}
