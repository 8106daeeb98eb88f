//! Claim records and their statuses

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AmountFormatter, ClaimId, ClaimPeriod, LecturerId, Money};
use crate::error::ClaimError;

/// Label recorded on a manager claim for the coordinator's decision
pub const COORDINATOR_APPROVED: &str = "Approved";

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Received, not yet queued
    Submitted,
    /// Waiting in the coordinator queue
    PendingCoordinatorReview,
    /// Coordinator approved; a manager projection exists
    ApprovedByCoordinator,
    /// Waiting in the manager queue
    PendingFinalApproval,
    /// Manager approved, terminal
    FinalApproved,
    /// Coordinator rejected, terminal
    RejectedByCoordinator,
    /// Manager sent it back
    ReturnedForClarification,
}

impl ClaimStatus {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "Submitted",
            ClaimStatus::PendingCoordinatorReview => "Pending Coordinator Review",
            ClaimStatus::ApprovedByCoordinator => "Approved by Coordinator",
            ClaimStatus::PendingFinalApproval => "Pending Final Approval",
            ClaimStatus::FinalApproved => "Final Approved",
            ClaimStatus::RejectedByCoordinator => "Rejected by Coordinator",
            ClaimStatus::ReturnedForClarification => "Returned for Clarification",
        }
    }

    /// Label shown in the tracking registry
    pub fn tracking_label(&self) -> &'static str {
        match self {
            ClaimStatus::FinalApproved => "Final Approved - Payment Processing",
            other => other.label(),
        }
    }

    /// Parses a label back into a status; accepts both final-approved spellings
    pub fn from_label(label: &str) -> Option<Self> {
        use ClaimStatus::*;
        let label = label.trim();
        [
            Submitted,
            PendingCoordinatorReview,
            ApprovedByCoordinator,
            PendingFinalApproval,
            FinalApproved,
            RejectedByCoordinator,
            ReturnedForClarification,
        ]
        .into_iter()
        .find(|s| s.label() == label || s.tracking_label() == label)
    }

    /// True for states that end the claim's life
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::FinalApproved | ClaimStatus::RejectedByCoordinator)
    }

    /// Guidance for what happens next; has no effect on transitions
    pub fn next_stage(&self) -> NextStage {
        match self {
            ClaimStatus::Submitted => NextStage::CoordinatorReview,
            ClaimStatus::PendingCoordinatorReview => NextStage::CoordinatorApproval,
            ClaimStatus::ApprovedByCoordinator => NextStage::ManagerFinalApproval,
            ClaimStatus::PendingFinalApproval | ClaimStatus::FinalApproved => {
                NextStage::PaymentProcessing
            }
            _ => NextStage::ProcessComplete,
        }
    }

    /// Checks if transition is valid
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (*self, target),
            (Submitted, PendingCoordinatorReview) |
            (PendingCoordinatorReview, ApprovedByCoordinator) |
            (PendingCoordinatorReview, RejectedByCoordinator) |
            (ApprovedByCoordinator, PendingFinalApproval) |
            (PendingFinalApproval, FinalApproved) |
            (PendingFinalApproval, ReturnedForClarification)
        )
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Next step in the process, derived from a status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextStage {
    CoordinatorReview,
    CoordinatorApproval,
    ManagerFinalApproval,
    PaymentProcessing,
    ProcessComplete,
}

impl NextStage {
    /// Looks up the next stage for a free-text status label
    ///
    /// Labels that match no known status map to `ProcessComplete`.
    pub fn for_label(label: &str) -> Self {
        ClaimStatus::from_label(label)
            .map(|s| s.next_stage())
            .unwrap_or(NextStage::ProcessComplete)
    }

    pub fn label(&self) -> &'static str {
        match self {
            NextStage::CoordinatorReview => "Coordinator Review",
            NextStage::CoordinatorApproval => "Coordinator Approval",
            NextStage::ManagerFinalApproval => "Manager Final Approval",
            NextStage::PaymentProcessing => "Payment Processing",
            NextStage::ProcessComplete => "Process Complete",
        }
    }
}

impl fmt::Display for NextStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn check_transition(from: ClaimStatus, to: ClaimStatus) -> Result<(), ClaimError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(ClaimError::InvalidStatusTransition {
            from: from.label().to_string(),
            to: to.label().to_string(),
        })
    }
}

/// A lecturer's claim in the pending (coordinator) queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Sequential identifier
    pub id: ClaimId,
    pub lecturer_id: LecturerId,
    pub lecturer_name: String,
    /// Month and year claimed for
    pub period: ClaimPeriod,
    /// Hours worked, always positive
    pub total_hours: Decimal,
    /// Hours × rate, computed once at submission
    pub amount: Money,
    pub submitted_at: DateTime<Utc>,
    pub status: ClaimStatus,
    /// Number of supporting documents attached
    pub document_count: usize,
    pub notes: String,
}

impl Claim {
    /// Updates the status
    pub fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        check_transition(self.status, status)?;
        self.status = status;
        Ok(())
    }

    /// Multi-line summary for a details view
    pub fn details(&self, formatter: &dyn AmountFormatter) -> String {
        format!(
            "Claim Details: {id}\n\n\
             Lecturer: {name} ({lecturer})\n\
             Period: {period}\n\
             Hours: {hours}\n\
             Amount: {amount}\n\
             Status: {status}\n\
             Documents: {docs}\n\
             Notes: {notes}\n\
             Submitted: {submitted}",
            id = self.id,
            name = self.lecturer_name,
            lecturer = self.lecturer_id,
            period = self.period,
            hours = self.total_hours.normalize(),
            amount = formatter.format(&self.amount),
            status = self.status,
            docs = self.document_count,
            notes = self.notes,
            submitted = self.submitted_at.format("%Y-%m-%d %H:%M"),
        )
    }
}

/// Manager-queue projection of a coordinator-approved claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerClaim {
    /// Same identifier as the source claim
    pub id: ClaimId,
    pub lecturer_name: String,
    pub period: ClaimPeriod,
    pub amount: Money,
    pub coordinator_decision: String,
    pub coordinator_name: String,
    /// Original submission time
    pub submitted_at: DateTime<Utc>,
    pub final_status: ClaimStatus,
}

impl ManagerClaim {
    /// Projects an approved claim into the manager queue
    pub fn from_approved(claim: &Claim, coordinator_name: &str) -> Self {
        Self {
            id: claim.id,
            lecturer_name: claim.lecturer_name.clone(),
            period: claim.period,
            amount: claim.amount,
            coordinator_decision: COORDINATOR_APPROVED.to_string(),
            coordinator_name: coordinator_name.to_string(),
            submitted_at: claim.submitted_at,
            final_status: ClaimStatus::PendingFinalApproval,
        }
    }

    /// Updates the final-approval status
    pub fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        check_transition(self.final_status, status)?;
        self.final_status = status;
        Ok(())
    }

    /// Multi-line summary for a details view
    pub fn details(&self, formatter: &dyn AmountFormatter) -> String {
        format!(
            "Manager Claim Details: {id}\n\n\
             Lecturer: {name}\n\
             Period: {period}\n\
             Amount: {amount}\n\
             Coordinator: {coordinator}\n\
             Coordinator Status: {decision}\n\
             Final Status: {status}\n\
             Submitted: {submitted}",
            id = self.id,
            name = self.lecturer_name,
            period = self.period,
            amount = formatter.format(&self.amount),
            coordinator = self.coordinator_name,
            decision = self.coordinator_decision,
            status = self.final_status,
            submitted = self.submitted_at.format("%Y-%m-%d"),
        )
    }
}
