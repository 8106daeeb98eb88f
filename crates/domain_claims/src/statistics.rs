//! Read-side counts and totals
//!
//! Nothing is cached; every call recomputes from the current store.
//! Final-approved claims leave the manager queue, so approval counts and
//! totals look at the queue plus the decided manager claims.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use core_kernel::{AmountFormatter, Currency, Money};

use crate::claim::{ClaimStatus, ManagerClaim};
use crate::error::ClaimError;
use crate::store::ClaimStore;

#[derive(Debug, Clone, Copy)]
pub struct StatisticsReporter<'a> {
    store: &'a ClaimStore,
    currency: Currency,
}

impl<'a> StatisticsReporter<'a> {
    pub fn new(store: &'a ClaimStore, currency: Currency) -> Self {
        Self { store, currency }
    }

    pub fn pending_count(&self) -> usize {
        self.store.pending_claims().len()
    }

    pub fn manager_queue_count(&self) -> usize {
        self.store.manager_queue().len()
    }

    pub fn final_approved_count(&self) -> usize {
        self.manager_claims()
            .filter(|c| c.final_status == ClaimStatus::FinalApproved)
            .count()
    }

    pub fn pending_final_approval_count(&self) -> usize {
        self.store
            .manager_queue()
            .iter()
            .filter(|c| c.final_status == ClaimStatus::PendingFinalApproval)
            .count()
    }

    /// Sum of amounts whose final status is `FinalApproved`
    pub fn total_approved_amount(&self) -> Result<Money, ClaimError> {
        let approved = self
            .manager_claims()
            .filter(|c| c.final_status == ClaimStatus::FinalApproved)
            .map(|c| &c.amount);
        Ok(Money::sum(self.currency, approved)?)
    }

    /// `Total Pending Claims: N`
    pub fn coordinator_summary(&self) -> String {
        format!("Total Pending Claims: {}", self.pending_count())
    }

    pub fn manager_report(&self, generated_at: DateTime<Utc>) -> Result<ManagerReport, ClaimError> {
        let report = ManagerReport {
            total_in_queue: self.manager_queue_count(),
            final_approved: self.final_approved_count(),
            pending_final_approval: self.pending_final_approval_count(),
            total_approved_amount: self.total_approved_amount()?,
            generated_at,
        };
        debug!(?report, "Generated manager report");
        Ok(report)
    }

    /// Every figure at once
    pub fn snapshot(&self) -> Result<ClaimStatistics, ClaimError> {
        Ok(ClaimStatistics {
            pending_count: self.pending_count(),
            manager_queue_count: self.manager_queue_count(),
            final_approved_count: self.final_approved_count(),
            pending_final_approval_count: self.pending_final_approval_count(),
            total_approved_amount: self.total_approved_amount()?,
        })
    }

    fn manager_claims(&self) -> impl Iterator<Item = &'a ManagerClaim> {
        let store = self.store;
        store.manager_queue().iter().chain(store.decided_claims())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimStatistics {
    pub pending_count: usize,
    pub manager_queue_count: usize,
    pub final_approved_count: usize,
    pub pending_final_approval_count: usize,
    pub total_approved_amount: Money,
}

/// Academic manager report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerReport {
    pub total_in_queue: usize,
    pub final_approved: usize,
    pub pending_final_approval: usize,
    pub total_approved_amount: Money,
    pub generated_at: DateTime<Utc>,
}

impl ManagerReport {
    pub fn render(&self, formatter: &dyn AmountFormatter) -> String {
        format!(
            "Academic Manager Report\n\n\
             Total Claims in Queue: {}\n\
             Final Approved: {}\n\
             Pending Final Approval: {}\n\
             Total Amount Approved: {}\n\n\
             Report Generated: {}",
            self.total_in_queue,
            self.final_approved,
            self.pending_final_approval,
            formatter.format(&self.total_approved_amount),
            self.generated_at.format("%Y-%m-%d %H:%M"),
        )
    }
}
