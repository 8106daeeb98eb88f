//! Tracking and reporting DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{AmountFormatter, ClaimId, RandFormatter};
use domain_claims::{ClaimStatistics, ManagerReport, TrackedClaim};

#[derive(Debug, Serialize)]
pub struct TrackedClaimResponse {
    pub id: ClaimId,
    pub period: String,
    pub status: String,
    pub progress: u8,
    pub next_stage: String,
    pub display: String,
}

impl From<&TrackedClaim> for TrackedClaimResponse {
    fn from(tracked: &TrackedClaim) -> Self {
        Self {
            id: tracked.id,
            period: tracked.period.to_string(),
            status: tracked.status.clone(),
            progress: tracked.progress.percent(),
            next_stage: tracked.next_stage().label().to_string(),
            display: tracked.display(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub pending_count: usize,
    pub manager_queue_count: usize,
    pub final_approved_count: usize,
    pub pending_final_approval_count: usize,
    pub total_approved_amount: Decimal,
    pub total_approved_display: String,
}

impl From<ClaimStatistics> for StatisticsResponse {
    fn from(stats: ClaimStatistics) -> Self {
        Self {
            pending_count: stats.pending_count,
            manager_queue_count: stats.manager_queue_count,
            final_approved_count: stats.final_approved_count,
            pending_final_approval_count: stats.pending_final_approval_count,
            total_approved_amount: stats.total_approved_amount.amount().normalize(),
            total_approved_display: RandFormatter.format(&stats.total_approved_amount),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ManagerReportResponse {
    pub total_in_queue: usize,
    pub final_approved: usize,
    pub pending_final_approval: usize,
    pub total_approved_amount: Decimal,
    pub generated_at: DateTime<Utc>,
    pub text: String,
}

impl From<ManagerReport> for ManagerReportResponse {
    fn from(report: ManagerReport) -> Self {
        Self {
            total_in_queue: report.total_in_queue,
            final_approved: report.final_approved,
            pending_final_approval: report.pending_final_approval,
            total_approved_amount: report.total_approved_amount.amount().normalize(),
            generated_at: report.generated_at,
            text: report.render(&RandFormatter),
        }
    }
}
