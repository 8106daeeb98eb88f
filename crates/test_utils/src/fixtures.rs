//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data. Fixtures are fixed values so tests stay
//! predictable.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ClaimId, ClaimPeriod, LecturerId, Money, Month};
use domain_claims::seed::load_sample_data;
use domain_claims::{ApprovalWorkflow, WorkflowConfig};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard hourly rate
    pub fn standard_rate() -> Money {
        Money::zar(dec!(150))
    }

    /// 45 hours at the standard rate
    pub fn dr_smith_amount() -> Money {
        Money::zar(dec!(6750))
    }

    pub fn zero() -> Money {
        Money::zar(dec!(0))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Fixed submission time (Oct 19, 2024 09:30 UTC)
    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 19, 9, 30, 0).unwrap()
    }

    pub fn october_2024() -> ClaimPeriod {
        ClaimPeriod::new(Month::October, 2024)
    }

    pub fn september_2024() -> ClaimPeriod {
        ClaimPeriod::new(Month::September, 2024)
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    pub fn first_claim() -> ClaimId {
        ClaimId::new(1)
    }

    pub fn missing_claim() -> ClaimId {
        ClaimId::new(999)
    }

    pub fn lecturer() -> LecturerId {
        LecturerId::new(1)
    }
}

/// Fixture for ready-made workflows
pub struct WorkflowFixtures;

impl WorkflowFixtures {
    /// Empty workflow with default settings
    pub fn empty() -> ApprovalWorkflow {
        ApprovalWorkflow::new(WorkflowConfig::default())
    }

    /// Workflow holding the sample claims C001-C004
    pub fn with_samples() -> ApprovalWorkflow {
        let mut workflow = Self::empty();
        load_sample_data(&mut workflow, TemporalFixtures::submitted_at())
            .expect("sample data should load");
        workflow
    }
}
