//! Test Data Builders
//!
//! Provides builders with sensible defaults so tests only spell out the
//! fields they care about.

use chrono::{DateTime, Utc};
use core_kernel::{ClaimId, ClaimPeriod, LecturerId, Money};
use domain_claims::{Claim, ClaimStatus, ClaimSubmission};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{IdFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for raw claim submissions
///
/// Defaults: October 2024, 40 hours at 150 per hour, no documents.
pub struct SubmissionBuilder {
    lecturer_id: LecturerId,
    lecturer_name: String,
    month: String,
    year: String,
    hours: String,
    rate: String,
    notes: String,
    document_count: usize,
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            lecturer_id: IdFixtures::lecturer(),
            lecturer_name: "Current User".to_string(),
            month: "October".to_string(),
            year: "2024".to_string(),
            hours: "40".to_string(),
            rate: "150".to_string(),
            notes: String::new(),
            document_count: 0,
        }
    }

    pub fn with_lecturer(mut self, id: LecturerId, name: impl Into<String>) -> Self {
        self.lecturer_id = id;
        self.lecturer_name = name.into();
        self
    }

    pub fn with_period(mut self, month: impl Into<String>, year: impl Into<String>) -> Self {
        self.month = month.into();
        self.year = year.into();
        self
    }

    pub fn with_hours(mut self, hours: impl ToString) -> Self {
        self.hours = hours.to_string();
        self
    }

    pub fn with_rate(mut self, rate: impl ToString) -> Self {
        self.rate = rate.to_string();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_documents(mut self, count: usize) -> Self {
        self.document_count = count;
        self
    }

    pub fn build(self) -> ClaimSubmission {
        ClaimSubmission {
            lecturer_id: self.lecturer_id,
            lecturer_name: self.lecturer_name,
            month: self.month,
            year: self.year,
            hours: self.hours,
            rate: self.rate,
            notes: self.notes,
            document_count: self.document_count,
        }
    }
}

/// Builder for pending-queue claim records, for read-side tests
///
/// Defaults match the Dr. Smith sample: C001, 45 hours, R 6 750,00.
pub struct TestClaimBuilder {
    id: ClaimId,
    lecturer_name: String,
    period: ClaimPeriod,
    hours: Decimal,
    amount: Money,
    submitted_at: DateTime<Utc>,
    status: ClaimStatus,
    document_count: usize,
    notes: String,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: IdFixtures::first_claim(),
            lecturer_name: "Dr. Smith".to_string(),
            period: TemporalFixtures::october_2024(),
            hours: dec!(45),
            amount: MoneyFixtures::dr_smith_amount(),
            submitted_at: TemporalFixtures::submitted_at(),
            status: ClaimStatus::PendingCoordinatorReview,
            document_count: 2,
            notes: "Regular monthly teaching hours".to_string(),
        }
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    pub fn with_lecturer_name(mut self, name: impl Into<String>) -> Self {
        self.lecturer_name = name.into();
        self
    }

    pub fn with_period(mut self, period: ClaimPeriod) -> Self {
        self.period = period;
        self
    }

    /// Sets hours and recomputes the amount at the standard rate
    pub fn with_hours(mut self, hours: Decimal) -> Self {
        self.hours = hours;
        self.amount = MoneyFixtures::standard_rate()
            .checked_multiply(hours)
            .expect("fixture hours times the standard rate fits a Decimal");
        self
    }

    pub fn with_submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = at;
        self
    }

    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            lecturer_id: IdFixtures::lecturer(),
            lecturer_name: self.lecturer_name,
            period: self.period,
            total_hours: self.hours,
            amount: self.amount,
            submitted_at: self.submitted_at,
            status: self.status,
            document_count: self.document_count,
            notes: self.notes,
        }
    }
}
