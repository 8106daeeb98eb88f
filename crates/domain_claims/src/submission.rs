//! Claim submission input and validation
//!
//! The submission form hands over raw text. Nothing here touches the store;
//! a submission that fails validation leaves all state unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use core_kernel::{ClaimPeriod, Currency, LecturerId, Money, MoneyError, TemporalError};
use crate::error::ClaimError;

/// Raw claim form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub lecturer_id: LecturerId,
    pub lecturer_name: String,
    pub month: String,
    pub year: String,
    pub hours: String,
    pub rate: String,
    #[serde(default)]
    pub notes: String,
    /// Supplied by the document attachment collaborator
    #[serde(default)]
    pub document_count: usize,
}

/// A submission whose fields have all been parsed and checked
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub lecturer_id: LecturerId,
    pub lecturer_name: String,
    pub period: ClaimPeriod,
    pub hours: Decimal,
    pub rate: Money,
    /// Hours × hourly rate, exact
    pub amount: Money,
    pub notes: String,
    pub document_count: usize,
}

impl ClaimSubmission {
    /// Validates the raw fields
    ///
    /// Checks run in form order: month and year present, period well formed,
    /// hours positive, rate positive, then the amount computed. The first
    /// failure is reported.
    pub fn validate(&self, currency: Currency) -> Result<ValidatedSubmission, ClaimError> {
        if self.month.trim().is_empty() || self.year.trim().is_empty() {
            return Err(ClaimError::validation("period", "Please select month and year."));
        }

        let period = ClaimPeriod::parse(&self.month, &self.year).map_err(|e| match e {
            TemporalError::InvalidMonth(m) => {
                ClaimError::validation("month", format!("Unknown month: {m}"))
            }
            TemporalError::InvalidYear(y) => {
                ClaimError::validation("year", format!("Year must be four digits: {y}"))
            }
        })?;

        let hours = parse_positive(&self.hours).ok_or_else(|| {
            ClaimError::validation("hours", "Please enter valid hours worked (greater than 0).")
        })?;

        let rate = parse_positive(&self.rate)
            .ok_or_else(|| ClaimError::validation("rate", "Please enter a valid hourly rate."))?;

        let rate = Money::new(rate, currency);
        let amount = rate.checked_multiply(hours).map_err(|e| match e {
            MoneyError::PrecisionLoss => ClaimError::validation(
                "hours",
                "Hours worked and hourly rate have too many decimal places.",
            ),
            _ => ClaimError::validation("hours", "Hours worked times hourly rate is too large."),
        })?;

        Ok(ValidatedSubmission {
            lecturer_id: self.lecturer_id,
            lecturer_name: self.lecturer_name.trim().to_string(),
            period,
            hours,
            rate,
            amount,
            notes: self.notes.clone(),
            document_count: self.document_count,
        })
    }
}

fn parse_positive(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|value| value.is_sign_positive() && !value.is_zero())
}
