//! Exact monetary amounts
//!
//! Claim amounts are `hours × rate` computed in `rust_decimal`, so a claim
//! for 45 hours at R150 is exactly R6750 with no floating-point drift.
//! Amounts keep their full scale; only display rounds to cents.
//!
//! Arithmetic is checked. A result that does not fit in a `Decimal`, or
//! that `Decimal` could only hold rounded, is an error rather than a panic
//! or a silently different amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currencies a claim can be paid in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// South African Rand
    #[default]
    ZAR,
    USD,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::ZAR => "R",
            Currency::USD => "$",
        }
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ZAR => "ZAR",
            Currency::USD => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    #[error("Amount overflow")]
    Overflow,

    #[error("Amount cannot be held exactly")]
    PrecisionLoss,
}

/// An amount in a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zar(amount: Decimal) -> Self {
        Self::new(amount, Currency::ZAR)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Adds two amounts of the same currency
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            });
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Scales the amount, e.g. an hourly rate by the hours worked
    ///
    /// The product is exact: `Decimal` keeps at most 28 fractional digits,
    /// and a product it would have to round is rejected.
    pub fn checked_multiply(&self, factor: Decimal) -> Result<Money, MoneyError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        if amount.scale() < self.amount.scale() + factor.scale() {
            return Err(MoneyError::PrecisionLoss);
        }
        Ok(Self::new(amount, self.currency))
    }

    /// Totals `amounts`; an empty sequence is zero in `currency`
    pub fn sum<'a, I>(currency: Currency, amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency), |total, m| total.checked_add(m))
    }
}

/// `R 6750.00`; see [`crate::format`] for locale-aware rendering
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency.symbol(), self.amount)
    }
}
