//! Claim period handling
//!
//! A claim covers one calendar month of one year. Both parts arrive as
//! free text from the submission form and are parsed here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing a claim period
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),
}

/// Calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the English month name
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Returns the month number, 1-based
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TemporalError::InvalidMonth(s.to_string()))
    }
}

/// The month and year a claim covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClaimPeriod {
    pub year: i32,
    pub month: Month,
}

impl ClaimPeriod {
    pub fn new(month: Month, year: i32) -> Self {
        Self { year, month }
    }

    /// Parses a period from the raw month and year fields
    ///
    /// The year must be exactly four ASCII digits.
    pub fn parse(month: &str, year: &str) -> Result<Self, TemporalError> {
        let month: Month = month.parse()?;
        let year_text = year.trim();
        if year_text.len() != 4 || !year_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TemporalError::InvalidYear(year.to_string()));
        }
        let year = year_text
            .parse()
            .map_err(|_| TemporalError::InvalidYear(year.to_string()))?;
        Ok(Self { year, month })
    }
}

impl fmt::Display for ClaimPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_parse_is_case_insensitive() {
        assert_eq!("october".parse::<Month>().unwrap(), Month::October);
        assert_eq!(" MAY ".parse::<Month>().unwrap(), Month::May);
        assert!("Octember".parse::<Month>().is_err());
    }

    #[test]
    fn test_period_display() {
        let period = ClaimPeriod::parse("October", "2024").unwrap();
        assert_eq!(period.to_string(), "October 2024");
        assert_eq!(period.month.number(), 10);
    }

    #[test]
    fn test_period_rejects_bad_year() {
        assert_eq!(
            ClaimPeriod::parse("October", "24"),
            Err(TemporalError::InvalidYear("24".to_string()))
        );
        assert!(ClaimPeriod::parse("October", "20x4").is_err());
    }
}
