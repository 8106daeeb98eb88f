//! Core Kernel - Foundational types for the lecturer claims system
//!
//! This crate provides the building blocks used by the claims workflow and
//! its adapters:
//! - Money types with precise decimal arithmetic
//! - Claim periods (calendar month + year)
//! - Sequential, human-readable identifiers (`C001`, `L001`)
//! - Locale-aware display formatting for amounts

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod format;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{ClaimPeriod, Month, TemporalError};
pub use identifiers::{ClaimId, LecturerId, IdParseError};
pub use format::{AmountFormatter, RandFormatter};
