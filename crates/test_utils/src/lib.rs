//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! lecturer claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for submissions and claim records
//! - `assertions`: Custom assertion helpers for workflow invariants
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
