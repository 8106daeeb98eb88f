//! Claims domain errors

use core_kernel::{ClaimId, MoneyError};
use thiserror::Error;

/// Errors that can occur in the claims domain
///
/// None of these are fatal: every transition either applies completely or
/// leaves the store and tracking registry untouched.
#[derive(Debug, Error)]
pub enum ClaimError {
    /// Malformed or missing submission input
    #[error("Validation error on {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Reject and return need a non-empty reason
    #[error("A reason is required to {action} claim {claim_id}")]
    ReasonRequired { action: &'static str, claim_id: ClaimId },

    #[error("Claim not found: {0}")]
    NotFound(ClaimId),

    #[error("Claim {0} is already queued")]
    AlreadyQueued(ClaimId),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Document {file_name} rejected: {message}")]
    Document { file_name: String, message: String },

    #[error("Export failed: {0}")]
    Export(#[from] std::io::Error),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl ClaimError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ClaimError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns true for input problems the caller can fix and retry
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ClaimError::Validation { .. }
                | ClaimError::ReasonRequired { .. }
                | ClaimError::Document { .. }
        )
    }
}
