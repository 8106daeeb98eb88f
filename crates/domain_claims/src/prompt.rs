//! Reason prompt collaborator
//!
//! Reject and return ask someone for a reason before anything changes. A
//! prompt that yields `None` or blank text aborts the transition.

use core_kernel::ClaimId;

/// What the prompt should ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonRequest {
    pub claim_id: ClaimId,
    pub title: &'static str,
    pub message: &'static str,
    /// Pre-filled answer
    pub suggested: &'static str,
}

impl ReasonRequest {
    pub fn rejection(claim_id: ClaimId) -> Self {
        Self {
            claim_id,
            title: "Rejection Reason",
            message: "Please enter reason for rejection:",
            suggested: "Insufficient documentation",
        }
    }

    pub fn return_for_clarification(claim_id: ClaimId) -> Self {
        Self {
            claim_id,
            title: "Return Reason",
            message: "Please enter reason for returning claim:",
            suggested: "Additional information required",
        }
    }
}

/// Supplies an optional reason; `None` means the user cancelled
pub trait ReasonPrompt {
    fn ask(&mut self, request: &ReasonRequest) -> Option<String>;
}

impl<F> ReasonPrompt for F
where
    F: FnMut(&ReasonRequest) -> Option<String>,
{
    fn ask(&mut self, request: &ReasonRequest) -> Option<String> {
        self(request)
    }
}

/// Accepts the suggested reason without asking anyone
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptSuggested;

impl ReasonPrompt for AcceptSuggested {
    fn ask(&mut self, request: &ReasonRequest) -> Option<String> {
        Some(request.suggested.to_string())
    }
}
