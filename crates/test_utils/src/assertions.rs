//! Custom Test Assertions
//!
//! Assertion helpers for workflow invariants that give more useful failure
//! messages than bare `assert!`.

use core_kernel::{ClaimId, Money};
use domain_claims::{ApprovalWorkflow, Progress};
use rust_decimal::Decimal;

/// Asserts a Money value has the expected amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected {} {}, got {}",
        actual.currency().symbol(),
        expected,
        actual
    );
}

/// Asserts the claim is in neither the pending nor the manager queue
pub fn assert_not_queued(workflow: &ApprovalWorkflow, id: ClaimId) {
    let store = workflow.store();
    assert!(
        store.pending_claim(id).is_none(),
        "Claim {} unexpectedly in pending queue",
        id
    );
    assert!(
        store.manager_claim(id).is_none(),
        "Claim {} unexpectedly in manager queue",
        id
    );
}

/// Asserts the tracking entry for `id` has the given label and progress
pub fn assert_tracked(workflow: &ApprovalWorkflow, id: ClaimId, status: &str, progress: Progress) {
    let tracked = workflow
        .tracking()
        .get(id)
        .unwrap_or_else(|| panic!("Claim {} is not tracked", id));
    assert_eq!(tracked.status, status, "Status label of {}", id);
    assert_eq!(tracked.progress, progress, "Progress of {}", id);
}

/// Asserts the cross-queue invariant for every tracked claim
///
/// Each id is in at most one queue, and queued claims carry a non-terminal
/// tracking label that matches the queue they sit in.
pub fn assert_queue_invariant(workflow: &ApprovalWorkflow) {
    let store = workflow.store();
    for tracked in workflow.tracking().all() {
        let pending = store.pending_claim(tracked.id).is_some();
        let manager = store.manager_claim(tracked.id).is_some();
        assert!(
            !(pending && manager),
            "Claim {} is in both queues",
            tracked.id
        );
        if pending {
            assert_eq!(tracked.status, "Pending Coordinator Review", "{}", tracked.display());
        }
        if manager {
            assert_eq!(tracked.status, "Approved by Coordinator", "{}", tracked.display());
        }
        if let Some(status) = tracked.claim_status() {
            if status.is_terminal() {
                assert!(!pending && !manager, "Terminal claim {} still queued", tracked.id);
            }
        }
    }
}
