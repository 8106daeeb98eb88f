//! Canonical claim records
//!
//! The store owns both queues and the identifier counter. A claim id is in
//! at most one queue at a time; inserts and moves that would break this
//! fail with [`ClaimError::AlreadyQueued`]. Fallible moves check every precondition
//! before touching a queue, so an error leaves the store as it was. Only [`crate::ApprovalWorkflow`] mutates
//! a store; everyone else gets a shared reference.

use core_kernel::ClaimId;

use crate::claim::{Claim, ManagerClaim};
use crate::error::ClaimError;

#[derive(Debug, Clone, Default)]
pub struct ClaimStore {
    pending: Vec<Claim>,
    manager_queue: Vec<ManagerClaim>,
    /// Manager claims that left the queue by final approval or return
    decided: Vec<ManagerClaim>,
    last_sequence: u32,
}

impl ClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next claim id; ids are never reused
    pub(crate) fn allocate_id(&mut self) -> ClaimId {
        self.last_sequence += 1;
        ClaimId::new(self.last_sequence)
    }

    /// The most recently allocated id, if any
    pub fn last_allocated(&self) -> Option<ClaimId> {
        (self.last_sequence > 0).then(|| ClaimId::new(self.last_sequence))
    }

    /// True if the id is in either queue
    pub fn is_queued(&self, id: ClaimId) -> bool {
        self.pending_claim(id).is_some() || self.manager_claim(id).is_some()
    }

    pub(crate) fn insert_pending(&mut self, claim: Claim) -> Result<(), ClaimError> {
        if self.is_queued(claim.id) {
            return Err(ClaimError::AlreadyQueued(claim.id));
        }
        self.pending.push(claim);
        Ok(())
    }

    pub(crate) fn take_pending(&mut self, id: ClaimId) -> Option<Claim> {
        let index = self.pending.iter().position(|c| c.id == id)?;
        Some(self.pending.remove(index))
    }

    pub fn pending_claim(&self, id: ClaimId) -> Option<&Claim> {
        self.pending.iter().find(|c| c.id == id)
    }

    /// Pending queue in submission order
    pub fn pending_claims(&self) -> &[Claim] {
        &self.pending
    }

    /// Moves a pending claim into the manager queue as `projection`
    pub(crate) fn promote(&mut self, projection: ManagerClaim) -> Result<Claim, ClaimError> {
        let id = projection.id;
        if self.manager_claim(id).is_some() {
            return Err(ClaimError::AlreadyQueued(id));
        }
        let index = self
            .pending
            .iter()
            .position(|c| c.id == id)
            .ok_or(ClaimError::NotFound(id))?;

        let claim = self.pending.remove(index);
        self.manager_queue.push(projection);
        Ok(claim)
    }

    /// Removes a manager claim and archives `decided` in its place
    pub(crate) fn decide(&mut self, decided: ManagerClaim) -> Result<(), ClaimError> {
        let id = decided.id;
        self.take_manager(id).ok_or(ClaimError::NotFound(id))?;
        self.decided.push(decided);
        Ok(())
    }

    pub(crate) fn take_manager(&mut self, id: ClaimId) -> Option<ManagerClaim> {
        let index = self.manager_queue.iter().position(|c| c.id == id)?;
        Some(self.manager_queue.remove(index))
    }

    pub fn manager_claim(&self, id: ClaimId) -> Option<&ManagerClaim> {
        self.manager_queue.iter().find(|c| c.id == id)
    }

    /// Manager queue in coordinator-approval order
    pub fn manager_queue(&self) -> &[ManagerClaim] {
        &self.manager_queue
    }

    /// Manager claims already decided, oldest first; not part of any queue
    pub fn decided_claims(&self) -> &[ManagerClaim] {
        &self.decided
    }
}
