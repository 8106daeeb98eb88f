//! Claim progress tracking
//!
//! A denormalized, per-claim view of status label and progress percentage,
//! independent of queue membership. Entries are created on submission and
//! then only updated, always by the workflow in the same step as the store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use core_kernel::{ClaimId, ClaimPeriod};
use crate::claim::{ClaimStatus, NextStage};

/// Workflow completion percentage, 0 to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const SUBMITTED: Progress = Progress(25);
    /// Returned claims drop back below the coordinator-approved mark
    pub const RETURNED: Progress = Progress(50);
    pub const COORDINATOR_APPROVED: Progress = Progress(66);
    pub const COMPLETE: Progress = Progress(100);

    pub fn new(percent: u8) -> Option<Self> {
        (percent <= 100).then_some(Self(percent))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Progress {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Progress::new(value).ok_or_else(|| format!("progress {value} is above 100"))
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> u8 {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Tracking entry for one claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedClaim {
    pub id: ClaimId,
    pub period: ClaimPeriod,
    /// Free-text label mirroring the workflow state
    pub status: String,
    pub progress: Progress,
}

impl TrackedClaim {
    /// One-line label for selection lists: `C001 - October 2024 (Pending Coordinator Review)`
    pub fn display(&self) -> String {
        format!("{} - {} ({})", self.id, self.period, self.status)
    }

    /// The workflow status this label mirrors, if it is a known one
    pub fn claim_status(&self) -> Option<ClaimStatus> {
        ClaimStatus::from_label(&self.status)
    }

    pub fn next_stage(&self) -> NextStage {
        NextStage::for_label(&self.status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackingRegistry {
    entries: Vec<TrackedClaim>,
    index: HashMap<ClaimId, usize>,
}

impl TrackingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `tracked.id`, keeping insertion order
    pub(crate) fn upsert(&mut self, tracked: TrackedClaim) {
        match self.index.get(&tracked.id) {
            Some(&slot) => self.entries[slot] = tracked,
            None => {
                self.index.insert(tracked.id, self.entries.len());
                self.entries.push(tracked);
            }
        }
    }

    /// Updates status and progress; returns false when the id is unknown
    pub(crate) fn update(&mut self, id: ClaimId, status: &str, progress: Progress) -> bool {
        match self.index.get(&id) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.status = status.to_string();
                entry.progress = progress;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ClaimId) -> Option<&TrackedClaim> {
        self.index.get(&id).map(|&slot| &self.entries[slot])
    }

    /// All entries in insertion order
    pub fn all(&self) -> &[TrackedClaim] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
