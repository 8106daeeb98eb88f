//! Demonstration data
//!
//! Loads two claims awaiting coordinator review and two awaiting final
//! approval. Everything goes through the workflow, so ids, tracking and
//! queue membership stay consistent and later submissions continue the
//! sequence after the sample ids.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use core_kernel::{ClaimId, LecturerId};

use crate::error::ClaimError;
use crate::submission::ClaimSubmission;
use crate::workflow::ApprovalWorkflow;

pub const SAMPLE_COORDINATOR: &str = "Dr. Wilson";

struct Sample {
    lecturer: u32,
    name: &'static str,
    month: &'static str,
    hours: &'static str,
    rate: &'static str,
    days_ago: i64,
    documents: usize,
    notes: &'static str,
    coordinator_approved: bool,
}

const SAMPLES: [Sample; 4] = [
    Sample {
        lecturer: 1,
        name: "Dr. Smith",
        month: "October",
        hours: "45",
        rate: "150",
        days_ago: 2,
        documents: 2,
        notes: "Regular monthly teaching hours",
        coordinator_approved: false,
    },
    Sample {
        lecturer: 2,
        name: "Prof. Johnson",
        month: "October",
        hours: "38",
        rate: "150",
        days_ago: 1,
        documents: 1,
        notes: "Includes exam marking hours",
        coordinator_approved: false,
    },
    Sample {
        lecturer: 3,
        name: "Dr. Brown",
        month: "October",
        hours: "48",
        rate: "150",
        days_ago: 3,
        documents: 1,
        notes: "",
        coordinator_approved: true,
    },
    Sample {
        lecturer: 4,
        name: "Prof. Davis",
        month: "September",
        hours: "40",
        rate: "145",
        days_ago: 5,
        documents: 1,
        notes: "",
        coordinator_approved: true,
    },
];

/// Seeds `workflow` with the sample claims and returns their ids
pub fn load_sample_data(
    workflow: &mut ApprovalWorkflow,
    now: DateTime<Utc>,
) -> Result<Vec<ClaimId>, ClaimError> {
    let mut ids = Vec::with_capacity(SAMPLES.len());
    for sample in &SAMPLES {
        let submission = ClaimSubmission {
            lecturer_id: LecturerId::new(sample.lecturer),
            lecturer_name: sample.name.to_string(),
            month: sample.month.to_string(),
            year: "2024".to_string(),
            hours: sample.hours.to_string(),
            rate: sample.rate.to_string(),
            notes: sample.notes.to_string(),
            document_count: sample.documents,
        };
        let claim = workflow.submit_at(&submission, now - Duration::days(sample.days_ago))?;
        if sample.coordinator_approved {
            workflow.coordinator_approve_as(claim.id, SAMPLE_COORDINATOR)?;
        }
        ids.push(claim.id);
    }
    info!(claims = ids.len(), "Loaded sample claims");
    Ok(ids)
}
