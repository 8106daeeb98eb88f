//! Claims DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::{AmountFormatter, ClaimId, LecturerId, RandFormatter};
use domain_claims::{Claim, ManagerClaim};

/// Form fields accept either JSON strings or numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

fn optional_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct UploadedDocument {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitClaimRequest {
    pub lecturer_id: Option<LecturerId>,
    pub lecturer_name: Option<String>,
    #[serde(default)]
    pub month: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub year: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub hours: String,
    #[serde(default, deserialize_with = "optional_text_or_number")]
    pub hourly_rate: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub documents: Vec<UploadedDocument>,
}

/// Reason for a rejection or return
#[derive(Debug, Default, Deserialize)]
pub struct DecisionReasonRequest {
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub lecturer_id: LecturerId,
    pub lecturer_name: String,
    pub month: String,
    pub year: i32,
    pub total_hours: Decimal,
    pub amount: Decimal,
    pub amount_display: String,
    pub status: String,
    pub document_count: usize,
    pub notes: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&Claim> for ClaimResponse {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id,
            lecturer_id: claim.lecturer_id,
            lecturer_name: claim.lecturer_name.clone(),
            month: claim.period.month.name().to_string(),
            year: claim.period.year,
            total_hours: claim.total_hours.normalize(),
            amount: claim.amount.amount().normalize(),
            amount_display: RandFormatter.format(&claim.amount),
            status: claim.status.label().to_string(),
            document_count: claim.document_count,
            notes: claim.notes.clone(),
            submitted_at: claim.submitted_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimDetailResponse {
    #[serde(flatten)]
    pub claim: ClaimResponse,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct ManagerClaimResponse {
    pub id: ClaimId,
    pub lecturer_name: String,
    pub month: String,
    pub year: i32,
    pub amount: Decimal,
    pub amount_display: String,
    pub coordinator_decision: String,
    pub coordinator_name: String,
    pub final_status: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&ManagerClaim> for ManagerClaimResponse {
    fn from(claim: &ManagerClaim) -> Self {
        Self {
            id: claim.id,
            lecturer_name: claim.lecturer_name.clone(),
            month: claim.period.month.name().to_string(),
            year: claim.period.year,
            amount: claim.amount.amount().normalize(),
            amount_display: RandFormatter.format(&claim.amount),
            coordinator_decision: claim.coordinator_decision.clone(),
            coordinator_name: claim.coordinator_name.clone(),
            final_status: claim.final_status.label().to_string(),
            submitted_at: claim.submitted_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PendingQueueResponse {
    pub summary: String,
    pub claims: Vec<ClaimResponse>,
}
