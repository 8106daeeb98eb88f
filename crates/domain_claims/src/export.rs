//! CSV export of the pending queue
//!
//! Text fields are double-quoted with embedded quotes doubled; hours and
//! amount are written bare in plain decimal notation.

use chrono::{DateTime, TimeZone};
use std::io::Write;
use tracing::info;

use crate::claim::Claim;
use crate::error::ClaimError;

pub const CSV_HEADER: &str = "ClaimID,LecturerName,Month,Hours,Amount,Status,SubmissionDate";

/// Writes the header and one row per claim; returns the number of rows
pub fn export_pending_csv<W: Write>(claims: &[Claim], mut writer: W) -> Result<usize, ClaimError> {
    writeln!(writer, "{CSV_HEADER}")?;
    for claim in claims {
        writeln!(writer, "{}", csv_row(claim))?;
    }
    writer.flush()?;
    info!(rows = claims.len(), "Exported claims to CSV");
    Ok(claims.len())
}

/// Renders the export into a string
pub fn pending_csv(claims: &[Claim]) -> Result<String, ClaimError> {
    let mut buffer = Vec::new();
    export_pending_csv(claims, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| ClaimError::Export(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Suggested file name: `claims_export_20241019_143005.csv`
pub fn export_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("claims_export_{}.csv", at.format("%Y%m%d_%H%M%S"))
}

fn csv_row(claim: &Claim) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        quote(&claim.id.to_string()),
        quote(&claim.lecturer_name),
        quote(claim.period.month.name()),
        claim.total_hours.normalize(),
        claim.amount.amount().normalize(),
        quote(claim.status.label()),
        quote(&claim.submitted_at.format("%Y-%m-%d").to_string()),
    )
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
