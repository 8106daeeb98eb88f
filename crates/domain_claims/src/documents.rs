//! Supporting document attachments
//!
//! Documents are collected before a claim is submitted. Oversized or
//! unsupported files are turned away here; only the final count is recorded
//! on the claim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ClaimError;

/// 10 MB per file
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "xlsx"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub file_name: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn size_label(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

/// Documents gathered for one submission
#[derive(Debug, Clone)]
pub struct DocumentSet {
    documents: Vec<Document>,
    max_bytes: u64,
}

impl Default for DocumentSet {
    fn default() -> Self {
        Self::new(MAX_DOCUMENT_BYTES)
    }
}

impl DocumentSet {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            documents: Vec::new(),
            max_bytes,
        }
    }

    /// Attaches one file after checking extension and size, returning the
    /// stored record
    pub fn attach(&mut self, file_name: &str, size_bytes: u64) -> Result<Document, ClaimError> {
        let reject = |message: String| ClaimError::Document {
            file_name: file_name.to_string(),
            message,
        };

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(reject("supported files are .pdf, .docx and .xlsx".to_string()));
        }
        if size_bytes > self.max_bytes {
            return Err(reject(format!(
                "exceeds {} limit. Please choose a smaller file.",
                format_file_size(self.max_bytes)
            )));
        }

        let document = Document {
            file_name: file_name.to_string(),
            size_bytes,
            uploaded_at: Utc::now(),
        };
        self.documents.push(document.clone());
        Ok(document)
    }

    /// Attaches several files, skipping the ones that fail
    ///
    /// Returns the rejections; accepted files are added.
    pub fn attach_all<'f, I>(&mut self, files: I) -> Vec<ClaimError>
    where
        I: IntoIterator<Item = (&'f str, u64)>,
    {
        let mut rejected = Vec::new();
        let mut accepted = 0usize;
        for (name, size) in files {
            match self.attach(name, size) {
                Ok(_) => accepted += 1,
                Err(err) => {
                    warn!(error = %err, "Document not attached");
                    rejected.push(err);
                }
            }
        }
        info!(accepted, rejected = rejected.len(), "Uploaded document(s)");
        rejected
    }

    /// Removes a document by file name
    pub fn remove(&mut self, file_name: &str) -> Option<Document> {
        let index = self.documents.iter().position(|d| d.file_name == file_name)?;
        Some(self.documents.remove(index))
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Human-readable size: `512 B`, `1.5 KB`, `10 MB`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut len = bytes as f64;
    let mut order = 0;
    while len >= 1024.0 && order < UNITS.len() - 1 {
        order += 1;
        len /= 1024.0;
    }
    let text = format!("{len:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, UNITS[order])
}
