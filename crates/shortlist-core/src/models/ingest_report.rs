//! Per-batch ingestion outcome reporting.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What went wrong (or degraded) for one source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestIssueKind {
    /// The text extractor returned an error.
    TextExtractionFailed,
    /// Extraction succeeded but yielded no usable text; document skipped.
    EmptyText,
    /// Attribute extraction failed; default attributes were substituted.
    AttributeFallback,
}

/// One recorded ingestion issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestIssue {
    pub source_path: PathBuf,
    pub kind: IngestIssueKind,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

impl IngestIssue {
    pub fn new(source_path: impl Into<PathBuf>, kind: IngestIssueKind, detail: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            kind,
            detail: detail.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Summary of one ingestion batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestReport {
    /// Documents that became corpus records.
    pub processed: usize,
    /// Documents dropped (no text, extraction failure).
    pub skipped: usize,
    pub issues: Vec<IngestIssue>,
}

impl IngestReport {
    /// Issues of one kind, for assertions and display.
    pub fn issues_of(&self, kind: IngestIssueKind) -> impl Iterator<Item = &IngestIssue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }
}
