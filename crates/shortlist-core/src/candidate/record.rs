//! Candidate identity and the immutable per-candidate record.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::candidate::CandidateAttributes;
use crate::constants::EXCERPT_MAX_CHARS;
use crate::text;

/// Opaque candidate identifier, generated at ingestion and stable for the
/// record's lifetime. Unique within a corpus snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for CandidateId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// One candidate in a corpus snapshot. Immutable after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    /// Where the source document came from. id ↔ source_path is a bijection
    /// within a corpus snapshot.
    pub source_path: PathBuf,
    /// Full raw text as extracted from the source.
    pub text: String,
    /// Display excerpt: first [`EXCERPT_MAX_CHARS`] characters of the text.
    pub excerpt: String,
    pub attributes: CandidateAttributes,
}

impl CandidateRecord {
    /// Build a record with a freshly generated id and a derived excerpt.
    pub fn new(
        source_path: impl Into<PathBuf>,
        raw_text: impl Into<String>,
        attributes: CandidateAttributes,
    ) -> Self {
        let text = raw_text.into();
        Self {
            id: CandidateId::generate(),
            source_path: source_path.into(),
            excerpt: text::excerpt(&text, EXCERPT_MAX_CHARS),
            text,
            attributes,
        }
    }

    /// Human-readable name: the extracted name, else the source file stem,
    /// else `"Unknown"`.
    pub fn display_name(&self) -> String {
        let name = self.attributes.name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        self.source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
