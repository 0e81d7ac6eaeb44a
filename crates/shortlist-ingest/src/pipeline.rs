//! Ingestion pipeline: source paths → corpus snapshot + report.
//!
//! Per-document work (text extraction, attribute extraction) is independent
//! and fans out across a rayon pool; results are collected back in input
//! order so corpus construction stays deterministic. Per-document failures
//! are contained: a document that yields no text is skipped, a failed
//! attribute extraction degrades to default attributes. Only a batch that
//! produces zero usable records is an error.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use shortlist_core::errors::IngestError;
use shortlist_core::models::{IngestIssue, IngestIssueKind, IngestReport};
use shortlist_core::traits::{IAttributeExtractor, ITextExtractor};
use shortlist_core::{CandidateAttributes, CandidateRecord, ShortlistResult};

use crate::corpus::Corpus;

/// Drives the extraction collaborators over a batch of source documents.
pub struct CorpusBuilder<'a> {
    text_extractor: &'a dyn ITextExtractor,
    attribute_extractor: &'a dyn IAttributeExtractor,
}

/// Outcome of processing one source document.
struct DocumentOutcome {
    record: Option<CandidateRecord>,
    issues: Vec<IngestIssue>,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(
        text_extractor: &'a dyn ITextExtractor,
        attribute_extractor: &'a dyn IAttributeExtractor,
    ) -> Self {
        Self {
            text_extractor,
            attribute_extractor,
        }
    }

    /// Ingest a batch of source documents into a fresh corpus snapshot.
    ///
    /// Fails with [`IngestError::EmptyCorpus`] when zero documents yield a
    /// usable record — never an empty success.
    pub fn ingest(&self, sources: &[PathBuf]) -> ShortlistResult<(Corpus, IngestReport)> {
        let mut seen = HashSet::new();
        let unique: Vec<&PathBuf> = sources.iter().filter(|p| seen.insert(*p)).collect();
        if unique.len() < sources.len() {
            debug!(
                duplicates = sources.len() - unique.len(),
                "dropping duplicate source paths"
            );
        }

        let outcomes: Vec<DocumentOutcome> = unique
            .par_iter()
            .map(|path| self.process_document(path))
            .collect();

        let mut corpus = Corpus::new();
        let mut report = IngestReport::default();
        for outcome in outcomes {
            report.issues.extend(outcome.issues);
            match outcome.record {
                Some(record) => {
                    corpus.insert(record)?;
                    report.processed += 1;
                }
                None => report.skipped += 1,
            }
        }

        if corpus.is_empty() {
            warn!(sources = sources.len(), "ingestion produced no usable records");
            return Err(IngestError::EmptyCorpus.into());
        }

        info!(
            processed = report.processed,
            skipped = report.skipped,
            issues = report.issues.len(),
            "ingestion complete"
        );
        Ok((corpus, report))
    }

    fn process_document(&self, path: &Path) -> DocumentOutcome {
        let mut issues = Vec::new();

        let text = match self.text_extractor.extract_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "text extraction failed, skipping document");
                issues.push(IngestIssue::new(
                    path,
                    IngestIssueKind::TextExtractionFailed,
                    e.to_string(),
                ));
                return DocumentOutcome {
                    record: None,
                    issues,
                };
            }
        };

        if text.trim().is_empty() {
            warn!(path = %path.display(), "no text extracted, skipping document");
            issues.push(IngestIssue::new(
                path,
                IngestIssueKind::EmptyText,
                "extracted text was empty",
            ));
            return DocumentOutcome {
                record: None,
                issues,
            };
        }

        let attributes = match self.attribute_extractor.extract_attributes(&text) {
            Ok(payload) => CandidateAttributes::from_extracted(payload),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "attribute extraction failed, using defaults");
                issues.push(IngestIssue::new(
                    path,
                    IngestIssueKind::AttributeFallback,
                    e.to_string(),
                ));
                CandidateAttributes::default()
            }
        };

        let record = CandidateRecord::new(path, text, attributes);
        debug!(path = %path.display(), id = %record.id, "document ingested");
        DocumentOutcome {
            record: Some(record),
            issues,
        }
    }
}
