//! The candidate store: one corpus snapshot, keyed by id.
//!
//! The corpus is the single source of truth for candidate records; every
//! other component correlates by id, never by array position. A snapshot is
//! never mutated after ingestion — re-ingestion builds a replacement.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use shortlist_core::errors::IngestError;
use shortlist_core::{CandidateId, CandidateRecord};

/// Insertion-ordered set of candidate records for one ranking session.
///
/// Invariants: ids are unique, and id ↔ source path is a bijection within
/// the snapshot.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<CandidateRecord>,
    by_id: HashMap<CandidateId, usize>,
    paths: HashSet<PathBuf>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, rejecting duplicate ids and duplicate source paths.
    pub fn insert(&mut self, record: CandidateRecord) -> Result<(), IngestError> {
        if self.by_id.contains_key(&record.id) {
            return Err(IngestError::DuplicateId {
                id: record.id.to_string(),
            });
        }
        if self.paths.contains(&record.source_path) {
            return Err(IngestError::DuplicateSource {
                path: record.source_path.display().to_string(),
            });
        }

        self.by_id.insert(record.id.clone(), self.records.len());
        self.paths.insert(record.source_path.clone());
        self.records.push(record);
        Ok(())
    }

    /// Resolve a candidate id back to its record.
    pub fn get(&self, id: &CandidateId) -> Option<&CandidateRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.records.iter()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &CandidateId> {
        self.records.iter().map(|r| &r.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
