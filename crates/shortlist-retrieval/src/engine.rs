//! ShortlistEngine: orchestrates embed corpus → build index → rank.
//!
//! The engine owns the embedding collaborator and the current snapshot
//! (corpus + index). Ingestion embeds the whole corpus and builds the index
//! as one blocking unit; the snapshot is swapped wholesale, so readers see
//! either the previous complete index or the new one, never a partial
//! state. The snapshot is immutable and cheaply shareable after the swap.

use std::sync::Arc;

use tracing::{debug, info};

use shortlist_core::constants::OVERSAMPLE_FACTOR;
use shortlist_core::errors::{EmbeddingError, ExplainError, IndexError, IngestError};
use shortlist_core::traits::{IEmbeddingProvider, IFitExplainer};
use shortlist_core::{
    CandidateId, CandidateRecord, FitExplanation, ScoredCandidate, ShortlistConfig,
    ShortlistResult,
};
use shortlist_ingest::Corpus;

use crate::enrichment;
use crate::explain;
use crate::index::VectorIndex;
use crate::ranking;

/// One fully-built generation of searchable state.
struct Snapshot {
    corpus: Arc<Corpus>,
    index: Arc<VectorIndex>,
}

/// Outcome of a successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub candidates: usize,
    pub dimensions: usize,
}

/// The ranking engine. EMPTY until the first successful [`ingest`], READY
/// afterwards; re-ingestion replaces the snapshot atomically.
///
/// [`ingest`]: ShortlistEngine::ingest
pub struct ShortlistEngine {
    embedder: Box<dyn IEmbeddingProvider>,
    config: ShortlistConfig,
    snapshot: Option<Snapshot>,
}

impl ShortlistEngine {
    pub fn new(embedder: Box<dyn IEmbeddingProvider>, config: ShortlistConfig) -> Self {
        Self {
            embedder,
            config,
            snapshot: None,
        }
    }

    /// Embed the corpus and build a fresh index, replacing any prior
    /// snapshot.
    ///
    /// Embedding failure aborts the whole ingestion (corpus-wide
    /// operation) and leaves the previous snapshot untouched.
    pub fn ingest(&mut self, corpus: Corpus) -> ShortlistResult<IngestStats> {
        if corpus.is_empty() {
            return Err(IngestError::EmptyCorpus.into());
        }

        let texts: Vec<String> = corpus.iter().map(enrichment::profile_text).collect();
        let ids: Vec<CandidateId> = corpus.ids().cloned().collect();

        let batch_size = self.config.embedding_batch_size.max(1);
        let mut vectors = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(batch_size) {
            let batch = self.embedder.embed_batch(chunk)?;
            if batch.len() != chunk.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "provider returned {} vectors for {} texts",
                        batch.len(),
                        chunk.len()
                    ),
                }
                .into());
            }
            vectors.extend(batch);
        }

        let index = VectorIndex::build(vectors, ids)?;
        let stats = IngestStats {
            candidates: index.len(),
            dimensions: index.dimensions(),
        };
        info!(
            candidates = stats.candidates,
            dimensions = stats.dimensions,
            provider = self.embedder.name(),
            "corpus embedded and indexed"
        );

        self.snapshot = Some(Snapshot {
            corpus: Arc::new(corpus),
            index: Arc::new(index),
        });
        Ok(stats)
    }

    /// Rank the corpus against a requirement query.
    ///
    /// Retrieves `top_k * 2` candidates from the index, re-ranks them with
    /// the metadata heuristic, and returns the fused top `top_k`. Fails
    /// with [`IndexError::NotReady`] before the first ingest; a
    /// query-embedding failure aborts the call (no ranking is possible
    /// without it). `top_k == 0` yields an empty result.
    pub fn rank(&self, query: &str, top_k: usize) -> ShortlistResult<Vec<ScoredCandidate>> {
        let snapshot = self.snapshot.as_ref().ok_or(IndexError::NotReady)?;

        let framed = enrichment::requirement_query(query);
        let query_vector = self.embedder.embed(&framed)?;
        let hits = snapshot
            .index
            .query(&query_vector, top_k.saturating_mul(OVERSAMPLE_FACTOR))?;
        debug!(retrieved = hits.len(), top_k, "vector retrieval complete");

        Ok(ranking::rank_candidates(
            query,
            &hits,
            &snapshot.corpus,
            top_k,
        ))
    }

    /// Rank with the configured default result count.
    pub fn rank_default(&self, query: &str) -> ShortlistResult<Vec<ScoredCandidate>> {
        self.rank(query, self.config.default_top_k)
    }

    /// Produce a human-readable fit justification for one ranked candidate.
    ///
    /// Explainer failures degrade to a default explanation carrying the
    /// error and the candidate's score; only an unknown id or a missing
    /// snapshot is a hard error.
    pub fn explain(
        &self,
        explainer: &dyn IFitExplainer,
        query: &str,
        candidate: &ScoredCandidate,
    ) -> ShortlistResult<FitExplanation> {
        let snapshot = self.snapshot.as_ref().ok_or(IndexError::NotReady)?;
        let record = snapshot
            .corpus
            .get(&candidate.id)
            .ok_or_else(|| ExplainError::UnknownCandidate {
                id: candidate.id.to_string(),
            })?;
        Ok(explain::explain_with_fallback(
            explainer,
            query,
            record,
            candidate.fused_score,
        ))
    }

    /// Whether a snapshot is available for querying.
    pub fn is_ready(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Number of candidates in the current snapshot (0 before ingest).
    pub fn candidate_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.corpus.len())
    }

    /// Resolve a candidate id in the current snapshot.
    pub fn candidate(&self, id: &CandidateId) -> Option<&CandidateRecord> {
        self.snapshot.as_ref().and_then(|s| s.corpus.get(id))
    }
}
