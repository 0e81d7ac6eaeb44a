use serde::{Deserialize, Serialize};

use crate::candidate::CandidateId;

/// One ranked result. Ephemeral: created fresh per `rank` call, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: CandidateId,
    /// Raw inner product against the query embedding. ≈[0,1] for normalized
    /// text embeddings, but can dip below 0.
    pub semantic_score: f64,
    /// Metadata heuristic score, always in [0,1].
    pub metadata_score: f64,
    /// `semantic * 0.6 + metadata * 0.4`.
    pub fused_score: f64,
    /// 1-based position in the final ranking.
    pub rank: usize,
}
