//! Exact inner-product vector index.
//!
//! An index is an immutable snapshot: ids and unit-normalized vectors are
//! captured positionally at build time, and a rebuild produces a new value
//! rather than patching in place. Search is exhaustive — O(corpus × dim)
//! per query. Corpora are tens to low hundreds of documents, so exactness
//! wins over an ANN structure; a production-scale variant could swap one in
//! behind the same contract.

use rayon::prelude::*;

use shortlist_core::errors::IndexError;
use shortlist_core::CandidateId;

/// One retrieval hit: a candidate id and its raw inner-product score.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexHit {
    pub id: CandidateId,
    pub score: f32,
}

/// Immutable flat index of unit-normalized embeddings, positionally aligned
/// with the candidate ids captured at build time.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    dimensions: usize,
    vectors: Vec<Vec<f32>>,
    ids: Vec<CandidateId>,
}

impl VectorIndex {
    /// Build an index from embeddings and their candidate ids.
    ///
    /// Vectors are L2-normalized before storage; a non-unit input is a
    /// caller sloppiness we correct rather than reject. Fails on an empty
    /// batch, mismatched lengths, or ragged dimensions.
    pub fn build(mut vectors: Vec<Vec<f32>>, ids: Vec<CandidateId>) -> Result<Self, IndexError> {
        if vectors.is_empty() {
            return Err(IndexError::Empty);
        }
        if vectors.len() != ids.len() {
            return Err(IndexError::LengthMismatch {
                vectors: vectors.len(),
                ids: ids.len(),
            });
        }

        let dimensions = vectors[0].len();
        for vector in &vectors {
            if vector.len() != dimensions {
                return Err(IndexError::DimensionMismatch {
                    expected: dimensions,
                    actual: vector.len(),
                });
            }
        }

        vectors.par_iter_mut().for_each(|v| normalize(v));

        Ok(Self {
            dimensions,
            vectors,
            ids,
        })
    }

    /// Top-`k` ids by inner product against `vector`, descending, ties
    /// broken by insertion order. `k` beyond the index size returns all
    /// entries; `k == 0` returns none.
    pub fn query(&self, vector: &[f32], k: usize) -> Result<Vec<IndexHit>, IndexError> {
        if vector.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }

        let mut query = vector.to_vec();
        normalize(&mut query);

        let mut hits: Vec<IndexHit> = self
            .vectors
            .iter()
            .zip(&self.ids)
            .map(|(stored, id)| IndexHit {
                id: id.clone(),
                score: dot(stored, &query),
            })
            .collect();

        // Stable sort: equal scores keep insertion order.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(k);
        Ok(hits)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// L2-normalize in place. A zero vector stays zero.
fn normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}
