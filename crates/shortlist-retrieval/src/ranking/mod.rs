//! Re-ranking: resolve retrieved ids, score metadata, fuse, sort, truncate.

pub mod scorer;

use tracing::warn;

use shortlist_core::constants::{METADATA_WEIGHT, SEMANTIC_WEIGHT};
use shortlist_core::ScoredCandidate;
use shortlist_ingest::Corpus;

use crate::index::IndexHit;

/// Turn oversampled retrieval hits into the final ranked list.
///
/// A hit whose id cannot be resolved through the corpus is logged and
/// skipped — it never counts toward `top_k`. Sorting is stable, so equal
/// fused scores preserve retrieval order. Ranks are 1-based.
pub fn rank_candidates(
    query: &str,
    hits: &[IndexHit],
    corpus: &Corpus,
    top_k: usize,
) -> Vec<ScoredCandidate> {
    let mut ranked = score_retrieved(query, hits, corpus);
    ranked.truncate(top_k);
    for (i, candidate) in ranked.iter_mut().enumerate() {
        candidate.rank = i + 1;
    }
    ranked
}

/// Resolve, score, fuse, and sort — without truncation or rank assignment.
fn score_retrieved(query: &str, hits: &[IndexHit], corpus: &Corpus) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = hits
        .iter()
        .filter_map(|hit| {
            let Some(record) = corpus.get(&hit.id) else {
                warn!(id = %hit.id, "retrieved candidate not in corpus, dropping from results");
                return None;
            };
            let semantic_score = f64::from(hit.score);
            let metadata_score = scorer::metadata_score(query, &record.attributes);
            Some(ScoredCandidate {
                id: hit.id.clone(),
                semantic_score,
                metadata_score,
                fused_score: semantic_score * SEMANTIC_WEIGHT + metadata_score * METADATA_WEIGHT,
                rank: 0,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.fused_score
            .partial_cmp(&a.fused_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortlist_core::{CandidateAttributes, CandidateId, CandidateRecord};

    fn corpus_with(skills: &[(&str, &[&str], f64)]) -> (Corpus, Vec<CandidateId>) {
        let mut corpus = Corpus::new();
        let mut ids = Vec::new();
        for (name, skill_list, years) in skills {
            let record = CandidateRecord::new(
                format!("{name}.pdf"),
                format!("{name} resume"),
                CandidateAttributes {
                    name: name.to_string(),
                    skills: skill_list.iter().map(|s| s.to_string()).collect(),
                    experience_years: *years,
                    ..Default::default()
                },
            );
            ids.push(record.id.clone());
            corpus.insert(record).unwrap();
        }
        (corpus, ids)
    }

    fn hit(id: &CandidateId, score: f32) -> IndexHit {
        IndexHit {
            id: id.clone(),
            score,
        }
    }

    #[test]
    fn fuses_semantic_and_metadata() {
        let (corpus, ids) = corpus_with(&[("ada", &["Python"], 0.0)]);
        let ranked = rank_candidates("Python developer", &[hit(&ids[0], 0.5)], &corpus, 5);

        assert_eq!(ranked.len(), 1);
        let c = &ranked[0];
        assert_eq!(c.semantic_score, 0.5);
        assert!((c.metadata_score - 0.05).abs() < 1e-9);
        assert!((c.fused_score - (0.5 * 0.6 + 0.05 * 0.4)).abs() < 1e-9);
        assert_eq!(c.rank, 1);
    }

    #[test]
    fn metadata_can_reorder_semantic_ties() {
        let (corpus, ids) = corpus_with(&[("weak", &[], 0.0), ("strong", &["Rust"], 0.0)]);
        let hits = vec![hit(&ids[0], 0.8), hit(&ids[1], 0.8)];
        let ranked = rank_candidates("Rust developer", &hits, &corpus, 2);

        assert_eq!(ranked[0].id, ids[1]);
        assert_eq!(ranked[1].id, ids[0]);
    }

    #[test]
    fn equal_fused_scores_preserve_retrieval_order() {
        let (corpus, ids) = corpus_with(&[("a", &[], 0.0), ("b", &[], 0.0), ("c", &[], 0.0)]);
        let hits: Vec<IndexHit> = ids.iter().map(|id| hit(id, 0.7)).collect();
        let ranked = rank_candidates("anything", &hits, &corpus, 3);

        let order: Vec<&CandidateId> = ranked.iter().map(|c| &c.id).collect();
        assert_eq!(order, ids.iter().collect::<Vec<_>>());
        assert_eq!(
            ranked.iter().map(|c| c.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn unresolvable_ids_are_skipped_not_counted() {
        let (corpus, ids) = corpus_with(&[("ada", &["Python"], 0.0), ("bob", &[], 0.0)]);
        let hits = vec![
            hit(&CandidateId::from("ghost"), 0.99),
            hit(&ids[0], 0.5),
            hit(&ids[1], 0.4),
        ];
        let ranked = rank_candidates("Python", &hits, &corpus, 2);

        // The ghost hit is dropped; both real candidates still fill top_k.
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, ids[0]);
        assert_eq!(ranked[1].id, ids[1]);
    }

    #[test]
    fn truncates_to_top_k() {
        let (corpus, ids) = corpus_with(&[("a", &[], 0.0), ("b", &[], 0.0), ("c", &[], 0.0)]);
        let hits: Vec<IndexHit> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| hit(id, 1.0 - i as f32 * 0.1))
            .collect();
        let ranked = rank_candidates("query", &hits, &corpus, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, ids[0]);
    }
}
