//! Property tests for the scoring heuristic and the vector index.

use proptest::prelude::*;

use shortlist_core::CandidateAttributes;
use shortlist_core::CandidateId;
use shortlist_retrieval::ranking::scorer::metadata_score;
use shortlist_retrieval::VectorIndex;

fn arb_attributes() -> impl Strategy<Value = CandidateAttributes> {
    (
        "[ -~]{0,20}",
        prop::collection::vec("[a-zA-Z+#]{1,12}", 0..10),
        0.0f64..50.0,
        prop::collection::vec("[ -~]{1,30}", 0..6),
        prop::collection::vec("[a-zA-Z ]{1,20}", 0..6),
    )
        .prop_map(|(name, skills, experience_years, education, job_titles)| {
            CandidateAttributes {
                name,
                skills,
                experience_years,
                education,
                job_titles,
                ..Default::default()
            }
        })
}

proptest! {
    #[test]
    fn metadata_score_is_bounded(query in "[ -~]{0,80}", attributes in arb_attributes()) {
        let score = metadata_score(&query, &attributes);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn skill_contribution_is_monotonic(n in 0usize..10) {
        // All skills match the query; more matches never lower the score.
        let query = "rust developer wanted";
        let score_at = |count: usize| {
            let attributes = CandidateAttributes {
                skills: vec!["rust".to_string(); count],
                ..Default::default()
            };
            metadata_score(query, &attributes)
        };
        prop_assert!(score_at(n + 1) >= score_at(n));
        // The cap: eight matches score the same as ten.
        prop_assert_eq!(score_at(8), score_at(10));
    }

    #[test]
    fn query_results_are_sorted_and_bounded(
        vectors in prop::collection::vec(
            prop::collection::vec(-1.0f32..1.0, 8),
            1..30,
        ),
        query in prop::collection::vec(-1.0f32..1.0, 8),
        k in 0usize..40,
    ) {
        let n = vectors.len();
        let ids: Vec<CandidateId> = (0..n).map(|i| CandidateId::from(format!("c{i}"))).collect();
        let index = VectorIndex::build(vectors, ids).unwrap();

        let hits = index.query(&query, k).unwrap();
        prop_assert_eq!(hits.len(), k.min(n));
        prop_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn query_is_deterministic(
        vectors in prop::collection::vec(
            prop::collection::vec(-1.0f32..1.0, 6),
            1..20,
        ),
        query in prop::collection::vec(-1.0f32..1.0, 6),
    ) {
        let n = vectors.len();
        let ids: Vec<CandidateId> = (0..n).map(|i| CandidateId::from(format!("c{i}"))).collect();
        let index = VectorIndex::build(vectors.clone(), ids.clone()).unwrap();
        let rebuilt = VectorIndex::build(vectors, ids).unwrap();

        let a = index.query(&query, n).unwrap();
        let b = rebuilt.query(&query, n).unwrap();
        prop_assert_eq!(a, b);
    }
}
