//! Benchmarks for the ranking core: exhaustive index query and the
//! metadata heuristic at realistic corpus sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shortlist_core::CandidateAttributes;
use shortlist_core::CandidateId;
use shortlist_retrieval::ranking::scorer::metadata_score;
use shortlist_retrieval::VectorIndex;

fn pseudo_vector(seed: u64, dims: usize) -> Vec<f32> {
    // Cheap xorshift so the bench needs no RNG dependency.
    let mut state = seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1;
    (0..dims)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state as f32 / u64::MAX as f32) * 2.0 - 1.0
        })
        .collect()
}

fn bench_index_query(c: &mut Criterion) {
    let dims = 384;
    let corpus_size = 200;
    let vectors: Vec<Vec<f32>> = (0..corpus_size)
        .map(|i| pseudo_vector(i as u64, dims))
        .collect();
    let ids: Vec<CandidateId> = (0..corpus_size)
        .map(|i| CandidateId::from(format!("c{i}")))
        .collect();
    let index = VectorIndex::build(vectors, ids).unwrap();
    let query = pseudo_vector(9999, dims);

    c.bench_function("index_query_200x384_top10", |b| {
        b.iter(|| index.query(black_box(&query), black_box(10)).unwrap())
    });
}

fn bench_metadata_score(c: &mut Criterion) {
    let attributes = CandidateAttributes {
        name: "Bench Candidate".to_string(),
        skills: vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Rust".to_string(),
            "Kubernetes".to_string(),
            "React".to_string(),
        ],
        experience_years: 7.0,
        education: vec!["MSc Computer Science".to_string(), "PhD Physics".to_string()],
        job_titles: vec!["Data Engineer".to_string(), "Backend Developer".to_string()],
        ..Default::default()
    };
    let query = "Need a senior Python and SQL data engineer with a PhD, Rust a plus";

    c.bench_function("metadata_score", |b| {
        b.iter(|| metadata_score(black_box(query), black_box(&attributes)))
    });
}

criterion_group!(benches, bench_index_query, bench_metadata_score);
criterion_main!(benches);
