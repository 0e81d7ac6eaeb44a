//! # shortlist-retrieval
//!
//! The ranking core of Shortlist: an exact inner-product vector index over
//! unit-normalized embeddings, the metadata similarity heuristic, score
//! fusion, and the engine that orchestrates ingest → retrieve → re-rank.

pub mod engine;
pub mod enrichment;
pub mod explain;
pub mod index;
pub mod ranking;

pub use engine::{IngestStats, ShortlistEngine};
pub use index::{IndexHit, VectorIndex};
