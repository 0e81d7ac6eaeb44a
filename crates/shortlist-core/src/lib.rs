//! # shortlist-core
//!
//! Foundation crate for the Shortlist candidate-ranking engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use candidate::{CandidateAttributes, CandidateId, CandidateRecord};
pub use config::ShortlistConfig;
pub use errors::{ShortlistError, ShortlistResult};
pub use models::{FitContext, FitExplanation, ScoredCandidate};
