//! Error taxonomy for the Shortlist workspace.
//!
//! Per-subsystem enums, unified into [`ShortlistError`] for propagation
//! across crate boundaries.

mod embedding_error;
mod explain_error;
mod index_error;
mod ingest_error;

pub use embedding_error::EmbeddingError;
pub use explain_error::ExplainError;
pub use index_error::IndexError;
pub use ingest_error::IngestError;

/// Unified error type for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum ShortlistError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Explain(#[from] ExplainError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used across all Shortlist crates.
pub type ShortlistResult<T> = Result<T, ShortlistError>;
