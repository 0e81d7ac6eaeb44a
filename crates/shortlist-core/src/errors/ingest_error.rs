/// Ingestion subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("ingestion produced zero usable records")]
    EmptyCorpus,

    #[error("duplicate candidate id: {id}")]
    DuplicateId { id: String },

    #[error("duplicate source path: {path}")]
    DuplicateSource { path: String },

    #[error("text extraction failed: {path}: {reason}")]
    TextExtraction { path: String, reason: String },

    #[error("attribute extraction failed: {reason}")]
    AttributeExtraction { reason: String },
}
