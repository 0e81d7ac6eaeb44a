/// Vector index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("index build requires at least one vector")]
    Empty,

    #[error("no index built: ingest a corpus before querying")]
    NotReady,

    #[error("vector/id length mismatch: {vectors} vectors, {ids} ids")]
    LengthMismatch { vectors: usize, ids: usize },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
