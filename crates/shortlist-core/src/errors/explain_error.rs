/// Fit-explanation collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("explanation generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("explainer returned a malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("unknown candidate id: {id}")]
    UnknownCandidate { id: String },
}
