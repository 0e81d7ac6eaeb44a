use crate::errors::ShortlistResult;

/// Structured attribute extraction via a generative-language service.
///
/// Returns a `CandidateAttributes`-shaped JSON value. The payload is
/// untrusted — ingestion coerces it defensively and substitutes defaults
/// when this call fails outright.
pub trait IAttributeExtractor: Send + Sync {
    fn extract_attributes(&self, text: &str) -> ShortlistResult<serde_json::Value>;
}
