use std::path::Path;

use crate::errors::ShortlistResult;

/// Raw-text extraction from a source document (PDF, DOCX, …).
pub trait ITextExtractor: Send + Sync {
    /// Extract the full text of the document at `path`.
    fn extract_text(&self, path: &Path) -> ShortlistResult<String>;
}
