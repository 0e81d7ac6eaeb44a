pub mod explanation;
pub mod ingest_report;
pub mod scored_candidate;

pub use explanation::{FitContext, FitExplanation};
pub use ingest_report::{IngestIssue, IngestIssueKind, IngestReport};
pub use scored_candidate::ScoredCandidate;
