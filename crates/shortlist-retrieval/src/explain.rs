//! Fit-explanation orchestration.
//!
//! The engine prepares a bounded context (top skills, capped excerpt) and
//! delegates generation to the explainer collaborator. Generation failure
//! degrades to a default structure carrying the error and the candidate's
//! numeric score — explanation is display-only and must never abort
//! ranking flows.

use tracing::warn;

use shortlist_core::constants::{EXPLAIN_EXCERPT_MAX_CHARS, MAX_EXPLAIN_SKILLS};
use shortlist_core::text::excerpt;
use shortlist_core::traits::IFitExplainer;
use shortlist_core::{CandidateRecord, FitContext, FitExplanation};

/// Assemble the explainer input for one candidate.
pub fn build_context(query: &str, record: &CandidateRecord, score: f64) -> FitContext {
    let attributes = &record.attributes;
    FitContext {
        query: query.to_string(),
        name: record.display_name(),
        skills: attributes
            .skills
            .iter()
            .take(MAX_EXPLAIN_SKILLS)
            .cloned()
            .collect(),
        experience_years: attributes.experience_years,
        job_titles: attributes.job_titles.clone(),
        education: attributes.education.clone(),
        excerpt: excerpt(&record.text, EXPLAIN_EXCERPT_MAX_CHARS),
        score,
    }
}

/// Run the explainer, substituting a default explanation on failure.
pub fn explain_with_fallback(
    explainer: &dyn IFitExplainer,
    query: &str,
    record: &CandidateRecord,
    score: f64,
) -> FitExplanation {
    let context = build_context(query, record, score);
    match explainer.explain_fit(&context) {
        Ok(explanation) => explanation,
        Err(e) => {
            warn!(id = %record.id, error = %e, "explanation failed, substituting default");
            FitExplanation {
                name: context.name,
                skills: context.skills,
                reasons: vec![format!("explanation unavailable: {e}")],
                score,
                error: Some(e.to_string()),
            }
        }
    }
}
