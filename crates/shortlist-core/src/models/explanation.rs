//! Human-readable fit justification, produced by the explainer collaborator.

use serde::{Deserialize, Serialize};

/// Engine-prepared input for the fit explainer: everything the generative
/// collaborator needs to justify one candidate against one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitContext {
    pub query: String,
    pub name: String,
    /// At most five skills, most salient first.
    pub skills: Vec<String>,
    pub experience_years: f64,
    pub job_titles: Vec<String>,
    pub education: Vec<String>,
    /// Resume excerpt, capped for prompt budget.
    pub excerpt: String,
    /// The candidate's fused ranking score.
    pub score: f64,
}

/// Why a candidate fits a requirement. Used for display only — never for
/// ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitExplanation {
    pub name: String,
    pub skills: Vec<String>,
    pub reasons: Vec<String>,
    pub score: f64,
    /// Present when explanation generation failed and this structure is the
    /// degraded default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
