/// Shortlist system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Score fusion ---

/// Weight of the semantic (inner-product) score in the fused score.
pub const SEMANTIC_WEIGHT: f64 = 0.6;
/// Weight of the metadata heuristic score in the fused score.
pub const METADATA_WEIGHT: f64 = 0.4;

// --- Metadata heuristic ---

/// Points per skill that appears in the query text.
pub const SKILL_MATCH_POINTS: f64 = 0.05;
/// Cap on the total skill-match contribution.
pub const SKILL_MATCH_CAP: f64 = 0.4;
/// Bonus when the query's seniority keyword matches the candidate's experience.
pub const SENIORITY_BONUS: f64 = 0.2;
/// Years of experience at which a candidate counts as senior.
pub const SENIOR_EXPERIENCE_YEARS: f64 = 5.0;
/// Points per degree matching a degree keyword in the query.
pub const DEGREE_MATCH_POINTS: f64 = 0.1;
/// Points per job title that appears in the query text.
pub const TITLE_MATCH_POINTS: f64 = 0.05;

// --- Retrieval ---

/// Retrieval fetches `top_k * OVERSAMPLE_FACTOR` candidates so the metadata
/// re-ranker has room to reorder before truncation.
pub const OVERSAMPLE_FACTOR: usize = 2;

// --- Attribute coercion ---

/// Maximum number of skills retained per candidate.
pub const MAX_SKILLS: usize = 10;

// --- Text budgets ---

/// Display excerpt length stored on each record.
pub const EXCERPT_MAX_CHARS: usize = 2000;
/// Raw-text prefix included in the enriched embedding text.
pub const EMBED_TEXT_MAX_CHARS: usize = 3000;
/// Resume excerpt handed to the fit explainer.
pub const EXPLAIN_EXCERPT_MAX_CHARS: usize = 1500;
/// Maximum number of skills handed to the fit explainer.
pub const MAX_EXPLAIN_SKILLS: usize = 5;
