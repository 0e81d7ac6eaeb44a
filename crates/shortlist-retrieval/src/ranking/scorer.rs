//! Rule-based metadata similarity.
//!
//! A fixed heuristic, not a trained model: skills, seniority, education,
//! and job titles each contribute points, clamped into [0,1]. The point
//! values are compatibility constants — see `shortlist_core::constants`.

use shortlist_core::constants::{
    DEGREE_MATCH_POINTS, SENIORITY_BONUS, SENIOR_EXPERIENCE_YEARS, SKILL_MATCH_CAP,
    SKILL_MATCH_POINTS, TITLE_MATCH_POINTS,
};
use shortlist_core::CandidateAttributes;

/// Score a candidate's attributes against a free-text requirement query.
///
/// Always in [0,1]. Zero when the query shares no substrings with any
/// skill, degree, or title and no seniority keyword matches.
pub fn metadata_score(query: &str, attributes: &CandidateAttributes) -> f64 {
    let query_lower = query.to_lowercase();
    let mut score = 0.0;

    // Skills: each skill appearing in the query earns points, capped.
    let matched = attributes
        .skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| !s.is_empty() && query_lower.contains(s.as_str()))
        .count();
    score += (matched as f64 * SKILL_MATCH_POINTS).min(SKILL_MATCH_CAP);

    // Seniority: mutually exclusive senior/junior bonus.
    if query_lower.contains("senior") && attributes.experience_years >= SENIOR_EXPERIENCE_YEARS {
        score += SENIORITY_BONUS;
    } else if query_lower.contains("junior")
        && attributes.experience_years < SENIOR_EXPERIENCE_YEARS
    {
        score += SENIORITY_BONUS;
    }

    // Education: each matching degree adds its own points.
    for degree in &attributes.education {
        let degree_lower = degree.to_lowercase();
        if query_lower.contains("phd") && degree_lower.contains("phd") {
            score += DEGREE_MATCH_POINTS;
        } else if query_lower.contains("master") && degree_lower.contains("master") {
            score += DEGREE_MATCH_POINTS;
        }
    }

    // Job titles: substring-of-query, uncapped except by the final clamp.
    for title in &attributes.job_titles {
        let title_lower = title.to_lowercase();
        if !title_lower.is_empty() && query_lower.contains(&title_lower) {
            score += TITLE_MATCH_POINTS;
        }
    }

    score.min(1.0)
}
