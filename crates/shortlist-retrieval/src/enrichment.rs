//! Text enrichment for embedding.
//!
//! Candidates are embedded from an enriched profile (extracted attributes
//! prepended to the raw text) rather than raw text alone, and queries carry
//! a fixed requirement framing. Both strings must stay byte-stable across
//! rebuilds — ranking determinism depends on it.

use shortlist_core::constants::EMBED_TEXT_MAX_CHARS;
use shortlist_core::text::truncate_chars;
use shortlist_core::CandidateRecord;

/// The enriched text a candidate is embedded from: name, skills, experience,
/// summary, then the leading slice of the raw resume text.
pub fn profile_text(record: &CandidateRecord) -> String {
    let attributes = &record.attributes;
    format!(
        "Candidate Profile:\n\
         Name: {}\n\
         Skills: {}\n\
         Experience: {} years\n\
         Summary: {}\n\n\
         Resume Content:\n{}",
        record.display_name(),
        attributes.skills.join(", "),
        attributes.experience_years,
        attributes.summary,
        truncate_chars(&record.text, EMBED_TEXT_MAX_CHARS),
    )
}

/// The query as embedded: framed as a requirement description so the
/// embedding space treats it like the indexed profiles.
pub fn requirement_query(query: &str) -> String {
    format!("Project Requirements:\n{query}\nLooking for relevant candidates.")
}
