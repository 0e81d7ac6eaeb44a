//! Candidate attributes and defensive coercion.
//!
//! Attributes come from a generative extractor and are untrusted: any field
//! may be missing, wrongly typed, or nested in an unexpected shape. Coercion
//! resolves every shape into canonical lists at ingestion time and never
//! fails — a hopeless payload degrades to the all-default struct.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::MAX_SKILLS;

/// Keys tried, in order, when a list item arrives as a key-value record.
const ITEM_KEYS: [&str; 4] = ["skill", "name", "title", "degree"];

/// Structured attributes of one candidate, canonical form.
///
/// All list fields hold trimmed, non-empty strings; `skills` is capped at
/// [`MAX_SKILLS`]. `experience_years` is finite and non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateAttributes {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience_years: f64,
    pub education: Vec<String>,
    pub job_titles: Vec<String>,
    pub summary: String,
}

/// A list field as the extractor may deliver it: a delimited string, a
/// sequence of strings, or a sequence of heterogeneous records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawList {
    Text(String),
    Items(Vec<RawItem>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawItem {
    Text(String),
    Record(serde_json::Map<String, Value>),
    Other(Value),
}

impl CandidateAttributes {
    /// Coerce an extractor payload into canonical attributes.
    ///
    /// Non-object payloads and unrecognized field shapes degrade to the
    /// field's default; this function cannot fail.
    pub fn from_extracted(value: Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        Self {
            name: coerce_text(map.get("name")),
            email: coerce_text(map.get("email")),
            phone: coerce_text(map.get("phone")),
            skills: {
                let mut skills = coerce_list(map.get("skills"));
                skills.truncate(MAX_SKILLS);
                skills
            },
            experience_years: coerce_years(map.get("experience_years")),
            education: coerce_list(map.get("education")),
            job_titles: coerce_list(map.get("job_titles")),
            summary: coerce_text(map.get("summary")),
        }
    }
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Resolve a list field into trimmed, non-empty strings.
///
/// A plain string splits on comma, semicolon, pipe, or newline. A record
/// item resolves to the first of [`ITEM_KEYS`] present, else its first
/// string-typed value, else the whole record stringified.
fn coerce_list(value: Option<&Value>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    let Ok(raw) = serde_json::from_value::<RawList>(value.clone()) else {
        return Vec::new();
    };

    let items = match raw {
        RawList::Text(text) => text
            .split([',', ';', '|', '\n'])
            .map(str::to_string)
            .collect(),
        RawList::Items(items) => items.into_iter().map(resolve_item).collect::<Vec<_>>(),
    };

    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn resolve_item(item: RawItem) -> String {
    match item {
        RawItem::Text(s) => s,
        RawItem::Record(map) => {
            for key in ITEM_KEYS {
                if let Some(value) = map.get(key) {
                    return scalar_to_string(value);
                }
            }
            if let Some(s) = map.values().find_map(Value::as_str) {
                return s.to_string();
            }
            Value::Object(map).to_string()
        }
        RawItem::Other(value) => scalar_to_string(&value),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn coerce_years(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_f64)
        .filter(|y| y.is_finite())
        .map(|y| y.max(0.0))
        .unwrap_or(0.0)
}
