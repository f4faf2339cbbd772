//! Payload recovery from model output

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Top-level keys that make a payload recognizable
pub const EXPECTED_KEYS: [&str; 8] = [
    "_analysis",
    "spellingErrors",
    "languageStyleMixing",
    "punctuationIssues",
    "euphonyImprovements",
    "toneConversions",
    "styleConversions",
    "contentType",
];

/// First `{` to last `}`, across lines
static OBJECT_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object span regex"));

/// Concatenate `candidates[0].content.parts[].text` in order, trimmed.
///
/// Anything missing along the way yields an empty string.
pub fn extract_model_text(envelope: &Value) -> String {
    let parts = envelope
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array);

    let Some(parts) = parts else {
        return String::new();
    };

    parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse the model text directly, then fall back to the widest `{...}` span.
pub fn extract_json(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Some(value);
    }

    let span = OBJECT_SPAN_RE.find(text)?;
    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(value) => {
            tracing::debug!("recovered JSON object from surrounding text");
            Some(value)
        }
        Err(e) => {
            tracing::debug!(error = %e, "embedded object did not parse");
            None
        }
    }
}

/// True when `payload` is an object carrying at least one expected key
pub fn has_expected_keys(payload: &Value) -> bool {
    payload
        .as_object()
        .is_some_and(|map| EXPECTED_KEYS.iter().any(|key| map.contains_key(*key)))
}
