//! Error text scrubbing
//!
//! Service error bodies end up in logs and in `Display` output, so secrets
//! are redacted and long bodies truncated first.

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_ERROR_TEXT_CHARS: usize = 512;
const REDACTED: &str = "[REDACTED]";

static KEY_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([?&]key=)[^&\s]+").expect("valid key parameter regex"));

static KEY_VALUE_SECRET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)("?(?:api[_-]?key|x-goog-api-key|token)"?\s*[:=]\s*"?)[^"',\s}]+"#)
        .expect("valid key/value secret regex")
});

/// Redact credentials and truncate to a loggable size
pub fn sanitize_error_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty response body>".to_string();
    }

    let redacted = KEY_PARAM_RE.replace_all(trimmed, format!("${{1}}{}", REDACTED));
    let redacted = KEY_VALUE_SECRET_RE.replace_all(&redacted, format!("${{1}}{}", REDACTED));

    if redacted.chars().count() <= MAX_ERROR_TEXT_CHARS {
        return redacted.into_owned();
    }
    let mut truncated: String = redacted.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    truncated.push_str("...[truncated]");
    truncated
}
