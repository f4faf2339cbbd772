//! Reply interpretation and failure classification

use super::types::ModelClient;
use crate::config::ParseFailurePolicy;
use crate::error::{BhashaError, BhashaResult, ErrorKind};
use crate::llm::extract::{extract_json, extract_model_text, has_expected_keys};
use crate::llm::sanitize::sanitize_error_text;
use crate::llm::transport::RawReply;
use serde_json::Value;

impl ModelClient {
    /// Turn one HTTP reply into a payload or a classified error.
    ///
    /// `Ok(None)` means the model produced no text at all.
    pub(super) fn interpret_reply(&self, reply: RawReply) -> BhashaResult<Option<Value>> {
        if !reply.is_success() {
            return Err(BhashaError::from_status(
                reply.status,
                sanitize_error_text(&reply.body),
            ));
        }

        let envelope: Value = serde_json::from_str(&reply.body).map_err(|e| {
            BhashaError::invalid_structure(format!("response envelope is not JSON: {}", e))
        })?;

        let text = extract_model_text(&envelope);
        if text.is_empty() {
            tracing::debug!("model returned no text");
            return Ok(None);
        }

        let payload = extract_json(&text)
            .ok_or_else(|| BhashaError::parse("no JSON object in model text"))?;

        if !has_expected_keys(&payload) {
            return Err(BhashaError::invalid_structure(
                "payload carries none of the expected keys",
            ));
        }

        Ok(Some(payload))
    }

    /// Whether another attempt may follow this error
    pub fn is_retryable_error(&self, error: &BhashaError) -> bool {
        match error.kind() {
            ErrorKind::Parse => self.policy.parse_failure == ParseFailurePolicy::Retry,
            _ => error.is_retryable(),
        }
    }

    /// Parse failures end the call with an empty result under `ReturnEmpty`
    pub(super) fn yields_empty(&self, error: &BhashaError) -> bool {
        error.kind() == ErrorKind::Parse
            && self.policy.parse_failure == ParseFailurePolicy::ReturnEmpty
    }
}
