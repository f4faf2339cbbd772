//! User settings

use super::analysis::AnalysisConfig;
use super::defaults::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, MODEL_ENV};
use crate::error::{BhashaError, BhashaResult};
use crate::prompts::DocType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The persisted user values, plus optional tuning
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Model service credential
    pub api_key: String,
    /// Model identifier, e.g. `gemini-2.5-flash`
    pub model: String,
    /// Kind of document being checked
    pub doc_type: DocType,
    /// Service root, overridable for testing and proxies
    pub base_url: String,
    pub analysis: AnalysisConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            doc_type: DocType::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.masked_api_key())
            .field("model", &self.model)
            .field("doc_type", &self.doc_type)
            .field("base_url", &self.base_url)
            .field("analysis", &self.analysis)
            .finish()
    }
}

impl Settings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Credential with everything but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let key = self.api_key.trim();
        if key.is_empty() {
            return "<not set>".to_string();
        }
        let chars: Vec<char> = key.chars().collect();
        let visible = chars.len().min(4);
        let tail: String = chars[chars.len() - visible..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - visible), tail)
    }

    /// Apply `GEMINI_API_KEY` / `BHASHA_MODEL` when they are set
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(MODEL_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, api_key: Option<String>, model: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            tracing::debug!("using API key from {}", API_KEY_ENV);
            self.api_key = key.trim().to_string();
        }
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            tracing::debug!(model = %model, "using model from {}", MODEL_ENV);
            self.model = model.trim().to_string();
        }
    }

    /// Check the values a model call needs
    pub fn validate(&self) -> BhashaResult<()> {
        if !self.has_api_key() {
            return Err(BhashaError::config_with_context(
                "API key is not set",
                format!("Set it with `bhasha config set-key` or {}", API_KEY_ENV),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(BhashaError::config("model identifier is empty"));
        }
        if self.analysis.highlight_chunk_size == 0 {
            return Err(BhashaError::config("highlight_chunk_size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.doc_type, DocType::Generic);
        assert!(!settings.has_api_key());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_masked_key_hides_secret() {
        let settings = Settings {
            api_key: "AIzaSecret1234".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.masked_api_key(), "**********1234");
        assert!(!format!("{:?}", settings).contains("AIzaSecret"));
    }

    #[test]
    fn test_overrides_ignore_blank_values() {
        let mut settings = Settings {
            api_key: "stored".to_string(),
            ..Default::default()
        };
        settings.apply_overrides(Some("  ".to_string()), Some("gemini-2.0-pro".to_string()));
        assert_eq!(settings.api_key, "stored");
        assert_eq!(settings.model, "gemini-2.0-pro");
    }

    #[test]
    fn test_unknown_fields_fall_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"api_key": "k", "doc_type": "official"}"#).unwrap();
        assert_eq!(settings.doc_type, DocType::Official);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert!(settings.validate().is_ok());
    }
}
