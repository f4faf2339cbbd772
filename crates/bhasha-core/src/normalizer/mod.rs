//! Response normalization
//!
//! Turns a recovered JSON payload into typed records. Elements that cannot
//! be decoded are skipped, confidence thresholds are applied per category
//! and the spelling statistics are computed against the analysed text.

mod findings;
#[cfg(test)]
mod tests;

pub use findings::MainFindings;

use crate::config::ConfidenceThresholds;
use crate::suggestion::{
    AnalysisMeta, AnalysisStats, ContentAnalysis, EuphonyImprovement, PunctuationIssue,
    SpellingSuggestion, StyleMixingReport, StyleSuggestion, SuggestionRecord, ToneSuggestion,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

const SPELLING_KEY: &str = "spellingErrors";
const PUNCTUATION_KEY: &str = "punctuationIssues";
const EUPHONY_KEY: &str = "euphonyImprovements";
const MIXING_KEY: &str = "languageStyleMixing";
const META_KEY: &str = "_analysis";
const TONE_KEY: &str = "toneConversions";
const STYLE_KEY: &str = "styleConversions";

/// Maps payloads to typed, threshold-filtered records
#[derive(Debug, Clone, Default)]
pub struct ResponseNormalizer {
    thresholds: ConfidenceThresholds,
}

impl ResponseNormalizer {
    pub fn new(thresholds: ConfidenceThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ConfidenceThresholds {
        &self.thresholds
    }

    /// Spelling, punctuation, euphony, mixing and stats from the main payload
    pub fn normalize_main(&self, payload: &Value, text: &str) -> MainFindings {
        let spelling: Vec<SpellingSuggestion> = self.records(payload, SPELLING_KEY);
        let punctuation: Vec<PunctuationIssue> = self.records(payload, PUNCTUATION_KEY);
        let euphony: Vec<EuphonyImprovement> = self.records(payload, EUPHONY_KEY);
        let mixing = self.mixing_report(payload);
        let meta = decode_optional::<AnalysisMeta>(payload, META_KEY);

        if let Some(meta) = &meta {
            debug!(
                tone = %meta.detected_tone,
                style = %meta.detected_style,
                quality = %meta.overall_quality,
                "model self-analysis"
            );
        }

        let stats = AnalysisStats::for_text(text, spelling.len());

        MainFindings {
            spelling,
            punctuation,
            euphony,
            mixing,
            stats,
            meta,
        }
    }

    pub fn normalize_tone(&self, payload: &Value) -> Vec<ToneSuggestion> {
        self.records(payload, TONE_KEY)
    }

    pub fn normalize_style(&self, payload: &Value) -> Vec<StyleSuggestion> {
        self.records(payload, STYLE_KEY)
    }

    /// The content review; no thresholds apply
    pub fn normalize_content(&self, payload: &Value) -> Option<ContentAnalysis> {
        if !payload.is_object() {
            return None;
        }
        match serde_json::from_value::<ContentAnalysis>(payload.clone()) {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                warn!(error = %e, "content analysis could not be decoded");
                None
            }
        }
    }

    fn mixing_report(&self, payload: &Value) -> Option<StyleMixingReport> {
        let report = decode_optional::<StyleMixingReport>(payload, MIXING_KEY)?;
        report.retain_corrections(|c| self.keep(c))
    }

    /// Decode `payload[key]` element by element and apply the threshold
    fn records<T>(&self, payload: &Value, key: &str) -> Vec<T>
    where
        T: SuggestionRecord + DeserializeOwned,
    {
        let Some(items) = payload.get(key).and_then(Value::as_array) else {
            return Vec::new();
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match serde_json::from_value::<T>(item.clone()) {
                Ok(record) if record.identity_text().trim().is_empty() => {
                    debug!(key, index, "skipping record without identity text");
                }
                Ok(record) => {
                    if self.keep(&record) {
                        records.push(record);
                    } else {
                        debug!(
                            key,
                            index,
                            score = record.confidence(),
                            "below confidence threshold"
                        );
                    }
                }
                Err(e) => warn!(key, index, error = %e, "skipping undecodable record"),
            }
        }
        records
    }

    fn keep<T: SuggestionRecord>(&self, record: &T) -> bool {
        self.thresholds.accepts(T::CATEGORY, record.confidence())
    }
}

fn decode_optional<T: DeserializeOwned>(payload: &Value, key: &str) -> Option<T> {
    let value = payload.get(key).filter(|v| !v.is_null())?;
    serde_json::from_value(value.clone())
        .map_err(|e| warn!(key, error = %e, "ignoring undecodable block"))
        .ok()
}
