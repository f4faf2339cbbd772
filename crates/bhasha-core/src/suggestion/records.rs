//! Typed suggestion records as they arrive from the model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::BhashaError;

/// The six suggestion categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Spelling,
    Tone,
    Style,
    Mixing,
    Punctuation,
    Euphony,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Spelling,
        Category::Tone,
        Category::Style,
        Category::Mixing,
        Category::Punctuation,
        Category::Euphony,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spelling => "spelling",
            Self::Tone => "tone",
            Self::Style => "style",
            Self::Mixing => "mixing",
            Self::Punctuation => "punctuation",
            Self::Euphony => "euphony",
        }
    }

    /// Section title shown above the category
    pub fn title(&self) -> &'static str {
        match self {
            Self::Spelling => "বানান ভুল",
            Self::Tone => "টোন পরিবর্তন",
            Self::Style => "ভাষারীতি পরিবর্তন",
            Self::Mixing => "সাধু-চলিত মিশ্রণ",
            Self::Punctuation => "যতিচিহ্ন",
            Self::Euphony => "শ্রুতিমাধুর্য",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BhashaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spelling" => Ok(Self::Spelling),
            "tone" => Ok(Self::Tone),
            "style" => Ok(Self::Style),
            "mixing" => Ok(Self::Mixing),
            "punct" | "punctuation" => Ok(Self::Punctuation),
            "euphony" => Ok(Self::Euphony),
            other => Err(BhashaError::invalid_input_field(
                format!("unknown category '{}'", other),
                "category",
            )),
        }
    }
}

/// Accepts a non-negative integer, a float, a numeric string or nothing.
/// Anything unusable becomes 0; the position is only a hint.
fn lenient_position<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let position = match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    };
    Ok(position as usize)
}

/// Drops scores the model wrote as strings or out of range
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|score| score.is_finite()))
}

/// Severity of a spelling finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Minor,
}

/// A misspelled word with its corrections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellingSuggestion {
    pub wrong: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, deserialize_with = "lenient_position")]
    pub position: usize,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// A rewrite toward the selected communicative tone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneSuggestion {
    pub current: String,
    pub suggestion: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient_position")]
    pub position: usize,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
}

/// A Sadhu/Cholito conversion toward the selected style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSuggestion {
    pub current: String,
    pub suggestion: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_position")]
    pub position: usize,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
}

/// One fix inside a style-mixing report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixingCorrection {
    pub current: String,
    pub suggestion: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_position")]
    pub position: usize,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
}

/// A sentence with a punctuation problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunctuationIssue {
    #[serde(default)]
    pub issue: String,
    pub current_sentence: String,
    pub corrected_sentence: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, deserialize_with = "lenient_position")]
    pub position: usize,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
}

/// A phrasing that reads or sounds more naturally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EuphonyImprovement {
    pub current: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient_position")]
    pub position: usize,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
}

/// Inconsistent Sadhu/Cholito usage across the text.
///
/// Never held with an empty `corrections` list; see
/// `StyleMixingReport::retain_corrections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMixingReport {
    #[serde(default)]
    pub detected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub corrections: Vec<MixingCorrection>,
}

impl StyleMixingReport {
    /// Keep the corrections `keep` accepts; `None` when nothing is left.
    pub fn retain_corrections<F>(mut self, keep: F) -> Option<Self>
    where
        F: FnMut(&MixingCorrection) -> bool,
    {
        self.corrections.retain(keep);
        if self.corrections.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// Structural review of the whole text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub missing_elements: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// The model's own reading of the text, requested before its findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMeta {
    #[serde(default)]
    pub detected_tone: String,
    #[serde(default)]
    pub detected_style: String,
    #[serde(default)]
    pub overall_quality: String,
}

/// Common view over every record kind
pub trait SuggestionRecord: Clone {
    const CATEGORY: Category;

    /// The text the record is anchored to; compared via `NormalizedKey`
    fn identity_text(&self) -> &str;

    fn candidates(&self) -> Vec<&str>;

    fn explanation(&self) -> Option<&str>;

    fn position(&self) -> usize;

    fn confidence_score(&self) -> Option<f64>;

    /// A missing score counts as full confidence
    fn confidence(&self) -> f64 {
        self.confidence_score().unwrap_or(1.0)
    }

    fn into_suggestion(self) -> Suggestion;
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

impl SuggestionRecord for SpellingSuggestion {
    const CATEGORY: Category = Category::Spelling;

    fn identity_text(&self) -> &str {
        &self.wrong
    }

    fn candidates(&self) -> Vec<&str> {
        self.suggestions.iter().map(String::as_str).collect()
    }

    fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref().and_then(non_empty)
    }

    fn position(&self) -> usize {
        self.position
    }

    fn confidence_score(&self) -> Option<f64> {
        self.confidence_score
    }

    fn into_suggestion(self) -> Suggestion {
        Suggestion::Spelling(self)
    }
}

impl SuggestionRecord for ToneSuggestion {
    const CATEGORY: Category = Category::Tone;

    fn identity_text(&self) -> &str {
        &self.current
    }

    fn candidates(&self) -> Vec<&str> {
        vec![self.suggestion.as_str()]
    }

    fn explanation(&self) -> Option<&str> {
        non_empty(&self.reason)
    }

    fn position(&self) -> usize {
        self.position
    }

    fn confidence_score(&self) -> Option<f64> {
        self.confidence_score
    }

    fn into_suggestion(self) -> Suggestion {
        Suggestion::Tone(self)
    }
}

impl SuggestionRecord for StyleSuggestion {
    const CATEGORY: Category = Category::Style;

    fn identity_text(&self) -> &str {
        &self.current
    }

    fn candidates(&self) -> Vec<&str> {
        vec![self.suggestion.as_str()]
    }

    fn explanation(&self) -> Option<&str> {
        non_empty(&self.kind)
    }

    fn position(&self) -> usize {
        self.position
    }

    fn confidence_score(&self) -> Option<f64> {
        self.confidence_score
    }

    fn into_suggestion(self) -> Suggestion {
        Suggestion::Style(self)
    }
}

impl SuggestionRecord for MixingCorrection {
    const CATEGORY: Category = Category::Mixing;

    fn identity_text(&self) -> &str {
        &self.current
    }

    fn candidates(&self) -> Vec<&str> {
        vec![self.suggestion.as_str()]
    }

    fn explanation(&self) -> Option<&str> {
        non_empty(&self.kind)
    }

    fn position(&self) -> usize {
        self.position
    }

    fn confidence_score(&self) -> Option<f64> {
        self.confidence_score
    }

    fn into_suggestion(self) -> Suggestion {
        Suggestion::Mixing(self)
    }
}

impl SuggestionRecord for PunctuationIssue {
    const CATEGORY: Category = Category::Punctuation;

    fn identity_text(&self) -> &str {
        &self.current_sentence
    }

    fn candidates(&self) -> Vec<&str> {
        vec![self.corrected_sentence.as_str()]
    }

    fn explanation(&self) -> Option<&str> {
        non_empty(&self.explanation).or_else(|| non_empty(&self.issue))
    }

    fn position(&self) -> usize {
        self.position
    }

    fn confidence_score(&self) -> Option<f64> {
        self.confidence_score
    }

    fn into_suggestion(self) -> Suggestion {
        Suggestion::Punctuation(self)
    }
}

impl SuggestionRecord for EuphonyImprovement {
    const CATEGORY: Category = Category::Euphony;

    fn identity_text(&self) -> &str {
        &self.current
    }

    fn candidates(&self) -> Vec<&str> {
        self.suggestions.iter().map(String::as_str).collect()
    }

    fn explanation(&self) -> Option<&str> {
        non_empty(&self.reason)
    }

    fn position(&self) -> usize {
        self.position
    }

    fn confidence_score(&self) -> Option<f64> {
        self.confidence_score
    }

    fn into_suggestion(self) -> Suggestion {
        Suggestion::Euphony(self)
    }
}

/// Any suggestion, discriminated by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    Spelling(SpellingSuggestion),
    Tone(ToneSuggestion),
    Style(StyleSuggestion),
    Mixing(MixingCorrection),
    Punctuation(PunctuationIssue),
    Euphony(EuphonyImprovement),
}

macro_rules! dispatch {
    ($self:expr, $record:ident => $body:expr) => {
        match $self {
            Suggestion::Spelling($record) => $body,
            Suggestion::Tone($record) => $body,
            Suggestion::Style($record) => $body,
            Suggestion::Mixing($record) => $body,
            Suggestion::Punctuation($record) => $body,
            Suggestion::Euphony($record) => $body,
        }
    };
}

impl Suggestion {
    pub fn category(&self) -> Category {
        match self {
            Self::Spelling(_) => Category::Spelling,
            Self::Tone(_) => Category::Tone,
            Self::Style(_) => Category::Style,
            Self::Mixing(_) => Category::Mixing,
            Self::Punctuation(_) => Category::Punctuation,
            Self::Euphony(_) => Category::Euphony,
        }
    }

    pub fn identity_text(&self) -> &str {
        dispatch!(self, r => r.identity_text())
    }

    pub fn candidates(&self) -> Vec<&str> {
        dispatch!(self, r => r.candidates())
    }

    pub fn explanation(&self) -> Option<&str> {
        dispatch!(self, r => r.explanation())
    }

    pub fn position(&self) -> usize {
        dispatch!(self, r => r.position())
    }

    pub fn confidence(&self) -> f64 {
        dispatch!(self, r => r.confidence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spelling_defaults() {
        let record: SpellingSuggestion = serde_json::from_value(json!({
            "wrong": "বিদ্যালয়ে",
        }))
        .unwrap();
        assert_eq!(record.position, 0);
        assert!(record.suggestions.is_empty());
        assert_eq!(record.confidence(), 1.0);
    }

    #[test]
    fn test_lenient_position_and_score() {
        let record: ToneSuggestion = serde_json::from_value(json!({
            "current": "তুই",
            "suggestion": "আপনি",
            "position": null,
            "confidenceScore": "0.85"
        }))
        .unwrap();
        assert_eq!(record.position, 0);
        assert_eq!(record.confidence_score, Some(0.85));

        let record: ToneSuggestion = serde_json::from_value(json!({
            "current": "তুই",
            "suggestion": "আপনি",
            "position": 4.0
        }))
        .unwrap();
        assert_eq!(record.position, 4);
    }

    #[test]
    fn test_identity_fields() {
        let punct: PunctuationIssue = serde_json::from_value(json!({
            "issue": "missing dari",
            "currentSentence": "সে বাড়ি গেল",
            "correctedSentence": "সে বাড়ি গেল।",
            "explanation": ""
        }))
        .unwrap();
        assert_eq!(punct.identity_text(), "সে বাড়ি গেল");
        assert_eq!(punct.explanation(), Some("missing dari"));

        let style: StyleSuggestion = serde_json::from_value(json!({
            "current": "করিতেছি",
            "suggestion": "করছি",
            "type": "verb"
        }))
        .unwrap();
        assert_eq!(style.identity_text(), "করিতেছি");
        assert_eq!(style.candidates(), vec!["করছি"]);
    }

    #[test]
    fn test_suggestion_is_tagged_by_kind() {
        let suggestion = Suggestion::Tone(ToneSuggestion {
            current: "তোর".into(),
            suggestion: "আপনার".into(),
            reason: String::new(),
            position: 2,
            confidence_score: None,
        });
        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["kind"], "tone");
        assert_eq!(value["current"], "তোর");
        assert_eq!(suggestion.category(), Category::Tone);
        assert_eq!(suggestion.position(), 2);

        let back: Suggestion = serde_json::from_value(value).unwrap();
        assert_eq!(back, suggestion);
    }

    #[test]
    fn test_mixing_report_collapses_when_empty() {
        let report = StyleMixingReport {
            detected: true,
            recommended_style: Some("cholito".into()),
            reason: None,
            corrections: vec![MixingCorrection {
                current: "তাহার".into(),
                suggestion: "তার".into(),
                kind: "pronoun".into(),
                position: 0,
                confidence_score: Some(0.5),
            }],
        };
        assert!(report.clone().retain_corrections(|c| c.confidence() >= 0.85).is_none());
        assert!(report.retain_corrections(|c| c.confidence() >= 0.4).is_some());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("punct".parse::<Category>().unwrap(), Category::Punctuation);
        assert_eq!(" Tone ".parse::<Category>().unwrap(), Category::Tone);
        assert!("grammar".parse::<Category>().is_err());
    }
}
