//! Suggestion data model
//!
//! Six suggestion kinds share one shape: an identity text echoed from the
//! document, one or more replacement candidates, an optional explanation,
//! a word-index position hint and an optional confidence score.

mod key;
mod records;
mod stats;

pub use key::NormalizedKey;
pub use records::{
    AnalysisMeta, Category, ContentAnalysis, EuphonyImprovement, MixingCorrection,
    PunctuationIssue, Severity, SpellingSuggestion, StyleMixingReport, StyleSuggestion,
    Suggestion, SuggestionRecord, ToneSuggestion,
};
pub use stats::{AnalysisStats, count_words};
