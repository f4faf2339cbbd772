//! Summary statistics for an analysis run

use serde::{Deserialize, Serialize};

/// Word count, spelling error count and accuracy percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    pub total_words: usize,
    pub error_count: usize,
    pub accuracy: u32,
}

impl Default for AnalysisStats {
    fn default() -> Self {
        Self {
            total_words: 0,
            error_count: 0,
            accuracy: 100,
        }
    }
}

impl AnalysisStats {
    /// Accuracy is 100 for empty input, otherwise the rounded share of
    /// words without a spelling error, floored at 0.
    pub fn new(total_words: usize, error_count: usize) -> Self {
        let accuracy = if total_words == 0 {
            100
        } else {
            let correct = total_words as f64 - error_count as f64;
            (correct / total_words as f64 * 100.0).round().max(0.0) as u32
        };
        Self {
            total_words,
            error_count,
            accuracy,
        }
    }

    /// Stats for `text` against `error_count` accepted spelling findings
    pub fn for_text(text: &str, error_count: usize) -> Self {
        Self::new(count_words(text), error_count)
    }
}

/// Whitespace tokenization: split on any whitespace run, drop empty tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
