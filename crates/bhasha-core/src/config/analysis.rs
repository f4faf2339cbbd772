//! Tuning knobs for an analysis run

use super::defaults::{
    DEFAULT_BACKOFF_BASE_MS, DEFAULT_MAX_RETRIES, DEFAULT_STAGGER_MS, HIGHLIGHT_CHUNK_SIZE,
    HOVER_DEBOUNCE_MS,
};
use crate::orchestrator::TaskKind;
use crate::recovery::backoff::ExponentialBackoff;
use crate::suggestion::Category;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the model client does when no JSON object can be recovered from
/// the model text.
///
/// One policy is applied to every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailurePolicy {
    /// Report the call as empty; no retry
    #[default]
    ReturnEmpty,
    /// Treat it like any other retryable failure
    Retry,
}

/// Retry budget and backoff for model calls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Wait before retry 1; retry n waits `backoff_base * 2^(n-1)`
    #[serde(with = "humantime_serde")]
    pub backoff_base: Duration,
    pub parse_failure: ParseFailurePolicy,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: Duration::from_millis(DEFAULT_BACKOFF_BASE_MS),
            parse_failure: ParseFailurePolicy::default(),
        }
    }
}

impl RetryPolicy {
    /// Set the retry budget
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the base backoff delay
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Set the parse failure policy
    pub fn with_parse_failure(mut self, policy: ParseFailurePolicy) -> Self {
        self.parse_failure = policy;
        self
    }

    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::new(self.backoff_base)
    }
}

/// Minimum confidence per category; items scoring below are dropped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    pub spelling: f64,
    pub tone: f64,
    pub style: f64,
    pub mixing: f64,
    pub punctuation: f64,
    pub euphony: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            spelling: 0.8,
            tone: 0.8,
            style: 0.9,
            mixing: 0.85,
            punctuation: 0.75,
            euphony: 0.7,
        }
    }
}

impl ConfidenceThresholds {
    pub fn for_category(&self, category: Category) -> f64 {
        match category {
            Category::Spelling => self.spelling,
            Category::Tone => self.tone,
            Category::Style => self.style,
            Category::Mixing => self.mixing,
            Category::Punctuation => self.punctuation,
            Category::Euphony => self.euphony,
        }
    }

    /// A score exactly at the threshold is kept
    pub fn accepts(&self, category: Category, score: f64) -> bool {
        score >= self.for_category(category)
    }
}

/// Sampling temperature per task
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskTemperatures {
    pub main: f32,
    pub tone: f32,
    pub style: f32,
    pub content: f32,
}

impl Default for TaskTemperatures {
    fn default() -> Self {
        Self {
            main: 0.1,
            tone: 0.2,
            style: 0.2,
            content: 0.4,
        }
    }
}

impl TaskTemperatures {
    pub fn for_task(&self, task: TaskKind) -> f32 {
        match task {
            TaskKind::Main => self.main,
            TaskKind::Tone => self.tone,
            TaskKind::Style => self.style,
            TaskKind::Content => self.content,
        }
    }
}

/// Everything an analysis run can be tuned with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub thresholds: ConfidenceThresholds,
    pub retry: RetryPolicy,
    pub temperatures: TaskTemperatures,
    /// Start offsets in task order Main, Tone, Style, ContentAnalysis
    #[serde(with = "stagger_millis")]
    pub stagger: [Duration; 4],
    pub highlight_chunk_size: usize,
    #[serde(with = "humantime_serde")]
    pub hover_debounce: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            thresholds: ConfidenceThresholds::default(),
            retry: RetryPolicy::default(),
            temperatures: TaskTemperatures::default(),
            stagger: DEFAULT_STAGGER_MS.map(Duration::from_millis),
            highlight_chunk_size: HIGHLIGHT_CHUNK_SIZE,
            hover_debounce: Duration::from_millis(HOVER_DEBOUNCE_MS),
        }
    }
}

impl AnalysisConfig {
    /// Start offset of a task relative to the start of the run
    pub fn stagger_for(&self, task: TaskKind) -> Duration {
        self.stagger[task.index()]
    }

    /// Same stagger for every task; used to run without waiting
    pub fn without_stagger(mut self) -> Self {
        self.stagger = [Duration::ZERO; 4];
        self
    }
}

/// The stagger offsets are written as plain milliseconds
mod stagger_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &[Duration; 4], serializer: S) -> Result<S::Ok, S::Error> {
        (*value).map(|d| d.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[Duration; 4], D::Error> {
        let millis = <[u64; 4]>::deserialize(deserializer)?;
        Ok(millis.map(Duration::from_millis))
    }
}
