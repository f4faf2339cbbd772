//! Prompt construction
//!
//! The orchestrator only needs four prompts; how they are worded is the
//! business of a `PromptSet`. `DefaultPrompts` is the shipped wording.

mod builders;
mod targets;

pub use builders::DefaultPrompts;
pub use targets::{AnalysisTargets, DocType, StyleTarget, Tone};

/// Source of the four task prompts
pub trait PromptSet: Send + Sync {
    /// Spelling, punctuation, style mixing and euphony in one request
    fn main(&self, text: &str, doc_type: DocType) -> String;

    fn tone(&self, text: &str, tone: Tone) -> String;

    fn style(&self, text: &str, style: StyleTarget) -> String;

    /// Structural review of the document as a whole
    fn content(&self, text: &str, doc_type: DocType) -> String;
}
