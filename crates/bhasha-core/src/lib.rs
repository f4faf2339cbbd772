//! Bhasha Mitra core library
//!
//! Reconciles Bengali proofreading suggestions from a hosted language model
//! against a live, externally owned document: model calls with bounded
//! retries, normalization of the returned records, a suggestion store with
//! cross-category invalidation, and serialized document synchronization.

pub mod config;
pub mod document;
pub mod error;
pub mod llm;
pub mod normalizer;
pub mod orchestrator;
pub mod prompts;
pub mod recovery;
pub mod store;
pub mod suggestion;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{AnalysisConfig, Settings, SettingsStore};
pub use document::{DocumentHost, DocumentSync, InMemoryDocument, ReplaceOutcome};
pub use error::{BhashaError, BhashaResult};
pub use llm::{CallOptions, ModelClient};
pub use normalizer::ResponseNormalizer;
pub use orchestrator::{Notice, Orchestrator, RunSummary, TaskKind};
pub use prompts::{AnalysisTargets, DefaultPrompts, DocType, PromptSet, StyleTarget, Tone};
pub use store::{SuggestionStore, ViewFilter};
pub use suggestion::{Category, NormalizedKey, Suggestion};
