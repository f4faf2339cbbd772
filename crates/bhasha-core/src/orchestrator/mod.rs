//! Analysis orchestration
//!
//! A run resets the store, fans out up to four staggered model calls,
//! writes each task's slice as soon as it resolves and finally highlights
//! the word-level findings in one batch.

mod notice;
mod runner;
mod task;
#[cfg(test)]
mod tests;

pub use notice::{Notice, NoticeLevel};
pub use runner::Orchestrator;
pub use task::{RunSummary, TaskFailure, TaskKind};
