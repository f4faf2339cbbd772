//! Document synchronization
//!
//! The document belongs to an external host (a word processor, or
//! `InMemoryDocument` for the CLI and tests). Host mutations are queued
//! and only trusted after `flush`; `DocumentSync` flushes at the end of
//! every operation and never runs two host operations concurrently.

mod highlighter;
mod host;
mod matching;
mod memory;
mod sync;
mod types;

pub use highlighter::HoverHighlighter;
#[cfg(test)]
pub use host::MockDocumentHost;
pub use host::DocumentHost;
pub use matching::{search_options_for, whole_word_applies};
pub use memory::{HighlightSpan, InMemoryDocument};
pub use sync::DocumentSync;
pub use types::{
    HighlightColor, HighlightItem, HighlightTarget, HostText, MatchHandle, ReplaceOutcome,
    SearchOptions,
};
