//! Suggestion store
//!
//! Holds the results of the current run. Removal is by normalized identity:
//! applying a replacement removes every suggestion targeting the same text,
//! whichever category it lives in.

mod filter;
mod suggestion_store;

pub use filter::ViewFilter;
pub use suggestion_store::{RunId, SuggestionStore};
