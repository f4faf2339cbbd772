//! Error types for Bhasha Mitra
//!
//! One error enum covers the whole core. Model-call failures are split into
//! the classes the retry policy cares about:
//! - `Auth` and `Client`: fatal, never retried
//! - `ServerBusy`, `Network`, `InvalidStructure`: retried with backoff
//! - `Parse`: terminal for the call (see `ParseFailurePolicy`)
//!
//! Document-host failures are reported as `Document`. A replacement target
//! that is missing from the document is *not* an error; see `ReplaceOutcome`.

mod constructors;
mod conversions;
mod types;
mod user_messages;

pub use types::{BhashaError, BhashaResult, ErrorKind};
pub use user_messages::{ErrorCategory, UserFriendlyError};
