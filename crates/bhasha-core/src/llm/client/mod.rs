//! Model client implementation
//!
//! One `analyze` call is one logical request: it may span several HTTP
//! attempts but surfaces only the final classified outcome.

mod error_check;
mod retry;
mod types;

pub use types::{CallOptions, ModelClient};
