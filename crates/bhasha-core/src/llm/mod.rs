//! Model service access
//!
//! `ModelClient` runs one analysis request end to end: it sends the prompt
//! through a `ModelTransport`, classifies failures, retries the retryable
//! ones with exponential backoff and recovers a JSON payload from the model
//! text.

pub mod client;
mod extract;
mod sanitize;
mod transport;

pub use client::{CallOptions, ModelClient};
pub use extract::{EXPECTED_KEYS, extract_json, extract_model_text, has_expected_keys};
pub use sanitize::sanitize_error_text;
pub use transport::{GeminiTransport, GenerateRequest, ModelTransport, RawReply};
