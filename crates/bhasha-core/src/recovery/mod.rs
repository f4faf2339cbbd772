//! Recovery helpers for transient model-service failures

pub mod backoff;

pub use backoff::{BackoffStrategy, ExponentialBackoff};
