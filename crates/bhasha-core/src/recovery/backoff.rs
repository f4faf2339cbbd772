//! Backoff between model-call retries

use std::time::Duration;

/// Upper bound on any single wait, whatever the retry count
const MAX_DELAY: Duration = Duration::from_secs(60);

/// Backoff strategy trait
pub trait BackoffStrategy: Send + Sync {
    /// Delay before retry `retry` (1-indexed: the first retry is 1)
    fn delay_for_retry(&self, retry: u32) -> Duration;
}

/// Doubling backoff without jitter: retry n waits `base * 2^(n-1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialBackoff {
    base: Duration,
    max_delay: Duration,
}

impl ExponentialBackoff {
    pub fn new(base: Duration) -> Self {
        Self {
            base,
            max_delay: MAX_DELAY,
        }
    }

    /// Cap individual waits
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    /// Sum of all waits for `retries` retries
    pub fn total_delay(&self, retries: u32) -> Duration {
        (1..=retries).map(|n| self.delay_for_retry(n)).sum()
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn delay_for_retry(&self, retry: u32) -> Duration {
        if retry == 0 {
            return Duration::ZERO;
        }
        let factor = 1u32.checked_shl(retry - 1).unwrap_or(u32::MAX);
        self.base
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}
