//! Analysis request with retry logic

use super::types::{CallOptions, ModelClient};
use crate::error::{BhashaError, BhashaResult};
use crate::llm::transport::GenerateRequest;
use crate::recovery::BackoffStrategy;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{instrument, warn};

impl ModelClient {
    /// Send `prompt` and return the recovered JSON payload.
    ///
    /// Retryable failures (`ServerBusy`, `Network`, `InvalidStructure`) are
    /// retried up to the retry budget, waiting `base * 2^(n-1)` before retry
    /// `n`. `Auth` and `Client` return immediately. On exhaustion the last
    /// error is returned.
    ///
    /// `Ok(None)` is an empty result: the model produced no text, or (under
    /// `ParseFailurePolicy::ReturnEmpty`) no JSON object could be recovered.
    #[instrument(skip(self, prompt), fields(temperature = options.temperature))]
    pub async fn analyze(
        &self,
        prompt: &str,
        options: CallOptions,
    ) -> BhashaResult<Option<Value>> {
        let max_retries = options.max_retries.unwrap_or(self.policy.max_retries);
        let backoff = self.policy.backoff();
        let request = GenerateRequest::new(prompt, options.temperature);
        let mut last_error = None;

        for attempt in 0..=max_retries {
            if attempt > 0 {
                let delay = backoff.delay_for_retry(attempt);
                warn!(
                    attempt = attempt + 1,
                    max_attempts = max_retries + 1,
                    delay_ms = delay.as_millis() as u64,
                    "retrying after failure"
                );
                sleep(delay).await;
            }

            let outcome = match self.transport.send(&request).await {
                Ok(reply) => self.interpret_reply(reply),
                Err(error) => Err(error),
            };

            match outcome {
                Ok(payload) => {
                    if attempt > 0 {
                        tracing::info!(attempt = attempt + 1, "request succeeded after retry");
                    }
                    return Ok(payload);
                }
                Err(error) if self.yields_empty(&error) => {
                    warn!(error = %error, "unparseable model output, returning empty result");
                    return Ok(None);
                }
                Err(error) => {
                    if !self.is_retryable_error(&error) {
                        warn!(error = %error, code = error.error_code(), "non-retryable error");
                        return Err(error);
                    }
                    warn!(
                        attempt = attempt + 1,
                        error = %error,
                        "request failed"
                    );
                    last_error = Some(error);
                }
            }
        }

        tracing::error!(attempts = max_retries + 1, "all retry attempts exhausted");
        Err(last_error.unwrap_or_else(|| {
            BhashaError::other(format!(
                "All {} attempts failed without error details",
                max_retries + 1
            ))
        }))
    }
}
