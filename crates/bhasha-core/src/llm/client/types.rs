//! Model client type definitions

use crate::config::{RetryPolicy, Settings};
use crate::error::BhashaResult;
use crate::llm::transport::{GeminiTransport, ModelTransport};
use std::sync::Arc;

/// Per-call options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallOptions {
    pub temperature: f32,
    /// Overrides the policy's retry budget for this call
    pub max_retries: Option<u32>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_retries: None,
        }
    }
}

impl CallOptions {
    pub fn new(temperature: f32) -> Self {
        Self {
            temperature,
            max_retries: None,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }
}

/// Client for analysis requests against the model service.
///
/// Stateless between calls; the retry counter lives inside `analyze`.
///
/// # Examples
///
/// ```no_run
/// use bhasha_core::config::Settings;
/// use bhasha_core::llm::{CallOptions, ModelClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = Settings { api_key: "key".into(), ..Default::default() };
/// let client = ModelClient::from_settings(&settings)?;
/// if let Some(payload) = client.analyze("...", CallOptions::new(0.1)).await? {
///     println!("{}", payload);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ModelClient {
    pub(super) transport: Arc<dyn ModelTransport>,
    pub(super) policy: RetryPolicy,
}

impl ModelClient {
    pub fn new(transport: Arc<dyn ModelTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Gemini transport built from the user's settings
    pub fn from_settings(settings: &Settings) -> BhashaResult<Self> {
        let transport = GeminiTransport::from_settings(settings)?;
        Ok(Self::new(
            Arc::new(transport),
            settings.analysis.retry.clone(),
        ))
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

impl std::fmt::Debug for ModelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelClient")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
