//! HTTP transport for the Gemini `generateContent` endpoint

use crate::config::Settings;
use crate::config::defaults::CONNECT_TIMEOUT_SECS;
use crate::error::{BhashaError, BhashaResult};
use crate::llm::sanitize::sanitize_error_text;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::instrument;

/// One generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub temperature: f32,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
        }
    }

    /// Wire body; JSON output is always requested
    pub fn to_body(&self) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": self.prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": self.temperature,
            }
        })
    }
}

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever came back.
///
/// Non-2xx statuses are returned as replies, not errors; only a request
/// that never completed is an error (`BhashaError::Network`).
#[async_trait]
pub trait ModelTransport: Send + Sync {
    async fn send(&self, request: &GenerateRequest) -> BhashaResult<RawReply>;
}

/// Gemini REST transport with the credential and model bound at construction
pub struct GeminiTransport {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> BhashaResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BhashaError::config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(http_client, base_url, model, api_key))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(
        http_client: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> BhashaResult<Self> {
        settings.validate()?;
        Self::new(&settings.base_url, &settings.model, settings.api_key.trim())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl ModelTransport for GeminiTransport {
    #[instrument(skip(self, request), fields(model = %self.model, temperature = request.temperature), level = "debug")]
    async fn send(&self, request: &GenerateRequest) -> BhashaResult<RawReply> {
        let response = self
            .http_client
            .post(self.endpoint())
            .json(&request.to_body())
            .send()
            .await
            .map_err(|e| BhashaError::network(sanitize_error_text(&e.without_url().to_string())))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BhashaError::network(sanitize_error_text(&e.without_url().to_string())))?;

        tracing::debug!(status, bytes = body.len(), "model service replied");
        Ok(RawReply { status, body })
    }
}
