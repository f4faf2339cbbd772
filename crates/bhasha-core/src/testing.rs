//! Test doubles shared by the unit tests

use crate::error::{BhashaError, BhashaResult};
use crate::llm::{GenerateRequest, ModelTransport, RawReply};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::time::Duration;

/// Wrap `payload` the way the model service does
pub fn gemini_reply(payload: &Value) -> RawReply {
    gemini_text_reply(&payload.to_string())
}

pub fn gemini_text_reply(text: &str) -> RawReply {
    let envelope = json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    });
    RawReply::new(200, envelope.to_string())
}

/// One scripted exchange
#[derive(Debug, Clone)]
pub struct Step {
    pub delay: Duration,
    pub outcome: Result<RawReply, BhashaError>,
}

impl Step {
    pub fn reply(reply: RawReply) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Ok(reply),
        }
    }

    pub fn status(status: u16) -> Self {
        Self::reply(RawReply::new(status, r#"{"error": {"message": "scripted"}}"#))
    }

    pub fn network() -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Err(BhashaError::network("connection reset")),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct Route {
    marker: String,
    steps: VecDeque<Step>,
}

/// Transport answering from per-route scripts.
///
/// A request goes to the first route whose marker the prompt starts with.
/// The last step of a route repeats once the script runs out.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route for prompts starting with `marker`; "" matches everything
    pub fn route(self, marker: &str, steps: Vec<Step>) -> Self {
        self.routes.lock().push(Route {
            marker: marker.to_string(),
            steps: steps.into(),
        });
        self
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests_for(&self, marker: &str) -> usize {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.prompt.starts_with(marker))
            .count()
    }

    fn next_step(&self, prompt: &str) -> Option<Step> {
        let mut routes = self.routes.lock();
        let route = routes.iter_mut().find(|r| prompt.starts_with(&r.marker))?;
        if route.steps.len() > 1 {
            route.steps.pop_front()
        } else {
            route.steps.front().cloned()
        }
    }
}

#[async_trait]
impl ModelTransport for ScriptedTransport {
    async fn send(&self, request: &GenerateRequest) -> BhashaResult<RawReply> {
        self.requests.lock().push(request.clone());
        let step = self
            .next_step(&request.prompt)
            .ok_or_else(|| BhashaError::other(format!("unscripted prompt: {}", request.prompt)))?;
        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        step.outcome
    }
}
