//! Text generation backends.
//!
//! Everything the translation flow needs from a language model goes through
//! [`InferenceService`], so the flow can be exercised against the echo and
//! placeholder backends without a running server.

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Reply used by the placeholder backend
pub const PLACEHOLDER_REPLY: &str = "Simplified text will appear here.";

pub trait InferenceService {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, InferenceError>;
}

/// Client for an Ollama-compatible `/api/generate` endpoint
pub struct OllamaClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, InferenceError> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("simplify-reader/", env!("CARGO_PKG_VERSION")));
        if endpoint.starts_with("http://127.0.0.1") || endpoint.starts_with("http://localhost") {
            builder = builder.no_proxy();
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }
}

impl InferenceService for OllamaClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, InferenceError> {
        debug!(model, prompt_chars = prompt.chars().count(), "sending generate request");
        let response = self
            .client
            .post(self.generate_url())
            .json(&GenerateRequest {
                model,
                prompt,
                stream: false,
            })
            .send()?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(InferenceError::ModelNotFound(model.to_string())),
            status if !status.is_success() => return Err(InferenceError::Status(status.as_u16())),
            _ => {}
        }

        let body = response.text()?;
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;
        Ok(parsed.response.trim().to_string())
    }
}

/// Hands the selected span straight back.
///
/// Prompts are built from a template, so the span is recovered by stripping
/// the template around it.
pub struct EchoService {
    template: &'static str,
}

impl EchoService {
    pub fn new(template: &'static str) -> Self {
        Self { template }
    }
}

impl InferenceService for EchoService {
    fn generate(&self, _model: &str, prompt: &str) -> Result<String, InferenceError> {
        let (before, after) = self.template.split_once("{text}").unwrap_or((self.template, ""));
        let span = prompt
            .strip_prefix(before)
            .and_then(|rest| rest.strip_suffix(after))
            .unwrap_or(prompt);
        Ok(span.to_string())
    }
}

pub struct PlaceholderService;

impl InferenceService for PlaceholderService {
    fn generate(&self, _model: &str, _prompt: &str) -> Result<String, InferenceError> {
        Ok(PLACEHOLDER_REPLY.to_string())
    }
}

/// Build the backend named in the configuration.
pub fn build_service(config: &InferenceConfig) -> Result<Box<dyn InferenceService>, InferenceError> {
    use crate::config::Backend;

    Ok(match config.backend {
        Backend::Ollama => Box::new(OllamaClient::new(&config.endpoint, config.timeout)?),
        Backend::Echo => Box::new(EchoService::new(config.prompt_template)),
        Backend::Placeholder => Box::new(PlaceholderService),
    })
}
