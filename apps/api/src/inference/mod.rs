/// Inference client — the optional, best-effort call to an external
/// text-generation endpoint.
///
/// Nothing downstream depends on the reply. The analyzer makes at most one
/// call per request, logs any failure, and always scores locally.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large";
const MAX_LENGTH: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference is disabled")]
    Disabled,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("inference returned no generated text")]
    EmptyContent,
}

/// Source of free-text insight about a resume. Implementations may fail
/// freely; callers treat every error as "unavailable".
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn insight(&self, prompt: &str) -> Result<String, InferenceError>;
}

/// Default provider: always unavailable, never touches the network.
pub struct NoopInsight;

#[async_trait]
impl InsightProvider for NoopInsight {
    async fn insight(&self, _prompt: &str) -> Result<String, InferenceError> {
        Err(InferenceError::Disabled)
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Client for a Hugging Face style text-generation endpoint.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    url: String,
    api_token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(url: String, api_token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build inference HTTP client")?;
        Ok(Self {
            client,
            url,
            api_token,
        })
    }
}

#[async_trait]
impl InsightProvider for HuggingFaceClient {
    /// One POST, no retries.
    async fn insight(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_length: MAX_LENGTH,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: Vec<GeneratedText> = response.json().await?;
        let text = generated
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(InferenceError::EmptyContent)?;

        debug!("Inference returned {} characters", text.len());
        Ok(text)
    }
}
