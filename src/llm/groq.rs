// ABOUTME: Groq LLM provider implementation for plan generation
// ABOUTME: Calls Groq's OpenAI-compatible chat completions API and maps failures to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Groq Provider
//!
//! [`LlmProvider`] over Groq's OpenAI-compatible API. The key comes from
//! `GROQ_API_KEY` via [`crate::config::LlmConfig`]; the model is chosen per
//! request (`llama-3.3-70b-versatile` unless `FITPLAN_LLM_MODEL` overrides it).

use async_trait::async_trait;
use fitplan_core::errors::{AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};

/// Service label used in error messages
const SERVICE: &str = "Groq";

/// Base URL for the Groq API (OpenAI-compatible)
const API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Longest slice of an unparseable error body kept in the message
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Serialize)]
struct GroqRequest<'a> {
    model: &'a str,
    messages: Vec<GroqMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct GroqMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for GroqMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    #[serde(default)]
    usage: Option<GroqUsage>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GroqErrorResponse {
    error: GroqErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GroqErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

/// Groq LLM provider
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqProvider {
    /// Create a new Groq provider with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_owned(),
        }
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url.trim_end_matches('/'))
    }

    /// Map a non-success response to an error
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        let Ok(error_response) = serde_json::from_str::<GroqErrorResponse>(body) else {
            return AppError::external_service(
                SERVICE,
                format!(
                    "API error ({status}): {}",
                    body.chars()
                        .take(ERROR_BODY_PREVIEW_CHARS)
                        .collect::<String>()
                ),
            );
        };

        let detail = error_response.error;
        match status.as_u16() {
            401 | 403 => AppError::external_auth(
                SERVICE,
                format!("API authentication failed: {}", detail.message),
            ),
            429 => AppError::external_rate_limited(
                SERVICE,
                format!("Rate limit exceeded: {}", detail.message),
            ),
            400 => AppError::external_service(
                SERVICE,
                format!("API validation error: {}", detail.message),
            ),
            _ => AppError::external_service(
                SERVICE,
                format!(
                    "{} - {}",
                    detail.error_type.as_deref().unwrap_or("unknown"),
                    detail.message
                ),
            ),
        }
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn display_name(&self) -> &'static str {
        SERVICE
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        debug!("Sending chat completion request to Groq");

        let groq_request = GroqRequest {
            model: &request.model,
            messages: request.messages.iter().map(GroqMessage::from).collect(),
            temperature: request.temperature,
            stream: false,
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&groq_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Groq API: {}", e);
                AppError::external_service(SERVICE, format!("Failed to connect: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Groq API response: {}", e);
            AppError::external_service(SERVICE, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let groq_response: GroqResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Groq API response: {}", e);
            AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
        })?;

        let choice = groq_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response from Groq: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: groq_response.model,
            usage: groq_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> AppResult<bool> {
        debug!("Performing Groq API health check");

        let response = self
            .client
            .get(self.api_url("models"))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!("Groq health check failed: {}", e);
                AppError::external_service(SERVICE, format!("Health check failed: {e}"))
            })?;

        let healthy = response.status().is_success();
        if !healthy {
            warn!(
                "Groq API health check failed with status: {}",
                response.status()
            );
        }

        Ok(healthy)
    }
}
