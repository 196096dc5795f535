// ABOUTME: Chat-completion seam used by the plan generator
// ABOUTME: Message, request, and reply types plus the provider contract with a reachability check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Interface
//!
//! A plan is one system message (the agent persona) and one user message
//! (the task), answered by a single non-streaming completion. Requests always
//! name their model and temperature so that generation stays reproducible.

mod groq;

pub use groq::GroqProvider;

use async_trait::async_trait;
use fitplan_core::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Author of a prompt message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Agent persona
    System,
    /// Task text
    User,
}

impl MessageRole {
    /// Wire name of the role
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// One prompt message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Author
    pub role: MessageRole,
    /// Text
    pub content: String,
}

impl ChatMessage {
    /// Persona message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Task message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A single completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Sampling temperature; plans use 0
    pub temperature: f32,
    /// Persona then task
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Request `model` to answer `messages` at `temperature`
    #[must_use]
    pub fn new(model: impl Into<String>, temperature: f32, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            temperature,
            messages,
        }
    }
}

/// The model's answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Reply text
    pub content: String,
    /// Model that answered
    pub model: String,
    /// Token accounting, when reported
    pub usage: Option<TokenUsage>,
    /// Why generation stopped (`stop`, `length`, ...)
    pub finish_reason: Option<String>,
}

impl ChatResponse {
    /// True when the reply hit the token limit and may end mid-table
    #[must_use]
    pub fn was_truncated(&self) -> bool {
        self.finish_reason.as_deref() == Some("length")
    }
}

/// Tokens consumed by one call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    /// Prompt side
    pub prompt_tokens: u32,
    /// Reply side
    pub completion_tokens: u32,
}

/// A chat-completion backend
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Name used in logs and error messages
    fn display_name(&self) -> &'static str;

    /// Run one completion
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse>;

    /// Whether the backend accepts our credentials right now
    async fn health_check(&self) -> AppResult<bool>;
}
