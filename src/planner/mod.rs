// ABOUTME: Plan generator seam between the session flow and the language model
// ABOUTME: Agent profiles, plan tasks, the PlanGenerator trait, and its LLM-backed implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generation
//!
//! A plan is produced by handing one [`PlanTask`] to one agent persona and
//! taking back free text. The text is expected, but not required, to contain
//! a markdown table; the exporter is permissive about what it receives.

/// Prompt builders and agent personas
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use fitplan_core::constants::export;
use fitplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use tracing::{debug, instrument, warn};

use crate::config::LlmConfig;
use crate::llm::{ChatMessage, ChatRequest, GroqProvider, LlmProvider};

pub use prompts::{
    build_diet_prompt, build_workout_prompt, diet_task, fitness_agent, nutrition_agent,
    workout_task,
};

/// The two documents a session can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// 7-day meal plan
    Diet,
    /// Weekly workout plan
    Workout,
}

impl PlanKind {
    /// Short label for logs and messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Diet => "diet",
            Self::Workout => "workout",
        }
    }

    /// Download file name for this plan
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Diet => export::DIET_PLAN_FILE_NAME,
            Self::Workout => export::WORKOUT_PLAN_FILE_NAME,
        }
    }

    /// Worksheet name for this plan
    #[must_use]
    pub const fn sheet_name(&self) -> &'static str {
        match self {
            Self::Diet => export::DIET_PLAN_SHEET_NAME,
            Self::Workout => export::WORKOUT_PLAN_SHEET_NAME,
        }
    }

    /// Resolve a download file name back to its plan
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        [Self::Diet, Self::Workout]
            .into_iter()
            .find(|kind| kind.file_name() == file_name)
    }
}

impl Display for PlanKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persona the model is asked to adopt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Job title, e.g. "Nutrition Expert"
    pub role: String,
    /// What the agent is trying to achieve
    pub goal: String,
    /// Expertise framing
    pub backstory: String,
}

/// One unit of work for an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTask {
    /// Which plan this task produces
    pub kind: PlanKind,
    /// Full instruction text
    pub description: String,
    /// Short description of the expected result
    pub expected_output: String,
}

/// Produces a plan document from an agent persona and a task
///
/// Implementations return the raw text; failures carry a message fit to show
/// the user. No retries or timeouts are applied by callers.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Run the task and return the generated document
    async fn generate(&self, agent: &AgentProfile, task: &PlanTask) -> AppResult<String>;

    /// Whether the backing model can currently be reached
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// [`PlanGenerator`] backed by a chat-completion provider
pub struct LlmPlanGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
}

impl LlmPlanGenerator {
    /// Wrap a provider with the configured model and temperature
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, config: &LlmConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Build a Groq-backed generator, or `None` when no API key is configured
    #[must_use]
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        let api_key = config.api_key.as_deref()?;
        Some(Self::new(Arc::new(GroqProvider::new(api_key)), config))
    }

    /// Chat messages for one agent/task pair
    #[must_use]
    pub fn build_messages(agent: &AgentProfile, task: &PlanTask) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(format!(
                "You are a {}. {}\nYour personal goal is: {}",
                agent.role, agent.backstory, agent.goal
            )),
            ChatMessage::user(format!(
                "{}\n\nThis is the expected criteria for your final answer: {}",
                task.description.trim_end(),
                task.expected_output
            )),
        ]
    }
}

#[async_trait]
impl PlanGenerator for LlmPlanGenerator {
    #[instrument(skip(self, agent, task), fields(plan = %task.kind, model = %self.model))]
    async fn generate(&self, agent: &AgentProfile, task: &PlanTask) -> AppResult<String> {
        let request = ChatRequest::new(
            self.model.clone(),
            self.temperature,
            Self::build_messages(agent, task),
        );

        let response = self.provider.complete(&request).await?;

        if let Some(usage) = response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                answered_by = %response.model,
                "Plan tokens used"
            );
        }
        if response.was_truncated() {
            warn!("Plan reply stopped at the token limit; the table may be incomplete");
        }

        let plan = response.content.trim();
        if plan.is_empty() {
            return Err(AppError::external_service(
                self.provider.display_name(),
                format!("Model returned an empty {} plan", task.kind),
            ));
        }

        Ok(plan.to_owned())
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }
}
