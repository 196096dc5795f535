// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Holds configuration, the session store, the plan generator, and calorie coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use fitplan_core::errors::{AppError, AppResult};
use fitplan_intelligence::CalorieConfig;

use crate::config::ServerConfig;
use crate::planner::{LlmPlanGenerator, PlanGenerator};
use crate::session::SessionStore;

/// Dependencies shared by all handlers
pub struct ServerResources {
    /// Startup configuration
    pub config: ServerConfig,
    /// Live sessions
    pub sessions: SessionStore,
    /// Plan generator; `None` when no API key is configured
    pub generator: Option<Arc<dyn PlanGenerator>>,
    /// Calorie estimator coefficients
    pub calorie_config: CalorieConfig,
}

impl ServerResources {
    /// Build resources from configuration, wiring the Groq generator if a key is present
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let generator = LlmPlanGenerator::from_config(&config.llm)
            .map(|generator| Arc::new(generator) as Arc<dyn PlanGenerator>);
        Self::with_generator(config, generator)
    }

    /// Build resources with an explicit generator
    #[must_use]
    pub fn with_generator(config: ServerConfig, generator: Option<Arc<dyn PlanGenerator>>) -> Self {
        Self {
            config,
            sessions: SessionStore::new(),
            generator,
            calorie_config: CalorieConfig::default(),
        }
    }

    /// The configured generator
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when plan generation is disabled
    pub fn generator(&self) -> AppResult<Arc<dyn PlanGenerator>> {
        self.generator.clone().ok_or_else(|| {
            AppError::config_missing(
                "Plan generation is not configured. Set GROQ_API_KEY to enable diet and workout plans",
            )
        })
    }
}
