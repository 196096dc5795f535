// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample profiles, server resources, and scripted plan generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitplan_server`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use fitplan_server::config::{Environment, ServerConfig};
use fitplan_server::errors::{AppError, AppResult};
use fitplan_server::models::{ActivityLevel, Budget, DietType, Gender, UserProfile};
use fitplan_server::planner::{AgentProfile, PlanGenerator, PlanTask};
use fitplan_server::resources::ServerResources;
use tokio::sync::Notify;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Diet plan with prose around a header, a separator, and two meal rows
pub const TWO_ROW_DIET_PLAN: &str = "\
Here is your personalized plan:

| Day | Meal | Description | Calories | Nutrients | Recipe Link |
|-----|------|-------------|----------|-----------|-------------|
| 1   | Breakfast | Poha with peanuts (1 bowl) | 350 | P 8g, C 55g, F 10g | https://www.youtube.com/results?search_query=poha |
|     | Lunch | Dal, rice and salad | 600 | P 20g, C 90g, F 12g | https://www.youtube.com/results?search_query=dal+rice |

Stay hydrated!";

/// Workout plan with one day of two exercises
pub const WORKOUT_PLAN: &str = "\
| Day | Exercise | Duration/Reps | Target Area | Video Link |
|-----|----------|---------------|-------------|------------|
| 1   | Push-ups | 3x15          | Chest       | https://www.youtube.com/results?search_query=push+ups |
|     | Plank    | 3x1min        | Core        | https://www.youtube.com/results?search_query=plank |";

/// 30-year-old sedentary male, 70 kg, 5'10"
pub fn sample_profile() -> UserProfile {
    UserProfile {
        age: 30,
        gender: Gender::Male,
        weight_kg: 70.0,
        height_feet: 5,
        height_inches: 10,
        diet_type: DietType::Vegetarian,
        budget: Budget::Low,
        activity_level: ActivityLevel::Sedentary,
        dislikes: "mushrooms, okra".to_owned(),
    }
}

/// Test configuration without an API key
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Server resources with the given generator
pub fn create_test_resources(generator: Option<Arc<dyn PlanGenerator>>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::with_generator(test_config(), generator))
}

/// Returns a fixed document per agent role and records every task
#[derive(Default)]
pub struct ScriptedPlanGenerator {
    pub tasks: Mutex<Vec<(AgentProfile, PlanTask)>>,
}

impl ScriptedPlanGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }
}

#[async_trait]
impl PlanGenerator for ScriptedPlanGenerator {
    async fn generate(&self, agent: &AgentProfile, task: &PlanTask) -> AppResult<String> {
        self.tasks
            .lock()
            .unwrap()
            .push((agent.clone(), task.clone()));
        let plan = if agent.role == "Fitness Trainer" {
            WORKOUT_PLAN
        } else {
            TWO_ROW_DIET_PLAN
        };
        Ok(plan.to_owned())
    }
}

/// Always fails like an unreachable model, health check included
pub struct FailingPlanGenerator {
    pub calls: AtomicUsize,
}

impl FailingPlanGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl PlanGenerator for FailingPlanGenerator {
    async fn generate(&self, _agent: &AgentProfile, _task: &PlanTask) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::external_service(
            "Groq",
            "Failed to connect: connection refused",
        ))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::external_service(
            "Groq",
            "Health check failed: connection refused",
        ))
    }
}

/// Parks inside `generate` until released
pub struct BlockingPlanGenerator {
    pub started: Notify,
    pub release: Notify,
}

impl BlockingPlanGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            started: Notify::new(),
            release: Notify::new(),
        })
    }
}

#[async_trait]
impl PlanGenerator for BlockingPlanGenerator {
    async fn generate(&self, _agent: &AgentProfile, _task: &PlanTask) -> AppResult<String> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(TWO_ROW_DIET_PLAN.to_owned())
    }
}
