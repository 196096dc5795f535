// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses the listen address, LLM credentials, and model selection from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use fitplan_core::constants::{env_config, llm, service_names};
use fitplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

use super::types::{Environment, LogLevel};

/// Plan generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Groq API key; `None` disables plan generation
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier sent with every completion
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: llm::DEFAULT_MODEL.to_owned(),
            temperature: llm::PLAN_TEMPERATURE,
        }
    }
}

impl LlmConfig {
    /// Whether a key is present and plan generation can run
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Server configuration loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Plan generation settings
    pub llm: LlmConfig,
    /// Server name
    pub server_name: String,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: env_config::DEFAULT_HTTP_PORT,
            host: env_config::DEFAULT_HOST.to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            llm: LlmConfig::default(),
            server_name: service_names::FITPLAN_SERVER.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` if `HTTP_PORT` is set but is not a valid port
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env_var_opt(env_config::HTTP_PORT) {
            Some(raw) => parse_port(&raw)?,
            None => env_config::DEFAULT_HTTP_PORT,
        };

        let api_key = env_var_opt(env_config::GROQ_API_KEY);
        if api_key.is_none() {
            warn!(
                "{} is not set; diet and workout plan generation is disabled",
                env_config::GROQ_API_KEY
            );
        }

        Ok(Self {
            http_port,
            host: env_var_or(env_config::HOST, env_config::DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, "info")),
            llm: LlmConfig {
                api_key,
                model: env_var_or(env_config::LLM_MODEL, llm::DEFAULT_MODEL),
                temperature: llm::PLAN_TEMPERATURE,
            },
            server_name: service_names::FITPLAN_SERVER.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        })
    }

    /// Override the listen port (CLI flag)
    #[must_use]
    pub const fn with_http_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    /// `host:port` for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitPlan Server Configuration:\n\
             - Environment: {}\n\
             - Listen: {}\n\
             - Log Level: {}\n\
             - Plan Generation: {}\n\
             - Model: {}",
            self.environment,
            self.bind_address(),
            self.log_level,
            if self.llm.is_configured() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.llm.model,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env_var_opt(key).unwrap_or_else(|| default.to_owned())
}

/// Get environment variable, treating blank values as unset
fn env_var_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_port(raw: &str) -> AppResult<u16> {
    raw.parse::<u16>().map_err(|e| {
        AppError::config(format!("Invalid {} value '{raw}'", env_config::HTTP_PORT))
            .with_source(e)
    })
}
