// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its typed enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; there is no config file.

/// Environment and server configuration
pub mod environment;
/// Typed configuration enums
pub mod types;

pub use environment::{LlmConfig, ServerConfig};
pub use types::{Environment, LogLevel};
