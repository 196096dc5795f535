// ABOUTME: Main library entry point for the FitPlan planner service
// ABOUTME: Calorie targets, LLM-generated diet and workout plans, and spreadsheet export over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitPlan Server
//!
//! A three-step planner:
//!
//! 1. **Personal info**: biometric inputs are turned into BMR and maintenance
//!    calories, and the user picks a weekly weight goal.
//! 2. **Diet planning**: a nutrition agent writes a 7-day meal plan as a
//!    markdown table for the chosen calorie target.
//! 3. **Workout planning**: a fitness agent writes a weekly workout plan.
//!
//! Either plan can be downloaded as an XLSX workbook rebuilt from the table.
//!
//! ## Modules
//!
//! - [`session`]: per-session state with explicit stage gates
//! - [`planner`]: agent personas, prompts, and the generator seam
//! - [`llm`]: chat-completion provider abstraction with the Groq client
//! - [`export`]: markdown table parsing and workbook writing
//! - [`routes`]: the axum HTTP API

/// Environment configuration
pub mod config;
/// Spreadsheet export of plan documents
pub mod export;
/// LLM provider abstraction
pub mod llm;
/// Structured logging setup
pub mod logging;
/// Plan generation
pub mod planner;
/// Shared handler dependencies
pub mod resources;
/// HTTP routes
pub mod routes;
/// Per-session state
pub mod session;

pub use fitplan_core::{constants, errors, models};
pub use fitplan_intelligence as intelligence;
