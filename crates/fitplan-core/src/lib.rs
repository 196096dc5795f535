// ABOUTME: Core types and constants for the FitPlan planner
// ABOUTME: Foundation crate with error handling, user profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitPlan Core
//!
//! Foundation crate providing shared types and constants for the FitPlan
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: The user profile collected by the personal info form
//! - **constants**: Export file names, MIME types, and form bounds

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (user profile and its categorical fields)
pub mod models;
