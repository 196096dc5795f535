// ABOUTME: Application constants organized by domain
// ABOUTME: Form bounds, export artifact names, MIME types, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single list.

/// Bounds enforced by the personal info form widgets
pub mod form_limits {
    /// Minimum accepted age in years
    pub const MIN_AGE: u32 = 10;
    /// Minimum accepted body weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 10.0;
    /// Height (feet) lower bound
    pub const MIN_HEIGHT_FEET: u32 = 3;
    /// Height (feet) upper bound
    pub const MAX_HEIGHT_FEET: u32 = 8;
    /// Height (inches) upper bound; the lower bound is zero
    pub const MAX_HEIGHT_INCHES: u32 = 11;
    /// Training days per week lower bound
    pub const MIN_WORKOUT_DAYS: u8 = 1;
    /// Training days per week upper bound
    pub const MAX_WORKOUT_DAYS: u8 = 7;
    /// Default training days per week
    pub const DEFAULT_WORKOUT_DAYS: u8 = 3;
}

/// Spreadsheet export artifacts
pub mod export {
    /// MIME type of every downloadable workbook
    pub const XLSX_MIME_TYPE: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
    /// Download name for the diet plan
    pub const DIET_PLAN_FILE_NAME: &str = "diet_plan.xlsx";
    /// Download name for the workout plan
    pub const WORKOUT_PLAN_FILE_NAME: &str = "workout_plan.xlsx";
    /// Worksheet name for the diet plan
    pub const DIET_PLAN_SHEET_NAME: &str = "Diet Plan";
    /// Worksheet name for the workout plan
    pub const WORKOUT_PLAN_SHEET_NAME: &str = "Workout Plan";
    /// Upper bound on an auto-sized column width, in characters
    pub const MAX_COLUMN_WIDTH: usize = 50;
    /// Padding added to the longest cell of a column
    pub const COLUMN_WIDTH_PADDING: usize = 2;
    /// Header row fill colour (light green)
    pub const HEADER_BACKGROUND_RGB: u32 = 0x00C6_EFCE;
}

/// Service names for structured logging
pub mod service_names {
    /// Main server service name
    pub const FITPLAN_SERVER: &str = "fitplan_server";
}

/// Environment variable names and their defaults
pub mod env_config {
    /// Groq API key; plan generation is disabled without it
    pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
    /// Optional model override
    pub const LLM_MODEL: &str = "FITPLAN_LLM_MODEL";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const RUST_LOG: &str = "RUST_LOG";

    /// Default HTTP listen port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}

/// Plan generation defaults
pub mod llm {
    /// Model used when no override is configured
    pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
    /// Sampling temperature for plan generation
    pub const PLAN_TEMPERATURE: f32 = 0.0;
}
