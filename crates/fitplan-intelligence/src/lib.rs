// ABOUTME: Calorie estimation engine for the FitPlan planner
// ABOUTME: Pure BMR, TDEE, and goal-offset calculations with configurable coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitPlan Intelligence
//!
//! Deterministic energy expenditure calculations. Nothing here performs I/O;
//! every function is a pure function of its inputs and the coefficient
//! configuration.

/// Coefficient and activity factor configuration
pub mod config;

/// BMR, maintenance calories, and goal targets
pub mod calorie_estimator;

pub use calorie_estimator::{
    activity_factor_for_label, calculate_bmr, calculate_maintenance, estimate_calories,
    goal_options, CalorieEstimate, CalorieGoal, CalorieProfile, GoalOption,
};
pub use config::{ActivityFactors, BmrCoefficients, CalorieConfig};
