// ABOUTME: Core data models shared by the calorie estimator, prompt builder, and server
// ABOUTME: Re-exports the user profile collected on the personal info stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models

mod profile;

pub use profile::{
    ActivityLevel, Budget, DietType, Gender, UserProfile, WorkoutGoal, WorkoutPreferences,
};
