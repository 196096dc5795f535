// ABOUTME: Prompt builder for the diet and workout plan agents
// ABOUTME: Embeds the calorie target and user constraints plus the markdown table contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan prompts
//!
//! Each prompt carries the user's numeric target, the categorical constraints
//! verbatim, and the exact table layout the converter expects back: one row
//! per meal or exercise, with the day number written only on a day's first row.

use std::fmt::Write as _;

use fitplan_core::models::{UserProfile, WorkoutPreferences};

use super::{AgentProfile, PlanKind, PlanTask};

/// YouTube search prefix the agents are told to build links from
pub const YOUTUBE_SEARCH_PREFIX: &str = "https://www.youtube.com/results?search_query=";

/// Header row of the diet plan table
pub const DIET_TABLE_HEADER: &str =
    "| Day | Meal | Description | Calories | Nutrients | Recipe Link |";

/// Header row of the workout plan table
pub const WORKOUT_TABLE_HEADER: &str =
    "| Day | Exercise | Duration/Reps | Target Area | Video Link |";

const DIET_TABLE_EXAMPLE: &str = "\
| Day | Meal | Description | Calories | Nutrients | Recipe Link |
|-----|------|-------------|----------|-----------|-------------|
| 1   | Breakfast | ... | ... | ... | ... |
|     | Lunch | ... | ... | ... | ... |
|     | Snack | ... | ... | ... | ... |
|     | Dinner | ... | ... | ... | ... |";

const WORKOUT_TABLE_EXAMPLE: &str = "\
| Day | Exercise | Duration/Reps | Target Area | Video Link |
|-----|----------|---------------|-------------|------------|
| 1   | Push-ups | 3x15          | Chest       | ...        |
|     | Plank    | 3x1min        | Core        | ...        |";

/// The diet planning agent
#[must_use]
pub fn nutrition_agent() -> AgentProfile {
    AgentProfile {
        role: "Nutrition Expert".to_owned(),
        goal: "Generate personalized diet plans based on user inputs".to_owned(),
        backstory: "Expert in nutrition science and meal planning with focus on Indian cuisine"
            .to_owned(),
    }
}

/// The workout planning agent
#[must_use]
pub fn fitness_agent() -> AgentProfile {
    AgentProfile {
        role: "Fitness Trainer".to_owned(),
        goal: "Create effective workout plans tailored to user goals".to_owned(),
        backstory: "Experienced fitness coach specializing in home workouts".to_owned(),
    }
}

fn indent_block(out: &mut String, block: &str) {
    for line in block.lines() {
        let _ = writeln!(out, "    {line}");
    }
}

/// Instruction text for a 7-day meal plan
#[must_use]
pub fn build_diet_prompt(profile: &UserProfile, target_calories: f64) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Create a 7-day {target_calories} kcal {} meal plan for a {}-year-old {}.",
        profile.diet_type,
        profile.age,
        profile.gender
    );
    prompt.push_str("StrictRequirements:\n");
    prompt.push_str("- Indian cuisine with their quantity\n");
    let _ = writeln!(prompt, "- Budget: {}", profile.budget);
    let _ = writeln!(prompt, "- Avoid: {}", profile.dislikes);
    prompt.push_str(
        "- The selected calorie goal exactly among Breakfast, Lunch, Dinner, and Snacks\n",
    );
    prompt.push_str(
        "- 4 meals/day (Breakfast, Lunch, Dinner, Snack) with detailed calories and nutrients\n",
    );
    let _ = writeln!(
        prompt,
        "- YouTube Recipe Video links for each meal in this format:\"{YOUTUBE_SEARCH_PREFIX}\""
    );
    let _ = writeln!(
        prompt,
        "- Format: Markdown table with columns: {DIET_TABLE_HEADER}"
    );
    prompt.push_str("  - List day number only once before Breakfast row for each day\n");
    prompt.push_str("  - Use empty Day column for subsequent meals (Lunch, Snack, Dinner)\n");
    prompt.push_str("  - Example:\n");
    indent_block(&mut prompt, DIET_TABLE_EXAMPLE);
    prompt
}

/// Instruction text for an N-day/week workout plan
#[must_use]
pub fn build_workout_prompt(profile: &UserProfile, preferences: &WorkoutPreferences) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Create a {}-day/week {} workout plan for a {}-year-old {}.",
        preferences.days_per_week, preferences.goal, profile.age, profile.gender
    );
    prompt.push_str("Requirements:\n");
    prompt.push_str("- Home workout preferred\n");
    let _ = writeln!(
        prompt,
        "- Include sets/reps and YouTube links in this format:\"{YOUTUBE_SEARCH_PREFIX}\""
    );
    prompt.push_str("- Add 4-week progression plan\n");
    let _ = writeln!(
        prompt,
        "- Format: Markdown table with columns: {WORKOUT_TABLE_HEADER}"
    );
    prompt.push_str("  - List day number only once at the start of each day's workout\n");
    prompt.push_str("  - Use empty Day column for subsequent exercises on the same day\n");
    prompt.push_str("  - Example:\n");
    indent_block(&mut prompt, WORKOUT_TABLE_EXAMPLE);
    prompt
}

/// Diet generation task with its expected output
#[must_use]
pub fn diet_task(profile: &UserProfile, target_calories: f64) -> PlanTask {
    PlanTask {
        kind: PlanKind::Diet,
        description: build_diet_prompt(profile, target_calories),
        expected_output: "Markdown table with meal plan".to_owned(),
    }
}

/// Workout generation task with its expected output
#[must_use]
pub fn workout_task(profile: &UserProfile, preferences: &WorkoutPreferences) -> PlanTask {
    PlanTask {
        kind: PlanKind::Workout,
        description: build_workout_prompt(profile, preferences),
        expected_output: "Markdown table with workout plan".to_owned(),
    }
}
