// ABOUTME: Calorie estimation using the revised Harris-Benedict BMR equation
// ABOUTME: BMR, activity-scaled maintenance calories, and the five weekly goal targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Estimator
//!
//! Biometric inputs → basal metabolic rate → total daily energy expenditure
//! (maintenance) → a small set of calorie targets offset from maintenance.
//!
//! Every function here is pure: identical inputs give bit-identical outputs.

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{Gender, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::config::{ActivityFactors, BmrCoefficients, CalorieConfig};

/// Weekly weight-change goal, each mapped to a fixed kcal/day offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalorieGoal {
    /// Maintenance − 500 kcal
    #[serde(alias = "Lose 0.5kg/week")]
    LoseHalfKg,
    /// Maintenance − 250 kcal
    #[serde(alias = "Lose 0.25kg/week")]
    LoseQuarterKg,
    /// Maintenance
    #[serde(alias = "Maintain")]
    Maintain,
    /// Maintenance + 250 kcal
    #[serde(alias = "Gain 0.25kg/week")]
    GainQuarterKg,
    /// Maintenance + 500 kcal
    #[serde(alias = "Gain 0.5kg/week")]
    GainHalfKg,
}

impl CalorieGoal {
    /// Goals in the order the selector presents them
    pub const ALL: [Self; 5] = [
        Self::LoseHalfKg,
        Self::LoseQuarterKg,
        Self::Maintain,
        Self::GainQuarterKg,
        Self::GainHalfKg,
    ];

    /// Offset from maintenance in kcal/day
    #[must_use]
    pub const fn offset_kcal(&self) -> f64 {
        match self {
            Self::LoseHalfKg => -500.0,
            Self::LoseQuarterKg => -250.0,
            Self::Maintain => 0.0,
            Self::GainQuarterKg => 250.0,
            Self::GainHalfKg => 500.0,
        }
    }

    /// Human-readable goal label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LoseHalfKg => "Lose 0.5kg/week",
            Self::LoseQuarterKg => "Lose 0.25kg/week",
            Self::Maintain => "Maintain",
            Self::GainQuarterKg => "Gain 0.25kg/week",
            Self::GainHalfKg => "Gain 0.5kg/week",
        }
    }

    /// Daily target for this goal, truncated toward zero to whole kcal
    #[must_use]
    pub fn target_kcal(&self, maintenance: f64) -> i64 {
        (maintenance + self.offset_kcal()).trunc() as i64
    }
}

impl Display for CalorieGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the goal selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalOption {
    /// Goal this option selects
    pub goal: CalorieGoal,
    /// Display text, e.g. `"Maintain: 2050 kcal"`
    pub label: String,
    /// Target in whole kcal/day
    pub calories: i64,
}

/// Result of a maintenance calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieEstimate {
    /// Height used by the formula, in centimeters
    pub height_cm: f64,
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Multiplier selected from the activity label
    pub activity_factor: f64,
    /// Total Daily Energy Expenditure (maintenance) in kcal/day
    pub maintenance: f64,
}

/// Maintenance calories and the currently selected target
///
/// `target_calories` is always a whole number: the truncated maintenance
/// ± {0, 250, 500} of the last selected goal, starting at Maintain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieProfile {
    /// Maintenance calories in kcal/day
    pub maintenance: f64,
    /// Current target in kcal/day
    pub target_calories: f64,
}

impl CalorieProfile {
    /// Start a profile with the Maintain target
    #[must_use]
    pub fn new(maintenance: f64) -> Self {
        Self {
            maintenance,
            target_calories: CalorieGoal::Maintain.target_kcal(maintenance) as f64,
        }
    }

    /// Re-derive the target from a goal, returning the whole-kcal value stored
    pub fn select_goal(&mut self, goal: CalorieGoal) -> i64 {
        let target = goal.target_kcal(self.maintenance);
        self.target_calories = target as f64;
        target
    }
}

/// Calculate Basal Metabolic Rate with the gender-specific linear formula
///
/// - Male: 88.362 + 13.397·weight + 4.799·height − 5.677·age
/// - Female: 447.593 + 9.247·weight + 3.098·height − 4.330·age
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    coefficients: &BmrCoefficients,
) -> f64 {
    let age = f64::from(age);
    match gender {
        Gender::Male => {
            coefficients.male_constant + coefficients.male_weight_coef * weight_kg
                + coefficients.male_height_coef * height_cm
                - coefficients.male_age_coef * age
        }
        Gender::Female => {
            coefficients.female_constant + coefficients.female_weight_coef * weight_kg
                + coefficients.female_height_coef * height_cm
                - coefficients.female_age_coef * age
        }
    }
}

/// Select the activity factor by the first word of an activity label
///
/// # Errors
///
/// Returns `RESOURCE_NOT_FOUND` if the first word is not one of the five keys
pub fn activity_factor_for_label(label: &str, factors: &ActivityFactors) -> AppResult<f64> {
    let key = label.split_whitespace().next().unwrap_or_default();
    factors.get(key).ok_or_else(|| {
        AppError::not_found(format!("Activity factor for '{key}'"))
            .with_details(serde_json::json!({ "activity_level": label }))
    })
}

/// Calculate maintenance calories: BMR × activity factor
///
/// # Errors
///
/// Returns an error if the activity label has no factor
pub fn calculate_maintenance(
    bmr: f64,
    activity_label: &str,
    factors: &ActivityFactors,
) -> AppResult<f64> {
    Ok(bmr * activity_factor_for_label(activity_label, factors)?)
}

/// Run the full calculation for a submitted profile
///
/// The profile is expected to have passed `UserProfile::validate`.
///
/// # Errors
///
/// Returns an error if the activity label has no factor
pub fn estimate_calories(profile: &UserProfile, config: &CalorieConfig) -> AppResult<CalorieEstimate> {
    let height_cm = profile.height_cm();
    let bmr = calculate_bmr(
        profile.weight_kg,
        height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let activity_factor =
        activity_factor_for_label(profile.activity_level.label(), &config.activity_factors)?;

    let estimate = CalorieEstimate {
        height_cm,
        bmr,
        activity_factor,
        maintenance: bmr * activity_factor,
    };

    tracing::debug!(
        bmr = estimate.bmr,
        activity_factor = estimate.activity_factor,
        maintenance = estimate.maintenance,
        "Calculated maintenance calories"
    );

    Ok(estimate)
}

/// The five goal choices for a maintenance value, in selector order
#[must_use]
pub fn goal_options(maintenance: f64) -> Vec<GoalOption> {
    CalorieGoal::ALL
        .iter()
        .map(|&goal| {
            let calories = goal.target_kcal(maintenance);
            GoalOption {
                goal,
                label: format!("{}: {calories} kcal", goal.label()),
                calories,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fitplan_core::errors::ErrorCode;
    use fitplan_core::models::{ActivityLevel, Budget, DietType};

    const EPSILON: f64 = 1e-6;

    fn profile(gender: Gender, activity_level: ActivityLevel) -> UserProfile {
        UserProfile {
            age: 30,
            gender,
            weight_kg: 70.0,
            height_feet: 5,
            height_inches: 10,
            diet_type: DietType::Vegetarian,
            budget: Budget::Low,
            activity_level,
            dislikes: String::new(),
        }
    }

    #[test]
    fn male_reference_profile() {
        let estimate =
            estimate_calories(&profile(Gender::Male, ActivityLevel::Sedentary), &CalorieConfig::default())
                .unwrap();

        // 88.362 + 13.397*70 + 4.799*177.8 - 5.677*30
        assert!((estimate.height_cm - 177.8).abs() < EPSILON);
        assert!((estimate.bmr - 1709.1042).abs() < EPSILON);
        assert!((estimate.activity_factor - 1.2).abs() < EPSILON);
        assert!((estimate.maintenance - 2050.925_04).abs() < EPSILON);
    }

    #[test]
    fn female_formula() {
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25
        let bmr = calculate_bmr(60.0, 165.0, 25, Gender::Female, &BmrCoefficients::default());
        assert!((bmr - 1405.333).abs() < EPSILON);
    }

    #[test]
    fn every_activity_label_has_a_factor() {
        let factors = ActivityFactors::default();
        let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
        for (level, factor) in ActivityLevel::ALL.iter().zip(expected) {
            let found = activity_factor_for_label(level.label(), &factors).unwrap();
            assert!((found - factor).abs() < EPSILON, "{level}");
        }
    }

    #[test]
    fn unknown_activity_label_is_a_lookup_error() {
        let err = activity_factor_for_label("Athletic (twice daily)", &ActivityFactors::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);

        let err = calculate_maintenance(1500.0, "", &ActivityFactors::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn estimate_is_deterministic() {
        let config = CalorieConfig::default();
        let p = profile(Gender::Female, ActivityLevel::VeryActive);
        let a = estimate_calories(&p, &config).unwrap();
        let b = estimate_calories(&p, &config).unwrap();
        assert_eq!(a.bmr.to_bits(), b.bmr.to_bits());
        assert_eq!(a.maintenance.to_bits(), b.maintenance.to_bits());
    }

    #[test]
    fn goal_options_follow_selector_order_and_offsets() {
        let options = goal_options(2050.925);
        let calories: Vec<i64> = options.iter().map(|o| o.calories).collect();
        assert_eq!(calories, vec![1550, 1800, 2050, 2300, 2550]);
        assert_eq!(options[0].label, "Lose 0.5kg/week: 1550 kcal");
        assert_eq!(options[2].label, "Maintain: 2050 kcal");
        assert_eq!(options[4].label, "Gain 0.5kg/week: 2550 kcal");
    }

    #[test]
    fn maintain_target_is_truncated_maintenance() {
        for maintenance in [1200.0, 1999.999, 2050.5, 3100.01] {
            assert_eq!(
                CalorieGoal::Maintain.target_kcal(maintenance),
                maintenance.trunc() as i64
            );
        }
    }

    #[test]
    fn calorie_profile_tracks_selected_goal() {
        let mut profile = CalorieProfile::new(2050.925);
        assert!((profile.target_calories - 2050.0).abs() < EPSILON);

        assert_eq!(profile.select_goal(CalorieGoal::LoseQuarterKg), 1800);
        assert!((profile.target_calories - 1800.0).abs() < EPSILON);

        assert_eq!(profile.select_goal(CalorieGoal::GainQuarterKg), 2300);
        assert!((profile.maintenance - 2050.925).abs() < EPSILON);
    }

    #[test]
    fn goal_accepts_label_alias() {
        let goal: CalorieGoal = serde_json::from_str("\"Gain 0.25kg/week\"").unwrap();
        assert_eq!(goal, CalorieGoal::GainQuarterKg);
        let goal: CalorieGoal = serde_json::from_str("\"lose_half_kg\"").unwrap();
        assert_eq!(goal, CalorieGoal::LoseHalfKg);
    }
}
