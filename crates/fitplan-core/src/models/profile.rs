// ABOUTME: User profile model filled in on the personal info stage
// ABOUTME: Biometric inputs, dietary preferences, and workout preferences with form-level bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::constants::form_limits;
use crate::errors::{AppError, AppResult};

/// Centimeters per inch
const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
const INCHES_PER_FOOT: u32 = 12;

/// Gender used to select the BMR coefficients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    /// Male coefficients
    #[serde(alias = "male")]
    Male,
    /// Female coefficients
    #[serde(alias = "female")]
    Female,
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Diet type the meal plan must respect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DietType {
    /// No meat or fish
    #[serde(alias = "vegetarian")]
    Vegetarian,
    /// No animal products
    #[serde(alias = "vegan")]
    Vegan,
    /// Unrestricted
    #[serde(rename = "Non-Vegetarian", alias = "non_vegetarian")]
    NonVegetarian,
}

impl Display for DietType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vegetarian => write!(f, "Vegetarian"),
            Self::Vegan => write!(f, "Vegan"),
            Self::NonVegetarian => write!(f, "Non-Vegetarian"),
        }
    }
}

/// Food budget bracket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Budget {
    /// Low budget
    #[serde(alias = "low")]
    Low,
    /// Medium budget
    #[serde(alias = "medium")]
    Medium,
    /// High budget
    #[serde(alias = "high")]
    High,
}

impl Display for Budget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Activity level, serialized as the label shown in the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(rename = "Sedentary (little/no exercise)", alias = "sedentary")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(
        rename = "Lightly Active (light exercise 1-3 days/week)",
        alias = "lightly_active"
    )]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(
        rename = "Moderately Active (moderate exercise 3-5 days/week)",
        alias = "moderately_active"
    )]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(rename = "Very Active (hard exercise 6-7 days/week)", alias = "very_active")]
    VeryActive,
    /// Physical job and daily exercise
    #[serde(
        rename = "Extra Active (physical job & daily exercise)",
        alias = "extra_active"
    )]
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in the order the form lists them
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// The label shown in the activity selector
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little/no exercise)",
            Self::LightlyActive => "Lightly Active (light exercise 1-3 days/week)",
            Self::ModeratelyActive => "Moderately Active (moderate exercise 3-5 days/week)",
            Self::VeryActive => "Very Active (hard exercise 6-7 days/week)",
            Self::ExtraActive => "Extra Active (physical job & daily exercise)",
        }
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Goal of the workout plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WorkoutGoal {
    /// Fat loss focus
    #[default]
    #[serde(rename = "Weight Loss", alias = "weight_loss")]
    WeightLoss,
    /// Hypertrophy focus
    #[serde(rename = "Muscle Gain", alias = "muscle_gain")]
    MuscleGain,
    /// Balanced conditioning
    #[serde(rename = "General Fitness", alias = "general_fitness")]
    GeneralFitness,
}

impl Display for WorkoutGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightLoss => write!(f, "Weight Loss"),
            Self::MuscleGain => write!(f, "Muscle Gain"),
            Self::GeneralFitness => write!(f, "General Fitness"),
        }
    }
}

/// Biometric data and dietary preferences submitted on the personal info stage
///
/// Immutable once submitted for a calculation; a resubmission replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Gender for BMR coefficient selection
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height, whole feet
    pub height_feet: u32,
    /// Height, remaining inches
    pub height_inches: u32,
    /// Diet type for the meal plan
    pub diet_type: DietType,
    /// Food budget bracket
    pub budget: Budget,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Food dislikes or allergies as typed, passed to the diet prompt unchanged
    #[serde(default)]
    pub dislikes: String,
}

impl UserProfile {
    /// Check the numeric bounds the form widgets enforce
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if self.age < form_limits::MIN_AGE {
            return Err(AppError::out_of_range(
                "age",
                format!("Age must be at least {}", form_limits::MIN_AGE),
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg < form_limits::MIN_WEIGHT_KG {
            return Err(AppError::out_of_range(
                "weight_kg",
                format!(
                    "Weight must be at least {:.1} kg",
                    form_limits::MIN_WEIGHT_KG
                ),
            ));
        }
        if !(form_limits::MIN_HEIGHT_FEET..=form_limits::MAX_HEIGHT_FEET)
            .contains(&self.height_feet)
        {
            return Err(AppError::out_of_range(
                "height_feet",
                format!(
                    "Height (feet) must be between {} and {}",
                    form_limits::MIN_HEIGHT_FEET,
                    form_limits::MAX_HEIGHT_FEET
                ),
            ));
        }
        if self.height_inches > form_limits::MAX_HEIGHT_INCHES {
            return Err(AppError::out_of_range(
                "height_inches",
                format!(
                    "Height (inches) must be between 0 and {}",
                    form_limits::MAX_HEIGHT_INCHES
                ),
            ));
        }
        Ok(())
    }

    /// Height converted to centimeters
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        f64::from(self.height_feet * INCHES_PER_FOOT + self.height_inches) * CM_PER_INCH
    }
}

/// Parameters chosen on the workout planning stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPreferences {
    /// Training days per week (1-7)
    #[serde(default = "default_workout_days")]
    pub days_per_week: u8,
    /// Workout goal
    #[serde(default)]
    pub goal: WorkoutGoal,
}

const fn default_workout_days() -> u8 {
    form_limits::DEFAULT_WORKOUT_DAYS
}

impl Default for WorkoutPreferences {
    fn default() -> Self {
        Self {
            days_per_week: form_limits::DEFAULT_WORKOUT_DAYS,
            goal: WorkoutGoal::default(),
        }
    }
}

impl WorkoutPreferences {
    /// Check training days are within 1-7
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when the day count is outside the form bounds
    pub fn validate(&self) -> AppResult<()> {
        if (form_limits::MIN_WORKOUT_DAYS..=form_limits::MAX_WORKOUT_DAYS)
            .contains(&self.days_per_week)
        {
            Ok(())
        } else {
            Err(AppError::out_of_range(
                "days_per_week",
                format!(
                    "Training days/week must be between {} and {}",
                    form_limits::MIN_WORKOUT_DAYS,
                    form_limits::MAX_WORKOUT_DAYS
                ),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: 30,
            gender: Gender::Male,
            weight_kg: 70.0,
            height_feet: 5,
            height_inches: 10,
            diet_type: DietType::Vegetarian,
            budget: Budget::Medium,
            activity_level: ActivityLevel::Sedentary,
            dislikes: "mushrooms, , peanuts ".to_owned(),
        }
    }

    #[test]
    fn height_converts_feet_and_inches() {
        let profile = sample_profile();
        assert!((profile.height_cm() - 177.8).abs() < 1e-9);
    }

    #[test]
    fn validate_accepts_form_bounds() {
        let mut profile = sample_profile();
        profile.age = 10;
        profile.weight_kg = 10.0;
        profile.height_feet = 8;
        profile.height_inches = 11;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn validate_rejects_each_bound() {
        let cases: [(&str, fn(&mut UserProfile)); 5] = [
            ("age", |p| p.age = 9),
            ("weight_kg", |p| p.weight_kg = 9.5),
            ("height_feet", |p| p.height_feet = 2),
            ("height_feet", |p| p.height_feet = 9),
            ("height_inches", |p| p.height_inches = 12),
        ];
        for (field, mutate) in cases {
            let mut profile = sample_profile();
            mutate(&mut profile);
            let err = profile.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
            assert_eq!(err.details["field"], field);
        }
    }

    #[test]
    fn nan_weight_is_rejected() {
        let mut profile = sample_profile();
        profile.weight_kg = f64::NAN;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn activity_level_serializes_as_form_label() {
        let json = serde_json::to_string(&ActivityLevel::LightlyActive).unwrap();
        assert_eq!(json, "\"Lightly Active (light exercise 1-3 days/week)\"");

        let parsed: ActivityLevel = serde_json::from_str("\"very_active\"").unwrap();
        assert_eq!(parsed, ActivityLevel::VeryActive);
    }

    #[test]
    fn display_matches_serde_labels() {
        for level in ActivityLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
        assert_eq!(
            serde_json::to_string(&DietType::NonVegetarian).unwrap(),
            format!("\"{}\"", DietType::NonVegetarian)
        );
    }

    #[test]
    fn workout_preferences_default_and_bounds() {
        let prefs: WorkoutPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, WorkoutPreferences::default());
        assert_eq!(prefs.days_per_week, 3);
        assert_eq!(prefs.goal, WorkoutGoal::WeightLoss);

        let too_many = WorkoutPreferences {
            days_per_week: 8,
            goal: WorkoutGoal::MuscleGain,
        };
        assert!(too_many.validate().is_err());
        let none = WorkoutPreferences {
            days_per_week: 0,
            goal: WorkoutGoal::MuscleGain,
        };
        assert!(none.validate().is_err());
    }
}
