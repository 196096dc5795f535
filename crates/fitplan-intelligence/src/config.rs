// ABOUTME: Configuration for the calorie estimator
// ABOUTME: Revised Harris-Benedict coefficients and activity factor multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Estimation Configuration
//!
//! # Scientific References
//!
//! - BMR: Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

use serde::{Deserialize, Serialize};

/// Calorie estimator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalorieConfig {
    /// BMR formula coefficients
    pub bmr: BmrCoefficients,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactors,
}

/// Gender-specific linear BMR coefficients
///
/// BMR = constant + weight·`weight_kg` + height·`height_cm` − age·`age_years`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrCoefficients {
    /// Male constant term (88.362)
    pub male_constant: f64,
    /// Male weight coefficient (13.397)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799)
    pub male_height_coef: f64,
    /// Male age coefficient, subtracted (5.677)
    pub male_age_coef: f64,
    /// Female constant term (447.593)
    pub female_constant: f64,
    /// Female weight coefficient (9.247)
    pub female_weight_coef: f64,
    /// Female height coefficient (3.098)
    pub female_height_coef: f64,
    /// Female age coefficient, subtracted (4.330)
    pub female_age_coef: f64,
}

impl Default for BmrCoefficients {
    fn default() -> Self {
        Self {
            male_constant: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_constant: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

/// Activity factor multipliers keyed by the first word of the activity label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactors {
    /// "Sedentary": 1.2
    pub sedentary: f64,
    /// "Lightly": 1.375
    pub lightly: f64,
    /// "Moderately": 1.55
    pub moderately: f64,
    /// "Very": 1.725
    pub very: f64,
    /// "Extra": 1.9
    pub extra: f64,
}

impl Default for ActivityFactors {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly: 1.375,
            moderately: 1.55,
            very: 1.725,
            extra: 1.9,
        }
    }
}

impl ActivityFactors {
    /// Look up a factor by its key word
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "Sedentary" => Some(self.sedentary),
            "Lightly" => Some(self.lightly),
            "Moderately" => Some(self.moderately),
            "Very" => Some(self.very),
            "Extra" => Some(self.extra),
            _ => None,
        }
    }
}
