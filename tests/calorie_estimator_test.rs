// ABOUTME: Integration tests for maintenance calorie estimation and goal targets
// ABOUTME: Exercises the estimator through the public profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::sample_profile;
use fitplan_server::errors::ErrorCode;
use fitplan_server::intelligence::{
    activity_factor_for_label, estimate_calories, goal_options, ActivityFactors, CalorieConfig,
    CalorieGoal, CalorieProfile,
};
use fitplan_server::models::{ActivityLevel, Gender};

const EPS: f64 = 1e-6;

#[test]
fn test_female_moderately_active_estimate() {
    let mut profile = sample_profile();
    profile.gender = Gender::Female;
    profile.age = 25;
    profile.weight_kg = 60.0;
    profile.height_feet = 5;
    profile.height_inches = 4;
    profile.activity_level = ActivityLevel::ModeratelyActive;

    let estimate = estimate_calories(&profile, &CalorieConfig::default()).unwrap();
    assert!((estimate.height_cm - 162.56).abs() < EPS);
    assert!((estimate.bmr - 1397.773_88).abs() < EPS);
    assert!((estimate.activity_factor - 1.55).abs() < EPS);
    assert!((estimate.maintenance - 2166.549_514).abs() < EPS);

    let calories: Vec<i64> = goal_options(estimate.maintenance)
        .iter()
        .map(|option| option.calories)
        .collect();
    assert_eq!(calories, vec![1666, 1916, 2166, 2416, 2666]);
}

#[test]
fn test_every_activity_level_has_a_factor() {
    let factors = ActivityFactors::default();
    let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
    for (level, factor) in ActivityLevel::ALL.iter().zip(expected) {
        let found = activity_factor_for_label(level.label(), &factors).unwrap();
        assert!((found - factor).abs() < EPS, "{level}");
    }
}

#[test]
fn test_unrecognized_activity_word() {
    let error = activity_factor_for_label("Couch potato", &ActivityFactors::default())
        .err()
        .unwrap();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.details["activity_level"], "Couch potato");
}

#[test]
fn test_goal_selection_replaces_target() {
    let estimate = estimate_calories(&sample_profile(), &CalorieConfig::default()).unwrap();
    let mut profile = CalorieProfile::new(estimate.maintenance);
    assert!((profile.target_calories - estimate.maintenance.trunc()).abs() < EPS);

    assert_eq!(profile.select_goal(CalorieGoal::GainHalfKg), 2550);
    assert_eq!(profile.select_goal(CalorieGoal::LoseHalfKg), 1550);
    assert!((profile.target_calories - 1550.0).abs() < EPS);
    assert!((profile.maintenance - estimate.maintenance).abs() < EPS);
}

#[test]
fn test_goal_options_follow_selector_order() {
    let options = goal_options(2000.0);
    let goals: Vec<CalorieGoal> = options.iter().map(|option| option.goal).collect();
    assert_eq!(goals, CalorieGoal::ALL.to_vec());
    assert_eq!(options[1].label, "Lose 0.25kg/week: 1750 kcal");
    assert_eq!(options[3].label, "Gain 0.25kg/week: 2250 kcal");
}
