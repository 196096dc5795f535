// ABOUTME: Per-session planning state with explicit stage gates
// ABOUTME: Tracks the profile, calorie targets, generated plans, and the in-flight generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{UserProfile, WorkoutPreferences};
use fitplan_intelligence::{goal_options, CalorieEstimate, CalorieGoal, CalorieProfile, GoalOption};
use serde::{Deserialize, Serialize};

use crate::planner::{
    diet_task, fitness_agent, nutrition_agent, workout_task, AgentProfile, PlanKind, PlanTask,
};

/// Furthest step a session can currently act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningStage {
    /// Nothing calculated yet
    PersonalInfo,
    /// Maintenance known; goal selection and diet generation available
    DietPlanning,
    /// Diet plan present; workout generation available
    WorkoutPlanning,
}

/// Everything one user has entered or generated
///
/// Plans survive a profile resubmission; the calorie target does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Last submitted profile
    pub profile: Option<UserProfile>,
    /// Last calorie calculation for that profile
    pub estimate: Option<CalorieEstimate>,
    /// Maintenance and the current target
    pub calories: Option<CalorieProfile>,
    /// Goal behind the current target, if one was chosen
    pub selected_goal: Option<CalorieGoal>,
    /// Last generated diet plan
    pub diet_plan: Option<String>,
    /// Last generated workout plan
    pub workout_plan: Option<String>,
    /// Preferences behind the last workout request
    pub workout_preferences: Option<WorkoutPreferences>,
    /// Generation currently awaiting the model
    pub in_flight: Option<PlanKind>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            profile: None,
            estimate: None,
            calories: None,
            selected_goal: None,
            diet_plan: None,
            workout_plan: None,
            workout_preferences: None,
            in_flight: None,
            created_at: now,
            updated_at: now,
        }
    }
}

fn non_empty(plan: Option<&String>) -> Option<&str> {
    plan.map(String::as_str).filter(|text| !text.trim().is_empty())
}

impl SessionState {
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Current stage derived from what has been filled in
    #[must_use]
    pub fn stage(&self) -> PlanningStage {
        if non_empty(self.diet_plan.as_ref()).is_some() {
            PlanningStage::WorkoutPlanning
        } else if self.calories.is_some() {
            PlanningStage::DietPlanning
        } else {
            PlanningStage::PersonalInfo
        }
    }

    /// Maintenance calories, once calculated
    #[must_use]
    pub fn maintenance(&self) -> Option<f64> {
        self.calories.map(|c| c.maintenance)
    }

    /// Current calorie target, once calculated
    #[must_use]
    pub fn target_calories(&self) -> Option<f64> {
        self.calories.map(|c| c.target_calories)
    }

    /// The goal selector is offered once maintenance is known
    #[must_use]
    pub const fn show_goal_selector(&self) -> bool {
        self.calories.is_some()
    }

    /// Selector entries for the current maintenance value
    #[must_use]
    pub fn goal_options(&self) -> Vec<GoalOption> {
        self.maintenance().map(goal_options).unwrap_or_default()
    }

    /// Stored plan text
    #[must_use]
    pub fn plan(&self, kind: PlanKind) -> Option<&str> {
        match kind {
            PlanKind::Diet => non_empty(self.diet_plan.as_ref()),
            PlanKind::Workout => non_empty(self.workout_plan.as_ref()),
        }
    }

    /// Store a fresh calculation; the target resets to the Maintain goal
    pub fn record_estimate(&mut self, profile: UserProfile, estimate: CalorieEstimate) {
        self.profile = Some(profile);
        self.estimate = Some(estimate);
        self.calories = Some(CalorieProfile::new(estimate.maintenance));
        self.selected_goal = None;
        self.touch();
    }

    /// Re-derive the target from a goal
    ///
    /// # Errors
    ///
    /// Returns `STAGE_NOT_REACHED` before maintenance has been calculated
    pub fn select_goal(&mut self, goal: CalorieGoal) -> AppResult<i64> {
        let calories = self.calories.as_mut().ok_or_else(|| {
            AppError::stage_not_reached(
                "Please calculate your maintenance calories first in the Personal Info step",
            )
        })?;
        let target = calories.select_goal(goal);
        self.selected_goal = Some(goal);
        self.touch();
        Ok(target)
    }

    /// Agent and task for a generation, checking the stage gate for `kind`
    ///
    /// # Errors
    ///
    /// Returns `STAGE_NOT_REACHED` when the prerequisite step is missing and
    /// `VALUE_OUT_OF_RANGE` for invalid workout preferences
    pub fn prepare_task(
        &self,
        kind: PlanKind,
        preferences: Option<WorkoutPreferences>,
    ) -> AppResult<(AgentProfile, PlanTask)> {
        match kind {
            PlanKind::Diet => {
                let (Some(profile), Some(target)) = (self.profile.as_ref(), self.target_calories())
                else {
                    return Err(AppError::stage_not_reached(
                        "Please calculate your maintenance calories first in the Personal Info step",
                    ));
                };
                Ok((nutrition_agent(), diet_task(profile, target)))
            }
            PlanKind::Workout => {
                let profile = self
                    .profile
                    .as_ref()
                    .filter(|_| self.plan(PlanKind::Diet).is_some())
                    .ok_or_else(|| {
                        AppError::stage_not_reached(
                            "Please generate your diet plan first in the Diet Planning step",
                        )
                    })?;
                let preferences = preferences.unwrap_or_default();
                preferences.validate()?;
                Ok((fitness_agent(), workout_task(profile, &preferences)))
            }
        }
    }

    /// Mark a generation as started
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_LOCKED` while another generation is awaiting the model
    pub fn begin_generation(&mut self, kind: PlanKind) -> AppResult<()> {
        if let Some(running) = self.in_flight {
            return Err(AppError::locked(format!(
                "A {running} plan is already being generated for this session"
            )));
        }
        self.in_flight = Some(kind);
        self.touch();
        Ok(())
    }

    /// Clear the in-flight marker and store the plan on success
    ///
    /// A failed generation leaves the previous plan untouched.
    ///
    /// # Errors
    ///
    /// Passes the generator's error through
    pub fn finish_generation(
        &mut self,
        kind: PlanKind,
        preferences: Option<WorkoutPreferences>,
        result: AppResult<String>,
    ) -> AppResult<String> {
        self.in_flight = None;
        self.touch();
        let plan = result?;
        match kind {
            PlanKind::Diet => self.diet_plan = Some(plan.clone()),
            PlanKind::Workout => {
                self.workout_plan = Some(plan.clone());
                self.workout_preferences = Some(preferences.unwrap_or_default());
            }
        }
        Ok(plan)
    }
}
