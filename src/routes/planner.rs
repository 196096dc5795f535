// ABOUTME: Route handlers for the three-step planning flow
// ABOUTME: Session lifecycle, calorie calculation, goal selection, plan generation, and downloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner routes
//!
//! Every handler is a thin shell over [`SessionState`] and [`SessionStore`];
//! stage gates and locking live there.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use fitplan_core::errors::AppError;
use fitplan_core::models::{UserProfile, WorkoutPreferences};
use fitplan_intelligence::{estimate_calories, CalorieGoal, GoalOption};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::export::SpreadsheetArtifact;
use crate::logging::AppLogger;
use crate::planner::PlanKind;
use crate::resources::ServerResources;
use crate::session::{PlanningStage, SessionState};

/// Response for a newly created session
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// Identifier for all later calls
    pub session_id: Uuid,
    /// Always `personal_info`
    pub stage: PlanningStage,
}

/// Full view of a session
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session identifier
    pub session_id: Uuid,
    /// Furthest reachable stage
    pub stage: PlanningStage,
    /// Maintenance calories, once calculated
    pub maintenance: Option<f64>,
    /// Current target
    pub target_calories: Option<f64>,
    /// Whether the goal selector is offered
    pub show_goal_selector: bool,
    /// Goal behind the current target
    pub selected_goal: Option<CalorieGoal>,
    /// Selector entries
    pub goal_options: Vec<GoalOption>,
    /// Last diet plan
    pub diet_plan: Option<String>,
    /// Last workout plan
    pub workout_plan: Option<String>,
    /// Generation awaiting the model, if any
    pub generating: Option<PlanKind>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl SessionResponse {
    fn from_state(session_id: Uuid, state: &SessionState) -> Self {
        Self {
            session_id,
            stage: state.stage(),
            maintenance: state.maintenance(),
            target_calories: state.target_calories(),
            show_goal_selector: state.show_goal_selector(),
            selected_goal: state.selected_goal,
            goal_options: state.goal_options(),
            diet_plan: state.plan(PlanKind::Diet).map(str::to_owned),
            workout_plan: state.plan(PlanKind::Workout).map(str::to_owned),
            generating: state.in_flight,
            created_at: state.created_at,
            updated_at: state.updated_at,
        }
    }
}

/// Result of a maintenance calculation
#[derive(Debug, Serialize, Deserialize)]
pub struct CalorieResponse {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    /// Activity multiplier applied
    pub activity_factor: f64,
    /// Maintenance calories, kcal/day
    pub maintenance: f64,
    /// Maintenance rounded for display
    pub maintenance_rounded: i64,
    /// Target, initially the Maintain goal in whole kcal
    pub target_calories: f64,
    /// Selector entries
    pub goal_options: Vec<GoalOption>,
}

/// Body for goal selection
#[derive(Debug, Serialize, Deserialize)]
pub struct GoalRequest {
    /// Chosen goal
    pub goal: CalorieGoal,
}

/// Result of goal selection
#[derive(Debug, Serialize, Deserialize)]
pub struct GoalResponse {
    /// Chosen goal
    pub goal: CalorieGoal,
    /// New target, whole kcal/day
    pub target_calories: i64,
    /// Display label of the chosen option
    pub label: String,
}

/// A generated plan
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Which plan
    pub kind: PlanKind,
    /// Raw plan document
    pub plan: String,
    /// Download path for the spreadsheet
    pub download_url: String,
}

impl PlanResponse {
    fn new(session_id: Uuid, kind: PlanKind, plan: String) -> Self {
        Self {
            kind,
            plan,
            download_url: format!("/api/sessions/{session_id}/downloads/{}", kind.file_name()),
        }
    }
}

/// Planner routes implementation
pub struct PlannerRoutes;

impl PlannerRoutes {
    /// Create all planner routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions", post(Self::handle_create_session))
            .route(
                "/api/sessions/:id",
                get(Self::handle_get_session).delete(Self::handle_delete_session),
            )
            .route("/api/sessions/:id/profile", post(Self::handle_submit_profile))
            .route("/api/sessions/:id/goal", post(Self::handle_select_goal))
            .route("/api/sessions/:id/diet-plan", post(Self::handle_diet_plan))
            .route(
                "/api/sessions/:id/workout-plan",
                post(Self::handle_workout_plan),
            )
            .route(
                "/api/sessions/:id/downloads/:file_name",
                get(Self::handle_download),
            )
            .with_state(resources)
    }

    /// Handle POST /api/sessions - Start a session
    async fn handle_create_session(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let session_id = resources.sessions.create();
        let response = CreateSessionResponse {
            session_id,
            stage: PlanningStage::PersonalInfo,
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/sessions/:id - Session snapshot
    async fn handle_get_session(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let state = resources.sessions.snapshot(id)?;
        let response = SessionResponse::from_state(id, &state);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/sessions/:id - End a session
    async fn handle_delete_session(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        if !resources.sessions.remove(id) {
            return Err(AppError::not_found(format!("Session {id}")));
        }
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle POST /api/sessions/:id/profile - Calculate maintenance calories
    async fn handle_submit_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        Json(profile): Json<UserProfile>,
    ) -> Result<Response, AppError> {
        profile.validate()?;
        let estimate = estimate_calories(&profile, &resources.calorie_config)?;

        let state = resources.sessions.update(id, |state| {
            state.record_estimate(profile, estimate);
            Ok(state.clone())
        })?;

        AppLogger::log_calorie_estimate(&id.to_string(), estimate.bmr, estimate.maintenance);

        let response = CalorieResponse {
            bmr: estimate.bmr,
            activity_factor: estimate.activity_factor,
            maintenance: estimate.maintenance,
            maintenance_rounded: estimate.maintenance.round() as i64,
            target_calories: state.target_calories().unwrap_or(estimate.maintenance),
            goal_options: state.goal_options(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/sessions/:id/goal - Choose a calorie goal
    async fn handle_select_goal(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        Json(request): Json<GoalRequest>,
    ) -> Result<Response, AppError> {
        let goal = request.goal;
        let target_calories = resources
            .sessions
            .update(id, |state| state.select_goal(goal))?;

        info!(session.id = %id, goal = %goal, target_calories, "Calorie goal selected");

        let response = GoalResponse {
            goal,
            target_calories,
            label: format!("{}: {target_calories} kcal", goal.label()),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/sessions/:id/diet-plan - Generate the diet plan
    async fn handle_diet_plan(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        Self::generate(&resources, id, PlanKind::Diet, None).await
    }

    /// Handle POST /api/sessions/:id/workout-plan - Generate the workout plan
    async fn handle_workout_plan(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        Json(preferences): Json<WorkoutPreferences>,
    ) -> Result<Response, AppError> {
        Self::generate(&resources, id, PlanKind::Workout, Some(preferences)).await
    }

    async fn generate(
        resources: &Arc<ServerResources>,
        id: Uuid,
        kind: PlanKind,
        preferences: Option<WorkoutPreferences>,
    ) -> Result<Response, AppError> {
        // unknown sessions report 404 even when generation is disabled
        resources.sessions.snapshot(id)?;
        let generator = resources.generator()?;

        let plan = resources
            .sessions
            .generate_plan(id, kind, preferences, generator.as_ref())
            .await?;

        Ok((StatusCode::OK, Json(PlanResponse::new(id, kind, plan))).into_response())
    }

    /// Handle GET /api/sessions/:id/downloads/:file_name - Spreadsheet download
    async fn handle_download(
        State(resources): State<Arc<ServerResources>>,
        Path((id, file_name)): Path<(Uuid, String)>,
    ) -> Result<Response, AppError> {
        let kind = PlanKind::from_file_name(&file_name)
            .ok_or_else(|| AppError::not_found(format!("Download {file_name}")))?;

        let state = resources.sessions.snapshot(id)?;
        let document = state.plan(kind).ok_or_else(|| {
            AppError::not_found(format!("{} plan", kind.as_str()))
                .with_details(serde_json::json!({ "session_id": id }))
        })?;

        let artifact = SpreadsheetArtifact::from_plan(kind, document)?;
        AppLogger::log_export(
            &id.to_string(),
            artifact.file_name,
            artifact.rows,
            artifact.bytes.len(),
        );

        Ok(artifact.into_response())
    }
}
