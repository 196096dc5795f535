// ABOUTME: Route module organization for the FitPlan HTTP API
// ABOUTME: Combines health and planner routes under one router with request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes

/// Health check and readiness routes
pub mod health;
/// Planning flow routes
pub mod planner;

pub use health::HealthRoutes;
pub use planner::PlannerRoutes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(PlannerRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
