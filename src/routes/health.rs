// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness plus readiness that reports plan generation and model reachability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tracing::warn;

use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(resources): State<Arc<ServerResources>>,
        ) -> Json<serde_json::Value> {
            // null when generation is disabled, otherwise the model's reachability
            let mut model_reachable = None;
            if let Some(generator) = &resources.generator {
                let reachable = generator.health_check().await.unwrap_or_else(|e| {
                    warn!(error = %e, "Plan model health check failed");
                    false
                });
                model_reachable = Some(reachable);
            }

            Json(serde_json::json!({
                "status": "ready",
                "plan_generation": resources.generator.is_some(),
                "model_reachable": model_reachable,
                "active_sessions": resources.sessions.len(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
