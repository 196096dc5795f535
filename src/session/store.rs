// ABOUTME: Concurrent per-session state store keyed by session id
// ABOUTME: Runs plan generation without holding a map guard across the model call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Instant;

use dashmap::DashMap;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::WorkoutPreferences;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::state::SessionState;
use crate::logging::AppLogger;
use crate::planner::{PlanGenerator, PlanKind};

/// All live sessions
///
/// Each session is an isolated record; the map only hands out per-entry
/// guards, and every guard is released before any `.await`.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, SessionState>,
}

/// Clears the in-flight marker if a generation future is dropped mid-call
struct InFlightGuard<'a> {
    store: &'a SessionStore,
    id: Uuid,
    armed: bool,
}

impl InFlightGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            if let Some(mut state) = self.store.sessions.get_mut(&self.id) {
                warn!(session.id = %self.id, "Plan generation abandoned before completion");
                state.in_flight = None;
            }
        }
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Session {id}"))
}

impl SessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionState::default());
        debug!(session.id = %id, "Session created");
        id
    }

    /// End a session, returning whether it existed
    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True when no session is live
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Copy of a session's current state
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown session
    pub fn snapshot(&self, id: Uuid) -> AppResult<SessionState> {
        self.sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| session_not_found(id))
    }

    /// Run a synchronous mutation against one session
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown session, or the closure's error
    pub fn update<R>(
        &self,
        id: Uuid,
        mutate: impl FnOnce(&mut SessionState) -> AppResult<R>,
    ) -> AppResult<R> {
        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;
        mutate(entry.value_mut())
    }

    /// Generate a plan for a session and store it
    ///
    /// Inputs are snapshotted under the entry guard, the guard is released
    /// for the model call, and the entry is re-acquired to store the result.
    ///
    /// # Errors
    ///
    /// Returns stage gate, lock, and generator errors; on any error the
    /// previously stored plan is left unchanged
    #[instrument(skip(self, generator, preferences), fields(session.id = %id, plan = %kind))]
    pub async fn generate_plan(
        &self,
        id: Uuid,
        kind: PlanKind,
        preferences: Option<WorkoutPreferences>,
        generator: &dyn PlanGenerator,
    ) -> AppResult<String> {
        let (agent, task) = self.update(id, |state| {
            let prepared = state.prepare_task(kind, preferences)?;
            state.begin_generation(kind)?;
            Ok(prepared)
        })?;

        let guard = InFlightGuard {
            store: self,
            id,
            armed: true,
        };
        let started = Instant::now();
        let result = generator.generate(&agent, &task).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        guard.disarm();

        let success = result.is_ok();
        AppLogger::log_plan_generation(&id.to_string(), kind.as_str(), success, duration_ms);

        let stored = self.update(id, |state| state.finish_generation(kind, preferences, result));
        if stored.is_ok() {
            info!("Stored {kind} plan");
        }
        stored
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fitplan_core::errors::ErrorCode;

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create();
        let b = store.create();
        assert_ne!(a, b);

        store
            .update(a, |state| {
                state.diet_plan = Some("| a |".to_owned());
                Ok(())
            })
            .unwrap();

        assert!(store.snapshot(b).unwrap().diet_plan.is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_sessions_are_not_found() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        assert_eq!(
            store.snapshot(id).unwrap_err().code,
            ErrorCode::ResourceNotFound
        );
        assert!(!store.remove(id));

        let created = store.create();
        assert!(store.remove(created));
        assert!(store.is_empty());
    }

    #[test]
    fn dropped_guard_releases_the_lock() {
        let store = SessionStore::new();
        let id = store.create();
        store
            .update(id, |state| state.begin_generation(PlanKind::Diet))
            .unwrap();

        drop(InFlightGuard {
            store: &store,
            id,
            armed: true,
        });
        assert!(store.snapshot(id).unwrap().in_flight.is_none());
    }
}
