// ABOUTME: Session state holder for the three-step planning flow
// ABOUTME: Re-exports the per-session state record and the concurrent store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sessions
//!
//! One mutable record per user session. Nothing is shared between sessions
//! and nothing persists across a restart.

mod state;
mod store;

pub use state::{PlanningStage, SessionState};
pub use store::SessionStore;
