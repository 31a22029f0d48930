//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `frame`
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;
pub mod timer;

pub use autopilot::autopilot_input;
pub use collision::{Aabb, clamp_span};
pub use state::{Category, FallingObject, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, check_collisions, complete_falls, frame, spawn, tick};
pub use timer::{IntervalTimer, TimerState};
