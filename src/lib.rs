//! Catch Fall - catch the falling objects before they hit the floor
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, collisions, scoring)
//! - `engine`: Session driver that wires the simulation to a high score store
//! - `platform`: Raw input mapping (keys, pointer)
//! - `persistence`: Key-value stores for the high score
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD snapshot for whatever front-end draws the game

pub mod engine;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use engine::Engine;
pub use highscores::{HIGH_SCORE_KEY, HighScore};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const PLAY_AREA_WIDTH: f32 = 740.0;
    pub const PLAY_AREA_HEIGHT: f32 = 400.0;

    /// Player paddle defaults
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    /// Gap between the floor and the paddle's bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    /// Horizontal distance covered per tick while a direction is held
    pub const PLAYER_STEP: f32 = 8.0;

    /// Falling objects are square
    pub const OBJECT_SIZE: f32 = 30.0;

    /// Spawn timer period (seconds)
    pub const SPAWN_INTERVAL: f32 = 0.8;
    /// Base fall duration range (seconds), divided by the speed factor
    pub const FALL_DURATION_MIN: f32 = 1.0;
    pub const FALL_DURATION_MAX: f32 = 3.0;

    /// Probability that a spawn is a bonus object
    pub const BONUS_CHANCE: f64 = 0.2;
    pub const NORMAL_POINTS: u64 = 10;
    pub const BONUS_POINTS: u64 = 50;

    pub const STARTING_LIVES: u8 = 3;
    pub const POINTS_PER_LEVEL: u64 = 100;

    /// Speed factor = SPEED_BASE + level * SPEED_PER_LEVEL (2.0 at level 1)
    pub const SPEED_BASE: f32 = 1.5;
    pub const SPEED_PER_LEVEL: f32 = 0.5;

    /// Fixed simulation timestep (120 Hz, so fast falls can't skip the paddle)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Longest frame the simulation will honor; the rest of a stall is dropped
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 12;
    /// Frame step used by the native driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 1024;
}
