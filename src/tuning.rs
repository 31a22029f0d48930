//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. Defaults
//! come from [`crate::consts`]; a JSON document may override any subset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{what} does not fit inside the play area width {width}")]
    TooWide { what: &'static str, width: f32 },
    #[error("fall duration range is empty ({min}..={max})")]
    EmptyFallRange { min: f32, max: f32 },
    #[error("bonus chance must lie in [0, 1] (got {0})")]
    BonusChance(f64),
    #[error("starting lives must be at least 1")]
    NoLives,
    #[error("points per level must be at least 1")]
    NoLevelThreshold,
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Geometry ===
    pub play_area_width: f32,
    pub play_area_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    pub player_step: f32,
    pub object_size: f32,

    // === Spawning ===
    /// Seconds between spawns
    pub spawn_interval: f32,
    pub fall_duration_min: f32,
    pub fall_duration_max: f32,
    pub bonus_chance: f64,

    // === Scoring ===
    pub normal_points: u64,
    pub bonus_points: u64,
    pub starting_lives: u8,
    pub points_per_level: u64,
    pub speed_base: f32,
    pub speed_per_level: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_area_width: PLAY_AREA_WIDTH,
            play_area_height: PLAY_AREA_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_step: PLAYER_STEP,
            object_size: OBJECT_SIZE,

            spawn_interval: SPAWN_INTERVAL,
            fall_duration_min: FALL_DURATION_MIN,
            fall_duration_max: FALL_DURATION_MAX,
            bonus_chance: BONUS_CHANCE,

            normal_points: NORMAL_POINTS,
            bonus_points: BONUS_POINTS,
            starting_lives: STARTING_LIVES,
            points_per_level: POINTS_PER_LEVEL,
            speed_base: SPEED_BASE,
            speed_per_level: SPEED_PER_LEVEL,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every knob is inside the domain the simulation assumes
    pub fn validate(&self) -> Result<(), TuningError> {
        let positives = [
            ("play_area_width", self.play_area_width),
            ("play_area_height", self.play_area_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_step", self.player_step),
            ("object_size", self.object_size),
            ("spawn_interval", self.spawn_interval),
            ("fall_duration_min", self.fall_duration_min),
            ("speed_for_level(1)", self.speed_for_level(1)),
        ];
        for (field, value) in positives {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NotPositive {
                    field,
                    value: value as f64,
                });
            }
        }
        if self.speed_per_level < 0.0 {
            return Err(TuningError::NotPositive {
                field: "speed_per_level",
                value: self.speed_per_level as f64,
            });
        }
        if self.player_bottom_margin < 0.0 {
            return Err(TuningError::NotPositive {
                field: "player_bottom_margin",
                value: self.player_bottom_margin as f64,
            });
        }
        if self.player_width > self.play_area_width {
            return Err(TuningError::TooWide {
                what: "player",
                width: self.play_area_width,
            });
        }
        if self.object_size > self.play_area_width {
            return Err(TuningError::TooWide {
                what: "object",
                width: self.play_area_width,
            });
        }
        if !(self.fall_duration_max >= self.fall_duration_min) {
            return Err(TuningError::EmptyFallRange {
                min: self.fall_duration_min,
                max: self.fall_duration_max,
            });
        }
        if !(0.0..=1.0).contains(&self.bonus_chance) {
            return Err(TuningError::BonusChance(self.bonus_chance));
        }
        if self.starting_lives == 0 {
            return Err(TuningError::NoLives);
        }
        if self.points_per_level == 0 {
            return Err(TuningError::NoLevelThreshold);
        }
        Ok(())
    }

    /// Speed factor for a level; higher levels fall faster
    pub fn speed_for_level(&self, level: u32) -> f32 {
        self.speed_base + level as f32 * self.speed_per_level
    }

    /// Level reached at a given score (1-based)
    pub fn level_for_score(&self, score: u64) -> u32 {
        (score / self.points_per_level) as u32 + 1
    }

    /// Rightmost legal x for the player's left edge
    pub fn player_max_x(&self) -> f32 {
        (self.play_area_width - self.player_width).max(0.0)
    }

    /// Rightmost legal x for an object's left edge
    pub fn object_max_x(&self) -> f32 {
        (self.play_area_width - self.object_size).max(0.0)
    }

    /// Top edge of the player paddle
    pub fn player_top(&self) -> f32 {
        self.play_area_height - self.player_bottom_margin - self.player_height
    }

    /// Points for catching an object of the given category
    pub fn points_for(&self, category: crate::sim::Category) -> u64 {
        match category {
            crate::sim::Category::Normal => self.normal_points,
            crate::sim::Category::Bonus => self.bonus_points,
        }
    }
}
