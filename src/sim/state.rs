//! Game state and core simulation types
//!
//! One `GameState` is one play session plus the process-wide best score it
//! was created with. Commands (`start`, `toggle_pause`, `reset`, `restart`)
//! drive the phase machine; `tick.rs` advances a running session.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Aabb, clamp_span};
use super::timer::IntervalTimer;
use crate::consts::MAX_PENDING_EVENTS;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No session in progress
    Idle,
    /// Spawning and ticking
    Running,
    /// Frozen mid-session; objects keep their fall progress
    Paused,
    /// Lives ran out
    GameOver,
}

/// Falling object category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Worth points when caught, costs a life when missed
    Normal,
    /// Worth more points, costs nothing when missed
    Bonus,
}

/// An object falling from the top of the play area to the floor
#[derive(Debug, Clone)]
pub struct FallingObject {
    pub id: u32,
    pub category: Category,
    /// Left edge
    pub x: f32,
    /// Seconds from top to floor
    pub fall_duration: f32,
    /// Play clock reading when spawned
    pub spawned_at: f64,
}

impl FallingObject {
    /// Fraction of the fall completed at play clock `now` (0 = spawned, 1 = landed)
    pub fn progress(&self, now: f64) -> f32 {
        let t = (now - self.spawned_at) / self.fall_duration as f64;
        t.max(0.0) as f32
    }

    /// Whether the fall animation has finished
    pub fn has_landed(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Top edge at play clock `now`. Starts one object height above the play
    /// area and ends at the floor.
    pub fn top(&self, now: f64, tuning: &Tuning) -> f32 {
        let travel = tuning.play_area_height + tuning.object_size;
        -tuning.object_size + self.progress(now).min(1.0) * travel
    }

    pub fn bounds(&self, now: f64, tuning: &Tuning) -> Aabb {
        Aabb::from_origin_size(
            self.x,
            self.top(now, tuning),
            tuning.object_size,
            tuning.object_size,
        )
    }
}

/// The player's paddle. Only moves horizontally.
#[derive(Debug, Clone)]
pub struct Player {
    /// Left edge
    pub x: f32,
}

impl Player {
    /// Paddle centered in the play area
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_max_x() / 2.0,
        }
    }

    /// Move to `x`, clamped to the play area
    pub fn set_x(&mut self, x: f32, tuning: &Tuning) {
        self.x = clamp_span(x, tuning.player_width, tuning.play_area_width);
    }

    pub fn bounds(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_origin_size(
            self.x,
            tuning.player_top(),
            tuning.player_width,
            tuning.player_height,
        )
    }
}

/// Things that happened during a command or frame, oldest first
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Reset,
    Spawned { id: u32, category: Category },
    Caught { id: u32, category: Category, points: u64 },
    /// `life_lost` is false for bonus objects
    Missed { id: u32, category: Category, life_lost: bool },
    LevelUp { level: u32, speed_factor: f32 },
    NewHighScore { score: u64 },
    GameOver { final_score: u64, high_score: u64 },
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    /// Divides base fall durations of new spawns
    pub speed_factor: f32,
    /// Best score seen by this process, including the loaded value
    pub high_score: u64,
    /// Set when the session ends
    pub final_score: Option<u64>,
    /// Seconds of Running time since the session started
    pub clock: f64,
    pub player: Player,
    /// Active objects (sorted by id)
    pub objects: Vec<FallingObject>,
    pub spawn_timer: IntervalTimer,
    /// Sim time not yet consumed by a fixed step
    pub(crate) accumulator: f32,
    /// Undrained events, oldest first. Holds at most `MAX_PENDING_EVENTS`;
    /// drain with `take_events` (the `Engine` does this every command).
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle game. Fails if `tuning` doesn't pass `Tuning::validate`.
    pub fn new(tuning: Tuning, seed: u64, high_score: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        let player = Player::centered(&tuning);
        let spawn_timer = IntervalTimer::new(tuning.spawn_interval);
        let speed_factor = tuning.speed_for_level(1);
        let lives = tuning.starting_lives;
        Ok(Self {
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            lives,
            level: 1,
            speed_factor,
            high_score,
            final_score: None,
            clock: 0.0,
            player,
            objects: Vec::new(),
            spawn_timer,
            accumulator: 0.0,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue an event, dropping the oldest once the queue is full
    pub(crate) fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    /// Drain queued events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Begin a fresh session. No-op while already Running; from any other
    /// phase the session is reset first.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Running {
            return false;
        }
        self.clear_session();
        self.phase = GamePhase::Running;
        self.spawn_timer.start();
        log::info!("Session started (seed {})", self.seed);
        self.emit(GameEvent::Started);
        true
    }

    /// Running <-> Paused. Ignored in Idle and GameOver.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.spawn_timer.freeze();
                self.emit(GameEvent::Paused);
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.spawn_timer.resume();
                self.emit(GameEvent::Resumed);
            }
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    /// Stop everything and return to Idle. The high score survives.
    pub fn reset(&mut self) {
        self.clear_session();
        self.phase = GamePhase::Idle;
        log::info!("Session reset");
        self.emit(GameEvent::Reset);
    }

    /// Reset, then start
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    fn clear_session(&mut self) {
        self.spawn_timer.cancel();
        self.objects.clear();
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.level = 1;
        self.speed_factor = self.tuning.speed_for_level(1);
        self.final_score = None;
        self.clock = 0.0;
        self.accumulator = 0.0;
        self.player = Player::centered(&self.tuning);
    }

    /// Register an object at the current play clock. `x` is clamped and the
    /// duration floored to a tiny positive value.
    pub fn place_object(&mut self, category: Category, x: f32, fall_duration: f32) -> u32 {
        let id = self.next_entity_id();
        let x = clamp_span(x, self.tuning.object_size, self.tuning.play_area_width);
        let fall_duration = if fall_duration > f32::EPSILON {
            fall_duration
        } else {
            f32::EPSILON
        };
        self.objects.push(FallingObject {
            id,
            category,
            x,
            fall_duration,
            spawned_at: self.clock,
        });
        self.emit(GameEvent::Spawned { id, category });
        id
    }

    /// Add points, then update the high score and level
    pub(crate) fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
            self.emit(GameEvent::NewHighScore { score: self.score });
        }

        let level = self.tuning.level_for_score(self.score);
        if level > self.level {
            self.level = level;
            self.speed_factor = self.tuning.speed_for_level(level);
            log::info!("Level {} (speed {:.1})", level, self.speed_factor);
            self.emit(GameEvent::LevelUp {
                level,
                speed_factor: self.speed_factor,
            });
        }
    }

    /// Take one life; ends the session at zero
    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.spawn_timer.cancel();
        self.final_score = Some(self.score);
        log::info!(
            "Game over: score {}, high score {}",
            self.score,
            self.high_score
        );
        self.emit(GameEvent::GameOver {
            final_score: self.score,
            high_score: self.high_score,
        });
    }

    /// Ensure objects are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.objects.sort_by_key(|o| o.id);
    }
}
