//! Frame-driven simulation step
//!
//! `frame` is the per-animation-frame callback: it runs `tick` (movement +
//! catches) once, then consumes the frame time in fixed `SIM_DT` steps. Each
//! step advances the play clock, fires due spawns, checks catches and
//! resolves objects whose fall finished. Nothing here runs unless the
//! session is Running.

use rand::Rng;

use super::state::{Category, GameEvent, GamePhase, GameState};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left held (ArrowLeft / KeyA)
    pub left: bool,
    /// Right held (ArrowRight / KeyD)
    pub right: bool,
    /// Latest pointer x in play-area coordinates; centers the paddle on it
    pub pointer_x: Option<f32>,
}

/// Advance a running session by `dt` seconds of real time. Frames longer
/// than `MAX_FRAME_DT` (tab switches, debugger stops) only advance that much;
/// negative or non-finite `dt` advances nothing.
pub fn frame(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }
    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };
    state.accumulator += dt;

    tick(state, input);

    let mut substeps = 0;
    while state.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
        step(state);
        state.accumulator -= SIM_DT;
        substeps += 1;
        if state.phase != GamePhase::Running {
            break;
        }
    }
    if substeps == MAX_SUBSTEPS {
        state.accumulator = state.accumulator.min(SIM_DT);
    }

    state.normalize_order();
}

/// One fixed step of play time
fn step(state: &mut GameState) {
    state.clock += SIM_DT as f64;

    let due = state.spawn_timer.advance(SIM_DT);
    for _ in 0..due {
        spawn(state);
    }

    check_collisions(state);
    complete_falls(state);
}

/// Spawn one object with random category, position and fall duration.
/// Returns the new object's id, or None when not Running.
pub fn spawn(state: &mut GameState) -> Option<u32> {
    if state.phase != GamePhase::Running {
        return None;
    }
    let tuning = &state.tuning;
    let bonus_chance = tuning.bonus_chance;
    let max_x = tuning.object_max_x();
    let (min_fall, max_fall) = (tuning.fall_duration_min, tuning.fall_duration_max);

    let category = if state.rng.random_bool(bonus_chance) {
        Category::Bonus
    } else {
        Category::Normal
    };
    let x = state.rng.random_range(0.0..=max_x);
    let fall_duration = state.rng.random_range(min_fall..=max_fall) / state.speed_factor;

    let id = state.place_object(category, x, fall_duration);
    log::debug!(
        "Spawned {:?} #{} at x={:.1}, falls in {:.2}s",
        category,
        id,
        x,
        fall_duration
    );
    Some(id)
}

/// Move the paddle from input, then check for catches
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    let mut x = state.player.x;
    if let Some(pointer_x) = input.pointer_x {
        x = pointer_x - state.tuning.player_width / 2.0;
    }
    if input.left {
        x -= state.tuning.player_step;
    }
    if input.right {
        x += state.tuning.player_step;
    }
    state.player.set_x(x, &state.tuning);

    check_collisions(state);
}

/// Remove every object overlapping the paddle and score it
pub fn check_collisions(state: &mut GameState) {
    let paddle = state.player.bounds(&state.tuning);
    let now = state.clock;

    let (caught, remaining): (Vec<_>, Vec<_>) = state
        .objects
        .drain(..)
        .partition(|o| o.bounds(now, &state.tuning).overlaps(&paddle));
    state.objects = remaining;

    for object in caught {
        let points = state.tuning.points_for(object.category);
        log::debug!("Caught {:?} #{} (+{})", object.category, object.id, points);
        state.emit(GameEvent::Caught {
            id: object.id,
            category: object.category,
            points,
        });
        state.award(points);
    }
}

/// Remove objects whose fall finished; normal ones cost a life
pub fn complete_falls(state: &mut GameState) {
    let now = state.clock;
    let (landed, falling): (Vec<_>, Vec<_>) =
        state.objects.drain(..).partition(|o| o.has_landed(now));
    state.objects = falling;

    for object in landed {
        let life_lost = object.category == Category::Normal && state.phase == GamePhase::Running;
        log::debug!("Missed {:?} #{}", object.category, object.id);
        state.emit(GameEvent::Missed {
            id: object.id,
            category: object.category,
            life_lost,
        });
        if life_lost {
            state.lose_life();
        }
    }
}
