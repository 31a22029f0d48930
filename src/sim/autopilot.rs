//! Demo controller that plays the game by itself
//!
//! Chases whichever object will land soonest, preferring normal objects
//! (missing those costs a life). Used by the headless driver and attract mode.

use super::state::{Category, GameState};
use super::tick::TickInput;

/// Pick held directions for the next tick
pub fn autopilot_input(state: &GameState) -> TickInput {
    let now = state.clock;
    let tuning = &state.tuning;

    // Seconds until landing, with bonus objects pushed to the back of the queue
    let urgency = |category: Category, remaining: f32| match category {
        Category::Normal => remaining,
        Category::Bonus => remaining + 10.0,
    };

    let target = state
        .objects
        .iter()
        .map(|o| {
            let remaining = (1.0 - o.progress(now)) * o.fall_duration;
            (o, urgency(o.category, remaining))
        })
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(o, _)| o);

    let Some(target) = target else {
        return TickInput::default();
    };

    let paddle_center = state.player.x + tuning.player_width / 2.0;
    let target_center = target.x + tuning.object_size / 2.0;
    let delta = target_center - paddle_center;

    // Dead zone of one step so the paddle doesn't jitter around the target
    TickInput {
        left: delta < -tuning.player_step,
        right: delta > tuning.player_step,
        pointer_x: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::sim::tick::frame;
    use crate::tuning::Tuning;

    #[test]
    fn test_idle_without_objects() {
        let state = GameState::new(Tuning::default(), 1, 0).expect("valid tuning");
        assert_eq!(autopilot_input(&state), TickInput::default());
    }

    #[test]
    fn test_steers_toward_target() {
        let mut state = GameState::new(Tuning::default(), 1, 0).expect("valid tuning");
        state.start();
        state.place_object(Category::Normal, 0.0, 2.0);
        let input = autopilot_input(&state);
        assert!(input.left && !input.right);

        state.objects.clear();
        state.place_object(Category::Normal, 700.0, 2.0);
        let input = autopilot_input(&state);
        assert!(input.right && !input.left);
    }

    #[test]
    fn test_prefers_normal_over_bonus() {
        let mut state = GameState::new(Tuning::default(), 1, 0).expect("valid tuning");
        state.start();
        state.place_object(Category::Bonus, 0.0, 0.5);
        state.place_object(Category::Normal, 700.0, 2.0);
        let input = autopilot_input(&state);
        assert!(input.right);
    }

    #[test]
    fn test_catches_a_reachable_object() {
        let mut state = GameState::new(
            Tuning {
                spawn_interval: 1.0e6,
                ..Tuning::default()
            },
            1,
            0,
        )
        .expect("valid tuning");
        state.start();
        state.place_object(Category::Normal, 450.0, 2.0);
        for _ in 0..150 {
            let input = autopilot_input(&state);
            frame(&mut state, &input, FRAME_DT);
        }
        assert_eq!(state.score, 10);
        assert_eq!(state.lives, 3);
    }
}
