//! Property tests for the simulation invariants

use proptest::prelude::*;

use catch_fall::Tuning;
use catch_fall::consts::FRAME_DT;
use catch_fall::sim::{GameState, TickInput, frame, spawn, tick};

fn tick_input() -> impl Strategy<Value = TickInput> {
    (
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(-2000.0f32..2000.0),
    )
        .prop_map(|(left, right, pointer_x)| TickInput {
            left,
            right,
            pointer_x,
        })
}

proptest! {
    #[test]
    fn spawned_objects_stay_in_bounds(seed in any::<u64>(), count in 1usize..200, bonus in 0.0f64..=1.0) {
        let tuning = Tuning { bonus_chance: bonus, ..Tuning::default() };
        let max_x = tuning.object_max_x();
        let mut state = GameState::new(tuning, seed, 0).expect("valid tuning");
        state.start();
        for _ in 0..count {
            spawn(&mut state);
        }
        prop_assert_eq!(state.objects.len(), count);
        for object in &state.objects {
            prop_assert!(object.x >= 0.0 && object.x <= max_x);
            prop_assert!(object.fall_duration > 0.0);
        }
    }

    #[test]
    fn player_never_leaves_play_area(inputs in proptest::collection::vec(tick_input(), 1..400)) {
        let tuning = Tuning { spawn_interval: 1.0e6, ..Tuning::default() };
        let max_x = tuning.player_max_x();
        let mut state = GameState::new(tuning, 1, 0).expect("valid tuning");
        state.start();
        for input in &inputs {
            tick(&mut state, input);
            prop_assert!(state.player.x >= 0.0 && state.player.x <= max_x);
        }
    }

    #[test]
    fn score_and_level_track_each_other(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(tick_input(), 1..60),
    ) {
        let mut state = GameState::new(Tuning::default(), seed, 0).expect("valid tuning");
        state.start();
        let mut last_score = 0;
        let mut last_lives = state.lives;
        for i in 0..1200 {
            frame(&mut state, &inputs[i % inputs.len()], FRAME_DT);

            prop_assert!(state.score >= last_score);
            prop_assert!(state.lives <= last_lives);
            prop_assert_eq!(state.level as u64, state.score / 100 + 1);
            prop_assert!(state.high_score >= state.score);
            last_score = state.score;
            last_lives = state.lives;
        }
    }
}
