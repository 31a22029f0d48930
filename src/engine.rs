//! Session driver
//!
//! Owns the simulation state and the persisted high score, and is the only
//! place the two meet: every new high score the simulation reports is written
//! through to the store. Front-ends call the commands, feed `frame` once per
//! animation frame and read `hud` / `take_events` back.

use crate::consts::MAX_PENDING_EVENTS;
use crate::highscores::HighScore;
use crate::persistence::KeyValueStore;
use crate::sim::{self, GameEvent, GamePhase, GameState, TickInput};
use crate::tuning::{Tuning, TuningError};
use crate::ui::Hud;

pub struct Engine<S: KeyValueStore> {
    state: GameState,
    high_score: HighScore<S>,
    /// Outbox for `take_events`. Capped at `MAX_PENDING_EVENTS`; a front-end
    /// that never drains it loses the oldest events, never a high score.
    events: Vec<GameEvent>,
}

impl<S: KeyValueStore> Engine<S> {
    /// Validate `tuning`, load the high score once, and sit in Idle
    pub fn new(tuning: Tuning, seed: u64, store: S) -> Result<Self, TuningError> {
        let high_score = HighScore::load(store);
        let state = GameState::new(tuning, seed, high_score.best())?;
        Ok(Self {
            state,
            high_score,
            events: Vec::new(),
        })
    }

    pub fn start(&mut self) {
        self.state.start();
        self.sync();
    }

    /// Toggle between Running and Paused
    pub fn pause(&mut self) {
        self.state.toggle_pause();
        self.sync();
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.sync();
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.sync();
    }

    /// One animation frame: `dt` seconds elapsed, `input` held
    pub fn frame(&mut self, dt: f32, input: &TickInput) {
        sim::frame(&mut self.state, input, dt);
        self.sync();
    }

    /// Move simulation events into the outbox, persisting high scores on the way
    fn sync(&mut self) {
        let mut best = None;
        for event in &self.state.events {
            if let GameEvent::NewHighScore { score } = event {
                best = Some(*score);
            }
        }
        if let Some(score) = best {
            self.high_score.record(score);
        }
        self.events.append(&mut self.state.events);
        if self.events.len() > MAX_PENDING_EVENTS {
            let excess = self.events.len() - MAX_PENDING_EVENTS;
            log::debug!("Event outbox full, dropping {} oldest", excess);
            self.events.drain(..excess);
        }
    }

    /// Events since the last call, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios and tools
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn store(&self) -> &S {
        self.high_score.store()
    }

    /// Tear down and hand the store back (e.g. to start a new process-lifetime)
    pub fn into_store(self) -> S {
        self.high_score.into_store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HIGH_SCORE_KEY;
    use crate::persistence::MemoryStore;
    use crate::sim::Category;

    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            bonus_chance: 2.0,
            ..Tuning::default()
        };
        assert!(Engine::new(tuning, 1, MemoryStore::new()).is_err());
    }

    #[test]
    fn test_loads_high_score_once() {
        let engine = Engine::new(
            Tuning::default(),
            1,
            MemoryStore::with_value(HIGH_SCORE_KEY, 300),
        )
        .expect("engine");
        assert_eq!(engine.high_score(), 300);
        assert_eq!(engine.hud().high_score, 300);
        assert_eq!(engine.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_new_high_score_is_persisted() {
        let mut engine = Engine::new(
            Tuning {
                spawn_interval: 1.0e6,
                ..Tuning::default()
            },
            1,
            MemoryStore::new(),
        )
        .expect("engine");
        engine.start();
        let x = engine.state().player.x + 25.0;
        engine.state_mut().place_object(Category::Bonus, x, 1.0);
        for _ in 0..60 {
            engine.frame(crate::consts::FRAME_DT, &TickInput::default());
        }
        assert_eq!(engine.hud().score, 50);
        assert_eq!(engine.store().get(HIGH_SCORE_KEY).ok(), Some(Some(50)));

        let events = engine.take_events();
        assert_eq!(events.first(), Some(&GameEvent::Started));
        assert!(events.contains(&GameEvent::NewHighScore { score: 50 }));
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_undrained_outbox_is_bounded() {
        let mut engine = Engine::new(Tuning::default(), 3, MemoryStore::new()).expect("engine");
        engine.start();
        // Ten minutes of frames nobody reads events from
        for _ in 0..60 * 60 * 10 {
            let input = sim::autopilot_input(engine.state());
            engine.frame(crate::consts::FRAME_DT, &input);
            if engine.phase() != GamePhase::Running {
                engine.restart();
            }
        }
        assert!(engine.events.len() <= MAX_PENDING_EVENTS);

        // High scores are persisted even when their events were dropped
        let best = engine.high_score();
        assert!(best > 0);
        assert_eq!(engine.store().get(HIGH_SCORE_KEY).ok(), Some(Some(best)));
    }
}
