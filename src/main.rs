//! Catch Fall entry point
//!
//! The native build runs a headless attract-mode session: the autopilot
//! plays at 60 fps of simulated time until the game ends, and the HUD is
//! printed at the end. The high score is kept in the platform data dir.
//!
//! Environment:
//! - `CATCH_FALL_SEED`: u64 run seed (random if unset)
//! - `CATCH_FALL_TUNING`: path to a JSON tuning file
//! - `RUST_LOG`: log filter (e.g. `info`, `catch_fall=debug`)

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result};

    use catch_fall::consts::FRAME_DT;
    use catch_fall::persistence::JsonFileStore;
    use catch_fall::sim::{GameEvent, GamePhase, autopilot_input};
    use catch_fall::{Engine, Tuning};

    /// Give up on a session after ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    fn load_tuning() -> Result<Tuning> {
        match std::env::var("CATCH_FALL_TUNING") {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading tuning file {}", path))?;
                let tuning = Tuning::from_json(&json)
                    .with_context(|| format!("parsing tuning file {}", path))?;
                log::info!("Loaded tuning from {}", path);
                Ok(tuning)
            }
            Err(_) => Ok(Tuning::default()),
        }
    }

    fn load_seed() -> Result<u64> {
        match std::env::var("CATCH_FALL_SEED") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("CATCH_FALL_SEED is not a u64: {:?}", raw)),
            Err(_) => Ok(rand::random()),
        }
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        log::info!("Catch Fall (native) starting...");

        let tuning = load_tuning()?;
        let seed = load_seed()?;
        let store = JsonFileStore::default_location();
        log::info!("High score store: {}", store.path().display());

        let mut engine = Engine::new(tuning, seed, store).context("invalid tuning")?;
        engine.start();

        let mut frames = 0;
        while engine.phase() == GamePhase::Running && frames < MAX_FRAMES {
            let input = autopilot_input(engine.state());
            engine.frame(FRAME_DT, &input);
            frames += 1;

            for event in engine.take_events() {
                match event {
                    GameEvent::LevelUp { level, speed_factor } => {
                        println!("Level {} (speed x{:.1})", level, speed_factor);
                    }
                    GameEvent::NewHighScore { score } => {
                        log::debug!("New high score {}", score);
                    }
                    GameEvent::Missed {
                        life_lost: true, ..
                    } => {
                        println!("Missed! {}", engine.hud());
                    }
                    _ => {}
                }
            }
        }

        if engine.phase() == GamePhase::Running {
            log::info!("Stopping after {} frames", frames);
            engine.pause();
        }

        println!("{}", engine.hud());
        println!("Seed {} - {:.1}s simulated", seed, frames as f32 * FRAME_DT);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web front-end drives `catch_fall::Engine` directly
}
