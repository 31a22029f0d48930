//! HUD snapshot
//!
//! What a front-end needs to draw the score bar and the game-over panel.

use std::fmt;

use crate::sim::{GamePhase, GameState};

/// Shown once the session has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverPanel {
    pub final_score: u64,
    pub high_score: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub high_score: u64,
    pub game_over: Option<GameOverPanel>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let game_over = match (state.phase, state.final_score) {
            (GamePhase::GameOver, Some(final_score)) => Some(GameOverPanel {
                final_score,
                high_score: state.high_score,
            }),
            _ => None,
        };
        Self {
            phase: state.phase,
            score: state.score,
            lives: state.lives,
            level: state.level,
            high_score: state.high_score,
            game_over,
        }
    }
}

impl fmt::Display for Hud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}  Lives: {}  Level: {}  Best: {}",
            self.score, self.lives, self.level, self.high_score
        )?;
        if self.phase == GamePhase::Paused {
            write!(f, "  [PAUSED]")?;
        }
        if let Some(panel) = &self.game_over {
            write!(f, "\n{}", panel)?;
        }
        Ok(())
    }
}

impl fmt::Display for GameOverPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GAME OVER - score {} (best {})",
            self.final_score, self.high_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_hud_while_running() {
        let mut state = GameState::new(Tuning::default(), 1, 70).expect("valid tuning");
        state.start();
        let hud = Hud::from_state(&state);
        assert_eq!(hud.game_over, None);
        assert_eq!(hud.to_string(), "Score: 0  Lives: 3  Level: 1  Best: 70");

        state.toggle_pause();
        assert!(Hud::from_state(&state).to_string().ends_with("[PAUSED]"));
    }

    #[test]
    fn test_game_over_panel() {
        let mut state = GameState::new(Tuning::default(), 1, 70).expect("valid tuning");
        state.start();
        state.award(110);
        for _ in 0..3 {
            state.lose_life();
        }
        let hud = Hud::from_state(&state);
        assert_eq!(
            hud.game_over,
            Some(GameOverPanel {
                final_score: 110,
                high_score: 110
            })
        );
        assert!(hud.to_string().contains("GAME OVER - score 110 (best 110)"));
    }
}
