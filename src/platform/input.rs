//! Keyboard and pointer mapping
//!
//! Front-ends forward raw events here (DOM `KeyboardEvent.code` strings,
//! pointer positions relative to the play area). Once per frame the
//! accumulated state becomes a `TickInput`.

use crate::sim::TickInput;

/// Horizontal direction a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a key code; arrows and A/D
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Direction::Left),
            "ArrowRight" | "KeyD" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Held keys and the latest pointer position
#[derive(Debug, Clone, Default)]
pub struct Controls {
    left_held: bool,
    right_held: bool,
    pointer_x: Option<f32>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the code was a movement key
    pub fn key_down(&mut self, code: &str) -> bool {
        self.set_held(code, true)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.set_held(code, false)
    }

    fn set_held(&mut self, code: &str, held: bool) -> bool {
        match Direction::from_code(code) {
            Some(Direction::Left) => self.left_held = held,
            Some(Direction::Right) => self.right_held = held,
            None => return false,
        }
        true
    }

    /// Pointer x relative to the play area's left edge
    pub fn pointer_move(&mut self, x: f32) {
        if x.is_finite() {
            self.pointer_x = Some(x);
        }
    }

    /// Release everything (focus lost)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Input for the next tick. Pointer moves are one-shot: a move seen while
    /// the game is not running is dropped on the next frame.
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            left: self.left_held,
            right: self.right_held,
            pointer_x: self.pointer_x.take(),
        }
    }
}
