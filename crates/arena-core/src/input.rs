//! Mapping from raw key state to simulation input.
//!
//! The host owns key capture; this module only reads a key-state map, so a key
//! that was never reported simply counts as released.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Directional input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputVector {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputVector {
    /// No keys held.
    pub const IDLE: InputVector = InputVector {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Any direction held. Opposing keys still count as moving.
    pub fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Per-axis sign in world space (y grows downward).
    pub fn axes(&self) -> (f64, f64) {
        let sign = |neg: bool, pos: bool| match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        (sign(self.left, self.right), sign(self.up, self.down))
    }
}

/// Key names bound to each action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub pause: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = |names: &[&str]| names.iter().map(|k| k.to_string()).collect();
        Self {
            up: keys(&["w", "ArrowUp"]),
            down: keys(&["s", "ArrowDown"]),
            left: keys(&["a", "ArrowLeft"]),
            right: keys(&["d", "ArrowRight"]),
            pause: keys(&["p", "Escape"]),
        }
    }
}

impl KeyBindings {
    /// Build the directional input from a live key-state map.
    pub fn input_vector(&self, keys: &HashMap<String, bool>) -> InputVector {
        InputVector {
            up: any_pressed(keys, &self.up),
            down: any_pressed(keys, &self.down),
            left: any_pressed(keys, &self.left),
            right: any_pressed(keys, &self.right),
        }
    }

    pub fn pause_held(&self, keys: &HashMap<String, bool>) -> bool {
        any_pressed(keys, &self.pause)
    }
}

fn any_pressed(keys: &HashMap<String, bool>, names: &[String]) -> bool {
    names
        .iter()
        .any(|name| keys.get(name).copied().unwrap_or(false))
}

/// Edge detector for the pause key: fires once per press, ignoring auto-repeat.
#[derive(Debug, Clone, Copy, Default)]
pub struct PauseToggle {
    held: bool,
}

impl PauseToggle {
    /// Feed the current key state. Returns true only on the released→held edge.
    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.held;
        self.held = held;
        pressed
    }
}
