//! Key-state bookkeeping for the loop thread.

use std::collections::HashMap;

use arena_core::input::{InputVector, KeyBindings, PauseToggle};

/// Live key map plus the pause edge detector.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    bindings: KeyBindings,
    held: HashMap<String, bool>,
    pause: PauseToggle,
}

/// What the held keys mean for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub movement: InputVector,
    /// The pause key went down since the previous frame.
    pub toggle_pause: bool,
}

impl KeyState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// Record a key transition. Unbound keys are tracked but ignored.
    pub fn set(&mut self, key: impl Into<String>, pressed: bool) {
        self.held.insert(key.into(), pressed);
    }

    /// Sample the map once per frame.
    pub fn frame(&mut self) -> FrameInput {
        let held = self.bindings.pause_held(&self.held);
        FrameInput {
            movement: self.bindings.input_vector(&self.held),
            toggle_pause: self.pause.update(held),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_idle() {
        let mut keys = KeyState::default();
        let frame = keys.frame();
        assert_eq!(frame.movement, InputVector::IDLE);
        assert!(!frame.toggle_pause);
    }

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::default();
        keys.set("d", true);
        keys.set("ArrowUp", true);
        let frame = keys.frame();
        assert!(frame.movement.right && frame.movement.up);

        keys.set("d", false);
        let frame = keys.frame();
        assert!(!frame.movement.right && frame.movement.up);
    }

    #[test]
    fn test_held_pause_toggles_once() {
        let mut keys = KeyState::default();
        keys.set("Escape", true);
        assert!(keys.frame().toggle_pause);
        assert!(!keys.frame().toggle_pause);
        assert!(!keys.frame().toggle_pause);

        keys.set("Escape", false);
        assert!(!keys.frame().toggle_pause);
        keys.set("p", true);
        assert!(keys.frame().toggle_pause);
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = KeyBindings {
            up: vec!["i".into()],
            ..Default::default()
        };
        let mut keys = KeyState::new(bindings);
        keys.set("w", true);
        assert!(!keys.frame().movement.up);
        keys.set("i", true);
        assert!(keys.frame().movement.up);
    }
}
