//! Platform-agnostic input state
//!
//! Keyboard state container polled by the triggered timing mode. Platform
//! adapters translate their native events into [`Key`] / [`ButtonState`] and
//! feed them through [`Input::inject_key`]. Only the keys that can be bound
//! as a trigger are enumerated.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys that can be bound as the timelapse trigger
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    // Letter keys
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Number keys
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,

    // Control keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Source of discrete trigger events, polled once per tick.
pub trait InputSource {
    fn was_key_pressed_this_frame(&self, key: Key) -> bool;
}

/// Keyboard state container
#[derive(Debug, Clone, Default)]
pub struct Input {
    pressed_keys: HashSet<Key>,
    just_pressed_keys: HashSet<Key>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== System API (called by the host loop) ==========

    /// Clears the just-pressed set at the start of each frame
    pub fn start_frame(&mut self) {
        self.just_pressed_keys.clear();
    }

    /// Injects a keyboard event
    pub fn inject_key(&mut self, key: Key, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                if self.pressed_keys.insert(key) {
                    self.just_pressed_keys.insert(key);
                }
            }
            ButtonState::Released => {
                self.pressed_keys.remove(&key);
            }
        }
    }

    /// Press-and-release within one frame, as a tap arrives from most
    /// platform adapters.
    pub fn tap(&mut self, key: Key) {
        self.inject_key(key, ButtonState::Pressed);
        self.inject_key(key, ButtonState::Released);
    }

    // ========== User API ==========

    /// Checks whether a key was just pressed this frame
    #[must_use]
    pub fn get_key_down(&self, key: Key) -> bool {
        self.just_pressed_keys.contains(&key)
    }
}

impl InputSource for Input {
    fn was_key_pressed_this_frame(&self, key: Key) -> bool {
        self.get_key_down(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_lasts_one_frame() {
        let mut input = Input::new();
        input.inject_key(Key::Space, ButtonState::Pressed);
        assert!(input.get_key_down(Key::Space));

        input.start_frame();
        assert!(!input.get_key_down(Key::Space));
    }

    #[test]
    fn held_key_does_not_repeat_press() {
        let mut input = Input::new();
        input.inject_key(Key::T, ButtonState::Pressed);
        input.start_frame();
        input.inject_key(Key::T, ButtonState::Pressed);
        assert!(!input.was_key_pressed_this_frame(Key::T));
    }

    #[test]
    fn tap_registers_press_and_allows_next_tap() {
        let mut input = Input::new();
        input.tap(Key::Enter);
        assert!(input.was_key_pressed_this_frame(Key::Enter));

        input.start_frame();
        assert!(!input.was_key_pressed_this_frame(Key::Enter));
        input.tap(Key::Enter);
        assert!(input.was_key_pressed_this_frame(Key::Enter));
    }
}
