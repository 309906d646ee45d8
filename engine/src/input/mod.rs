//! Input Module
//!
//! Platform-agnostic input state for keyboard and mouse. The movement code
//! only sees the [`InputSource`] trait; [`InputState`] is the in-crate
//! implementation that hosts feed from their own event loop.
//!
//! # Frame contract
//!
//! Events mutate the state between frames. Each frame the controller reads
//! the keys and the mouse delta once, then calls
//! [`InputSource::reset_deltas`] exactly once.
//!
//! # Example
//!
//! ```rust,ignore
//! use ramble_engine::input::{InputState, InputSource, KeyCode};
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true);
//! input.set_captured(true);
//! input.accumulate_mouse_delta(4.0, -2.0);
//!
//! assert!(input.is_key_down(KeyCode::W));
//! let delta = input.mouse_delta();
//! input.reset_deltas();
//! ```

pub mod keyboard;
pub mod mouse_state;

use glam::Vec2;

pub use keyboard::{BACKWARD_KEYS, FORWARD_KEYS, KeyCode, KeyboardState, LEFT_KEYS, RIGHT_KEYS};
pub use mouse_state::{FpsMouseState, MouseButton};

/// Read side of the input state, as consumed by the movement controller.
pub trait InputSource {
    fn is_key_down(&self, key: KeyCode) -> bool;

    fn is_mouse_button_down(&self, button: MouseButton) -> bool;

    /// Mouse motion accumulated since the last [`reset_deltas`](Self::reset_deltas).
    fn mouse_delta(&self) -> Vec2;

    /// Clears the accumulated mouse delta. Called once per frame.
    fn reset_deltas(&mut self);

    /// Walking intent as `(right, forward)`, each -1, 0 or 1.
    ///
    /// WASD and the arrow keys both count; opposing keys cancel.
    fn walk_axes(&self) -> Vec2 {
        let held = |keys: &[KeyCode]| keys.iter().any(|&key| self.is_key_down(key)) as i32;
        Vec2::new(
            (held(&RIGHT_KEYS) - held(&LEFT_KEYS)) as f32,
            (held(&FORWARD_KEYS) - held(&BACKWARD_KEYS)) as f32,
        )
    }
}

/// Combined input state for both keyboard and mouse.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: FpsMouseState,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keyboard.handle_key(key, pressed)
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.mouse.set_button(button, pressed);
    }

    pub fn accumulate_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse.accumulate_delta(dx, dy);
    }

    pub fn set_captured(&mut self, captured: bool) {
        self.mouse.set_captured(captured);
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }
}

impl InputSource for InputState {
    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_down(key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse.is_button_down(button)
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse.peek_delta()
    }

    fn reset_deltas(&mut self) {
        self.mouse.clear_delta();
    }
}
