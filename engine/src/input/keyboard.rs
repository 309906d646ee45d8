//! Keyboard Input Module
//!
//! Tracks which keys are held. Decoupled from any windowing system: hosts
//! translate their own key events into [`KeyCode`]s.

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,

    // Aliases for WASD
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    Escape,
    Enter,
    Tab,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Keys that walk forward.
pub const FORWARD_KEYS: [KeyCode; 2] = [KeyCode::W, KeyCode::ArrowUp];
/// Keys that walk backward.
pub const BACKWARD_KEYS: [KeyCode; 2] = [KeyCode::S, KeyCode::ArrowDown];
/// Keys that strafe left.
pub const LEFT_KEYS: [KeyCode; 2] = [KeyCode::A, KeyCode::ArrowLeft];
/// Keys that strafe right.
pub const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::D, KeyCode::ArrowRight];

impl KeyCode {
    /// Whether this key drives walking.
    pub fn is_walk_key(self) -> bool {
        [FORWARD_KEYS, BACKWARD_KEYS, LEFT_KEYS, RIGHT_KEYS]
            .iter()
            .any(|keys| keys.contains(&self))
    }
}

/// Set of currently held keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key drives walking.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
        key.is_walk_key()
    }

    /// Whether `key` is currently held.
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether any of `keys` is currently held.
    pub fn any_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.held.contains(key))
    }

    /// Release every key.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
