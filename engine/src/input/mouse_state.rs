//! FPS-style Mouse State Tracker
//!
//! Handles captured mouse input with delta accumulation for first-person
//! look control. Raw deltas accumulate between frames while the cursor is
//! captured; the frame loop reads them once and then resets them.

use std::collections::HashSet;

use glam::Vec2;

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// FPS-style mouse state tracker with delta accumulation.
///
/// Motion only counts while the cursor is captured. Releasing the capture
/// drops whatever was pending.
///
/// # Example
///
/// ```rust,ignore
/// use ramble_engine::input::FpsMouseState;
///
/// let mut mouse = FpsMouseState::new();
/// mouse.set_captured(true);
///
/// // In event loop: accumulate raw mouse motion
/// mouse.accumulate_delta(10.0, -5.0);
/// mouse.accumulate_delta(3.0, 2.0);
///
/// // In update loop: consume accumulated delta
/// let delta = mouse.consume_delta();
/// // delta = (13.0, -3.0)
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Accumulated delta since the last reset.
    delta: Vec2,
    /// Whether the cursor is currently captured (hidden and confined).
    cursor_captured: bool,
    pressed: HashSet<MouseButton>,
}

impl FpsMouseState {
    /// Create a new FPS mouse state with zero deltas and cursor not captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion delta.
    ///
    /// Ignored while the cursor is not captured.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if self.cursor_captured {
            self.delta += Vec2::new(dx, dy);
        }
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    /// Get the current accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> Vec2 {
        self.delta
    }

    /// Drop the accumulated delta.
    #[inline]
    pub fn clear_delta(&mut self) {
        self.delta = Vec2::ZERO;
    }

    /// Set whether the cursor is captured.
    #[inline]
    pub fn set_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
        if !captured {
            self.delta = Vec2::ZERO;
        }
    }

    /// Check if the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.pressed.insert(button);
        } else {
            self.pressed.remove(&button);
        }
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
