//! Movement Configuration
//!
//! Tunables for walking, looking and the sweep-and-slide solver. `Default`
//! returns the values the game ships with; a JSON file may override any
//! subset of them.
//!
//! ```json
//! { "walk_speed": 3.0, "surface_pick": "first_match" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::world::SurfacePick;

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 2.4;

/// Per-second smoothing rate toward the target velocity
pub const ACCELERATION: f32 = 0.998;

/// Fraction of velocity retained after one second without input
pub const DAMPING: f32 = 1.5e-6;

/// Radians of rotation per mouse unit
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Pitch limit, just inside straight up/down
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Longest frame the controller will integrate, in seconds
pub const MAX_FRAME_TIME: f32 = 0.1;

/// Tunables for [`super::MovementController`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Target horizontal speed (m/s)
    pub walk_speed: f32,
    /// Per-second smoothing rate in [0, 1]; 1 snaps to the target instantly
    pub acceleration: f32,
    /// Per-second retained fraction in [0, 1] applied when no key is held
    pub damping: f32,
    /// Radians per mouse unit
    pub mouse_sensitivity: f32,
    /// Maximum |pitch| in radians
    pub pitch_limit: f32,
    /// Slide iterations per frame
    pub max_slide_iterations: u32,
    /// Distance the player is pushed off a contact along its normal
    pub skin_width: f32,
    /// Sink allowed by the surface locator
    pub surface_tolerance: f32,
    /// How far above the feet the destination surface is probed
    pub step_height: f32,
    /// Edges lower than the feet by more than this do not block
    pub edge_block_tolerance: f32,
    pub surface_pick: SurfacePick,
    /// Longest frame integrated in one update (s)
    pub max_frame_time: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            acceleration: ACCELERATION,
            damping: DAMPING,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            pitch_limit: PITCH_LIMIT,
            max_slide_iterations: 4,
            skin_width: 1e-3,
            surface_tolerance: 0.1,
            step_height: 0.35,
            edge_block_tolerance: 0.1,
            surface_pick: SurfacePick::Nearest,
            max_frame_time: MAX_FRAME_TIME,
        }
    }
}

impl MovementConfig {
    /// Checks every field against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(field: &'static str, value: f32, ok: bool) -> Result<(), ConfigError> {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange { field, value })
            }
        }

        check("walk_speed", self.walk_speed, self.walk_speed >= 0.0)?;
        check(
            "acceleration",
            self.acceleration,
            (0.0..=1.0).contains(&self.acceleration),
        )?;
        check("damping", self.damping, (0.0..=1.0).contains(&self.damping))?;
        check("mouse_sensitivity", self.mouse_sensitivity, true)?;
        check(
            "pitch_limit",
            self.pitch_limit,
            self.pitch_limit > 0.0 && self.pitch_limit < std::f32::consts::FRAC_PI_2,
        )?;
        check(
            "max_slide_iterations",
            self.max_slide_iterations as f32,
            self.max_slide_iterations >= 1,
        )?;
        check("skin_width", self.skin_width, self.skin_width >= 0.0)?;
        check(
            "surface_tolerance",
            self.surface_tolerance,
            self.surface_tolerance >= 0.0,
        )?;
        check("step_height", self.step_height, self.step_height >= 0.0)?;
        check(
            "edge_block_tolerance",
            self.edge_block_tolerance,
            self.edge_block_tolerance >= 0.0,
        )?;
        check(
            "max_frame_time",
            self.max_frame_time,
            self.max_frame_time > 0.0,
        )?;
        Ok(())
    }

    /// Parses and validates a JSON config; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MovementConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading movement config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
