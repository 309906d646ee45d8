//! Player Module
//!
//! First-person walking and looking.
//!
//! # Components
//!
//! - [`MovementController`] - Velocity smoothing plus sweep-and-slide against
//!   surface edges and obstacles, and mouse-look
//! - [`MovementConfig`] - Tunables, loadable from JSON
//! - [`BodyTransform`] / [`HeadTransform`] - Output transforms for renderers
//! - [`Player`] - Controller and transforms bundled together

pub mod avatar;
pub mod config;
pub mod movement_controller;
pub mod transform;

pub use avatar::Player;
pub use config::{
    ACCELERATION, DAMPING, MAX_FRAME_TIME, MOUSE_SENSITIVITY, MovementConfig, PITCH_LIMIT,
    WALK_SPEED,
};
pub use movement_controller::{Contact, ContactSource, MovementController, SlideOutcome};
pub use transform::{BodyTransform, HEAD_OFFSET, HeadTransform};
