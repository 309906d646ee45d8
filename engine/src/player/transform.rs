//! Body and head transforms
//!
//! The body carries the feet position and the horizontal facing; the head
//! sits at a fixed offset above the feet and carries the vertical look
//! angle. Renderers compose them into a camera.

use glam::{Quat, Vec3};

/// Eye height above the feet, in meters
pub const HEAD_OFFSET: Vec3 = Vec3::new(0.0, 1.65, 0.0);

/// Feet position and yaw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyTransform {
    pub position: Vec3,
    /// Rotation about +Y in radians; 0 faces -Z
    pub yaw: f32,
}

impl BodyTransform {
    pub fn new(position: Vec3) -> Self {
        Self { position, yaw: 0.0 }
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Unit horizontal facing direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }
}

/// Head offset and pitch, relative to the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadTransform {
    pub offset: Vec3,
    /// Rotation about the body's local +X in radians; positive looks up
    pub pitch: f32,
}

impl Default for HeadTransform {
    fn default() -> Self {
        Self {
            offset: HEAD_OFFSET,
            pitch: 0.0,
        }
    }
}

impl HeadTransform {
    /// Local rotation relative to the body.
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch)
    }

    /// World-space eye position for the given body.
    pub fn eye_position(&self, body: &BodyTransform) -> Vec3 {
        body.position + body.rotation() * self.offset
    }

    /// World-space view rotation for the given body.
    pub fn world_rotation(&self, body: &BodyTransform) -> Quat {
        body.rotation() * self.rotation()
    }
}
