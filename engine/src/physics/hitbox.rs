//! Hitbox - axis-aligned obstacle
//!
//! Obstacles block horizontal movement within their vertical extent.
//! They are built once at level load and never change during gameplay.

use glam::Vec3;

use super::collision::{SegmentHit, ray_aabb_intersect, segment_vs_aabb_xz};
use crate::error::GeometryError;

/// Axis-aligned box obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    min: Vec3,
    max: Vec3,
}

impl Hitbox {
    /// Creates a hitbox from its minimum and maximum corners.
    ///
    /// Rejects non-finite coordinates and boxes with no extent on any axis.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, GeometryError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if min.cmpge(max).any() {
            return Err(GeometryError::DegenerateHitbox {
                min: min.to_array(),
                max: max.to_array(),
            });
        }
        Ok(Self { min, max })
    }

    /// Creates a hitbox from two opposite corners given in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Result<Self, GeometryError> {
        Self::new(a.min(b), a.max(b))
    }

    /// Creates a hitbox centred on `center` with the given half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Result<Self, GeometryError> {
        Self::from_corners(center - half_extents, center + half_extents)
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies inside the box (bounds inclusive).
    pub fn intersects(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Horizontal segment test against this box.
    ///
    /// See [`segment_vs_aabb_xz`] for the vertical-range rule.
    #[inline]
    pub fn segment_intersection(&self, start: Vec3, end: Vec3) -> Option<SegmentHit> {
        segment_vs_aabb_xz(start, end, self.min, self.max)
    }

    /// Full 3D ray test, returning the distance along `direction`.
    #[inline]
    pub fn ray_distance(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        ray_aabb_intersect(origin, direction, self.min, self.max)
    }
}
