//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the physics system, re-exported from the glam library, plus the few
//! horizontal-plane helpers the movement code leans on.

pub use glam::{Quat, Vec2, Vec3};

/// Project a 3D vector onto the horizontal XZ plane as a `Vec2` (x, z).
#[inline]
pub fn xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Drop the vertical component of a vector.
#[inline]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Remove the component of `v` along `normal`.
///
/// `normal` does not need to be unit length; a zero normal leaves `v` unchanged.
#[inline]
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    let len_sq = normal.length_squared();
    if len_sq < 1e-12 {
        return v;
    }
    v - normal * (v.dot(normal) / len_sq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_on_plane_removes_normal_component() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let projected = project_on_plane(v, Vec3::Z);
        assert_eq!(projected, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_project_on_plane_unnormalized_normal() {
        let v = Vec3::new(0.0, 0.0, 5.0);
        let projected = project_on_plane(v, Vec3::new(0.0, 0.0, -4.0));
        assert!(projected.length() < 1e-6);
    }

    #[test]
    fn test_project_on_plane_zero_normal() {
        let v = Vec3::new(1.0, 0.0, 1.0);
        assert_eq!(project_on_plane(v, Vec3::ZERO), v);
    }

    #[test]
    fn test_horizontal_and_xz() {
        let v = Vec3::new(1.0, 7.0, -2.0);
        assert_eq!(horizontal(v), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(xz(v), Vec2::new(1.0, -2.0));
    }
}
