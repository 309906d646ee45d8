//! Physics module for Ramble
//!
//! Geometric primitives for the movement core. Built from scratch on top
//! of glam, without a physics library.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, Y is up. Movement happens on the XZ plane; heights
//! come from the walkable surfaces in [`crate::world`].
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam, plus plane helpers
//! - [`collision`] - Segment-vs-box and segment-vs-quad queries on the XZ plane
//! - [`hitbox`] - Axis-aligned obstacles

pub mod collision;
pub mod hitbox;
pub mod types;

pub use collision::{
    EdgeHit, SegmentHit, segment_intersection_2d, segment_vs_aabb_xz, segment_vs_quad_xz,
};
pub use hitbox::Hitbox;
pub use types::{Quat, Vec2, Vec3, horizontal, project_on_plane};
