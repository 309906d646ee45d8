//! Collision detection module
//!
//! Segment queries used by the sweep-and-slide movement code. Every query
//! works on the horizontal XZ plane: obstacles behave like infinite vertical
//! walls inside their Y extent, and surface perimeters are tested as 2D
//! line segments. Degenerate input (no movement, parallel lines, near-zero
//! denominators) yields `None`, never an error.
//!
//! # Example
//!
//! ```ignore
//! use ramble_engine::physics::collision::segment_vs_aabb_xz;
//! use glam::Vec3;
//!
//! let hit = segment_vs_aabb_xz(
//!     Vec3::new(1.0, 0.0, 1.0),
//!     Vec3::new(3.0, 0.0, 1.0),
//!     Vec3::new(1.75, 0.0, 0.75),
//!     Vec3::new(2.25, 1.0, 1.25),
//! );
//! assert!((hit.unwrap().t - 0.375).abs() < 1e-5);
//! ```

use glam::{Vec2, Vec3};

use super::types::xz;

/// Denominator below which two 2D lines are treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-9;

/// Direction component below which a slab is treated as parallel to the movement.
const SLAB_PARALLEL_EPSILON: f32 = 1e-10;

/// Squared horizontal length below which a segment counts as "no movement".
const MIN_MOVE_LENGTH_SQ: f32 = 1e-12;

/// Result of a segment-vs-box query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// World-space impact point (Y interpolated along the segment)
    pub point: Vec3,
    /// Outward horizontal face normal (unit length)
    pub normal: Vec3,
    /// Parameter along `start -> end`, in `[0, 1]`
    pub t: f32,
}

/// Result of a segment-vs-quad-perimeter query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// World-space impact point on the edge (Y interpolated along the segment)
    pub point: Vec3,
    /// Horizontal edge normal pointing toward the quad centre (unit length)
    pub normal: Vec3,
    /// Parameter along `start -> end`, in `[0, 1]`
    pub t: f32,
    /// First endpoint of the edge that was hit
    pub edge_a: Vec3,
    /// Second endpoint of the edge that was hit
    pub edge_b: Vec3,
}

impl EdgeHit {
    /// Height of the higher edge endpoint.
    #[inline]
    pub fn edge_top(&self) -> f32 {
        self.edge_a.y.max(self.edge_b.y)
    }
}

/// Intersects segment `p1 -> p2` with segment `a -> b` in 2D.
///
/// Returns `(ua, ub)`, the parameters along the first and second segment,
/// when both lie in `[0, 1]`.
pub fn segment_intersection_2d(p1: Vec2, p2: Vec2, a: Vec2, b: Vec2) -> Option<(f32, f32)> {
    let denom = (b.y - a.y) * (p2.x - p1.x) - (b.x - a.x) * (p2.y - p1.y);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let ua = ((b.x - a.x) * (p1.y - a.y) - (b.y - a.y) * (p1.x - a.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - a.y) - (p2.y - p1.y) * (p1.x - a.x)) / denom;

    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }
    Some((ua, ub))
}

/// Tests a movement segment against the four perimeter edges of a quad.
///
/// `vertices` must be in perimeter order (edges 0-1, 1-2, 2-3, 3-0). Among
/// all edges crossed by the segment, the one closest to `start` wins.
pub fn segment_vs_quad_xz(start: Vec3, end: Vec3, vertices: &[Vec3; 4]) -> Option<EdgeHit> {
    let p1 = xz(start);
    let p2 = xz(end);
    if (p2 - p1).length_squared() < MIN_MOVE_LENGTH_SQ {
        return None;
    }

    let center = xz(vertices.iter().copied().sum::<Vec3>() * 0.25);
    let mut closest: Option<EdgeHit> = None;

    for i in 0..4 {
        let edge_a = vertices[i];
        let edge_b = vertices[(i + 1) % 4];

        let Some((ua, _)) = segment_intersection_2d(p1, p2, xz(edge_a), xz(edge_b)) else {
            continue;
        };
        if closest.is_some_and(|hit| hit.t <= ua) {
            continue;
        }

        let edge = edge_b - edge_a;
        let mut normal = Vec3::new(edge.z, 0.0, -edge.x).normalize_or_zero();
        if normal == Vec3::ZERO {
            continue;
        }

        let hit_xz = p1 + (p2 - p1) * ua;
        if (center - hit_xz).dot(xz(normal)) < 0.0 {
            normal = -normal;
        }

        closest = Some(EdgeHit {
            point: Vec3::new(hit_xz.x, start.y + (end.y - start.y) * ua, hit_xz.y),
            normal,
            t: ua,
            edge_a,
            edge_b,
        });
    }

    closest
}

/// Tests a movement segment against an axis-aligned box on the XZ plane.
///
/// The box is skipped entirely when `start.y` lies outside `[box_min.y, box_max.y]`.
/// A segment that starts inside the box reports `t = 0`.
pub fn segment_vs_aabb_xz(
    start: Vec3,
    end: Vec3,
    box_min: Vec3,
    box_max: Vec3,
) -> Option<SegmentHit> {
    if start.y < box_min.y || start.y > box_max.y {
        return None;
    }

    let dir = end - start;
    if xz(dir).length_squared() < MIN_MOVE_LENGTH_SQ {
        return None;
    }

    let mut t_enter = 0.0_f32;
    let mut t_exit = 1.0_f32;

    let slabs = [
        (box_min.x, box_max.x, start.x, dir.x),
        (box_min.z, box_max.z, start.z, dir.z),
    ];
    for (lo, hi, origin, delta) in slabs {
        if delta.abs() < SLAB_PARALLEL_EPSILON {
            // Moving parallel to this slab: must already be inside it
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let t1 = (lo - origin) / delta;
        let t2 = (hi - origin) / delta;
        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));
        if t_enter > t_exit {
            return None;
        }
    }

    let point = start + dir * t_enter;
    Some(SegmentHit {
        point,
        normal: nearest_face_normal_xz(point, box_min, box_max),
        t: t_enter,
    })
}

/// Outward normal of the vertical box face closest to `point`.
///
/// Ties go to the first face in the order -X, +X, -Z, +Z.
pub fn nearest_face_normal_xz(point: Vec3, box_min: Vec3, box_max: Vec3) -> Vec3 {
    let faces = [
        ((point.x - box_min.x).abs(), Vec3::NEG_X),
        ((point.x - box_max.x).abs(), Vec3::X),
        ((point.z - box_min.z).abs(), Vec3::NEG_Z),
        ((point.z - box_max.z).abs(), Vec3::Z),
    ];

    let mut best = faces[0];
    for face in &faces[1..] {
        if face.0 < best.0 {
            best = *face;
        }
    }
    best.1
}

/// Ray vs axis-aligned box, all three axes (slab method).
///
/// Returns the distance along `ray_dir` to the first intersection at or after
/// the origin. A ray starting inside the box returns the exit distance.
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if dir.abs() < SLAB_PARALLEL_EPSILON {
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let t1 = (lo - origin) / dir;
        let t2 = (hi - origin) / dir;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
    }

    if t_far < t_near || t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f32, max: f32, y: f32) -> [Vec3; 4] {
        [
            Vec3::new(min, y, min),
            Vec3::new(max, y, min),
            Vec3::new(max, y, max),
            Vec3::new(min, y, max),
        ]
    }

    #[test]
    fn test_segment_intersection_crossing() {
        let hit = segment_intersection_2d(
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 0.0),
        );
        let (ua, ub) = hit.unwrap();
        assert!((ua - 0.5).abs() < 1e-6);
        assert!((ub - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_segment_intersection_parallel() {
        let hit = segment_intersection_2d(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_segment_intersection_out_of_range() {
        // Lines cross at x = 2, beyond the end of the first segment
        let hit = segment_intersection_2d(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, -1.0),
            Vec2::new(2.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_quad_edge_hit_normal_points_inward() {
        let quad = square(-4.0, 4.0, 0.0);
        let hit = segment_vs_quad_xz(
            Vec3::new(0.0, 0.0, 3.9),
            Vec3::new(0.0, 0.0, 4.5),
            &quad,
        )
        .unwrap();

        assert!((hit.t - 0.1 / 0.6).abs() < 1e-4, "t = {}", hit.t);
        assert!((hit.point.z - 4.0).abs() < 1e-4);
        assert_eq!(hit.normal, Vec3::NEG_Z);
        assert_eq!(hit.edge_top(), 0.0);
    }

    #[test]
    fn test_quad_picks_closest_edge() {
        let quad = square(-1.0, 1.0, 0.0);
        // Passes straight through the whole quad: enters at x = -1, leaves at x = 1
        let hit = segment_vs_quad_xz(
            Vec3::new(-3.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            &quad,
        )
        .unwrap();

        assert!((hit.point.x + 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::X);
    }

    #[test]
    fn test_quad_no_hit_inside() {
        let quad = square(-4.0, 4.0, 0.0);
        let hit = segment_vs_quad_xz(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0), &quad);
        assert!(hit.is_none());
    }

    #[test]
    fn test_quad_zero_length_segment() {
        let quad = square(-4.0, 4.0, 0.0);
        let p = Vec3::new(4.0, 0.0, 0.0);
        assert!(segment_vs_quad_xz(p, p, &quad).is_none());
    }

    #[test]
    fn test_quad_edge_endpoints_reported() {
        let quad = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 4.0),
            Vec3::new(0.0, 1.0, 4.0),
        ];
        // Leave through the x = 2 side edge, which rises from y = 0 to y = 1
        let hit = segment_vs_quad_xz(
            Vec3::new(1.5, 0.5, 2.0),
            Vec3::new(2.5, 0.5, 2.0),
            &quad,
        )
        .unwrap();
        assert_eq!(hit.edge_a, quad[1]);
        assert_eq!(hit.edge_b, quad[2]);
        assert_eq!(hit.edge_top(), 1.0);
        assert_eq!(hit.normal, Vec3::NEG_X);
    }

    #[test]
    fn test_aabb_hit_at_entry_face() {
        let hit = segment_vs_aabb_xz(
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(3.0, 0.0, 1.0),
            Vec3::new(1.75, 0.0, 0.75),
            Vec3::new(2.25, 1.0, 1.25),
        )
        .unwrap();

        assert!((hit.t - 0.375).abs() < 1e-5, "t = {}", hit.t);
        assert!((hit.point.x - 1.75).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_X);
    }

    #[test]
    fn test_aabb_skipped_outside_vertical_range() {
        let hit = segment_vs_aabb_xz(
            Vec3::new(1.0, 1.5, 1.0),
            Vec3::new(3.0, 1.5, 1.0),
            Vec3::new(1.75, 0.0, 0.75),
            Vec3::new(2.25, 1.0, 1.25),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_aabb_parallel_miss() {
        // Moves along X but at z = 2, outside the box's Z slab
        let hit = segment_vs_aabb_xz(
            Vec3::new(0.0, 0.5, 2.0),
            Vec3::new(4.0, 0.5, 2.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_aabb_segment_stops_short() {
        let hit = segment_vs_aabb_xz(
            Vec3::new(0.0, 0.5, 0.5),
            Vec3::new(0.9, 0.5, 0.5),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_aabb_start_inside_reports_zero() {
        let hit = segment_vs_aabb_xz(
            Vec3::new(1.1, 0.5, 0.5),
            Vec3::new(3.0, 0.5, 0.5),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 1.0),
        )
        .unwrap();
        assert_eq!(hit.t, 0.0);
        assert_eq!(hit.normal, Vec3::NEG_X);
    }

    #[test]
    fn test_aabb_no_movement() {
        let p = Vec3::new(0.0, 0.5, 0.5);
        let hit = segment_vs_aabb_xz(p, p, Vec3::ZERO, Vec3::ONE);
        assert!(hit.is_none());
    }

    #[test]
    fn test_nearest_face_normal_z() {
        let normal = nearest_face_normal_xz(
            Vec3::new(0.5, 0.5, 1.0),
            Vec3::ZERO,
            Vec3::ONE,
        );
        assert_eq!(normal, Vec3::Z);
    }

    #[test]
    fn test_ray_hits_aabb_from_front() {
        let t = ray_aabb_intersect(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        )
        .unwrap();
        assert!((t - 4.0).abs() < 1e-5, "Expected t=4.0, got t={}", t);
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let t = ray_aabb_intersect(Vec3::ZERO, Vec3::Z, Vec3::splat(-1.0), Vec3::splat(1.0))
            .unwrap();
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_aabb_behind_origin() {
        let hit = ray_aabb_intersect(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!(hit.is_none());
    }
}
