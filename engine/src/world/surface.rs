//! Walkable surfaces
//!
//! A surface is a parallelogram footprint with a height function. Three
//! shapes exist:
//!
//! - [`SurfaceShape::Flat`] - axis-aligned rectangle at constant height
//! - [`SurfaceShape::Slope`] - axis-aligned rectangle whose height varies
//!   linearly along one horizontal axis (ramps)
//! - [`SurfaceShape::Plane`] - arbitrary parallelogram, height from its plane
//!
//! Every shape is stored the same way: an `origin` and two edge vectors
//! relative to it. The perimeter is `origin -> origin+edge1 ->
//! origin+edge1+edge2 -> origin+edge2`.
//!
//! # Example
//!
//! ```ignore
//! use ramble_engine::world::{Surface, SlopeAxis};
//! use glam::Vec3;
//!
//! let ramp = Surface::slope(Vec3::new(-4.0, 0.0, 12.0), Vec3::new(4.0, 3.0, 20.0), SlopeAxis::Z)?;
//! assert_eq!(ramp.height_at(Vec3::new(0.0, 0.0, 16.0)), Some(1.5));
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::physics::types::xz;

/// Tolerance for the parallelogram containment test of [`SurfaceShape::Plane`].
const CONTAINS_EPSILON: f32 = 1e-6;

/// Smallest |normal.y| accepted before a surface counts as vertical.
const MIN_NORMAL_Y: f32 = 1e-6;

/// Index of a surface inside its [`crate::world::Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(pub u32);

impl SurfaceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Horizontal axis along which a slope rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlopeAxis {
    X,
    Z,
}

/// How a surface computes its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceShape {
    /// Constant height `origin.y`
    Flat,
    /// Linear interpolation from `from.y` to `to.y` along the axis
    Slope(SlopeAxis),
    /// Solved from the plane equation
    Plane,
}

/// A walkable quadrilateral with a height function and adjacency set.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    origin: Vec3,
    edge1: Vec3,
    edge2: Vec3,
    shape: SurfaceShape,
    /// Unit normal, always pointing up (`normal.y > 0`)
    normal: Vec3,
    plane_constant: f32,
    /// Surfaces the player may walk onto across a shared edge (sorted, unique)
    connections: Vec<SurfaceId>,
}

impl Surface {
    /// Flat axis-aligned platform spanning `from`..`to` on X/Z at height `from.y`.
    pub fn flat(from: Vec3, to: Vec3) -> Result<Self, GeometryError> {
        let offset = to - from;
        Self::build(
            from,
            Vec3::new(offset.x, 0.0, 0.0),
            Vec3::new(0.0, 0.0, offset.z),
            SurfaceShape::Flat,
        )
    }

    /// Axis-aligned ramp from `from` to `to`, rising along `axis`.
    ///
    /// The height is `from.y` at the `from` end and `to.y` at the `to` end.
    pub fn slope(from: Vec3, to: Vec3, axis: SlopeAxis) -> Result<Self, GeometryError> {
        let offset = to - from;
        let (edge1, edge2) = match axis {
            SlopeAxis::Z => (
                Vec3::new(offset.x, 0.0, 0.0),
                Vec3::new(0.0, offset.y, offset.z),
            ),
            SlopeAxis::X => (
                Vec3::new(0.0, 0.0, offset.z),
                Vec3::new(offset.x, offset.y, 0.0),
            ),
        };
        Self::build(from, edge1, edge2, SurfaceShape::Slope(axis))
    }

    /// General parallelogram given by an origin and two edge vectors.
    pub fn from_edges(origin: Vec3, edge1: Vec3, edge2: Vec3) -> Result<Self, GeometryError> {
        Self::build(origin, edge1, edge2, SurfaceShape::Plane)
    }

    fn build(
        origin: Vec3,
        edge1: Vec3,
        edge2: Vec3,
        shape: SurfaceShape,
    ) -> Result<Self, GeometryError> {
        if !origin.is_finite() || !edge1.is_finite() || !edge2.is_finite() {
            return Err(GeometryError::NonFinite);
        }

        let cross = edge1.cross(edge2);
        if cross.length_squared() < 1e-12 {
            return Err(GeometryError::DegenerateSurface);
        }

        let mut normal = cross.normalize();
        if normal.y < 0.0 {
            normal = -normal;
        }
        if normal.y < MIN_NORMAL_Y {
            return Err(GeometryError::VerticalSurface {
                normal: normal.to_array(),
            });
        }

        Ok(Self {
            origin,
            edge1,
            edge2,
            shape,
            normal,
            plane_constant: -normal.dot(origin),
            connections: Vec::new(),
        })
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn edges(&self) -> (Vec3, Vec3) {
        (self.edge1, self.edge2)
    }

    #[inline]
    pub fn shape(&self) -> SurfaceShape {
        self.shape
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// `d` in the plane equation `normal · p + d = 0`.
    #[inline]
    pub fn plane_constant(&self) -> f32 {
        self.plane_constant
    }

    /// Corner opposite to the origin (the `to` point of flat/slope surfaces).
    #[inline]
    pub fn far_corner(&self) -> Vec3 {
        self.origin + self.edge1 + self.edge2
    }

    /// The four corners in perimeter order.
    pub fn vertices(&self) -> [Vec3; 4] {
        [
            self.origin,
            self.origin + self.edge1,
            self.far_corner(),
            self.origin + self.edge2,
        ]
    }

    pub fn center(&self) -> Vec3 {
        self.origin + (self.edge1 + self.edge2) * 0.5
    }

    /// Whether the horizontal coordinates of `pos` lie inside the footprint.
    ///
    /// Bounds are inclusive.
    pub fn contains_xz(&self, pos: Vec3) -> bool {
        match self.shape {
            SurfaceShape::Flat | SurfaceShape::Slope(_) => {
                let far = self.far_corner();
                let (min_x, max_x) = (self.origin.x.min(far.x), self.origin.x.max(far.x));
                let (min_z, max_z) = (self.origin.z.min(far.z), self.origin.z.max(far.z));
                (min_x..=max_x).contains(&pos.x) && (min_z..=max_z).contains(&pos.z)
            }
            SurfaceShape::Plane => {
                let (u, v) = self.footprint_coords(pos);
                let range = -CONTAINS_EPSILON..=1.0 + CONTAINS_EPSILON;
                range.contains(&u) && range.contains(&v)
            }
        }
    }

    /// Height of the surface below `pos`, or `None` outside the footprint.
    pub fn height_at(&self, pos: Vec3) -> Option<f32> {
        if !self.contains_xz(pos) {
            return None;
        }

        let height = match self.shape {
            SurfaceShape::Flat => self.origin.y,
            SurfaceShape::Slope(axis) => {
                let far = self.far_corner();
                let (from, to, at) = match axis {
                    SlopeAxis::Z => (self.origin.z, far.z, pos.z),
                    SlopeAxis::X => (self.origin.x, far.x, pos.x),
                };
                let t = (at - from) / (to - from);
                self.origin.y + t * (far.y - self.origin.y)
            }
            SurfaceShape::Plane => {
                -(self.normal.x * pos.x + self.normal.z * pos.z + self.plane_constant)
                    / self.normal.y
            }
        };
        Some(height)
    }

    /// Coordinates of `pos` in the (edge1, edge2) basis, projected on XZ.
    fn footprint_coords(&self, pos: Vec3) -> (f32, f32) {
        let e1 = xz(self.edge1);
        let e2 = xz(self.edge2);
        let r = xz(pos - self.origin);
        // Non-zero: a zero determinant means a vertical surface, rejected in `build`
        let det = e1.x * e2.y - e1.y * e2.x;
        let u = (r.x * e2.y - r.y * e2.x) / det;
        let v = (e1.x * r.y - e1.y * r.x) / det;
        (u, v)
    }

    /// The four perimeter edges as `(start, end)` pairs.
    pub fn perimeter(&self) -> [(Vec3, Vec3); 4] {
        let v = self.vertices();
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[3]), (v[3], v[0])]
    }

    /// Whether some perimeter edge of `self` and of `other` lie on the same
    /// horizontal line, overlap by more than `eps`, and agree in height over
    /// the overlap.
    pub fn shares_edge_with(&self, other: &Surface, eps: f32) -> bool {
        self.perimeter().iter().any(|&(a1, b1)| {
            other
                .perimeter()
                .iter()
                .any(|&(a2, b2)| edges_join(a1, b1, a2, b2, eps))
        })
    }

    pub fn connections(&self) -> &[SurfaceId] {
        &self.connections
    }

    pub fn is_connected_to(&self, other: SurfaceId) -> bool {
        self.connections.binary_search(&other).is_ok()
    }

    /// Adds a connection; returns `false` if it was already present.
    pub(crate) fn add_connection(&mut self, other: SurfaceId) -> bool {
        match self.connections.binary_search(&other) {
            Ok(_) => false,
            Err(pos) => {
                self.connections.insert(pos, other);
                true
            }
        }
    }
}

/// Edge-to-edge adjacency test used by [`Surface::shares_edge_with`].
fn edges_join(a1: Vec3, b1: Vec3, a2: Vec3, b2: Vec3, eps: f32) -> bool {
    let span = xz(b1 - a1);
    let len = span.length();
    if len < eps {
        return false;
    }
    let dir = span / len;

    // Distance of a point from the line through edge 1
    let off_line = |p: Vec3| {
        let r = xz(p - a1);
        (r.x * dir.y - r.y * dir.x).abs()
    };
    if off_line(a2) > eps || off_line(b2) > eps {
        return false;
    }

    let s_a = xz(a2 - a1).dot(dir);
    let s_b = xz(b2 - a1).dot(dir);
    if (s_b - s_a).abs() < eps {
        return false;
    }

    let lo = s_a.min(s_b).max(0.0);
    let hi = s_a.max(s_b).min(len);
    if hi - lo <= eps {
        return false;
    }

    [lo, hi].iter().all(|&s| {
        let y1 = a1.y + (b1.y - a1.y) * (s / len);
        let y2 = a2.y + (b2.y - a2.y) * ((s - s_a) / (s_b - s_a));
        (y1 - y2).abs() <= eps
    })
}
