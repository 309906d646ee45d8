//! Level data
//!
//! A level is an ordered arena of walkable [`Surface`]s plus an unordered
//! list of [`Hitbox`] obstacles. Surfaces refer to each other by
//! [`SurfaceId`], the index into the arena. The arena is built once at load
//! time and read-only afterwards.
//!
//! Levels can be assembled in code or loaded from JSON:
//!
//! ```json
//! {
//!   "surfaces": [
//!     { "kind": "flat",  "from": [-4, 0, -4], "to": [4, 0, 4] },
//!     { "kind": "slope", "from": [-4, 0, 4],  "to": [4, 3, 12], "axis": "z" }
//!   ],
//!   "obstacles": [ { "min": [1.75, 0, 0.75], "max": [2.25, 1, 1.25] } ],
//!   "connections": [[0, 1]],
//!   "auto_connect": true
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::surface::{SlopeAxis, Surface, SurfaceId};
use crate::error::{GeometryError, LevelError};
use crate::physics::Hitbox;

/// Tolerance for edge collinearity, overlap and height matching in the
/// adjacency pass.
pub const CONNECTION_EPSILON: f32 = 1e-3;

/// Ordered surfaces with adjacency, plus static obstacles.
#[derive(Debug, Clone, Default)]
pub struct Level {
    surfaces: Vec<Surface>,
    obstacles: Vec<Hitbox>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a surface and returns its id.
    pub fn add_surface(&mut self, surface: Surface) -> SurfaceId {
        let id = SurfaceId(self.surfaces.len() as u32);
        self.surfaces.push(surface);
        id
    }

    /// Appends an obstacle and returns its index.
    pub fn add_obstacle(&mut self, hitbox: Hitbox) -> usize {
        self.obstacles.push(hitbox);
        self.obstacles.len() - 1
    }

    /// Connects two surfaces in both directions.
    pub fn connect(&mut self, a: SurfaceId, b: SurfaceId) -> Result<(), LevelError> {
        for id in [a, b] {
            if id.index() >= self.surfaces.len() {
                return Err(LevelError::UnknownSurface(id.0));
            }
        }
        if a == b {
            return Err(LevelError::SelfConnection(a.0));
        }

        self.surfaces[a.index()].add_connection(b);
        self.surfaces[b.index()].add_connection(a);
        Ok(())
    }

    /// Connects every pair of surfaces that share a perimeter edge.
    ///
    /// Existing connections are kept. Returns the number of new links.
    pub fn update_connections(&mut self) -> usize {
        let mut added = 0;
        for i in 0..self.surfaces.len() {
            for j in (i + 1)..self.surfaces.len() {
                if !self.surfaces[i].shares_edge_with(&self.surfaces[j], CONNECTION_EPSILON) {
                    continue;
                }
                let (a, b) = (SurfaceId(i as u32), SurfaceId(j as u32));
                let new_a = self.surfaces[i].add_connection(b);
                let new_b = self.surfaces[j].add_connection(a);
                if new_a || new_b {
                    debug!("connected surfaces {} <-> {}", a, b);
                    added += 1;
                }
            }
        }
        added
    }

    #[inline]
    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.index())
    }

    #[inline]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Surfaces paired with their ids, in level order.
    pub fn iter_surfaces(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| (SurfaceId(i as u32), s))
    }

    #[inline]
    pub fn obstacles(&self) -> &[Hitbox] {
        &self.obstacles
    }

    /// Number of undirected connections between surfaces.
    pub fn connection_count(&self) -> usize {
        let directed: usize = self.surfaces.iter().map(|s| s.connections().len()).sum();
        directed / 2
    }

    /// Nearest obstacle hit by a ray within `max_dist`.
    ///
    /// Returns the obstacle index and the distance along the normalized
    /// direction. A zero direction hits nothing.
    pub fn raycast_obstacles(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_dist: f32,
    ) -> Option<(usize, f32)> {
        let dir = direction.try_normalize()?;
        self.obstacles
            .iter()
            .enumerate()
            .filter_map(|(i, hitbox)| hitbox.ray_distance(origin, dir).map(|t| (i, t)))
            .filter(|&(_, t)| t <= max_dist)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Builds a level from its serialized description.
    ///
    /// Every surface and obstacle is validated; the first invalid one is
    /// reported with its index.
    pub fn from_desc(desc: &LevelDesc) -> Result<Self, LevelError> {
        let mut level = Level::new();

        for (index, surface) in desc.surfaces.iter().enumerate() {
            let surface = surface.build().map_err(|source| {
                warn!("rejected surface #{}: {}", index, source);
                LevelError::Surface { index, source }
            })?;
            level.add_surface(surface);
        }

        for (index, obstacle) in desc.obstacles.iter().enumerate() {
            let hitbox = Hitbox::new(obstacle.min, obstacle.max).map_err(|source| {
                warn!("rejected obstacle #{}: {}", index, source);
                LevelError::Obstacle { index, source }
            })?;
            level.add_obstacle(hitbox);
        }

        for &[a, b] in &desc.connections {
            level.connect(SurfaceId(a), SurfaceId(b))?;
        }

        if desc.auto_connect {
            level.update_connections();
        }

        info!(
            "level loaded: {} surfaces, {} obstacles, {} connections",
            level.surfaces.len(),
            level.obstacles.len(),
            level.connection_count()
        );

        Ok(level)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let desc: LevelDesc = serde_json::from_str(json)?;
        Self::from_desc(&desc)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        info!("loading level from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

// ============================================================================
// Serialized form
// ============================================================================

/// One surface in a level file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SurfaceDesc {
    Flat {
        from: Vec3,
        to: Vec3,
    },
    Slope {
        from: Vec3,
        to: Vec3,
        axis: SlopeAxis,
    },
    Plane {
        origin: Vec3,
        edge1: Vec3,
        edge2: Vec3,
    },
}

impl SurfaceDesc {
    pub fn build(&self) -> Result<Surface, GeometryError> {
        match *self {
            SurfaceDesc::Flat { from, to } => Surface::flat(from, to),
            SurfaceDesc::Slope { from, to, axis } => Surface::slope(from, to, axis),
            SurfaceDesc::Plane {
                origin,
                edge1,
                edge2,
            } => Surface::from_edges(origin, edge1, edge2),
        }
    }
}

/// One obstacle in a level file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDesc {
    pub min: Vec3,
    pub max: Vec3,
}

/// A whole level file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDesc {
    #[serde(default)]
    pub surfaces: Vec<SurfaceDesc>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDesc>,
    /// Explicit surface pairs, by index
    #[serde(default)]
    pub connections: Vec<[u32; 2]>,
    /// Run the shared-edge adjacency pass after loading
    #[serde(default = "default_auto_connect")]
    pub auto_connect: bool,
}

fn default_auto_connect() -> bool {
    true
}

impl Default for LevelDesc {
    fn default() -> Self {
        Self {
            surfaces: Vec::new(),
            obstacles: Vec::new(),
            connections: Vec::new(),
            auto_connect: true,
        }
    }
}
