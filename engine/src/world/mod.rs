//! World Module
//!
//! Level geometry the player walks on: surfaces with their adjacency,
//! static obstacles, and the locator that maps a position to the surface
//! under it.
//!
//! ## Coordinates
//! 1 unit = 1 meter, Y is up. Surface footprints live on the XZ plane.

pub mod level;
pub mod locator;
pub mod surface;

pub use level::{CONNECTION_EPSILON, Level, LevelDesc, ObstacleDesc, SurfaceDesc};
pub use locator::{FALLBACK_HEIGHT, SurfaceLocator, SurfacePick};
pub use surface::{SlopeAxis, Surface, SurfaceId, SurfaceShape};
