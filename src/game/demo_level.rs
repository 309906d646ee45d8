//! Demo level
//!
//! The walkthrough scene: a ground floor with two barrels and a back wall,
//! a corridor leading to a ramp, and an upper floor at the top of the ramp.
//!
//! ```text
//!   z = 28  +---------+
//!           |  upper  |  y = 3
//!   z = 20  +---------+
//!           |  ramp   |  y 0 -> 3
//!   z = 12  +---------+
//!           | corridor|  y = 0
//!   z = 4   +---------+
//!           |  floor  |  y = 0, barrels
//!   z = -4  +=========+  back wall
//!          x=-4      x=4
//! ```

use glam::Vec3;

use crate::error::LevelError;
use crate::world::{Level, LevelDesc, ObstacleDesc, SlopeAxis, SurfaceDesc};

/// Where the walkthrough starts, on the ground floor.
pub const DEMO_SPAWN: Vec3 = Vec3::new(0.0, 0.0, 0.0);

/// Barrel footprint half extent and height
const BARREL_RADIUS: f32 = 0.25;
const BARREL_HEIGHT: f32 = 1.0;

/// Barrel positions (base centre)
const BARRELS: [Vec3; 2] = [Vec3::new(-1.0, 0.0, -1.0), Vec3::new(2.0, 0.0, 1.0)];

fn barrel(base: Vec3) -> ObstacleDesc {
    ObstacleDesc {
        min: base - Vec3::new(BARREL_RADIUS, 0.0, BARREL_RADIUS),
        max: base + Vec3::new(BARREL_RADIUS, BARREL_HEIGHT, BARREL_RADIUS),
    }
}

/// Serializable description of the demo level.
pub fn demo_level_desc() -> LevelDesc {
    let mut obstacles: Vec<ObstacleDesc> = BARRELS.iter().copied().map(barrel).collect();
    obstacles.push(ObstacleDesc {
        min: Vec3::new(-4.0, 0.0, -4.1),
        max: Vec3::new(4.0, 2.5, -3.9),
    });

    LevelDesc {
        surfaces: vec![
            SurfaceDesc::Flat {
                from: Vec3::new(-4.0, 0.0, -4.0),
                to: Vec3::new(4.0, 0.0, 4.0),
            },
            SurfaceDesc::Flat {
                from: Vec3::new(-4.0, 0.0, 4.0),
                to: Vec3::new(4.0, 0.0, 12.0),
            },
            SurfaceDesc::Slope {
                from: Vec3::new(-4.0, 0.0, 12.0),
                to: Vec3::new(4.0, 3.0, 20.0),
                axis: SlopeAxis::Z,
            },
            SurfaceDesc::Flat {
                from: Vec3::new(-4.0, 3.0, 20.0),
                to: Vec3::new(4.0, 3.0, 28.0),
            },
        ],
        obstacles,
        connections: Vec::new(),
        auto_connect: true,
    }
}

/// Builds the demo level through the public level API.
pub fn demo_level() -> Result<Level, LevelError> {
    Level::from_desc(&demo_level_desc())
}
