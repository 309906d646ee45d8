//! Error types
//!
//! Errors only surface while building a level or loading configuration.
//! The per-frame movement path never fails; degenerate queries there
//! return `None` instead.

use thiserror::Error;

/// Rejected surface or obstacle geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Surface edges are zero-length or collinear, so the normal is undefined.
    #[error("surface edges are collinear or zero-length")]
    DegenerateSurface,

    /// Surface plane is vertical, so no height can be solved from it.
    #[error("surface is vertical (normal {normal:?} has no Y component)")]
    VerticalSurface { normal: [f32; 3] },

    /// A coordinate is NaN or infinite.
    #[error("geometry contains a non-finite coordinate")]
    NonFinite,

    /// Hitbox has zero or negative extent on some axis.
    #[error("hitbox has no volume: min {min:?}, max {max:?}")]
    DegenerateHitbox { min: [f32; 3], max: [f32; 3] },
}

/// Errors raised while building or loading a [`crate::world::Level`].
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("surface #{index}: {source}")]
    Surface {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("obstacle #{index}: {source}")]
    Obstacle {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("unknown surface id {0}")]
    UnknownSurface(u32),

    #[error("surface {0} cannot be connected to itself")]
    SelfConnection(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading or validating a movement configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
