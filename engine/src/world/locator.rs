//! Surface Locator
//!
//! Answers "which surface is the player standing on" and "may the player
//! walk from this surface onto that one".
//!
//! A surface is a candidate for a position when its footprint contains the
//! position horizontally and its height lies below the feet, allowing
//! `tolerance` of sink:
//!
//! ```text
//! height - tolerance < position.y
//! ```
//!
//! When surfaces overlap (a bridge above a floor) the [`SurfacePick`]
//! policy decides which candidate wins.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::level::Level;
use super::surface::SurfaceId;

/// Default tolerance for the below-the-feet test.
pub const DEFAULT_SURFACE_TOLERANCE: f32 = 0.1;

/// Height reported when no surface is under the position.
pub const FALLBACK_HEIGHT: f32 = 0.0;

/// Policy for choosing among several candidate surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfacePick {
    /// First candidate in level order
    FirstMatch,
    /// Highest candidate, the one nearest below the feet
    #[default]
    Nearest,
}

/// Read-only surface queries over a [`Level`].
#[derive(Debug, Clone, Copy)]
pub struct SurfaceLocator<'a> {
    level: &'a Level,
    tolerance: f32,
    pick: SurfacePick,
}

impl<'a> SurfaceLocator<'a> {
    pub fn new(level: &'a Level) -> Self {
        Self {
            level,
            tolerance: DEFAULT_SURFACE_TOLERANCE,
            pick: SurfacePick::default(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_pick(mut self, pick: SurfacePick) -> Self {
        self.pick = pick;
        self
    }

    #[inline]
    pub fn level(&self) -> &'a Level {
        self.level
    }

    /// Surface currently under `position`, if any.
    pub fn find_current_surface(&self, position: Vec3) -> Option<SurfaceId> {
        let mut candidates = self.level.iter_surfaces().filter_map(|(id, surface)| {
            surface
                .height_at(position)
                .filter(|&h| h - self.tolerance < position.y)
                .map(|h| (id, h))
        });

        match self.pick {
            SurfacePick::FirstMatch => candidates.next().map(|(id, _)| id),
            SurfacePick::Nearest => candidates
                .fold(None, |best: Option<(SurfaceId, f32)>, (id, h)| match best {
                    Some((_, best_h)) if best_h >= h => best,
                    _ => Some((id, h)),
                })
                .map(|(id, _)| id),
        }
    }

    /// Height of `surface` at `position`.
    ///
    /// Falls back to [`FALLBACK_HEIGHT`] when the surface is absent or the
    /// position lies outside its footprint.
    pub fn height_at(&self, position: Vec3, surface: Option<SurfaceId>) -> f32 {
        surface
            .and_then(|id| self.level.surface(id))
            .and_then(|s| s.height_at(position))
            .unwrap_or(FALLBACK_HEIGHT)
    }

    /// Whether walking from `from` onto `to` is permitted.
    ///
    /// True when both are present and either identical or connected.
    pub fn can_step_between(&self, from: Option<SurfaceId>, to: Option<SurfaceId>) -> bool {
        match (from, to) {
            (Some(a), Some(b)) if a == b => true,
            (Some(a), Some(b)) => self
                .level
                .surface(a)
                .is_some_and(|surface| surface.is_connected_to(b)),
            _ => false,
        }
    }
}
