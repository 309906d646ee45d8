//! Game Session
//!
//! Holds the loaded level and the player walking on it.

use glam::Vec3;
use tracing::info;

use crate::input::InputSource;
use crate::player::{BodyTransform, HeadTransform, MovementConfig, Player, SlideOutcome};
use crate::world::Level;

/// A level plus the player exploring it.
#[derive(Debug, Clone)]
pub struct GameSession {
    level: Level,
    player: Player,
}

impl GameSession {
    pub fn new(level: Level, spawn: Vec3) -> Self {
        Self::with_config(level, spawn, MovementConfig::default())
    }

    pub fn with_config(level: Level, spawn: Vec3, config: MovementConfig) -> Self {
        Self {
            level,
            player: Player::with_config(spawn, config),
        }
    }

    /// Advances the player by one frame.
    pub fn update(&mut self, input: &mut impl InputSource, dt: f32) -> Option<SlideOutcome> {
        self.player.update(input, &self.level, dt)
    }

    /// Replaces the level data. The player keeps its position and is
    /// snapped to the new geometry on the next update.
    pub fn set_level(&mut self, level: Level) {
        info!(
            "level replaced: {} surfaces, {} obstacles",
            level.surfaces().len(),
            level.obstacles().len()
        );
        self.level = level;
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn body(&self) -> &BodyTransform {
        self.player.body()
    }

    pub fn head(&self) -> &HeadTransform {
        self.player.head()
    }
}
