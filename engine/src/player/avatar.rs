//! Player avatar
//!
//! Bundles the movement controller with the body and head transforms it
//! drives. Renderers read the transforms; the game loop calls
//! [`Player::update`] once per frame.

use glam::Vec3;

use super::config::MovementConfig;
use super::movement_controller::{MovementController, SlideOutcome};
use super::transform::{BodyTransform, HeadTransform};
use crate::input::InputSource;
use crate::world::Level;

#[derive(Debug, Clone, Default)]
pub struct Player {
    controller: MovementController,
    body: BodyTransform,
    head: HeadTransform,
}

impl Player {
    pub fn new(spawn: Vec3) -> Self {
        Self::with_config(spawn, MovementConfig::default())
    }

    pub fn with_config(spawn: Vec3, config: MovementConfig) -> Self {
        Self {
            controller: MovementController::with_config(config),
            body: BodyTransform::new(spawn),
            head: HeadTransform::default(),
        }
    }

    /// Runs one frame: position first, then orientation.
    ///
    /// The input's mouse delta is cleared afterwards.
    pub fn update(
        &mut self,
        input: &mut impl InputSource,
        level: &Level,
        dt: f32,
    ) -> Option<SlideOutcome> {
        let outcome = self
            .controller
            .update_position(&*input, level, &mut self.body, dt);
        self.controller
            .update_rotation(input, &mut self.body, &mut self.head);
        outcome
    }

    /// Moves the player without sweeping and stops all motion.
    pub fn teleport(&mut self, position: Vec3, yaw: f32) {
        self.controller.reset();
        self.controller.set_orientation(yaw, 0.0);
        self.body.position = position;
        self.body.yaw = self.controller.yaw();
        self.head.pitch = self.controller.pitch();
    }

    pub fn body(&self) -> &BodyTransform {
        &self.body
    }

    pub fn head(&self) -> &HeadTransform {
        &self.head
    }

    pub fn eye_position(&self) -> Vec3 {
        self.head.eye_position(&self.body)
    }

    pub fn controller(&self) -> &MovementController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MovementController {
        &mut self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputState, KeyCode};
    use crate::world::Surface;
    use glam::Vec2;

    fn level() -> Level {
        let mut level = Level::new();
        level.add_surface(
            Surface::flat(Vec3::new(-10.0, 1.0, -10.0), Vec3::new(10.0, 1.0, 10.0)).unwrap(),
        );
        level
    }

    #[test]
    fn test_update_moves_and_turns() {
        let level = level();
        let mut player = Player::new(Vec3::new(0.0, 1.0, 0.0));
        let mut input = InputState::new();
        input.set_captured(true);
        input.handle_key(KeyCode::W, true);
        input.accumulate_mouse_delta(10.0, 0.0);

        player.update(&mut input, &level, 1.0 / 60.0);

        assert!(player.body().position.z < 0.0);
        assert!(player.body().yaw < 0.0);
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_eye_position_uses_head_offset() {
        let player = Player::new(Vec3::new(2.0, 1.0, 3.0));
        assert_eq!(player.eye_position(), Vec3::new(2.0, 2.65, 3.0));
    }

    #[test]
    fn test_teleport_stops_motion() {
        let level = level();
        let mut player = Player::new(Vec3::new(0.0, 1.0, 0.0));
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, true);
        for _ in 0..30 {
            player.update(&mut input, &level, 1.0 / 60.0);
        }
        assert!(player.controller().get_speed() > 0.0);

        player.teleport(Vec3::new(5.0, 1.0, 5.0), 1.0);
        assert_eq!(player.controller().get_speed(), 0.0);
        assert_eq!(player.body().position, Vec3::new(5.0, 1.0, 5.0));
        assert!((player.body().yaw - 1.0).abs() < 1e-6);
    }
}
