//! Player Movement Controller
//!
//! Walks the player across the level's surfaces. Each frame:
//!
//! 1. WASD input is turned into a target velocity relative to the body's
//!    facing and the current velocity is smoothed toward it.
//! 2. The feet are snapped to the height of the surface under them.
//! 3. The frame's displacement is swept against the current surface's
//!    perimeter (unless the destination is a connected surface) and every
//!    obstacle. On contact the player stops just short of it and the rest of
//!    the displacement slides along the contact plane.
//!
//! Orientation is handled separately by [`MovementController::update_rotation`].
//!
//! # Smoothing Model
//!
//! Both laws are per second, so the result does not depend on frame rate:
//!
//! ```text
//! lerp     = 1 - (1 - acceleration)^dt
//! velocity = lerp(velocity, target, lerp)
//! velocity *= damping^dt                    (only with no key held)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use ramble_engine::player::{MovementController, BodyTransform, HeadTransform};
//!
//! let mut controller = MovementController::new();
//! let mut body = BodyTransform::new(spawn);
//! let mut head = HeadTransform::default();
//!
//! // Each frame:
//! controller.update_position(&input, &level, &mut body, delta_time);
//! controller.update_rotation(&mut input, &mut body, &mut head);
//! ```

use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec3};
use tracing::{debug, trace};

use super::config::MovementConfig;
use super::transform::{BodyTransform, HeadTransform};
use crate::input::InputSource;
use crate::physics::{horizontal, project_on_plane, segment_vs_quad_xz};
use crate::world::{Level, SurfaceId, SurfaceLocator};

/// Squared speed below which the sweep is skipped
const MIN_SPEED_SQ: f32 = 1e-8;

/// Squared displacement below which sliding stops
const MIN_REMAINING_SQ: f32 = 1e-10;

/// What a sweep ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSource {
    /// Perimeter edge of the surface the player stood on
    Edge(SurfaceId),
    /// Obstacle, by index into [`Level::obstacles`]
    Obstacle(usize),
}

/// One blocking contact found during a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub point: Vec3,
    /// Horizontal unit normal pointing back toward the side the player came from
    pub normal: Vec3,
    /// Fraction of the iteration's displacement travelled before contact
    pub t: f32,
    pub source: ContactSource,
}

/// Result of [`MovementController::slide_move`].
#[derive(Debug, Clone, PartialEq)]
pub struct SlideOutcome {
    pub position: Vec3,
    /// Displacement left over when the iteration budget ran out
    pub remaining: Vec3,
    /// Surface under the final position
    pub surface: Option<SurfaceId>,
    pub contacts: Vec<Contact>,
    pub iterations: u32,
}

impl SlideOutcome {
    pub fn was_blocked(&self) -> bool {
        !self.contacts.is_empty()
    }
}

/// First-person walking controller.
///
/// Owns velocity and look angles. The body and head transforms belong to
/// the caller and are written in place.
#[derive(Debug, Clone, Default)]
pub struct MovementController {
    config: MovementConfig,
    /// Current velocity in world space (meters per second)
    velocity: Vec3,
    yaw: f32,
    pitch: f32,
    current_surface: Option<SurfaceId>,
}

impl MovementController {
    /// Create a new movement controller with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MovementConfig) {
        self.config = config;
    }

    /// Get the current velocity in world space.
    pub fn get_velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Set velocity directly (e.g., for teleportation or knockback).
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Get the current speed (magnitude of velocity).
    pub fn get_speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Sets both look angles; pitch is clamped to the configured limit.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = wrap_angle(yaw);
        self.pitch = pitch.clamp(-self.config.pitch_limit, self.config.pitch_limit);
    }

    /// Surface found under the player by the last position update.
    pub fn current_surface(&self) -> Option<SurfaceId> {
        self.current_surface
    }

    /// Stop moving and forget the current surface.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
        self.current_surface = None;
    }

    fn locator<'a>(&self, level: &'a Level) -> SurfaceLocator<'a> {
        SurfaceLocator::new(level)
            .with_tolerance(self.config.surface_tolerance)
            .with_pick(self.config.surface_pick)
    }

    /// Surface the player may walk onto at `position`, coming from `from`.
    ///
    /// The feet are tried first, then a probe `step_height` above them so
    /// that rising ground is still found after a long frame. Returns the
    /// surface and whether stepping onto it is allowed.
    fn step_target(
        &self,
        locator: &SurfaceLocator<'_>,
        from: Option<SurfaceId>,
        position: Vec3,
    ) -> (Option<SurfaceId>, bool) {
        let at_feet = locator.find_current_surface(position);
        if locator.can_step_between(from, at_feet) {
            return (at_feet, true);
        }
        let stepped = locator.find_current_surface(position + Vec3::Y * self.config.step_height);
        if locator.can_step_between(from, stepped) {
            return (stepped, true);
        }
        (at_feet.or(stepped), false)
    }

    /// Surface under `position` after moving there while standing on `current`.
    ///
    /// The current surface is kept while the position is inside its
    /// footprint, so overlapping surfaces above the feet are never picked up.
    fn settle(
        &self,
        locator: &SurfaceLocator<'_>,
        current: Option<SurfaceId>,
        position: Vec3,
    ) -> Option<SurfaceId> {
        let still_inside = current
            .and_then(|id| locator.level().surface(id))
            .is_some_and(|surface| surface.contains_xz(position));
        if still_inside {
            return current;
        }
        match self.step_target(locator, current, position) {
            (target, true) => target,
            // Crossed an edge that was too far below the feet to block
            _ => locator.find_current_surface(position),
        }
    }

    /// Advance the body by one frame.
    ///
    /// Returns the sweep result, or `None` when no sweep ran (zero or
    /// invalid `dt`, or the player is at rest).
    pub fn update_position(
        &mut self,
        input: &impl InputSource,
        level: &Level,
        body: &mut BodyTransform,
        dt: f32,
    ) -> Option<SlideOutcome> {
        if !(dt > 0.0) || !dt.is_finite() {
            return None;
        }
        let dt = dt.min(self.config.max_frame_time);

        self.integrate_velocity(input, body.yaw, dt);

        let locator = self.locator(level);
        self.current_surface = locator.find_current_surface(body.position);
        if self.current_surface.is_some() {
            body.position.y = locator.height_at(body.position, self.current_surface);
        }

        if self.velocity.length_squared() < MIN_SPEED_SQ {
            return None;
        }

        let outcome = self.sweep(
            &locator,
            self.current_surface,
            body.position,
            horizontal(self.velocity) * dt,
        );
        body.position = outcome.position;
        self.current_surface = outcome.surface;

        for contact in &outcome.contacts {
            if self.velocity.dot(contact.normal) < 0.0 {
                self.velocity = project_on_plane(self.velocity, contact.normal);
            }
        }

        Some(outcome)
    }

    /// Smooth the velocity toward the walking target for this frame.
    fn integrate_velocity(&mut self, input: &impl InputSource, yaw: f32, dt: f32) {
        let axes = input.walk_axes();
        // Input space: forward is -Z, right is +X
        let direction = Vec3::new(axes.x, 0.0, -axes.y);
        let has_input = direction != Vec3::ZERO;

        let target = if has_input {
            Quat::from_rotation_y(yaw) * direction.normalize() * self.config.walk_speed
        } else {
            Vec3::ZERO
        };

        let lerp_factor = 1.0 - (1.0 - self.config.acceleration).powf(dt);
        self.velocity = self.velocity.lerp(target, lerp_factor);
        if !has_input {
            self.velocity *= self.config.damping.powf(dt);
        }
    }

    /// Sweep `displacement` from `start`, sliding along whatever blocks it.
    ///
    /// Starts from the surface under `start`. Does not touch the
    /// controller's velocity.
    pub fn slide_move(&self, level: &Level, start: Vec3, displacement: Vec3) -> SlideOutcome {
        let locator = self.locator(level);
        let surface = locator.find_current_surface(start);
        self.sweep(&locator, surface, start, displacement)
    }

    fn sweep(
        &self,
        locator: &SurfaceLocator<'_>,
        start_surface: Option<SurfaceId>,
        start: Vec3,
        displacement: Vec3,
    ) -> SlideOutcome {
        let level = locator.level();
        let mut position = start;
        let mut remaining = displacement;
        let mut surface = start_surface;
        let mut contacts = Vec::new();
        let mut iterations = 0;

        while iterations < self.config.max_slide_iterations
            && remaining.length_squared() > MIN_REMAINING_SQ
        {
            iterations += 1;
            let end = position + remaining;
            let (target, step_allowed) = self.step_target(locator, surface, end);

            trace!(
                "slide #{}: {:?} -> {:?}, surface {:?} -> {:?}, step allowed: {}",
                iterations, position, end, surface, target, step_allowed
            );

            let contact = self.earliest_contact(level, surface, step_allowed, position, end);
            match contact {
                None => {
                    position = end;
                    remaining = Vec3::ZERO;
                }
                Some(contact) => {
                    debug!(
                        "blocked by {:?} at t={:.3}, normal {:?}",
                        contact.source, contact.t, contact.normal
                    );
                    position += remaining * contact.t + contact.normal * self.config.skin_width;
                    remaining = project_on_plane(remaining * (1.0 - contact.t), contact.normal);
                    contacts.push(contact);
                }
            }

            surface = self.settle(locator, surface, position);
            if surface.is_some() {
                position.y = locator.height_at(position, surface);
            }
        }

        SlideOutcome {
            position,
            remaining,
            surface,
            contacts,
            iterations,
        }
    }

    /// Earliest blocking contact along `start -> end`.
    fn earliest_contact(
        &self,
        level: &Level,
        surface: Option<SurfaceId>,
        step_allowed: bool,
        start: Vec3,
        end: Vec3,
    ) -> Option<Contact> {
        let edge = surface
            .filter(|_| !step_allowed)
            .and_then(|id| level.surface(id).map(|s| (id, s)))
            .and_then(|(id, s)| {
                segment_vs_quad_xz(start, end, &s.vertices())
                    .filter(|hit| start.y <= hit.edge_top() + self.config.edge_block_tolerance)
                    .map(|hit| Contact {
                        point: hit.point,
                        normal: hit.normal,
                        t: hit.t,
                        source: ContactSource::Edge(id),
                    })
            });

        let obstacles = level.obstacles().iter().enumerate().filter_map(|(i, hitbox)| {
            hitbox.segment_intersection(start, end).map(|hit| Contact {
                point: hit.point,
                normal: hit.normal,
                t: hit.t,
                source: ContactSource::Obstacle(i),
            })
        });

        edge.into_iter()
            .chain(obstacles)
            .min_by(|a, b| a.t.total_cmp(&b.t))
    }

    /// Apply this frame's mouse motion to the look angles.
    ///
    /// Writes yaw to the body and pitch to the head, then clears the
    /// input's accumulated delta.
    pub fn update_rotation(
        &mut self,
        input: &mut impl InputSource,
        body: &mut BodyTransform,
        head: &mut HeadTransform,
    ) {
        let delta = input.mouse_delta();
        let sensitivity = self.config.mouse_sensitivity;
        let limit = self.config.pitch_limit;

        self.yaw = wrap_angle(self.yaw - delta.x * sensitivity);
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-limit, limit);

        body.yaw = self.yaw;
        head.pitch = self.pitch;

        input.reset_deltas();
    }
}

/// Wrap an angle into `[-PI, PI)`.
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputState, KeyCode};
    use crate::physics::Hitbox;
    use crate::world::Surface;
    use glam::Vec2;

    fn create_input(forward: bool, backward: bool, left: bool, right: bool) -> InputState {
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, forward);
        input.handle_key(KeyCode::S, backward);
        input.handle_key(KeyCode::A, left);
        input.handle_key(KeyCode::D, right);
        input
    }

    fn floor_level() -> Level {
        let mut level = Level::new();
        level.add_surface(
            Surface::flat(Vec3::new(-50.0, 0.0, -50.0), Vec3::new(50.0, 0.0, 50.0)).unwrap(),
        );
        level
    }

    /// Floor with an unconnected shelf 0.4 above it over x, z in [-1, 1].
    fn floor_with_shelf() -> Level {
        let mut level = floor_level();
        level.add_surface(
            Surface::flat(Vec3::new(-1.0, 0.4, -1.0), Vec3::new(1.0, 0.4, 1.0)).unwrap(),
        );
        level.update_connections();
        level
    }

    #[test]
    fn test_new_controller() {
        let controller = MovementController::new();
        assert_eq!(controller.get_velocity(), Vec3::ZERO);
        assert_eq!(controller.get_speed(), 0.0);
        assert_eq!(controller.current_surface(), None);
    }

    #[test]
    fn test_forward_movement() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::ZERO);
        let input = create_input(true, false, false, false);

        for _ in 0..120 {
            controller.update_position(&input, &level, &mut body, 1.0 / 60.0);
        }
        let velocity = controller.get_velocity();
        assert!(velocity.z < 0.0); // Moving toward -Z
        assert!(velocity.x.abs() < 1e-4);
        assert!(body.position.z < 0.0);
    }

    #[test]
    fn test_forward_follows_yaw() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::ZERO);
        body.yaw = std::f32::consts::FRAC_PI_2;
        let input = create_input(true, false, false, false);

        for _ in 0..120 {
            controller.update_position(&input, &level, &mut body, 1.0 / 60.0);
        }
        let velocity = controller.get_velocity();
        assert!(velocity.x < 0.0); // Facing -X after a quarter turn left
        assert!(velocity.z.abs() < 1e-4);
    }

    #[test]
    fn test_strafe_right() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::ZERO);
        let input = create_input(false, false, false, true);

        for _ in 0..60 {
            controller.update_position(&input, &level, &mut body, 1.0 / 60.0);
        }
        assert!(controller.get_velocity().x > 0.0);
        assert!(controller.get_velocity().z.abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_speed_is_walk_speed() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::ZERO);
        let input = create_input(true, false, false, true);

        for _ in 0..600 {
            controller.update_position(&input, &level, &mut body, 1.0 / 60.0);
            body.position = Vec3::ZERO; // stay inside the floor
        }
        assert!((controller.get_speed() - controller.config().walk_speed).abs() < 0.01);
    }

    #[test]
    fn test_opposite_inputs_cancel() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::ZERO);
        let input = create_input(true, true, false, false);

        assert!(controller.update_position(&input, &level, &mut body, 0.016).is_none());
        assert_eq!(controller.get_velocity(), Vec3::ZERO);
        assert_eq!(body.position, Vec3::ZERO);
    }

    #[test]
    fn test_damping_without_input() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::ZERO);
        controller.set_velocity(Vec3::new(0.0, 0.0, -2.0));

        let input = create_input(false, false, false, false);
        controller.update_position(&input, &level, &mut body, 0.1);
        let after = controller.get_speed();
        assert!(after < 2.0 * 0.5, "speed after one damped frame: {after}");
    }

    #[test]
    fn test_smoothing_is_frame_rate_independent() {
        let level = floor_level();
        let input = create_input(true, false, false, false);

        let run = |steps: usize| {
            let mut controller = MovementController::new();
            let mut body = BodyTransform::new(Vec3::ZERO);
            let dt = 0.5 / steps as f32;
            for _ in 0..steps {
                controller.update_position(&input, &level, &mut body, dt);
            }
            controller.get_velocity()
        };

        let coarse = run(10);
        let fine = run(50);
        assert!((coarse - fine).length() < 1e-3);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::new(1.0, 0.5, 1.0));
        controller.set_velocity(Vec3::new(1.0, 0.0, 0.0));
        let input = create_input(true, false, false, false);

        assert!(controller.update_position(&input, &level, &mut body, 0.0).is_none());
        assert_eq!(body.position, Vec3::new(1.0, 0.5, 1.0));
        assert_eq!(controller.get_velocity(), Vec3::new(1.0, 0.0, 0.0));

        assert!(controller.update_position(&input, &level, &mut body, f32::NAN).is_none());
        assert!(controller.update_position(&input, &level, &mut body, -0.1).is_none());
        assert_eq!(body.position, Vec3::new(1.0, 0.5, 1.0));
    }

    #[test]
    fn test_height_snap_at_rest() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::new(0.0, 0.05, 0.0));
        let input = create_input(false, false, false, false);

        controller.update_position(&input, &level, &mut body, 0.016);
        assert_eq!(body.position.y, 0.0);
        assert_eq!(controller.current_surface(), Some(SurfaceId(0)));
    }

    #[test]
    fn test_off_level_keeps_height() {
        let mut controller = MovementController::new();
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::new(100.0, 7.0, 0.0));
        let input = create_input(false, false, false, false);

        controller.update_position(&input, &level, &mut body, 0.016);
        assert_eq!(body.position.y, 7.0);
        assert_eq!(controller.current_surface(), None);
    }

    #[test]
    fn test_rest_below_unconnected_shelf() {
        let mut controller = MovementController::new();
        let level = floor_with_shelf();
        let mut body = BodyTransform::new(Vec3::ZERO);
        let input = create_input(false, false, false, false);

        controller.update_position(&input, &level, &mut body, 1.0 / 60.0);
        assert_eq!(body.position.y, 0.0);
        assert_eq!(controller.current_surface(), Some(SurfaceId(0)));
    }

    #[test]
    fn test_walk_under_unconnected_shelf() {
        let mut controller = MovementController::new();
        let level = floor_with_shelf();
        let mut body = BodyTransform::new(Vec3::new(-3.0, 0.0, 0.0));
        let input = create_input(false, false, false, true);

        for _ in 0..150 {
            controller.update_position(&input, &level, &mut body, 1.0 / 60.0);
            assert_eq!(body.position.y, 0.0);
            assert_eq!(controller.current_surface(), Some(SurfaceId(0)));
        }
        assert!(body.position.x > 1.0);
    }

    #[test]
    fn test_stand_on_shelf() {
        let mut controller = MovementController::new();
        let level = floor_with_shelf();
        let mut body = BodyTransform::new(Vec3::new(0.0, 0.4, 0.0));
        let input = create_input(false, false, false, false);

        controller.update_position(&input, &level, &mut body, 1.0 / 60.0);
        assert_eq!(body.position.y, 0.4);
        assert_eq!(controller.current_surface(), Some(SurfaceId(1)));
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut controller = MovementController::with_config(MovementConfig {
            acceleration: 1.0,
            ..MovementConfig::default()
        });
        let level = floor_level();
        let mut body = BodyTransform::new(Vec3::ZERO);
        let input = create_input(true, false, false, false);

        controller.update_position(&input, &level, &mut body, 5.0);
        let travelled = body.position.length();
        let max = controller.config().walk_speed * controller.config().max_frame_time;
        assert!((travelled - max).abs() < 1e-4, "travelled {travelled}");
    }

    #[test]
    fn test_obstacle_blocks_and_clips_velocity() {
        let mut level = floor_level();
        let wall = Hitbox::new(Vec3::new(-1.0, 0.0, -3.0), Vec3::new(1.0, 2.0, -2.0)).unwrap();
        level.add_obstacle(wall);

        let mut controller = MovementController::new();
        controller.set_velocity(Vec3::new(0.0, 0.0, -20.0));
        let mut body = BodyTransform::new(Vec3::new(0.0, 0.0, -1.5));
        let input = create_input(true, false, false, false);

        let outcome = controller.update_position(&input, &level, &mut body, 0.1).unwrap();
        assert!(outcome.was_blocked());
        assert_eq!(outcome.contacts[0].source, ContactSource::Obstacle(0));
        assert!((body.position.z - (-2.0 + controller.config().skin_width)).abs() < 1e-4);
        assert!(controller.get_velocity().z >= 0.0);
    }

    #[test]
    fn test_slide_along_obstacle_keeps_tangent_motion() {
        let mut level = floor_level();
        let wall = Hitbox::new(Vec3::new(-5.0, 0.0, -3.0), Vec3::new(5.0, 2.0, -2.0)).unwrap();
        level.add_obstacle(wall);
        let controller = MovementController::new();

        let outcome =
            controller.slide_move(&level, Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(outcome.contacts.len(), 1);
        // Stopped at the face, then slid along X for the rest
        assert!((outcome.position.z - (-2.0 + controller.config().skin_width)).abs() < 1e-4);
        assert!((outcome.position.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_iteration_budget() {
        let mut level = floor_level();
        // Corner: walls on -Z and -X
        let back = Hitbox::new(Vec3::new(-5.0, 0.0, -3.0), Vec3::new(5.0, 2.0, -2.0)).unwrap();
        let side = Hitbox::new(Vec3::new(-3.0, 0.0, -5.0), Vec3::new(-2.0, 2.0, 5.0)).unwrap();
        level.add_obstacle(back);
        level.add_obstacle(side);
        let controller = MovementController::new();

        let outcome =
            controller.slide_move(&level, Vec3::new(-1.0, 0.0, -1.0), Vec3::new(-3.0, 0.0, -3.0));
        assert!(outcome.iterations <= controller.config().max_slide_iterations);
        assert!(outcome.position.x > -2.0);
        assert!(outcome.position.z > -2.0);
    }

    #[test]
    fn test_rotation_applies_sensitivity() {
        let mut controller = MovementController::new();
        let mut input = InputState::new();
        input.set_captured(true);
        let mut body = BodyTransform::default();
        let mut head = HeadTransform::default();

        input.accumulate_mouse_delta(100.0, 50.0);
        controller.update_rotation(&mut input, &mut body, &mut head);

        assert!((body.yaw - (-0.2)).abs() < 1e-6);
        assert!((head.pitch - (-0.1)).abs() < 1e-6);
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut controller = MovementController::new();
        let mut input = InputState::new();
        input.set_captured(true);
        let mut body = BodyTransform::default();
        let mut head = HeadTransform::default();

        input.accumulate_mouse_delta(0.0, -100_000.0);
        controller.update_rotation(&mut input, &mut body, &mut head);
        assert!((head.pitch - controller.config().pitch_limit).abs() < 1e-6);

        input.accumulate_mouse_delta(0.0, 200_000.0);
        controller.update_rotation(&mut input, &mut body, &mut head);
        assert!((head.pitch + controller.config().pitch_limit).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_without_delta_is_stable() {
        let mut controller = MovementController::new();
        controller.set_orientation(0.7, 0.3);
        let mut input = InputState::new();
        let mut body = BodyTransform::default();
        let mut head = HeadTransform::default();

        controller.update_rotation(&mut input, &mut body, &mut head);
        assert!((body.yaw - 0.7).abs() < 1e-6);
        assert!((head.pitch - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(0.5) - 0.5).abs() < 1e-6);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-PI - 0.5) - (PI - 0.5)).abs() < 1e-5);
    }
}
