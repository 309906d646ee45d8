//! Ramble Engine Library
//!
//! Movement and collision core for a first-person exploration game. Given
//! player input and a level made of walkable surfaces and box obstacles, it
//! moves and turns the player each frame: walking across connected
//! platforms and ramps, stopping at unconnected edges, and sliding along
//! walls.
//!
//! # Modules
//!
//! - [`physics`] - Segment and ray queries, obstacles
//! - [`world`] - Surfaces, levels and the surface locator
//! - [`input`] - Platform-agnostic keyboard and mouse state
//! - [`player`] - Movement controller, configuration and transforms
//! - [`game`] - Session glue and the demo level
//! - [`error`] - Error types for level and config loading
//!
//! # Example
//!
//! ```ignore
//! use ramble_engine::game::{GameSession, demo_level, DEMO_SPAWN};
//! use ramble_engine::input::{InputState, KeyCode};
//!
//! let mut session = GameSession::new(demo_level()?, DEMO_SPAWN);
//! let mut input = InputState::new();
//!
//! // Host event loop feeds the input state
//! input.set_captured(true);
//! input.handle_key(KeyCode::W, true);
//! input.accumulate_mouse_delta(12.0, 0.0);
//!
//! // Once per frame
//! session.update(&mut input, 1.0 / 60.0);
//! let eye = session.head().eye_position(session.body());
//! ```

pub mod error;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use error::{ConfigError, GeometryError, LevelError};
// Re-export world types for convenience
pub use world::{Level, Surface, SurfaceId, SurfaceLocator};
// Re-export commonly used input types
pub use input::{InputSource, InputState, KeyCode, MouseButton};
// Re-export player types
pub use player::{BodyTransform, HeadTransform, MovementConfig, MovementController, Player};
