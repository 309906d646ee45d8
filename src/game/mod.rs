//! Game Module
//!
//! Game-side glue that builds on top of the engine: the session that ties
//! a level to a player, and the demo scene.

pub mod demo_level;
pub mod session;

pub use demo_level::{DEMO_SPAWN, demo_level, demo_level_desc};
pub use session::GameSession;
