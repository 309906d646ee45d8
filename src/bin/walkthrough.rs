//! Headless walkthrough.
//!
//! Usage:
//!   cargo run --bin walkthrough -- [level.json] [movement.json]
//!
//! Loads a level (the built-in demo level when no path is given) and an
//! optional movement config, then replays a scripted 60 Hz input sequence
//! and logs the player's transform once per simulated second. Set
//! `RUST_LOG=ramble_engine=debug` to see every contact.

use std::env;
use std::f32::consts::{FRAC_PI_2, PI};

use anyhow::Context;
use glam::Vec3;
use ramble_engine::game::{DEMO_SPAWN, GameSession, demo_level};
use ramble_engine::input::{InputState, KeyCode};
use ramble_engine::player::MovementConfig;
use ramble_engine::world::Level;
use tracing::info;

const FRAME_TIME: f32 = 1.0 / 60.0;

/// One step of the input script.
struct Phase {
    name: &'static str,
    seconds: f32,
    keys: &'static [KeyCode],
    /// Total mouse motion spread evenly over the phase
    mouse: (f32, f32),
}

fn script(sensitivity: f32) -> Vec<Phase> {
    let quarter_turn = FRAC_PI_2 / sensitivity;
    vec![
        Phase {
            name: "walk into a barrel",
            seconds: 2.0,
            keys: &[KeyCode::W],
            mouse: (0.0, 0.0),
        },
        Phase {
            name: "strafe clear of it",
            seconds: 1.0,
            keys: &[KeyCode::D],
            mouse: (0.0, 0.0),
        },
        Phase {
            name: "walk up the corridor and the ramp",
            seconds: 14.0,
            keys: &[KeyCode::W],
            mouse: (0.0, 0.0),
        },
        Phase {
            name: "turn right",
            seconds: 0.5,
            keys: &[],
            mouse: (quarter_turn, 0.0),
        },
        Phase {
            name: "walk off the side edge",
            seconds: 3.0,
            keys: &[KeyCode::W],
            mouse: (0.0, 0.0),
        },
        Phase {
            name: "look around",
            seconds: 2.0,
            keys: &[],
            mouse: (-quarter_turn, 300.0),
        },
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let level = match args.get(1) {
        Some(path) => Level::load(path).with_context(|| format!("load level {path}"))?,
        None => demo_level().context("build demo level")?,
    };
    let config = match args.get(2) {
        Some(path) => MovementConfig::load(path).with_context(|| format!("load config {path}"))?,
        None => MovementConfig::default(),
    };

    let spawn = if args.get(1).is_some() {
        level
            .surfaces()
            .first()
            .map(|surface| surface.center())
            .unwrap_or(Vec3::ZERO)
    } else {
        DEMO_SPAWN + Vec3::new(2.0, 0.0, -2.0)
    };

    let sensitivity = config.mouse_sensitivity;
    let mut session = GameSession::with_config(level, spawn, config);
    // Face +Z, toward the corridor
    session.player_mut().teleport(spawn, PI);

    let mut input = InputState::new();
    input.set_captured(true);

    let mut elapsed = 0.0_f32;
    let mut next_report = 0.0_f32;

    for phase in script(sensitivity) {
        info!(phase = phase.name, seconds = phase.seconds, "phase start");

        for &key in phase.keys {
            input.handle_key(key, true);
        }

        let frames = (phase.seconds / FRAME_TIME).round().max(1.0) as u32;
        let per_frame = (phase.mouse.0 / frames as f32, phase.mouse.1 / frames as f32);
        let mut contacts = 0;

        for _ in 0..frames {
            input.accumulate_mouse_delta(per_frame.0, per_frame.1);
            if let Some(outcome) = session.update(&mut input, FRAME_TIME) {
                contacts += outcome.contacts.len();
            }

            elapsed += FRAME_TIME;
            if elapsed >= next_report {
                next_report += 1.0;
                let body = session.body();
                info!(
                    elapsed,
                    position = ?body.position,
                    yaw = body.yaw,
                    pitch = session.head().pitch,
                    surface = ?session.player().controller().current_surface(),
                    "player"
                );
            }
        }

        for &key in phase.keys {
            input.handle_key(key, false);
        }

        info!(
            phase = phase.name,
            contacts,
            position = ?session.body().position,
            "phase end"
        );
    }

    Ok(())
}
