//! Headless demo driver
//!
//! Runs the simulation core without a renderer: synthesizes 60 Hz
//! timestamps and a scripted input pattern, then logs HUD state as the
//! session plays itself. Useful for profiling the simulation, smoke
//! testing a config file, and watching the state machine go through its
//! transitions.
//!
//! Usage: `asteroids_headless [config.toml|config.ron] [frames]`

use asteroids_core::prelude::*;

const FRAME_MS: f32 = 1000.0 / 60.0;
const DEFAULT_FRAMES: u32 = 18_000; // five minutes of simulated play

/// Canned pilot: thrust in bursts, sweep the heading, fire steadily.
fn scripted_input(frame: u32) -> InputState {
    InputState {
        thrust: frame % 150 < 45,
        left: frame % 200 < 70,
        right: frame % 200 >= 130,
        fire: frame % 12 == 0,
    }
}

fn run(config: GameConfig, frames: u32) -> HudSnapshot {
    let mut session = GameSession::new(config);
    session.start();

    let mut restarts = 0;
    let mut timestamp = 0.0;
    for frame in 0..frames {
        timestamp += FRAME_MS;
        session.advance(timestamp, scripted_input(frame));

        if session.is_game_over() {
            let hud = session.hud();
            log::info!(
                "Run ended: score={} level={} after {frame} frames",
                hud.score,
                hud.level
            );
            if restarts >= 2 {
                break;
            }
            restarts += 1;
            session.restart();
        }

        // Once per simulated second.
        if frame % 60 == 0 {
            let hud = session.hud();
            log::debug!(
                "t={:.1}s score={} lives={} level={} asteroids={} shots={}",
                timestamp / 1000.0,
                hud.score,
                hud.lives,
                hud.level,
                session.asteroids().len(),
                session.projectiles().active_count()
            );
        }
    }
    session.hud()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            log::info!("Loading config from {path}");
            GameConfig::load_from_file(&path)?
        }
        None => GameConfig::default(),
    };
    config.validate()?;

    let frames = match args.next() {
        Some(n) => n.parse::<u32>()?,
        None => DEFAULT_FRAMES,
    };

    log::info!(
        "Starting headless run: {frames} frames, {}x{} playfield",
        config.world.width,
        config.world.height
    );
    let hud = run(config, frames);

    println!(
        "final: score={} lives={} level={} game_over={}",
        hud.score, hud.lives, hud.level, hud.game_over
    );
    Ok(())
}
