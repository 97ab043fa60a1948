//! Sky Runner headless entry point
//!
//! Runs the simulation at a fixed rate with a scripted autopilot standing in
//! for a keyboard, logging level progress. A windowed host would replace the
//! autopilot with real key polling and feed `build_frame` output to the GPU.
//!
//! Usage: `sky-runner [FRAMES] [--realtime]`
//! Environment:
//! - `SKY_RUNNER_LEVELS`: path to a JSON array of level descriptors
//! - `SKY_RUNNER_TUNING`: path to a JSON tuning override
//! - `RUST_LOG`: log filter (e.g. `info`, `sky_runner=debug`)

use std::error::Error;
use std::time::{Duration, Instant};

use sky_runner::consts::FPS;
use sky_runner::renderer::build_frame;
use sky_runner::sim::{FrameSnapshot, GameEvent, GameState, InputSnapshot, tick};
use sky_runner::{Campaign, Tuning};

/// Default run length: two minutes of play
const DEFAULT_FRAMES: u64 = FPS as u64 * 120;

struct Options {
    frames: u64,
    realtime: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        frames: DEFAULT_FRAMES,
        realtime: false,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => options.realtime = true,
            other => {
                options.frames = other
                    .parse()
                    .map_err(|_| format!("expected a frame count, got '{other}'"))?;
            }
        }
    }
    Ok(options)
}

fn load_tuning() -> Result<Tuning, Box<dyn Error>> {
    match std::env::var("SKY_RUNNER_TUNING") {
        Ok(path) => {
            log::info!("Loading tuning from {path}");
            Ok(Tuning::from_json(&std::fs::read_to_string(path)?)?)
        }
        Err(_) => Ok(Tuning::default()),
    }
}

fn load_campaign(tuning: &Tuning) -> Result<Campaign, Box<dyn Error>> {
    match std::env::var("SKY_RUNNER_LEVELS") {
        Ok(path) => {
            log::info!("Loading levels from {path}");
            Ok(Campaign::from_json(&std::fs::read_to_string(path)?, tuning)?)
        }
        Err(_) => Ok(Campaign::builtin(tuning)?),
    }
}

/// Run right and hop whenever possible; restart once after winning
fn autopilot(state: &GameState) -> InputSnapshot {
    InputSnapshot {
        move_right: true,
        jump: state.manager.player.on_ground,
        restart: state.manager.victory,
        ..Default::default()
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let options = parse_args()?;
    let tuning = load_tuning()?;
    let campaign = load_campaign(&tuning)?;
    log::info!(
        "Sky Runner starting: {} levels, {} frames",
        campaign.len(),
        options.frames
    );

    let mut state = GameState::new(campaign, tuning);
    let frame_time = Duration::from_secs_f64(1.0 / FPS as f64);
    let mut respawns = 0u32;
    let mut vertex_total = 0usize;

    for _ in 0..options.frames {
        let started = Instant::now();

        let input = autopilot(&state);
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::Respawned { cause } => {
                    respawns += 1;
                    log::debug!("Respawn #{respawns} ({cause:?})");
                }
                GameEvent::LevelStarted { index, name } => {
                    log::info!("Level {}: {name}", index + 1);
                }
                GameEvent::Victory => {
                    log::info!("You win! ({} ticks)", state.time_ticks);
                }
                GameEvent::Restarted => log::info!("Campaign restarted"),
            }
        }

        // Presentation pass reads a snapshot only
        let snapshot = FrameSnapshot::capture(&state);
        vertex_total += build_frame(&snapshot).len();

        if options.realtime
            && let Some(rest) = frame_time.checked_sub(started.elapsed())
        {
            std::thread::sleep(rest);
        }
    }

    let player = state.manager.player.rect();
    log::info!(
        "Stopped after {} ticks in '{}' at x={:.1} ({} respawns, {:.0} vertices/frame)",
        state.time_ticks,
        state.manager.level.name,
        player.x,
        respawns,
        vertex_total as f64 / options.frames.max(1) as f64
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
