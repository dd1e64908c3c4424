//! Sky Dodger entry point
//!
//! Native headless runner: drives the simulation with the autopilot and
//! reports status text through the logger.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use sky_dodger::consts::{FRAME_DT, TARGET_FPS};
use sky_dodger::platform::{
    Autopilot, ClockMode, FrameClock, StatusRenderer, run_frame, status_line,
};
use sky_dodger::sim::GameState;
use sky_dodger::{Tuning, Viewport};

#[derive(Parser, Debug)]
#[command(name = "sky-dodger")]
#[command(about = "Headless Sky Dodger run driven by the demo autopilot")]
struct Cli {
    /// RNG seed (default: taken from the system clock)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many simulated seconds
    #[arg(long, default_value_t = 60)]
    seconds: u64,
    /// JSON balance override
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Pace frames to 60 fps on the wall clock
    #[arg(long)]
    realtime: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(clock_seed);

    let tuning = match cli.tuning.as_deref().map(Tuning::load) {
        Some(Ok(tuning)) => tuning,
        Some(Err(e)) => {
            log::error!("Tuning override rejected ({}), using built-in table", e);
            Tuning::default()
        }
        None => Tuning::default(),
    };

    let viewport = Viewport::default();
    let mode = if cli.realtime {
        ClockMode::Realtime
    } else {
        ClockMode::Fixed(FRAME_DT)
    };

    log::info!("Sky Dodger (native) starting: seed={} seconds={}", seed, cli.seconds);

    let mut state = GameState::with_tuning(seed, tuning, viewport);
    let mut clock = FrameClock::new(mode, viewport);
    let mut input = Autopilot::new(Some(cli.seconds * TARGET_FPS as u64));
    let mut renderer = StatusRenderer::new();

    while run_frame(&mut state, &mut clock, &mut input, &mut renderer) {
        clock.pace();
    }

    println!("{}", status_line(&state));
    println!(
        "runs {} | destroyed {} | escaped {} (current run) | frames {}",
        state.stats.runs, state.stats.destroyed, state.stats.escaped, state.stats.frames
    );
}
