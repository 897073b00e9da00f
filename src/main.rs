//! Endless Jump entry point
//!
//! Runs the game loop against the headless frontend with the autopilot
//! playing, logging each run's result.
//!
//! Usage: endless-jump [--settings <path>] [--frames <n>] [--seed <n>]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use endless_jump::Settings;
use endless_jump::clock::FrameClock;
use endless_jump::consts::FPS;
use endless_jump::platform::{Game, Headless};
use endless_jump::renderer::{Assets, ImageFiles};

/// Command-line options
#[derive(Debug, Default)]
struct Args {
    settings: Option<PathBuf>,
    frames: Option<u64>,
    seed: Option<u64>,
}

/// Default headless run length (one minute at the target frame rate)
const DEFAULT_FRAMES: u64 = 60 * FPS as u64;

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => args.settings = iter.next().map(PathBuf::from),
            "--frames" => args.frames = iter.next().and_then(|v| v.parse().ok()),
            "--seed" => args.seed = iter.next().and_then(|v| v.parse().ok()),
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
    }
    args
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let settings = Settings::load(args.settings.as_deref());
    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    log::info!("{} (headless) starting, seed {}", settings.window_title, seed);

    let assets = Assets::load(&settings.assets, &ImageFiles);
    let mut game = Game::new(settings, assets, seed);
    game.input.idle_mode = true;

    let mut frontend = Headless::new(args.frames.unwrap_or(DEFAULT_FRAMES));
    let mut clock = FrameClock::new(FPS);
    game.run(&mut frontend, &mut clock);
}

