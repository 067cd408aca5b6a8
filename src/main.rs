//! Headless simulation driver
//!
//! Loads tile maps, builds a game and runs the fixed-step loop for a
//! number of frames with a scripted input pattern (launch on the first
//! frame, then track the ball with the paddle). Useful for exercising
//! the simulation from the command line and for deterministic replays:
//! the same seed, levels and frame count always end in the same state.

use std::path::PathBuf;
use std::process::ExitCode;

use breakout::config::LevelConfig;
use breakout::sim::level::load_tile_grid;
use breakout::sim::{FrameInput, GameState, Level, tick};

const FIXED_DT: f32 = 1.0 / 60.0;

struct Args {
    level_paths: Vec<PathBuf>,
    seed: u64,
    frames: u32,
    tuning: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        level_paths: Vec::new(),
        seed: 0,
        frames: 600,
        tuning: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed {value:?}"))?;
            }
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value
                    .parse()
                    .map_err(|_| format!("bad frame count {value:?}"))?;
            }
            "--tuning" => {
                let value = iter.next().ok_or("--tuning needs a file path")?;
                args.tuning = Some(PathBuf::from(value));
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option {other}"));
            }
            path => args.level_paths.push(PathBuf::from(path)),
        }
    }
    if args.level_paths.is_empty() {
        return Err("usage: breakout [--seed N] [--frames N] [--tuning FILE] LEVEL...".into());
    }
    Ok(args)
}

/// Tuning overrides come from a partial JSON file; missing fields keep
/// their defaults.
fn base_config(args: &Args) -> Result<LevelConfig, Box<dyn std::error::Error>> {
    match &args.tuning {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(LevelConfig::default()),
    }
}

fn build_game(args: &Args) -> Result<GameState, Box<dyn std::error::Error>> {
    let base = base_config(args)?;
    let mut levels = Vec::new();
    for path in &args.level_paths {
        let tiles = load_tile_grid(path)?;
        let config = LevelConfig {
            tiles,
            ..base.clone()
        };
        levels.push(Level::new(config, args.seed)?);
        log::info!("loaded level {}", path.display());
    }
    Ok(GameState::new(levels))
}

/// Launch on the first frame, then steer the paddle toward the ball.
fn scripted_input(state: &GameState, frame: u32) -> FrameInput {
    let mut input = FrameInput {
        launch: frame == 0,
        ..FrameInput::default()
    };
    if let Some(level) = state.levels.get(state.current) {
        let ball_center = level.ball.attrs.position.x + level.ball.radius;
        let paddle_center = level.paddle.attrs.position.x + level.paddle.attrs.size.x / 2.0;
        input.move_left = ball_center < paddle_center - 5.0;
        input.move_right = ball_center > paddle_center + 5.0;
    }
    input
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = build_game(args)?;
    for frame in 0..args.frames {
        let input = scripted_input(&state, frame);
        tick(&mut state, &input, FIXED_DT);
    }
    if let Some(level) = state.levels.get(state.current) {
        let remaining = level
            .bricks
            .iter()
            .filter(|b| b.attrs.is_alive())
            .count();
        log::info!(
            "after {} frames: {} bricks alive, ball at {}, {} active effects",
            args.frames,
            remaining,
            level.ball.attrs.position,
            level.effects.len()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = run(&args) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
