//! Level construction and the game state machine
//!
//! A level is built once from a [`LevelConfig`] (tile grid + tuning),
//! mutated in place every frame, and recreated wholesale from the same
//! config when the ball exits the bottom boundary. All validation happens
//! here at construction time; once a level exists, the per-frame update
//! path is total.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::LevelConfig;
use crate::consts::*;
use super::state::{
    Ball, BodyKind, Brick, ContactMode, EntityAttributes, Paddle, Particle, PostFx, PowerUp,
    PowerUpEffect, SurfaceMode,
};

/// Failure to turn a tile map into a playable level.
#[derive(Debug)]
pub enum LevelLoadError {
    /// A token in the tile file was not a non-negative integer.
    BadToken {
        token: String,
        row: usize,
        column: usize,
    },
    /// Tile value outside the known range (0..=5).
    UnknownTile {
        value: u32,
        row: usize,
        column: usize,
    },
    /// No rows, or an empty first row; the brick layout would divide by zero.
    EmptyGrid,
    /// The tile file could not be read.
    Read(std::io::Error),
}

impl fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelLoadError::BadToken { token, row, column } => {
                write!(f, "bad tile token {token:?} at row {row}, column {column}")
            }
            LevelLoadError::UnknownTile { value, row, column } => {
                write!(f, "unknown tile value {value} at row {row}, column {column}")
            }
            LevelLoadError::EmptyGrid => write!(f, "tile grid has no usable rows"),
            LevelLoadError::Read(e) => write!(f, "failed to read tile file: {e}"),
        }
    }
}

impl std::error::Error for LevelLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelLoadError::Read(e) => Some(e),
            _ => None,
        }
    }
}

/// Parse a tile map: one row per line, whitespace-separated integers.
/// Ragged rows are permitted; values above 5 are rejected here so a level
/// never holds a brick with an undefined color.
pub fn parse_tile_grid(text: &str) -> Result<Vec<Vec<u32>>, LevelLoadError> {
    let mut grid = Vec::new();
    for (row, line) in text.lines().enumerate() {
        let mut tiles = Vec::new();
        for (column, token) in line.split_whitespace().enumerate() {
            let value: u32 = token.parse().map_err(|_| LevelLoadError::BadToken {
                token: token.to_string(),
                row,
                column,
            })?;
            if value > 5 {
                return Err(LevelLoadError::UnknownTile { value, row, column });
            }
            tiles.push(value);
        }
        grid.push(tiles);
    }
    Ok(grid)
}

/// Read and parse a tile map file.
pub fn load_tile_grid(path: &Path) -> Result<Vec<Vec<u32>>, LevelLoadError> {
    let text = std::fs::read_to_string(path).map_err(LevelLoadError::Read)?;
    parse_tile_grid(&text)
}

fn brick_from_tile(value: u32, position: Vec2, size: Vec2) -> Option<Brick> {
    let (body, color) = match value {
        0 => return None,
        1 => (BodyKind::Solid, SOLID_BRICK_COLOR),
        2 => (BodyKind::Destroyable, BRICK_COLOR_BLUE),
        3 => (BodyKind::Destroyable, BRICK_COLOR_GREEN),
        4 => (BodyKind::Destroyable, BRICK_COLOR_YELLOW),
        5 => (BodyKind::Destroyable, BRICK_COLOR_ORANGE),
        // Callers validate the range first
        _ => return None,
    };
    Some(Brick {
        attrs: EntityAttributes::new(position, size, color, body),
    })
}

/// Lay bricks over the top half of the playfield. The column count comes
/// from the first row; later rows may be shorter or longer (ragged grids
/// simply place as many bricks as they have tiles).
fn build_bricks(config: &LevelConfig) -> Result<Vec<Brick>, LevelLoadError> {
    let columns = config.tiles.first().map(Vec::len).unwrap_or(0);
    let rows = config.tiles.len();
    if columns == 0 || rows == 0 {
        return Err(LevelLoadError::EmptyGrid);
    }
    let size = Vec2::new(
        config.width / columns as f32,
        (config.height / 2.0) / rows as f32,
    );
    let mut bricks = Vec::new();
    for (y, row) in config.tiles.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if value > 5 {
                // Parsed grids are already clean; this guards hand-built
                // configs taking the same path.
                return Err(LevelLoadError::UnknownTile {
                    value,
                    row: y,
                    column: x,
                });
            }
            let position = size * Vec2::new(x as f32, y as f32);
            if let Some(brick) = brick_from_tile(value, position, size) {
                bricks.push(brick);
            }
        }
    }
    Ok(bricks)
}

fn build_paddle(config: &LevelConfig) -> Paddle {
    let position = Vec2::new(
        (config.width / 2.0 - config.player.size.x / 2.0).max(0.0),
        config.height - config.player.size.y,
    );
    Paddle {
        attrs: EntityAttributes::new(
            position,
            config.player.size,
            config.player.color,
            BodyKind::Solid,
        ),
        velocity: config.player.velocity,
    }
}

/// A fresh ball rests on the paddle center, sticky and motionless until
/// the launch key releases it.
fn build_ball(config: &LevelConfig, paddle: &Paddle) -> Ball {
    let radius = config.ball.radius;
    let position = paddle.attrs.position
        + Vec2::new(paddle.attrs.size.x / 2.0 - radius, -radius * 2.0);
    Ball {
        attrs: EntityAttributes::new(
            position,
            Vec2::splat(radius * 2.0),
            config.ball.color,
            BodyKind::Solid,
        ),
        speed: config.ball.speed,
        radius,
        velocity: Vec2::ZERO,
        surface: SurfaceMode::Sticky,
        contact: ContactMode::Default,
        particles: vec![Particle::dead(); config.ball.particle_count],
    }
}

/// One playfield: tile-derived bricks, paddle, ball, falling power-ups,
/// active effects, shake countdown and post-process flags.
#[derive(Debug, Clone)]
pub struct Level {
    /// Kept for wholesale recreation on ball loss
    pub config: LevelConfig,
    pub bricks: Vec<Brick>,
    pub paddle: Paddle,
    pub ball: Ball,
    pub power_ups: Vec<PowerUp>,
    pub effects: Vec<PowerUpEffect>,
    /// Remaining shake time in seconds
    pub shake_ttl: f32,
    pub post_fx: PostFx,
    /// Level-local RNG for power-up rolls and particle jitter
    pub rng: Pcg32,
}

impl Level {
    /// Build a level from its config. Fails fast on a malformed or empty
    /// tile grid rather than producing NaN geometry.
    pub fn new(config: LevelConfig, seed: u64) -> Result<Self, LevelLoadError> {
        let bricks = build_bricks(&config)?;
        let paddle = build_paddle(&config);
        let ball = build_ball(&config, &paddle);
        log::debug!(
            "level built: {} bricks, seed {seed}",
            bricks.len()
        );
        Ok(Self {
            config,
            bricks,
            paddle,
            ball,
            power_ups: Vec::new(),
            effects: Vec::new(),
            shake_ttl: 0.0,
            post_fx: PostFx::default(),
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Recreate every entity from the stored config. This is the loss
    /// path: paddle, ball, bricks, power-ups and effects all return to
    /// their configured values; only the RNG stream position survives.
    pub fn reset(&mut self) {
        // The config validated at construction; the grid cannot have
        // become empty since.
        self.bricks = build_bricks(&self.config).unwrap_or_default();
        self.paddle = build_paddle(&self.config);
        self.ball = build_ball(&self.config, &self.paddle);
        self.power_ups.clear();
        self.effects.clear();
        self.shake_ttl = 0.0;
        self.post_fx = PostFx::default();
        log::info!("level reset: {} bricks restored", self.bricks.len());
    }
}

/// Top-level run status. Only `Active` drives simulation; `Menu` and `Win`
/// are modeled but inert (no transition logic reaches them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Menu,
    Win,
}

/// Ordered level list plus the current level index.
#[derive(Debug, Clone)]
pub struct GameState {
    pub status: GameStatus,
    pub levels: Vec<Level>,
    pub current: usize,
}

impl GameState {
    pub fn new(levels: Vec<Level>) -> Self {
        Self {
            status: GameStatus::Active,
            levels,
            current: 0,
        }
    }

    /// The level the simulation is driving, if any.
    pub fn current_level_mut(&mut self) -> Option<&mut Level> {
        self.levels.get_mut(self.current)
    }
}
