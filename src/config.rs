//! Data-driven game balance
//!
//! Every tunable the simulation reads lives here, with defaults mirroring
//! the constants in [`crate::consts`]. All structs are serde-enabled with
//! `#[serde(default)]`, so a JSON override file can set just the values it
//! cares about and fall back to the compile-time defaults for the rest.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::PowerUpKind;

/// Paddle tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal speed in pixels per second
    pub velocity: f32,
    pub size: Vec2,
    pub color: Vec3,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            velocity: PADDLE_VELOCITY,
            size: PADDLE_SIZE,
            color: Vec3::ONE,
        }
    }
}

/// Ball tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Launch speed in pixels per second
    pub speed: f32,
    pub radius: f32,
    pub color: Vec3,
    /// Trail particle pool size
    pub particle_count: usize,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            speed: BALL_SPEED,
            radius: BALL_RADIUS,
            color: Vec3::ONE,
            particle_count: PARTICLE_COUNT,
        }
    }
}

/// Screen-shake tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    /// Shake duration after a solid-brick hit (seconds)
    pub duration: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            duration: SHAKE_DURATION,
        }
    }
}

/// Per-type power-up tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpConfig {
    pub kind: PowerUpKind,
    /// Spawn probability is `1 / chance` per destroyed brick
    pub chance: u32,
    /// Effect duration once picked up (seconds)
    pub ttl: f32,
    /// Fall velocity (pixels per second, y grows downward)
    pub velocity: Vec2,
    pub size: Vec2,
    pub color: Vec3,
}

impl PowerUpConfig {
    fn new(kind: PowerUpKind, chance: u32, ttl: f32, fall_speed: f32) -> Self {
        Self {
            kind,
            chance,
            ttl,
            velocity: Vec2::new(0.0, fall_speed),
            size: Vec2::splat(20.0),
            color: Vec3::ONE,
        }
    }
}

/// The stock power-up table: four common buffs at 1/2 odds and two rare
/// debuff-style effects at 1/8.
pub fn default_power_ups() -> Vec<PowerUpConfig> {
    vec![
        PowerUpConfig::new(PowerUpKind::Speed, 2, 10.0, 120.0),
        PowerUpConfig::new(PowerUpKind::Sticky, 2, 10.0, 60.0),
        PowerUpConfig::new(PowerUpKind::PassThrough, 2, 10.0, 200.0),
        PowerUpConfig::new(PowerUpKind::PaddleSizeUp, 2, 10.0, 140.0),
        PowerUpConfig::new(PowerUpKind::Chaos, 8, 5.0, 50.0),
        PowerUpConfig::new(PowerUpKind::Confusion, 8, 5.0, 100.0),
    ]
}

/// Everything needed to build (and rebuild) one level.
///
/// The tile grid is the parsed integer map; a `Level` keeps its config
/// around so ball-loss can recreate the playfield wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Parsed tile rows (0 empty, 1 solid, 2..=5 destroyable)
    pub tiles: Vec<Vec<u32>>,
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    pub player: PlayerConfig,
    pub ball: BallConfig,
    pub shake: ShakeConfig,
    pub power_ups: Vec<PowerUpConfig>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            width: LEVEL_WIDTH,
            height: LEVEL_HEIGHT,
            player: PlayerConfig::default(),
            ball: BallConfig::default(),
            shake: ShakeConfig::default(),
            power_ups: default_power_ups(),
        }
    }
}

impl LevelConfig {
    /// Default tuning with the given tile grid.
    pub fn with_tiles(tiles: Vec<Vec<u32>>) -> Self {
        Self {
            tiles,
            ..Self::default()
        }
    }
}
