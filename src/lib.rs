//! Breakout - a 2D brick-breaker simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision engine, entity model, per-frame tick)
//! - `config`: Data-driven game balance (serde-overridable tuning)
//!
//! Rendering, window management and input polling live outside this crate:
//! the frame driver hands `sim::tick` an elapsed-time delta and key states,
//! and reads the mutated level (plus the shake/confuse/chaos flags) back out.

pub mod config;
pub mod sim;

pub use config::LevelConfig;
pub use sim::{FrameInput, GameState, GameStatus, Level, LevelLoadError, tick};

/// Game configuration constants
pub mod consts {
    use glam::{Vec2, Vec3};

    /// Playfield dimensions (pixels)
    pub const LEVEL_WIDTH: f32 = 800.0;
    pub const LEVEL_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(100.0, 20.0);
    pub const PADDLE_VELOCITY: f32 = 500.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.5;
    pub const BALL_SPEED: f32 = 400.0;
    /// Paddle-bounce deflection scale applied to the hit offset
    pub const PADDLE_BOUNCE_STRENGTH: f32 = 2.0;

    /// Trail particle pool size per ball
    pub const PARTICLE_COUNT: usize = 500;
    /// Alpha fade rate per second for live trail particles
    pub const PARTICLE_FADE_RATE: f32 = 2.5;

    /// Screen shake duration after a solid-brick hit (seconds)
    pub const SHAKE_DURATION: f32 = 0.05;

    /// Brick palette keyed by tile value (1 = solid, 2..=5 = destroyable)
    pub const SOLID_BRICK_COLOR: Vec3 = Vec3::new(0.8, 0.8, 0.7);
    pub const BRICK_COLOR_BLUE: Vec3 = Vec3::new(0.2, 0.6, 1.0);
    pub const BRICK_COLOR_GREEN: Vec3 = Vec3::new(0.0, 0.7, 0.0);
    pub const BRICK_COLOR_YELLOW: Vec3 = Vec3::new(0.8, 0.8, 0.4);
    pub const BRICK_COLOR_ORANGE: Vec3 = Vec3::new(1.0, 0.5, 0.0);
}
