//! Deterministic Breakout simulation
//!
//! Everything the per-frame game loop touches: entity state, collision
//! tests, level construction, power-up lifecycle and the [`tick`] driver.
//! Nothing in here renders, sleeps or reads the clock; callers feed
//! [`FrameInput`] and a delta time and inspect the state afterwards.

pub mod collision;
pub mod level;
pub mod powerup;
pub mod state;
pub mod tick;

pub use collision::{Collision, Direction};
pub use level::{GameState, GameStatus, Level, LevelLoadError};
pub use state::{Ball, Brick, Paddle, PowerUp, PowerUpEffect, PowerUpKind};
pub use tick::{tick, FrameInput};
