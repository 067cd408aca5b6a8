//! Entity model for the Breakout playfield
//!
//! Pure state records shared by paddle, ball, bricks and power-ups. A
//! common [`EntityAttributes`] value is embedded by composition and
//! exposed through `aabb()`-style accessors. No behavior lives in this
//! module beyond small constructors and collider conversions.

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use super::collision::{BoxCollider, CircleCollider};

/// Whether a brick can be destroyed by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Solid,
    Destroyable,
}

/// Liveness of a playfield object.
///
/// Destroyed objects stay in their owning collection until the level is
/// recreated, but are skipped for collision and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectStatus {
    Alive,
    Destroyed,
}

/// Shared shape/render attributes embedded by every entity
#[derive(Debug, Clone)]
pub struct EntityAttributes {
    /// Top-left corner in playfield pixels
    pub position: Vec2,
    /// AABB width/height
    pub size: Vec2,
    /// Degrees; pass-through for the renderer, unused by the simulation
    pub rotation: f32,
    /// RGB tint
    pub color: Vec3,
    pub body: BodyKind,
    pub status: ObjectStatus,
}

impl EntityAttributes {
    pub fn new(position: Vec2, size: Vec2, color: Vec3, body: BodyKind) -> Self {
        Self {
            position,
            size,
            rotation: 0.0,
            color,
            body,
            status: ObjectStatus::Alive,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == ObjectStatus::Alive
    }

    #[inline]
    pub fn aabb(&self) -> BoxCollider {
        BoxCollider {
            top_left: self.position,
            bottom_right: self.position + self.size,
        }
    }
}

/// One grid cell of the brick layout
#[derive(Debug, Clone)]
pub struct Brick {
    pub attrs: EntityAttributes,
}

/// Trail particle; alpha is the fade channel, `life <= 0` means dead and
/// eligible for respawn at the ball's position.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Vec4,
    pub life: f32,
}

impl Particle {
    pub fn dead() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            color: Vec4::ZERO,
            life: 0.0,
        }
    }
}

/// Sticky balls adhere to the paddle until launched; Reflect is normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMode {
    Sticky,
    Reflect,
}

/// PassThrough suppresses the bounce response against solid bricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMode {
    Default,
    PassThrough,
}

/// The ball, with its owned trail particle pool
#[derive(Debug, Clone)]
pub struct Ball {
    pub attrs: EntityAttributes,
    /// Launch speed magnitude
    pub speed: f32,
    pub radius: f32,
    pub velocity: Vec2,
    pub surface: SurfaceMode,
    pub contact: ContactMode,
    /// Fixed-size pool, reused and never resized
    pub particles: Vec<Particle>,
}

impl Ball {
    /// Bounding circle; the attribute position is the sprite's top-left,
    /// so the center sits one radius in on both axes.
    #[inline]
    pub fn circle(&self) -> CircleCollider {
        CircleCollider {
            center: self.attrs.position + Vec2::splat(self.radius),
            radius: self.radius,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub attrs: EntityAttributes,
    /// Horizontal speed in pixels per second
    pub velocity: f32,
}

/// Power-up buff types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Speed,
    Sticky,
    PassThrough,
    PaddleSizeUp,
    Confusion,
    Chaos,
}

/// A falling power-up capsule
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub attrs: EntityAttributes,
    pub kind: PowerUpKind,
    /// Downward fall velocity
    pub velocity: Vec2,
}

/// Lifecycle of one picked-up effect instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    /// Buff not yet applied
    Activate,
    /// Buff applied, ttl counting down
    Activated,
    /// Ttl expired, inverse not yet applied
    Deactivate,
    /// Inverse applied; removed from the list next pass
    Deactivated,
}

/// One active effect instance. Each pickup creates an independent instance,
/// so overlapping same-type effects can deactivate each other early.
#[derive(Debug, Clone)]
pub struct PowerUpEffect {
    pub kind: PowerUpKind,
    /// Remaining time-to-live in seconds
    pub ttl: f32,
    pub phase: EffectPhase,
}

impl PowerUpEffect {
    pub fn new(kind: PowerUpKind, ttl: f32) -> Self {
        Self {
            kind,
            ttl,
            phase: EffectPhase::Activate,
        }
    }
}

/// Post-process flags consumed by the renderer; the simulation only sets
/// and clears them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostFx {
    pub shake: bool,
    pub confuse: bool,
    pub chaos: bool,
}
