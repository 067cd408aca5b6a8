//! Power-up lifecycle: spawn rolls, falling capsules, effect state machine
//!
//! Destroying a brick rolls each configured power-up type at `1/chance`
//! odds. A spawned capsule falls until it leaves the playfield or lands on
//! the paddle; pickup queues an effect instance that walks
//! Activate -> Activated -> Deactivate -> Deactivated over its ttl. Each
//! pickup is an independent instance: same-type effects do not coalesce,
//! so a second pickup's expiry can strip a buff the first is still
//! counting down.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::collision::box_box_collision;
use super::level::Level;
use super::state::{
    BodyKind, ContactMode, EntityAttributes, PowerUp, PowerUpEffect, PowerUpKind, SurfaceMode,
};

/// Roll every configured power-up type at the given spawn position
/// (a just-destroyed brick).
pub fn spawn_power_ups(level: &mut Level, position: Vec2) {
    for i in 0..level.config.power_ups.len() {
        let chance = level.config.power_ups[i].chance;
        if chance == 0 || !level.rng.random_ratio(1, chance) {
            continue;
        }
        let config = &level.config.power_ups[i];
        log::debug!("power-up {:?} spawned at {position}", config.kind);
        level.power_ups.push(PowerUp {
            attrs: EntityAttributes::new(
                position,
                config.size,
                config.color,
                BodyKind::Destroyable,
            ),
            kind: config.kind,
            velocity: config.velocity,
        });
    }
}

/// Advance falling capsules: drop off the bottom, or convert a paddle
/// overlap into a queued effect. A retain pass keeps removal explicit
/// instead of erasing mid-iteration.
pub fn update_power_ups(level: &mut Level, dt: f32) {
    let paddle_box = level.paddle.attrs.aabb();
    let floor = level.config.height;
    let mut collected: Vec<PowerUpKind> = Vec::new();

    level.power_ups.retain_mut(|power_up| {
        power_up.attrs.position += power_up.velocity * dt;
        if power_up.attrs.position.y + power_up.attrs.size.y >= floor {
            return false;
        }
        if box_box_collision(&power_up.attrs.aabb(), &paddle_box).is_some() {
            collected.push(power_up.kind);
            return false;
        }
        true
    });

    for kind in collected {
        for i in 0..level.config.power_ups.len() {
            if level.config.power_ups[i].kind == kind {
                let ttl = level.config.power_ups[i].ttl;
                log::debug!("power-up {kind:?} picked up, ttl {ttl}s");
                level.effects.push(PowerUpEffect::new(kind, ttl));
            }
        }
    }
}

/// Apply a buff. Each is fully reversible to the configured baseline; the
/// inverse lives in [`deactivate_effect`].
fn activate_effect(level: &mut Level, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Speed => level.paddle.velocity *= 1.2,
        PowerUpKind::Sticky => {
            level.ball.surface = SurfaceMode::Sticky;
            level.ball.attrs.color = Vec3::new(1.0, 0.5, 1.0);
        }
        PowerUpKind::PassThrough => {
            level.ball.contact = ContactMode::PassThrough;
            level.ball.attrs.color = Vec3::new(1.0, 0.5, 0.5);
        }
        PowerUpKind::PaddleSizeUp => level.paddle.attrs.size.x += 50.0,
        PowerUpKind::Confusion => level.post_fx.confuse = true,
        PowerUpKind::Chaos => level.post_fx.chaos = true,
    }
}

/// Restore the configured baseline for a buff.
fn deactivate_effect(level: &mut Level, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Speed => level.paddle.velocity = level.config.player.velocity,
        PowerUpKind::Sticky => {
            level.ball.surface = SurfaceMode::Reflect;
            level.ball.attrs.color = level.config.ball.color;
        }
        PowerUpKind::PassThrough => {
            level.ball.contact = ContactMode::Default;
            level.ball.attrs.color = level.config.ball.color;
        }
        PowerUpKind::PaddleSizeUp => level.paddle.attrs.size = level.config.player.size,
        PowerUpKind::Confusion => level.post_fx.confuse = false,
        PowerUpKind::Chaos => level.post_fx.chaos = false,
    }
}

/// Drive every effect instance one step. Instances that finished their
/// cycle last frame are dropped first, so a Deactivated effect survives
/// exactly one pass.
pub fn update_effects(level: &mut Level, dt: f32) {
    use super::state::EffectPhase::*;

    level.effects.retain(|effect| effect.phase != Deactivated);

    for i in 0..level.effects.len() {
        level.effects[i].ttl = (level.effects[i].ttl - dt).max(0.0);
        let kind = level.effects[i].kind;
        match level.effects[i].phase {
            Activated if level.effects[i].ttl <= 0.0 => {
                level.effects[i].phase = Deactivate;
            }
            Activate => {
                activate_effect(level, kind);
                level.effects[i].phase = Activated;
            }
            Deactivate => {
                deactivate_effect(level, kind);
                level.effects[i].phase = Deactivated;
            }
            _ => {}
        }
    }
}
