//! Fixed-step frame update
//!
//! One [`tick`] advances the current level by `dt` seconds: paddle input,
//! ball motion and boundary bounces, brick and paddle collisions, the
//! particle trail, falling power-ups, effect timers and the shake
//! countdown, in that order. Exiting the bottom boundary recreates the
//! level wholesale from its config.

use glam::{Vec2, Vec4};
use rand::Rng;

use super::collision::{circle_box_collision, Direction};
use super::level::{GameState, GameStatus, Level};
use super::powerup::{spawn_power_ups, update_effects, update_power_ups};
use super::state::{BodyKind, ContactMode, ObjectStatus, SurfaceMode};

/// Sampled player input for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    pub launch: bool,
}

/// Advance the simulation by `dt` seconds. Only `Active` games update;
/// `Menu` and `Win` freeze the playfield.
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) {
    if state.status != GameStatus::Active {
        return;
    }
    let Some(level) = state.current_level_mut() else {
        return;
    };
    handle_input(level, input, dt);
    move_ball(level, dt);
    handle_brick_collisions(level);
    handle_paddle_collision(level);
    update_particles(level, dt);
    update_power_ups(level, dt);
    update_effects(level, dt);
    update_shake(level, dt);
}

/// Shift the paddle and clamp it to the playfield. A sticky ball resting
/// on the paddle rides along by the paddle's actual displacement, so
/// clamping never separates the pair.
fn move_paddle(level: &mut Level, travel: f32) {
    let before = level.paddle.attrs.position.x;
    let max_x = (level.config.width - level.paddle.attrs.size.x).max(0.0);
    level.paddle.attrs.position.x = (before + travel).clamp(0.0, max_x);
    if level.ball.surface != SurfaceMode::Sticky {
        return;
    }
    let riding = circle_box_collision(&level.ball.circle(), &level.paddle.attrs.aabb());
    if riding.is_some() {
        level.ball.attrs.position.x += level.paddle.attrs.position.x - before;
    }
}

fn handle_input(level: &mut Level, input: &FrameInput, dt: f32) {
    let travel = level.paddle.velocity * dt;
    if input.move_left {
        move_paddle(level, -travel);
    }
    if input.move_right {
        move_paddle(level, travel);
    }
    if input.launch
        && level.ball.surface == SurfaceMode::Sticky
        && circle_box_collision(&level.ball.circle(), &level.paddle.attrs.aabb()).is_some()
    {
        level.ball.surface = SurfaceMode::Reflect;
        level.ball.velocity = level.ball.speed * Vec2::ONE.normalize();
        log::debug!("ball launched at {}", level.ball.velocity);
    }
}

/// Integrate the ball and bounce it off the side and top walls. The
/// boundary checks form one else-if chain, so a corner hit reflects only
/// one axis per frame. Crossing the bottom edge loses the ball and
/// recreates the level.
fn move_ball(level: &mut Level, dt: f32) {
    level.ball.attrs.position += level.ball.velocity * dt;
    let size = level.ball.attrs.size;
    if level.ball.attrs.position.x <= 0.0 {
        level.ball.velocity.x *= -1.0;
        level.ball.attrs.position.x = 0.0;
    } else if level.ball.attrs.position.x + size.x >= level.config.width {
        level.ball.velocity.x *= -1.0;
        level.ball.attrs.position.x = level.config.width - size.x;
    } else if level.ball.attrs.position.y <= 0.0 {
        level.ball.velocity.y *= -1.0;
        level.ball.attrs.position.y = 0.0;
    } else if level.ball.attrs.position.y + size.y >= level.config.height {
        log::info!("ball lost below the paddle");
        level.reset();
    }
}

/// Test the ball against every live brick. Destroyable hits destroy the
/// brick, roll power-up spawns and always get a bounce response; solid
/// hits trigger shake unless the ball is in pass-through, which skips
/// both shake and response. The bounce flips one velocity axis and pushes
/// the ball out by the penetration depth.
fn handle_brick_collisions(level: &mut Level) {
    // One circle snapshot for the whole pass; positional corrections from
    // earlier bricks do not re-enter detection this frame.
    let circle = level.ball.circle();
    for i in 0..level.bricks.len() {
        if !level.bricks[i].attrs.is_alive() {
            continue;
        }
        let Some(collision) = circle_box_collision(&circle, &level.bricks[i].attrs.aabb()) else {
            continue;
        };
        match level.bricks[i].attrs.body {
            BodyKind::Destroyable => {
                level.bricks[i].attrs.status = ObjectStatus::Destroyed;
                let position = level.bricks[i].attrs.position;
                spawn_power_ups(level, position);
            }
            BodyKind::Solid => {
                if level.ball.contact == ContactMode::PassThrough {
                    continue;
                }
                level.shake_ttl = level.config.shake.duration;
            }
        }
        match collision.direction {
            Direction::Left | Direction::Right => {
                level.ball.velocity.x *= -1.0;
                let penetration = level.ball.radius - collision.difference.x.abs();
                if collision.direction == Direction::Left {
                    level.ball.attrs.position.x += penetration;
                } else {
                    level.ball.attrs.position.x -= penetration;
                }
            }
            Direction::Up | Direction::Down => {
                level.ball.velocity.y *= -1.0;
                let penetration = level.ball.radius - collision.difference.y.abs();
                if collision.direction == Direction::Up {
                    level.ball.attrs.position.y -= penetration;
                } else {
                    level.ball.attrs.position.y += penetration;
                }
            }
        }
    }
}

/// Resolve a ball-paddle contact: snap the ball outside the paddle on the
/// impact side, then either re-stick (sticky surface) or bounce with the
/// horizontal component scaled by how far off-center the hit landed.
/// Speed magnitude is preserved and the ball always leaves upward.
fn handle_paddle_collision(level: &mut Level) {
    let Some(collision) =
        circle_box_collision(&level.ball.circle(), &level.paddle.attrs.aabb())
    else {
        return;
    };
    let paddle = &level.paddle.attrs;
    match collision.direction {
        Direction::Up => {
            level.ball.attrs.position.y = paddle.position.y - level.ball.attrs.size.y;
        }
        Direction::Down => {
            level.ball.attrs.position.y = paddle.position.y + paddle.size.y;
        }
        Direction::Left => {
            level.ball.attrs.position.x = paddle.position.x - level.ball.attrs.size.x;
        }
        Direction::Right => {
            level.ball.attrs.position.x = paddle.position.x + paddle.size.x;
        }
    }
    if level.ball.surface == SurfaceMode::Sticky {
        level.ball.velocity = Vec2::ZERO;
        return;
    }
    let half = level.paddle.attrs.size / 2.0;
    let center = level.paddle.attrs.position + half;
    let distance = (level.ball.attrs.position.x + level.ball.radius) - center.x;
    let percentage = distance / half.x;
    let strength = crate::consts::PADDLE_BOUNCE_STRENGTH;
    let old_velocity = level.ball.velocity;
    level.ball.velocity.x = level.ball.speed * percentage * strength;
    level.ball.velocity = level.ball.velocity.normalize_or_zero() * old_velocity.length();
    level.ball.velocity.y = -level.ball.velocity.y.abs();
}

fn respawn_particle(level: &mut Level, index: usize) {
    let offset = Vec2::splat(level.ball.radius / 2.0);
    let jitter = (level.rng.random_range(0..100) as f32 - 50.0) / 10.0;
    let brightness = 0.5 + level.rng.random_range(0..100) as f32 / 100.0;
    let particle = &mut level.ball.particles[index];
    particle.position = level.ball.attrs.position + Vec2::splat(jitter) + offset;
    particle.color = Vec4::new(brightness, brightness, brightness, 1.0);
    particle.life = 1.0;
    particle.velocity = level.ball.velocity * 0.1;
}

/// Respawn up to two dead particles at the ball, then age the pool: live
/// particles drift against their velocity and fade out.
fn update_particles(level: &mut Level, dt: f32) {
    for _ in 0..2 {
        if let Some(index) = level.ball.particles.iter().position(|p| p.life <= 0.0) {
            respawn_particle(level, index);
        }
    }
    for particle in &mut level.ball.particles {
        particle.life -= dt;
        if particle.life > 0.0 {
            particle.position -= particle.velocity * dt;
            particle.color.w -= dt * crate::consts::PARTICLE_FADE_RATE;
        }
    }
}

/// Publish the shake flag from the countdown, then tick it down. This
/// runs after collision handling, so a solid-brick hit shakes the same
/// frame it lands.
fn update_shake(level: &mut Level, dt: f32) {
    level.post_fx.shake = level.shake_ttl > 0.0;
    level.shake_ttl = (level.shake_ttl - dt).max(0.0);
}
