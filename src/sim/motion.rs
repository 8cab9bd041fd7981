//! Motion & knockback integration, plus contact damage
//!
//! Runs every tick in a play phase. All magnitudes scale by
//! `scale = dt / NOMINAL_DT` so behavior is frame-rate independent;
//! contact damage is deliberately per-tick and unscaled (DESIGN.md).

use glam::Vec2;

use super::state::{ControlState, Direction, GamePhase, GameState};
use crate::consts::*;

/// Advance player, enemies and boss by one tick
pub fn integrate(state: &mut GameState, controls: &ControlState, scale: f32) {
    move_player(state, controls, scale);
    let target = state.player.pos;
    let decay = (1.0 - KNOCKBACK_RECOVERY).powf(scale);

    for enemy in state.enemies.iter_mut() {
        let step = enemy.speed * scale;
        step_entity(
            &mut enemy.pos,
            &mut enemy.knockback,
            &mut enemy.direction,
            target,
            step,
            scale,
            decay,
        );
    }

    let aggression = state.boss_aggression_multiplier();
    if let Some(boss) = state.boss.as_mut() {
        let step = boss.speed * aggression * scale;
        step_entity(
            &mut boss.pos,
            &mut boss.knockback,
            &mut boss.direction,
            target,
            step,
            scale,
            decay,
        );
    }
}

/// Translate the player from the held control state
fn move_player(state: &mut GameState, controls: &ControlState, scale: f32) {
    let player = &mut state.player;

    // Facing follows held direction even mid-attack
    if controls.left {
        player.direction = Direction::Left;
    }
    if controls.right {
        player.direction = Direction::Right;
    }
    if player.is_attacking {
        return;
    }

    let mut speed = PLAYER_SPEED * scale;
    if player.is_crouching(controls) {
        speed /= 2.0;
    }

    let mut dx = 0.0;
    if controls.left {
        dx -= speed;
    }
    if controls.right {
        dx += speed;
    }
    let old_x = player.pos.x;
    player.pos.x = (player.pos.x + dx).clamp(PLAY_AREA_MIN_X, PLAY_AREA_MAX_X);
    // Background scrolls against the applied (post-clamp) displacement
    state.scroll_offset -= (player.pos.x - old_x) * SCROLL_FACTOR;

    let mut dy = 0.0;
    if controls.up {
        dy -= speed;
    }
    if controls.down {
        dy += speed;
    }
    state.player.pos.y = (state.player.pos.y + dy).clamp(PLAY_AREA_MIN_Y, PLAY_AREA_MAX_Y);
}

/// One tick of knockback-or-steering for a single entity. Active
/// knockback suppresses steering entirely.
#[allow(clippy::too_many_arguments)]
fn step_entity(
    pos: &mut Vec2,
    knockback: &mut Vec2,
    direction: &mut Direction,
    target: Vec2,
    step: f32,
    scale: f32,
    decay: f32,
) {
    if knockback.length() > KNOCKBACK_SNAP_THRESHOLD {
        *pos += *knockback * scale;
        *knockback *= decay;
        // Snap to exactly zero below the threshold; no floating-point drift
        if knockback.length() <= KNOCKBACK_SNAP_THRESHOLD {
            *knockback = Vec2::ZERO;
        }
    } else {
        *knockback = Vec2::ZERO;
        let dx = target.x - pos.x;
        let dy = target.y - pos.y;
        // Sign-of-difference steering, capped so the entity never
        // overshoots the player in one tick
        pos.x += dx.signum() * step.min(dx.abs());
        pos.y += dy.signum() * step.min(dy.abs());
        if dx.abs() > f32::EPSILON {
            *direction = if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            };
        }
    }
    pos.x = pos.x.clamp(PLAY_AREA_MIN_X, PLAY_AREA_MAX_X);
    pos.y = pos.y.clamp(PLAY_AREA_MIN_Y, PLAY_AREA_MAX_Y);
}

/// Per-tick contact damage from every overlapping enemy and the boss.
/// Enemies have no hit cooldown; sustained contact drains health every
/// tick. The boss is gated by its own attack cooldown.
pub fn apply_contact_damage(state: &mut GameState, dt_ms: f64) {
    let player_pos = state.player.pos;
    let aggression = state.boss_aggression_multiplier();

    let mut damage = 0.0f32;
    for enemy in &state.enemies {
        if enemy.pos.distance(player_pos) < CONTACT_RANGE_ENEMY {
            damage += enemy.kind.params().contact_damage;
        }
    }

    if let Some(boss) = state.boss.as_mut() {
        boss.attack_cooldown_ms = (boss.attack_cooldown_ms - dt_ms).max(0.0);
        if boss.attack_cooldown_ms <= 0.0 && boss.pos.distance(player_pos) < CONTACT_RANGE_BOSS {
            damage += boss.kind.params().contact_damage * aggression;
            boss.attack_cooldown_ms = BOSS_ATTACK_COOLDOWN_MS;
        }
    }

    if damage > 0.0 {
        state.player.health = (state.player.health - damage).max(0.0);
        if state.player.health <= 0.0 && state.phase != GamePhase::GameOver {
            state.phase = GamePhase::GameOver;
            log::info!("player defeated, final score {}", state.score);
        }
    }
}
