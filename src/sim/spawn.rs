//! Timer-driven enemy and boss spawning
//!
//! Enemy spawns accumulate wall time while `Playing` and fire at a
//! level-scaled interval. The boss spawns exactly once, when the level
//! timer reaches zero; that tick never also produces a normal spawn.

use glam::Vec2;
use rand::Rng;

use super::state::{Boss, Direction, Enemy, GamePhase, GameState};
use crate::consts::*;
use crate::tuning::{BossKind, EnemyKind};

/// Advance the level timer by `dt` seconds. Returns true if the timer
/// expired this tick: the boss is spawned and the phase switches to
/// `BossFight` atomically.
pub fn update_level_timer(state: &mut GameState, dt: f32) -> bool {
    state.timer_acc += dt;
    while state.timer_acc >= 1.0 {
        state.timer_acc -= 1.0;
        state.time_remaining = state.time_remaining.saturating_sub(1);
        if state.time_remaining == 0 {
            spawn_boss(state);
            state.phase = GamePhase::BossFight;
            return true;
        }
    }
    false
}

/// Accumulate toward the next enemy spawn; only called while `Playing`
pub fn update_enemy_spawner(state: &mut GameState, dt_ms: f32) {
    state.spawn_acc_ms += dt_ms;
    let interval = state.spawn_interval_ms();
    while state.spawn_acc_ms >= interval {
        state.spawn_acc_ms -= interval;
        spawn_enemy(state);
    }
}

/// Spawn one enemy at a random playfield edge
pub fn spawn_enemy(state: &mut GameState) {
    let from_left = state.rng.random_bool(0.5);
    let x = if from_left {
        PLAY_AREA_MIN_X
    } else {
        PLAY_AREA_MAX_X
    };
    let y = state.rng.random_range(PLAY_AREA_MIN_Y..PLAY_AREA_MAX_Y);

    let candle_chance =
        CANDLE_BASE_CHANCE + CANDLE_CHANCE_STEP * (state.level.saturating_sub(1)) as f64;
    let kind = if state.rng.random_bool(candle_chance.min(1.0)) {
        EnemyKind::CandleWraith
    } else {
        EnemyKind::FireSpirit
    };

    let params = kind.params();
    let speed = params.speed_base + state.rng.random_range(0.0..params.speed_jitter);

    let enemy = Enemy {
        id: state.next_entity_id(),
        kind,
        pos: Vec2::new(x, y),
        direction: if from_left {
            Direction::Right
        } else {
            Direction::Left
        },
        speed,
        health: params.health,
        max_health: params.health,
        knockback: Vec2::ZERO,
        is_hurt: false,
    };
    log::debug!("spawned {:?} #{} at x={:.0}", kind, enemy.id, x);
    state.enemies.push(enemy);
}

/// Spawn the boss for the current level, loop-scaled. Replaces any
/// existing boss so exactly one instance ever exists.
pub fn spawn_boss(state: &mut GameState) {
    let kind = BossKind::for_level(state.level);
    let params = kind.params();
    let max_health =
        (kind.base_health(state.level) as f32 * state.boss_health_multiplier()).floor() as i32;

    // Enter from the edge farther from the player
    let from_left = state.player.pos.x > 50.0;
    let x = if from_left {
        PLAY_AREA_MIN_X
    } else {
        PLAY_AREA_MAX_X
    };

    state.boss = Some(Boss {
        kind,
        pos: Vec2::new(x, (PLAY_AREA_MIN_Y + PLAY_AREA_MAX_Y) / 2.0),
        direction: if from_left {
            Direction::Right
        } else {
            Direction::Left
        },
        speed: params.speed,
        health: max_health,
        max_health,
        knockback: Vec2::ZERO,
        is_hurt: false,
        attack_cooldown_ms: 0.0,
    });
    log::info!(
        "boss {:?} spawned (level {}, loop {}, hp {})",
        kind,
        state.level,
        state.boss_loop_count,
        max_health
    );
}
