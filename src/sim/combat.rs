//! Melee attack resolution
//!
//! One call per discrete Attack action, not per tick. The swing is an
//! area hitbox: every enemy (and the boss) inside the per-axis range and
//! in front of the player is hit by the same swing.

use glam::Vec2;
use rand::Rng;

use super::schedule::EventKind;
use super::state::{Direction, GameState, ScorePopup};
use crate::consts::*;

/// Whether `target` falls inside the swing hitbox of a player at
/// `player_pos` facing `facing`
pub fn in_attack_range(player_pos: Vec2, facing: Direction, target: Vec2) -> bool {
    let dx = (target.x - player_pos.x).abs();
    let dy = (target.y - player_pos.y).abs();
    let in_front = match facing {
        Direction::Right => target.x > player_pos.x,
        Direction::Left => target.x < player_pos.x,
    };
    dx < ATTACK_RANGE_X && dy < ATTACK_RANGE_Y && in_front
}

/// Resolve one Attack action. Returns false if the action was rejected
/// (wrong phase, or an attack already in flight).
pub fn resolve_attack(state: &mut GameState) -> bool {
    if !state.phase.is_play() || state.player.is_attacking {
        return false;
    }
    state.player.is_attacking = true;
    state
        .scheduler
        .schedule_in(state.time_ms, ATTACK_DURATION_MS, EventKind::AttackRecover);

    let player_pos = state.player.pos;
    let facing = state.player.direction;

    // Take the list out so survivors can borrow rng/scheduler freely
    let mut enemies = std::mem::take(&mut state.enemies);
    let mut kills: Vec<(Vec2, u64)> = Vec::new();
    for enemy in enemies.iter_mut() {
        if !in_attack_range(player_pos, facing, enemy.pos) {
            continue;
        }
        enemy.health -= ATTACK_DAMAGE;
        if enemy.health <= 0 {
            kills.push((enemy.pos, enemy.kind.params().points));
        } else {
            enemy.knockback = Vec2::new(
                KNOCKBACK_FORCE * facing.sign(),
                state
                    .rng
                    .random_range(-KNOCKBACK_DEPTH_JITTER..KNOCKBACK_DEPTH_JITTER),
            );
            enemy.is_hurt = true;
            state.scheduler.schedule_in(
                state.time_ms,
                HURT_FLASH_MS,
                EventKind::ClearEnemyHurt { enemy_id: enemy.id },
            );
        }
    }
    // Dead enemies leave the live set in the same pass that scored them
    enemies.retain(|e| e.health > 0);
    state.enemies = enemies;

    for (pos, points) in kills {
        state.score += points;
        spawn_popup(state, pos, points);
    }

    if let Some(mut boss) = state.boss.take() {
        if in_attack_range(player_pos, facing, boss.pos) {
            boss.health -= ATTACK_DAMAGE;
            if boss.health <= 0 {
                // Point value read before the boss is cleared
                let points = BOSS_SCORE_PER_LEVEL * state.level as u64;
                state.score += points;
                let pos = boss.pos;
                let kind = boss.kind;
                spawn_popup(state, pos, points);
                state.scheduler.schedule_in(
                    state.time_ms,
                    kind.params().defeat_delay_ms,
                    EventKind::BossDefeated { kind },
                );
                log::info!("boss {:?} defeated at level {}", kind, state.level);
                // Boss stays None: at most one instance, never dead-and-present
            } else {
                boss.knockback = Vec2::new(
                    KNOCKBACK_FORCE / 2.0 * facing.sign(),
                    state
                        .rng
                        .random_range(-KNOCKBACK_DEPTH_JITTER..KNOCKBACK_DEPTH_JITTER),
                );
                boss.is_hurt = true;
                state
                    .scheduler
                    .schedule_in(state.time_ms, HURT_FLASH_MS, EventKind::ClearBossHurt);
                state.boss = Some(boss);
            }
        } else {
            state.boss = Some(boss);
        }
    }

    true
}

fn spawn_popup(state: &mut GameState, pos: Vec2, value: u64) {
    let id = state.next_entity_id();
    state.popups.push(ScorePopup { id, pos, value });
    state.scheduler.schedule_in(
        state.time_ms,
        SCORE_POPUP_MS,
        EventKind::ExpirePopup { popup_id: id },
    );
}
