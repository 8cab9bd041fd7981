//! Per-tick simulation orchestration
//!
//! One `tick` call advances the clock, fires due deferred events, runs
//! the level timer and spawner, integrates motion and applies contact
//! damage. Ticks outside the play phases touch nothing.

use super::schedule::EventKind;
use super::state::{ControlState, GamePhase, GameState};
use super::{motion, spawn};
use crate::consts::*;

/// Advance the simulation by `dt` seconds of elapsed time
pub fn tick(state: &mut GameState, controls: &ControlState, dt: f32) {
    // Out-of-range elapsed time clamps to zero, never negative motion
    let dt = dt.max(0.0);
    if !state.phase.is_play() {
        return;
    }

    let dt_ms = dt as f64 * 1000.0;
    state.time_ms += dt_ms;
    apply_due_events(state);
    // A deferred boss-defeat transition may have ended the fight
    if !state.phase.is_play() {
        return;
    }

    let scale = dt / NOMINAL_DT;

    if state.phase == GamePhase::Playing {
        let timer_expired = spawn::update_level_timer(state, dt);
        // The tick that zeroes the timer never also spawns a regular enemy
        if !timer_expired {
            spawn::update_enemy_spawner(state, dt_ms as f32);
        }
    }

    motion::integrate(state, controls, scale);
    motion::apply_contact_damage(state, dt_ms);
}

/// Fire every due deferred event. Events referencing removed entities
/// miss silently.
fn apply_due_events(state: &mut GameState) {
    for kind in state.scheduler.drain_due(state.time_ms) {
        match kind {
            EventKind::AttackRecover => state.player.is_attacking = false,
            EventKind::ClearEnemyHurt { enemy_id } => {
                if let Some(enemy) = state.enemies.iter_mut().find(|e| e.id == enemy_id) {
                    enemy.is_hurt = false;
                }
            }
            EventKind::ClearBossHurt => {
                if let Some(boss) = state.boss.as_mut() {
                    boss.is_hurt = false;
                }
            }
            EventKind::ExpirePopup { popup_id } => {
                state.popups.retain(|p| p.id != popup_id);
            }
            EventKind::BossDefeated { .. } => on_boss_defeated(state),
        }
    }
}

/// Deferred transition out of a won boss fight: loop back harder after
/// level 3, otherwise hand over to the level-complete screen.
fn on_boss_defeated(state: &mut GameState) {
    if state.phase != GamePhase::BossFight {
        return;
    }
    if state.level >= 3 {
        state.boss_loop_count += 1;
        state.level = 1;
        spawn::spawn_boss(state);
        log::info!("boss loop {} begins", state.boss_loop_count);
    } else {
        state.phase = GamePhase::LevelComplete;
        log::info!("level {} complete", state.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::combat;
    use crate::sim::state::Direction;
    use crate::tuning::BossKind;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(1);
        state.start_run();
        state
    }

    #[test]
    fn test_menu_tick_changes_nothing() {
        let mut state = GameState::new(1);
        let before_x = state.player.pos.x;
        let controls = ControlState {
            right: true,
            ..Default::default()
        };
        for _ in 0..100 {
            tick(&mut state, &controls, NOMINAL_DT);
        }
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.player.pos.x, before_x);
        assert!(state.enemies.is_empty());
        assert_eq!(state.time_ms, 0.0);
    }

    #[test]
    fn test_negative_dt_clamps_to_zero() {
        let mut state = playing_state();
        let before = state.player.pos;
        tick(
            &mut state,
            &ControlState {
                right: true,
                ..Default::default()
            },
            -1.0,
        );
        assert_eq!(state.player.pos, before);
    }

    #[test]
    fn test_attack_flag_clears_after_duration() {
        let mut state = playing_state();
        assert!(combat::resolve_attack(&mut state));
        assert!(state.player.is_attacking);

        // 300 ms in: still swinging
        for _ in 0..18 {
            tick(&mut state, &ControlState::default(), NOMINAL_DT);
        }
        assert!(state.player.is_attacking);

        // past 400 ms: recovered
        for _ in 0..12 {
            tick(&mut state, &ControlState::default(), NOMINAL_DT);
        }
        assert!(!state.player.is_attacking);
    }

    #[test]
    fn test_timer_expiry_enters_boss_fight_and_stops_spawner() {
        // Scenario C
        let mut state = playing_state();
        state.time_remaining = 1;
        tick(&mut state, &ControlState::default(), 1.0);

        assert_eq!(state.phase, GamePhase::BossFight);
        assert!(state.boss.is_some());
        // That tick must not also have spawned a regular enemy
        assert!(state.enemies.is_empty());

        // Spawner stays off for the rest of the fight
        for _ in 0..300 {
            tick(&mut state, &ControlState::default(), NOMINAL_DT);
        }
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_boss_defeat_before_level_three_completes_level() {
        let mut state = playing_state();
        state.level = 2;
        state.player.pos = Vec2::new(50.0, 70.0);
        state.player.direction = Direction::Right;
        crate::sim::spawn::spawn_boss(&mut state);
        state.phase = GamePhase::BossFight;
        {
            let boss = state.boss.as_mut().unwrap();
            boss.pos = Vec2::new(60.0, 70.0);
            boss.health = 1;
        }

        assert!(combat::resolve_attack(&mut state));
        assert!(state.boss.is_none());
        assert_eq!(state.phase, GamePhase::BossFight);

        // Run past the Ogre defeat delay
        let delay_ticks = (BossKind::Ogre.params().defeat_delay_ms / 1000.0 / NOMINAL_DT as f64)
            .ceil() as usize
            + 2;
        for _ in 0..delay_ticks {
            tick(&mut state, &ControlState::default(), NOMINAL_DT);
        }
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert_eq!(state.boss_loop_count, 0);
    }

    #[test]
    fn test_boss_defeat_at_level_three_loops_harder() {
        // Scenario D
        let mut state = playing_state();
        state.level = 3;
        state.player.pos = Vec2::new(50.0, 70.0);
        state.player.direction = Direction::Right;
        crate::sim::spawn::spawn_boss(&mut state);
        state.phase = GamePhase::BossFight;
        {
            let boss = state.boss.as_mut().unwrap();
            boss.pos = Vec2::new(60.0, 70.0);
            boss.health = 1;
        }

        assert!(combat::resolve_attack(&mut state));
        let delay_ticks = (BossKind::Ogre.params().defeat_delay_ms / 1000.0 / NOMINAL_DT as f64)
            .ceil() as usize
            + 2;
        // Keep the player away so the new boss doesn't land hits
        state.player.pos = Vec2::new(90.0, 70.0);
        for _ in 0..delay_ticks {
            tick(&mut state, &ControlState::default(), NOMINAL_DT);
        }

        assert_eq!(state.boss_loop_count, 1);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::BossFight);
        let boss = state.boss.as_ref().unwrap();
        let expected = (BossKind::Ogre.base_health(1) as f32 * 1.5).floor() as i32;
        assert_eq!(boss.max_health, expected);
    }

    #[test]
    fn test_hurt_flash_clears_and_stale_ids_miss() {
        let mut state = playing_state();
        state.player.pos = Vec2::new(50.0, 70.0);
        state.player.direction = Direction::Right;
        crate::sim::spawn::spawn_enemy(&mut state);
        {
            let enemy = &mut state.enemies[0];
            enemy.pos = Vec2::new(58.0, 70.0);
            enemy.health = 5;
        }

        assert!(combat::resolve_attack(&mut state));
        assert!(state.enemies[0].is_hurt);

        // Remove the enemy before its clear event fires; must not panic
        state.enemies.clear();
        for _ in 0..20 {
            tick(&mut state, &ControlState::default(), NOMINAL_DT);
        }
        assert!(state.scheduler.is_empty() || state.enemies.is_empty());
    }

    #[test]
    fn test_score_popup_expires() {
        let mut state = playing_state();
        state.player.pos = Vec2::new(50.0, 70.0);
        state.player.direction = Direction::Right;
        crate::sim::spawn::spawn_enemy(&mut state);
        {
            let enemy = &mut state.enemies[0];
            enemy.pos = Vec2::new(58.0, 70.0);
            enemy.health = 1;
        }

        assert!(combat::resolve_attack(&mut state));
        assert_eq!(state.popups.len(), 1);

        let ticks = (SCORE_POPUP_MS / 1000.0 / NOMINAL_DT as f64).ceil() as usize + 2;
        // Park the player far from the popup's dead enemy spot
        state.player.pos = Vec2::new(90.0, 70.0);
        for _ in 0..ticks {
            tick(&mut state, &ControlState::default(), NOMINAL_DT);
        }
        assert!(state.popups.is_empty());
    }

    #[test]
    fn test_variable_delta_matches_nominal_distance() {
        // Two sessions, same total elapsed time at different tick rates,
        // no RNG-consuming events: identical player displacement
        let controls = ControlState {
            right: true,
            ..Default::default()
        };
        let mut coarse = playing_state();
        let mut fine = playing_state();
        coarse.time_remaining = 1000;
        fine.time_remaining = 1000;

        // 0.5 s total; keep each under the spawn interval
        for _ in 0..5 {
            tick(&mut coarse, &controls, 0.1);
        }
        for _ in 0..50 {
            tick(&mut fine, &controls, 0.01);
        }
        assert!((coarse.player.pos.x - fine.player.pos.x).abs() < 1e-3);
    }
}
