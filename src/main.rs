//! Headless demo driver
//!
//! Runs the simulation with a scripted pilot instead of a renderer:
//! walks toward the nearest threat, swings when in reach, and logs phase
//! transitions. Useful for balance checks and as a usage example.

use knight_brawl::consts::*;
use knight_brawl::{Action, ControlState, GamePhase, GameSession};

fn main() {
    env_logger::init();

    let seed = 0xB4A77;
    let mut session = GameSession::new(seed);
    session.handle_action(Action::Start);
    log::info!("autoplay run, seed {seed:#x}");

    let mut last_phase = GamePhase::Playing;
    // Ten simulated minutes at the nominal rate
    for _ in 0..(10 * 60 * 60) {
        pilot(&mut session);
        session.tick(NOMINAL_DT);

        let snap = session.snapshot();
        if snap.phase != last_phase {
            log::info!(
                "phase {:?} -> {:?} (level {}, loop {}, score {}, hp {:.0})",
                last_phase,
                snap.phase,
                snap.level,
                snap.boss_loop_count,
                snap.score,
                snap.player_health
            );
            last_phase = snap.phase;
        }

        match snap.phase {
            GamePhase::LevelComplete => session.handle_action(Action::Continue),
            GamePhase::GameOver => break,
            _ => {}
        }
    }

    let snap = session.snapshot();
    println!(
        "run over: score {}, reached level {} (boss loop {})",
        snap.score, snap.level, snap.boss_loop_count
    );
}

/// Walk toward the nearest threat and attack once it is within reach
fn pilot(session: &mut GameSession) {
    let snap = session.snapshot();
    let player = &snap.player;

    let target_x = snap
        .boss
        .as_ref()
        .map(|b| b.pos.x)
        .or_else(|| {
            snap.enemies
                .iter()
                .min_by(|a, b| {
                    let da = (a.pos.x - player.pos.x).abs();
                    let db = (b.pos.x - player.pos.x).abs();
                    da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|e| e.pos.x)
        })
        .unwrap_or(50.0);

    let dx = target_x - player.pos.x;
    // Hold ground just inside attack range; contact range is shorter
    let controls = ControlState {
        left: dx < -ATTACK_RANGE_X / 2.0,
        right: dx > ATTACK_RANGE_X / 2.0,
        ..Default::default()
    };
    session.set_control_state(controls);

    if dx.abs() < ATTACK_RANGE_X && !player.is_attacking {
        session.handle_action(Action::Attack);
    }
}
