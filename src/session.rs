//! Top-level game session
//!
//! The one surface the excluded collaborators see: the input layer feeds
//! `handle_action`/`set_control_state`, the clock drives `tick`, and the
//! renderer reads `snapshot`. Everything else stays internal to `sim`.

use serde::Serialize;

use crate::sim::{
    self, Boss, ControlState, Enemy, GamePhase, GameState, Player, Posture, ScorePopup,
};

/// Discrete, non-repeating player intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Begin a run from the menu
    Start,
    /// Advance past the level-complete screen
    Continue,
    /// Begin a fresh run after game over
    Restart,
    /// Swing the melee attack
    Attack,
    /// Flip standing/crouching posture
    ToggleCrouch,
}

/// Read-only state for the renderer. Owns clones of every container so
/// it never aliases the live entity model.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub level: u32,
    pub boss_loop_count: u32,
    pub score: u64,
    pub time_remaining: u32,
    pub player_health: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub score_popups: Vec<ScorePopup>,
    pub scroll_offset: f32,
}

/// Owns the whole simulation; single logical thread, no interior sharing
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    controls: ControlState,
}

impl GameSession {
    /// New session at the menu, with a seedable random source for
    /// reproducible runs
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            controls: ControlState::default(),
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        sim::tick(&mut self.state, &self.controls, dt);
    }

    /// Handle one discrete action. Actions invalid in the current phase
    /// are silently ignored.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Start => {
                if self.state.phase == GamePhase::Menu {
                    self.state.start_run();
                }
            }
            Action::Continue => {
                if self.state.phase == GamePhase::LevelComplete {
                    self.state.level += 1;
                    self.state.begin_level();
                }
            }
            Action::Restart => {
                // Equivalent to replaying Start from the menu
                if self.state.phase == GamePhase::GameOver {
                    self.state.start_run();
                }
            }
            Action::Attack => {
                sim::resolve_attack(&mut self.state);
            }
            Action::ToggleCrouch => {
                if self.state.phase.is_play() {
                    let player = &mut self.state.player;
                    player.posture = match player.posture {
                        Posture::Standing => Posture::Crouching,
                        Posture::Crouching => Posture::Standing,
                    };
                }
            }
        }
    }

    /// Replace the held-intent snapshot wholesale
    pub fn set_control_state(&mut self, controls: ControlState) {
        self.controls = controls;
    }

    /// Clone out the render-facing state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase,
            level: self.state.level,
            boss_loop_count: self.state.boss_loop_count,
            score: self.state.score,
            time_remaining: self.state.time_remaining,
            player_health: self.state.player.health,
            player: self.state.player.clone(),
            enemies: self.state.enemies.clone(),
            boss: self.state.boss.clone(),
            score_popups: self.state.popups.clone(),
            scroll_offset: self.state.scroll_offset,
        }
    }

    /// Direct state access for tests and headless drivers
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
