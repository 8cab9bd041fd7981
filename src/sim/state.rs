//! Game state and core simulation types
//!
//! Single-writer entity model: everything mutates inside tick/action
//! handlers, nothing is shared.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::schedule::Scheduler;
use crate::consts::*;
use crate::tuning::{BossKind, EnemyKind};

/// Current phase of the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; only Start is accepted
    Menu,
    /// Level timer running, enemies spawning
    Playing,
    /// Timer expired, boss active (spawner stopped)
    BossFight,
    /// Boss down; waiting for Continue into the next level
    LevelComplete,
    /// Run ended; Restart begins a fresh run
    GameOver,
}

impl GamePhase {
    /// Phases in which entities move, spawn and deal damage
    pub fn is_play(self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::BossFight)
    }
}

/// Facing direction along the scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// +1 for right, -1 for left
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Standing or crouching (crouch halves walk speed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    Standing,
    Crouching,
}

/// Snapshot of currently-held movement intents, replaced wholesale by the
/// input collaborator; read-only inside the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Held-crouch intent; OR-ed with the toggled posture
    pub crouch: bool,
}

/// The player character. Never destroyed; health 0 ends the run instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub direction: Direction,
    pub posture: Posture,
    pub is_attacking: bool,
    pub health: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(50.0, (PLAY_AREA_MIN_Y + PLAY_AREA_MAX_Y) / 2.0),
            direction: Direction::Right,
            posture: Posture::Standing,
            is_attacking: false,
            health: PLAYER_MAX_HEALTH,
        }
    }

    /// Crouching if either toggled or held via control state
    pub fn is_crouching(&self, controls: &ControlState) -> bool {
        self.posture == Posture::Crouching || controls.crouch
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A regular enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub direction: Direction,
    /// Walk speed (percent per nominal tick), jittered at spawn
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    /// Pending impulse; while non-negligible it suppresses steering
    pub knockback: Vec2,
    /// Transient flash flag, visual only
    pub is_hurt: bool,
}

/// The boss. At most one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub kind: BossKind,
    pub pos: Vec2,
    pub direction: Direction,
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub knockback: Vec2,
    pub is_hurt: bool,
    /// Milliseconds until the next contact hit is allowed
    pub attack_cooldown_ms: f64,
}

/// Ephemeral score readout for the renderer; no simulation effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePopup {
    pub id: u32,
    pub pos: Vec2,
    pub value: u64,
}

/// Complete session state. Owned by `GameSession`; mutated only through
/// tick and action handlers.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Current level, 1-based
    pub level: u32,
    /// Times the boss has been re-fought after clearing level 3
    pub boss_loop_count: u32,
    /// Level timer, whole seconds remaining
    pub time_remaining: u32,
    pub score: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub popups: Vec<ScorePopup>,
    /// Background offset, accumulated inversely to player movement
    pub scroll_offset: f32,
    /// Simulation clock in milliseconds
    pub time_ms: f64,
    /// Deferred-event queue (hurt clears, popup expiry, boss defeat)
    pub scheduler: Scheduler,
    pub rng: Pcg32,
    /// Fractional second accumulator for the level timer
    pub(crate) timer_acc: f32,
    /// Milliseconds accumulated toward the next enemy spawn
    pub(crate) spawn_acc_ms: f32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh session in the menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            level: 1,
            boss_loop_count: 0,
            time_remaining: LEVEL_DURATION_SECS,
            score: 0,
            player: Player::new(),
            enemies: Vec::new(),
            boss: None,
            popups: Vec::new(),
            scroll_offset: 0.0,
            time_ms: 0.0,
            scheduler: Scheduler::new(),
            rng: Pcg32::seed_from_u64(seed),
            timer_acc: 0.0,
            spawn_acc_ms: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Full run reset: level 1, full health, cleared field, Playing
    pub fn start_run(&mut self) {
        self.level = 1;
        self.boss_loop_count = 0;
        self.score = 0;
        self.player = Player::new();
        self.begin_level();
        log::info!("run started (seed {})", self.seed);
    }

    /// Reset the per-level state and enter Playing
    pub fn begin_level(&mut self) {
        self.enemies.clear();
        self.boss = None;
        self.popups.clear();
        self.scheduler.clear();
        self.player.is_attacking = false;
        self.time_remaining = LEVEL_DURATION_SECS;
        self.timer_acc = 0.0;
        self.spawn_acc_ms = 0.0;
        self.phase = GamePhase::Playing;
        log::info!("level {} started", self.level);
    }

    /// Boss health scaling from looped encounters
    pub fn boss_health_multiplier(&self) -> f32 {
        1.0 + BOSS_LOOP_HEALTH_STEP * self.boss_loop_count as f32
    }

    /// Boss speed/damage scaling from looped encounters
    pub fn boss_aggression_multiplier(&self) -> f32 {
        1.0 + BOSS_LOOP_AGGRESSION_STEP * self.boss_loop_count as f32
    }

    /// Enemy spawn interval for the current level
    pub fn spawn_interval_ms(&self) -> f32 {
        (ENEMY_SPAWN_BASE_MS - ENEMY_SPAWN_STEP_MS * (self.level.saturating_sub(1)) as f32)
            .max(ENEMY_SPAWN_MIN_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_in_menu() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert!(state.enemies.is_empty());
        assert!(state.boss.is_none());
    }

    #[test]
    fn test_entity_ids_monotonic() {
        let mut state = GameState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_loop_multipliers() {
        let mut state = GameState::new(7);
        assert_eq!(state.boss_health_multiplier(), 1.0);
        state.boss_loop_count = 2;
        assert_eq!(state.boss_health_multiplier(), 2.0);
        assert!((state.boss_aggression_multiplier() - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let mut state = GameState::new(7);
        assert_eq!(state.spawn_interval_ms(), 2000.0);
        state.level = 2;
        assert_eq!(state.spawn_interval_ms(), 1600.0);
        state.level = 10;
        assert_eq!(state.spawn_interval_ms(), 800.0);
    }

    #[test]
    fn test_crouch_is_held_or_toggled() {
        let player = Player::new();
        let held = ControlState {
            crouch: true,
            ..Default::default()
        };
        assert!(player.is_crouching(&held));
        assert!(!player.is_crouching(&ControlState::default()));

        let mut toggled = Player::new();
        toggled.posture = Posture::Crouching;
        assert!(toggled.is_crouching(&ControlState::default()));
    }
}
