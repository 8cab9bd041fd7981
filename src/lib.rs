//! Knight Brawl - side-scrolling beat-'em-up simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, combat, motion, spawning)
//! - `session`: Top-level game session facade for input/render collaborators
//! - `tuning`: Data-driven game balance
//!
//! Rendering, raw input capture and audio are external collaborators; the
//! crate exposes only tick/action entry points and read-only snapshots.

pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{Action, GameSession, Snapshot};
pub use sim::{ControlState, GamePhase, GameState};

/// Game configuration constants
///
/// Distances are in percent of the playfield width; durations in
/// milliseconds unless noted.
pub mod consts {
    /// Nominal simulation timestep (60 Hz). Variable-delta ticks scale
    /// per-tick magnitudes by `dt / NOMINAL_DT` to stay rate-independent.
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;

    /// Horizontal playfield bounds for player, enemies and boss
    pub const PLAY_AREA_MIN_X: f32 = 5.0;
    pub const PLAY_AREA_MAX_X: f32 = 95.0;
    /// Depth band for pseudo-isometric movement
    pub const PLAY_AREA_MIN_Y: f32 = 50.0;
    pub const PLAY_AREA_MAX_Y: f32 = 90.0;

    /// Player walk speed (percent per nominal tick); crouching halves it
    pub const PLAYER_SPEED: f32 = 1.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Background scroll offset accumulates inversely to player movement
    pub const SCROLL_FACTOR: f32 = 1.0;

    /// Melee hitbox extent per axis
    pub const ATTACK_RANGE_X: f32 = 13.0;
    pub const ATTACK_RANGE_Y: f32 = 40.0;
    /// Attack animation duration; the only rate limit on player damage
    pub const ATTACK_DURATION_MS: f64 = 400.0;
    /// Damage per connected swing
    pub const ATTACK_DAMAGE: i32 = 1;

    /// Knockback impulse applied to a surviving enemy (boss takes half)
    pub const KNOCKBACK_FORCE: f32 = 8.0;
    /// Geometric decay per nominal tick
    pub const KNOCKBACK_RECOVERY: f32 = 0.3;
    /// Below this magnitude knockback snaps to zero
    pub const KNOCKBACK_SNAP_THRESHOLD: f32 = 0.1;
    /// Random depth component added to a knockback impulse
    pub const KNOCKBACK_DEPTH_JITTER: f32 = 2.0;

    /// Hurt-flash duration on a surviving entity
    pub const HURT_FLASH_MS: f64 = 150.0;
    /// Score popup display duration
    pub const SCORE_POPUP_MS: f64 = 800.0;

    /// Contact ranges (both smaller than attack range so reach wins)
    pub const CONTACT_RANGE_ENEMY: f32 = 5.0;
    pub const CONTACT_RANGE_BOSS: f32 = 9.0;

    /// Level timer (whole seconds); expiry spawns the boss
    pub const LEVEL_DURATION_SECS: u32 = 70;

    /// Enemy spawn interval: max(MIN, BASE - STEP * (level - 1))
    pub const ENEMY_SPAWN_BASE_MS: f32 = 2000.0;
    pub const ENEMY_SPAWN_STEP_MS: f32 = 400.0;
    pub const ENEMY_SPAWN_MIN_MS: f32 = 800.0;
    /// Candle wraith probability: BASE + STEP * (level - 1)
    pub const CANDLE_BASE_CHANCE: f64 = 0.1;
    pub const CANDLE_CHANCE_STEP: f64 = 0.1;

    /// Boss loop scaling (applied after clearing level 3)
    pub const BOSS_LOOP_HEALTH_STEP: f32 = 0.5;
    pub const BOSS_LOOP_AGGRESSION_STEP: f32 = 0.3;
    /// Levels at and above this spawn the strong boss kind
    pub const STRONG_BOSS_MIN_LEVEL: u32 = 4;
    /// Boss contact damage is gated by its attack cooldown
    pub const BOSS_ATTACK_COOLDOWN_MS: f64 = 500.0;
    /// Boss point value: BOSS_SCORE_PER_LEVEL * current level
    pub const BOSS_SCORE_PER_LEVEL: u64 = 100;
}
