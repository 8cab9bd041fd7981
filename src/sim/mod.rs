//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - Deferred effects through the in-core scheduler, never wall-clock timers
//! - No rendering, input or platform dependencies

pub mod combat;
pub mod motion;
pub mod schedule;
pub mod spawn;
pub mod state;
pub mod tick;

pub use combat::resolve_attack;
pub use schedule::{EventKind, Scheduler};
pub use state::{
    Boss, ControlState, Direction, Enemy, GamePhase, GameState, Player, Posture, ScorePopup,
};
pub use tick::tick;
