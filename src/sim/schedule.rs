//! Deferred-event queue
//!
//! Transient "after N ms" effects (hurt flash clear, attack recovery,
//! popup expiry, boss-defeat transition) are queued here and polled once
//! per tick against the simulation clock. No wall-clock timers: the core
//! stays deterministic and unit-testable.

use crate::tuning::BossKind;

/// What to do when a scheduled event fires. Entity-keyed kinds are
/// expected to sometimes miss (the entity died first); that is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// Clear the player's attack-in-flight flag
    AttackRecover,
    /// Clear an enemy's hurt flash
    ClearEnemyHurt { enemy_id: u32 },
    /// Clear the boss's hurt flash
    ClearBossHurt,
    /// Remove an expired score popup
    ExpirePopup { popup_id: u32 },
    /// Delayed phase transition after the boss died
    BossDefeated { kind: BossKind },
}

#[derive(Debug, Clone)]
struct ScheduledEvent {
    fire_at_ms: f64,
    kind: EventKind,
}

/// Pending deferred events, polled each play-phase tick
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    events: Vec<ScheduledEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `kind` to fire `delay_ms` after `now_ms`
    pub fn schedule_in(&mut self, now_ms: f64, delay_ms: f64, kind: EventKind) {
        self.events.push(ScheduledEvent {
            fire_at_ms: now_ms + delay_ms,
            kind,
        });
    }

    /// Remove and return every event due at `now_ms`, ordered by fire
    /// time (insertion order breaks ties)
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<EventKind> {
        let mut due: Vec<(f64, usize, EventKind)> = Vec::new();
        let mut idx = 0usize;
        self.events.retain(|ev| {
            let fire = ev.fire_at_ms <= now_ms;
            if fire {
                due.push((ev.fire_at_ms, idx, ev.kind));
            }
            idx += 1;
            !fire
        });
        due.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });
        due.into_iter().map(|(_, _, kind)| kind).collect()
    }

    /// Drop all pending events (level reset, run restart)
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
