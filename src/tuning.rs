//! Data-driven game balance
//!
//! Per-kind stat tables for enemies and bosses. Everything here is plain
//! data so balance changes never touch simulation code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Enemy varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Common weak type: fast, fragile, 1 contact damage
    FireSpirit,
    /// Tougher type: slower, more health, 2 contact damage
    CandleWraith,
}

/// Stats for one enemy kind
#[derive(Debug, Clone, Copy)]
pub struct EnemyParams {
    pub health: i32,
    /// Contact damage to the player per tick of overlap
    pub contact_damage: f32,
    /// Base walk speed (percent per nominal tick); spawn adds jitter
    pub speed_base: f32,
    pub speed_jitter: f32,
    /// Score awarded on kill
    pub points: u64,
}

impl EnemyKind {
    pub fn params(self) -> EnemyParams {
        match self {
            EnemyKind::FireSpirit => EnemyParams {
                health: 2,
                contact_damage: 1.0,
                speed_base: 0.30,
                speed_jitter: 0.15,
                points: 10,
            },
            EnemyKind::CandleWraith => EnemyParams {
                health: 5,
                contact_damage: 2.0,
                speed_base: 0.20,
                speed_jitter: 0.10,
                points: 30,
            },
        }
    }
}

/// Boss varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossKind {
    /// Weak boss, levels 1-3; dies fast so the defeat delay is short
    Ogre,
    /// Strong boss, level 4+; long delay covers its dissolve effect
    Wraith,
}

/// Stats for one boss kind, before loop scaling
#[derive(Debug, Clone, Copy)]
pub struct BossParams {
    pub base_health: i32,
    pub health_per_level: i32,
    pub contact_damage: f32,
    pub speed: f32,
    /// Delay between boss death and the phase transition (render
    /// accommodation; modeled as a deferred event, not a sleep)
    pub defeat_delay_ms: f64,
}

impl BossKind {
    /// Boss kind for a given level
    pub fn for_level(level: u32) -> Self {
        if level >= STRONG_BOSS_MIN_LEVEL {
            BossKind::Wraith
        } else {
            BossKind::Ogre
        }
    }

    pub fn params(self) -> BossParams {
        match self {
            BossKind::Ogre => BossParams {
                base_health: 25,
                health_per_level: 5,
                contact_damage: 3.0,
                speed: 0.35,
                defeat_delay_ms: 400.0,
            },
            BossKind::Wraith => BossParams {
                base_health: 50,
                health_per_level: 10,
                contact_damage: 5.0,
                speed: 0.45,
                defeat_delay_ms: 1500.0,
            },
        }
    }

    /// Unscaled max health for this kind at a given level
    pub fn base_health(self, level: u32) -> i32 {
        let p = self.params();
        p.base_health + p.health_per_level * level.saturating_sub(1) as i32
    }
}
