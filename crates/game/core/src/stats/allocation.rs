//! Stat-point allocation pool.
//!
//! Points enter the pool from level-ups (and retroactive grants for towers
//! created above level 1) and leave it through [`AllocationPool::spend`].
//! [`AllocationPool::reset`] refunds every allocated point atomically. The
//! pool never spends more than it holds and counters never go negative.

use crate::error::StatsError;

/// Selector for the five allocatable stats.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatKind {
    Health,
    Attack,
    Defense,
    Speed,
    Range,
}

impl StatKind {
    /// All allocatable stats, in display order.
    pub const ALL: [Self; 5] = [
        Self::Health,
        Self::Attack,
        Self::Defense,
        Self::Speed,
        Self::Range,
    ];
}

/// Available stat points plus the five allocation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationPool {
    available: u32,
    health: u32,
    attack: u32,
    defense: u32,
    speed: u32,
    range: u32,
}

impl AllocationPool {
    /// Create a pool holding `available` unspent points and no allocations.
    pub const fn new(available: u32) -> Self {
        Self {
            available,
            health: 0,
            attack: 0,
            defense: 0,
            speed: 0,
            range: 0,
        }
    }

    /// Unspent points.
    pub const fn available(&self) -> u32 {
        self.available
    }

    /// Points allocated to one stat.
    pub const fn allocated(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::Range => self.range,
        }
    }

    /// Total points allocated across all five stats.
    pub const fn total_allocated(&self) -> u32 {
        self.health + self.attack + self.defense + self.speed + self.range
    }

    /// Add points to the pool (level-up grant).
    pub fn grant(&mut self, points: u32) {
        self.available = self.available.saturating_add(points);
    }

    /// Spend points from the pool on one stat.
    ///
    /// Rejects zero-point requests and requests exceeding the pool; on
    /// failure nothing is mutated.
    pub fn spend(&mut self, kind: StatKind, points: u32) -> Result<(), StatsError> {
        if points == 0 {
            return Err(StatsError::ZeroPointRequest);
        }
        if self.available < points {
            return Err(StatsError::InsufficientStatPoints {
                requested: points,
                available: self.available,
            });
        }

        let counter = match kind {
            StatKind::Health => &mut self.health,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Speed => &mut self.speed,
            StatKind::Range => &mut self.range,
        };
        *counter += points;
        self.available -= points;
        Ok(())
    }

    /// Refund every allocated point back into the pool and zero the counters.
    ///
    /// Returns the number of points refunded.
    pub fn reset(&mut self) -> u32 {
        let refunded = self.total_allocated();
        self.available = self.available.saturating_add(refunded);
        self.health = 0;
        self.attack = 0;
        self.defense = 0;
        self.speed = 0;
        self.range = 0;
        refunded
    }
}
