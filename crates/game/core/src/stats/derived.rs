//! Derived stats - recomputed after every mutation.
//!
//! Pure function of (base stats, allocation, level):
//!
//! ```text
//! max_health   = base_max_health   + allocated_health  × 5 + level × 3
//! attack       = base_attack       + allocated_attack  × 2 + level × 1
//! defense      = base_defense      + allocated_defense × 2 + level × 1
//! attack_speed = base_attack_speed + allocated_speed × 0.05
//! range        = base_range        + allocated_range × 0.2
//! ```
//!
//! Recomputation is idempotent and never touches current health; the owning
//! tower clamps current health down when the maximum drops below it.

use super::allocation::{AllocationPool, StatKind};
use super::archetype::BaseStats;
use crate::config::TowerConfig;

/// Current combat statistics derived from base stats, allocation, and level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Maximum health; current health is clamped to this.
    pub max_health: u32,
    /// Attack power.
    pub attack: u32,
    /// Flat damage reduction applied to incoming hits.
    pub defense: u32,
    /// Attacks per second.
    pub attack_speed: f32,
    /// Targeting range in world units.
    pub range: f32,
}

impl DerivedStats {
    /// Compute derived stats from base stats, allocation, and level.
    pub fn compute(base: &BaseStats, allocation: &AllocationPool, level: u32) -> Self {
        Self {
            max_health: base.max_health
                + allocation.allocated(StatKind::Health) * TowerConfig::HEALTH_PER_POINT
                + level * TowerConfig::HEALTH_PER_LEVEL,
            attack: base.attack
                + allocation.allocated(StatKind::Attack) * TowerConfig::ATTACK_PER_POINT
                + level * TowerConfig::ATTACK_PER_LEVEL,
            defense: base.defense
                + allocation.allocated(StatKind::Defense) * TowerConfig::DEFENSE_PER_POINT
                + level * TowerConfig::DEFENSE_PER_LEVEL,
            attack_speed: base.attack_speed
                + allocation.allocated(StatKind::Speed) as f32 * TowerConfig::SPEED_PER_POINT,
            range: base.range
                + allocation.allocated(StatKind::Range) as f32 * TowerConfig::RANGE_PER_POINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Archetype;

    #[test]
    fn firewall_level_one_row() {
        let base = Archetype::Firewall.base_stats();
        let derived = DerivedStats::compute(&base, &AllocationPool::new(0), 1);

        // max_health: 60 + 0 + 1 × 3 = 63
        assert_eq!(derived.max_health, 63);
        // attack: 20 + 0 + 1 = 21
        assert_eq!(derived.attack, 21);
        // defense: 30 + 0 + 1 = 31
        assert_eq!(derived.defense, 31);
        assert_eq!(derived.attack_speed, 3.0);
        assert_eq!(derived.range, 12.0);
    }

    #[test]
    fn allocation_scales_each_stat() {
        let base = Archetype::AntiVirus.base_stats();
        let mut allocation = AllocationPool::new(15);
        for kind in StatKind::ALL {
            allocation.spend(kind, 2).unwrap();
        }
        let derived = DerivedStats::compute(&base, &allocation, 4);

        // max_health: 50 + 2 × 5 + 4 × 3 = 72
        assert_eq!(derived.max_health, 72);
        // attack: 25 + 2 × 2 + 4 = 33
        assert_eq!(derived.attack, 33);
        // defense: 5 + 2 × 2 + 4 = 13
        assert_eq!(derived.defense, 13);
        // attack_speed: 1.0 + 2 × 0.05 = 1.1
        assert_eq!(derived.attack_speed, 1.0 + 2.0 * 0.05);
        // range: 10.0 + 2 × 0.2 = 10.4
        assert_eq!(derived.range, 10.0 + 2.0 * 0.2);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let base = Archetype::AntiSpyware.base_stats();
        let mut allocation = AllocationPool::new(6);
        allocation.spend(StatKind::Range, 3).unwrap();

        let first = DerivedStats::compute(&base, &allocation, 7);
        let second = DerivedStats::compute(&base, &allocation, 7);
        assert_eq!(first, second);
    }
}
