//! The tower entity: identity, progression, allocation, derived stats, and
//! combat health.

use std::fmt;

use arrayvec::ArrayVec;

use super::allocation::{AllocationPool, StatKind};
use super::archetype::{Archetype, BaseStats};
use super::derived::DerivedStats;
use super::modifiers::Enhancer;
use super::progression::Progression;
use crate::combat::{self, DamageOutcome};
use crate::config::TowerConfig;
use crate::error::StatsError;

/// A tower's complete stat state.
///
/// Construction (or [`TowerStats::initialize`]) is the entity's true starting
/// point: base stats are looked up from the archetype, starting points are
/// granted, derived stats computed, and health set to maximum. Thereafter
/// every mutating operation recalculates derived stats before returning, so
/// reads always observe a consistent view.
///
/// The engine is synchronous and single-owner: `&mut self` on the mutating
/// operations serializes access, and each call runs to completion with the
/// recalculation visible to the very next read.
///
/// A tower whose health reaches 0 is destroyed: the last recorded stats stay
/// readable, but every further mutation is rejected with
/// [`StatsError::TowerDestroyed`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TowerStats {
    name: String,
    archetype: Archetype,
    base: BaseStats,
    progression: Progression,
    allocation: AllocationPool,
    derived: DerivedStats,
    current_health: u32,
    enhancements: ArrayVec<Enhancer, { TowerConfig::MAX_ENHANCEMENTS }>,
}

impl TowerStats {
    /// Create a tower of the given archetype at `start_level`.
    ///
    /// `start_level` is clamped into `[1, LEVEL_CAP]`; the clamped level
    /// also determines the retroactive stat-point grant.
    pub fn new(archetype: Archetype, start_level: u32) -> Self {
        let mut tower = Self {
            name: String::new(),
            archetype,
            base: archetype.base_stats(),
            progression: Progression::new(1),
            allocation: AllocationPool::new(0),
            derived: DerivedStats::compute(&archetype.base_stats(), &AllocationPool::new(0), 1),
            current_health: 0,
            enhancements: ArrayVec::new(),
        };
        tower.initialize(archetype, start_level);
        tower
    }

    /// Reset this instance to a freshly created tower.
    ///
    /// Spawners re-use tower entities, so re-initialization is a supported
    /// operation, not an error. All previous progression, allocation, and
    /// enhancement state is discarded, including the destroyed flag.
    pub fn initialize(&mut self, archetype: Archetype, start_level: u32) {
        self.archetype = archetype;
        self.base = archetype.base_stats();
        self.progression = Progression::new(start_level);
        self.allocation = AllocationPool::new(
            (self.progression.level() - 1) * TowerConfig::POINTS_PER_LEVEL,
        );
        self.enhancements.clear();

        self.recalculate();
        // Full health on creation
        self.current_health = self.derived.max_health;
        self.name = format!("Tower: {}", self.archetype);

        tracing::info!(
            "Tower created: {} | Lvl {} | {} points available",
            self.name,
            self.progression.level(),
            self.allocation.available()
        );
    }

    // ===== mutating operations =====

    /// Add experience and resolve any level-ups it funds.
    ///
    /// A single large grant can cross several thresholds; each level gained
    /// grants [`TowerConfig::POINTS_PER_LEVEL`] stat points and the tower is
    /// fully healed to its new maximum. XP beyond the level cap is retained.
    /// Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: u32) -> Result<u32, StatsError> {
        self.ensure_active()?;

        let levels_gained = self.progression.gain_xp(amount);
        if levels_gained > 0 {
            self.allocation
                .grant(levels_gained * TowerConfig::POINTS_PER_LEVEL);
            self.recalculate();
            // Full heal on level up
            self.current_health = self.derived.max_health;

            tracing::info!(
                "{} leveled up to {}! +{} stat points",
                self.name,
                self.progression.level(),
                levels_gained * TowerConfig::POINTS_PER_LEVEL
            );
        }
        Ok(levels_gained)
    }

    /// Spend stat points from the pool on one stat.
    ///
    /// On failure nothing is mutated; on success the matching counter grows
    /// by `points`, the pool shrinks by `points`, and derived stats are
    /// recalculated before returning.
    pub fn allocate_stat_points(&mut self, kind: StatKind, points: u32) -> Result<(), StatsError> {
        self.ensure_active()?;
        self.allocation.spend(kind, points)?;
        self.recalculate();
        Ok(())
    }

    /// Refund every allocated point back into the pool and zero the five
    /// counters atomically. No cost is charged.
    ///
    /// Returns the number of points refunded. Recalculation can lower
    /// `max_health` below `current_health`, in which case current health is
    /// clamped down.
    pub fn reset_stat_points(&mut self) -> Result<u32, StatsError> {
        self.ensure_active()?;
        let refunded = self.allocation.reset();
        self.recalculate();
        Ok(refunded)
    }

    /// Apply incoming damage.
    ///
    /// Defense reduces the hit but never below [`TowerConfig::MIN_DAMAGE`].
    /// Health clamps at 0; reaching 0 destroys the tower.
    pub fn take_damage(&mut self, damage: u32) -> Result<DamageOutcome, StatsError> {
        self.ensure_active()?;

        let dealt = combat::resolve_damage(damage, self.derived.defense);
        self.current_health = combat::apply_damage(self.current_health, dealt);

        let destroyed = self.current_health == 0;
        if destroyed {
            tracing::info!("{} has been destroyed!", self.name);
        }

        Ok(DamageOutcome {
            dealt,
            remaining_health: self.current_health,
            destroyed,
        })
    }

    /// Append an enhancement tag to the modifier list.
    ///
    /// Enhancements are tracked in acquisition order and reported in the
    /// summary; the current rules attach no stat effect to them.
    pub fn add_enhancement(&mut self, enhancer: Enhancer) -> Result<(), StatsError> {
        self.ensure_active()?;
        self.enhancements
            .try_push(enhancer)
            .map_err(|_| StatsError::EnhancementListFull {
                max: TowerConfig::MAX_ENHANCEMENTS,
            })
    }

    // ===== accessors =====

    /// Generated display name (`"Tower: {archetype}"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub const fn level(&self) -> u32 {
        self.progression.level()
    }

    pub const fn current_xp(&self) -> u32 {
        self.progression.current_xp()
    }

    pub const fn xp_to_next_level(&self) -> u32 {
        self.progression.xp_to_next_level()
    }

    pub const fn available_stat_points(&self) -> u32 {
        self.allocation.available()
    }

    /// Points allocated to one stat.
    pub const fn allocated(&self, kind: StatKind) -> u32 {
        self.allocation.allocated(kind)
    }

    pub const fn max_health(&self) -> u32 {
        self.derived.max_health
    }

    pub const fn current_health(&self) -> u32 {
        self.current_health
    }

    pub const fn attack(&self) -> u32 {
        self.derived.attack
    }

    pub const fn defense(&self) -> u32 {
        self.derived.defense
    }

    pub const fn attack_speed(&self) -> f32 {
        self.derived.attack_speed
    }

    pub const fn range(&self) -> f32 {
        self.derived.range
    }

    /// Enhancement tags in acquisition order.
    pub fn enhancements(&self) -> &[Enhancer] {
        &self.enhancements
    }

    /// Whether health has reached 0 (terminal state).
    pub const fn is_destroyed(&self) -> bool {
        self.current_health == 0
    }

    /// Human-readable diagnostic block reflecting current field values.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    // ===== internals =====

    fn ensure_active(&self) -> Result<(), StatsError> {
        if self.is_destroyed() {
            tracing::debug!("{}: operation rejected, tower is destroyed", self.name);
            return Err(StatsError::TowerDestroyed);
        }
        Ok(())
    }

    /// Recompute derived stats from (base, allocation, level).
    ///
    /// Clamps current health down when the maximum drops below it; never
    /// heals on its own.
    fn recalculate(&mut self) {
        self.derived =
            DerivedStats::compute(&self.base, &self.allocation, self.progression.level());
        if self.current_health > self.derived.max_health {
            self.current_health = self.derived.max_health;
        }
    }
}

impl fmt::Display for TowerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(
            f,
            "Level: {} | XP: {}/{}",
            self.progression.level(),
            self.progression.current_xp(),
            self.progression.xp_to_next_level()
        )?;
        writeln!(f, "Archetype: {}", self.archetype)?;
        writeln!(f, "Available Points: {}", self.allocation.available())?;
        writeln!(
            f,
            "HP: {}/{} (+{})",
            self.current_health,
            self.derived.max_health,
            self.allocation.allocated(StatKind::Health)
        )?;
        writeln!(
            f,
            "ATK: {} (+{}) | DEF: {} (+{})",
            self.derived.attack,
            self.allocation.allocated(StatKind::Attack),
            self.derived.defense,
            self.allocation.allocated(StatKind::Defense)
        )?;
        writeln!(
            f,
            "Speed: {:.2} (+{}) | Range: {:.1} (+{})",
            self.derived.attack_speed,
            self.allocation.allocated(StatKind::Speed),
            self.derived.range,
            self.allocation.allocated(StatKind::Range)
        )?;
        write!(f, "Modifiers: {}", self.enhancements.len())
    }
}
