//! Deterministic tower progression and combat stat engine.
//!
//! `tower-core` defines the canonical rules for tower statistics: archetype
//! base stats, experience accumulation and level-up resolution, stat-point
//! allocation, derived-stat recalculation, and damage resolution. All state
//! mutation flows through [`stats::TowerStats`]; external collaborators
//! (spawner, UI/controller layer) drive it through the synchronous API
//! re-exported here.
pub mod combat;
pub mod config;
pub mod error;
pub mod stats;

pub use combat::{DamageOutcome, apply_damage, resolve_damage};
pub use config::TowerConfig;
pub use error::{ErrorSeverity, StatsError};
pub use stats::{
    AllocationPool, Archetype, BaseStats, DerivedStats, Enhancer, Progression, StatKind,
    Stratagem, TowerStats,
};
