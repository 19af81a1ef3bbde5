//! Combat resolution.
//!
//! Pure functions for resolving incoming hits. All combat logic is
//! deterministic and side-effect free; [`crate::stats::TowerStats`] drives
//! these functions and owns the resulting state transition.

pub mod damage;

pub use damage::{DamageOutcome, apply_damage, resolve_damage};
