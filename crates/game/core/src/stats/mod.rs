//! Tower stat system.
//!
//! The stat pipeline is layered the same way the values are owned:
//!
//! ```text
//! [ Archetype base stats ]   fixed at initialization
//!      ↓
//! [ Allocation + Level ]     stored progression state
//!      ↓
//! [ Derived stats ]          recomputed after every mutation
//!      ↓
//! [ Current health ]         the only stat with its own lifecycle
//! ```
//!
//! Derived stats are a deterministic function of (base stats, allocation,
//! level); recomputation is idempotent and never heals on its own. Only
//! initialization and level-up perform explicit full heals.

pub mod allocation;
pub mod archetype;
pub mod derived;
pub mod modifiers;
pub mod progression;
pub mod tower;

// Re-export primary types
pub use allocation::{AllocationPool, StatKind};
pub use archetype::{Archetype, BaseStats};
pub use derived::DerivedStats;
pub use modifiers::{Enhancer, Stratagem};
pub use progression::Progression;
pub use tower::TowerStats;
