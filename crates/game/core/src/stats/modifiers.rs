//! Modifier tags and targeting preferences.
//!
//! Enhancers are collected per tower as an ordered, append-only list. The
//! current rules track and report them only; none of them feeds the stat
//! computation. Stratagems are declared for external targeting systems and
//! are not consumed by the core either.

/// Enhancement tag attached to a tower.
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
pub enum Enhancer {
    /// Faster firing at reduced damage.
    Swift,
    /// Heavier plating at reduced speed.
    Hardened,
    /// Longer reach at reduced rate of fire.
    Extended,
}

/// Target selection preference for external targeting systems.
///
/// Declared data only: no operation in this crate reads it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Stratagem {
    /// First enemy along the path.
    #[default]
    First,
    /// Last enemy along the path.
    Last,
    /// Nearest enemy.
    Closest,
    /// Furthest enemy in range.
    Farthest,
    /// Enemy with the lowest health.
    Lowest,
    /// Enemy with the highest health.
    Highest,
    /// Uniformly random target.
    Random,
}
