//! Tower archetypes and their base statistics.
//!
//! Each archetype maps to a fixed base-stat row. The mapping is total over
//! the closed enum, has no side effects and no failure modes; base stats are
//! fixed at initialization and never mutated afterwards.

/// Tower archetype (combat role identity).
///
/// Immutable once a tower is initialized; selects the base-stat row.
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
pub enum Archetype {
    /// Gunner: rapid fire, standard DPS.
    #[default]
    AntiVirus,
    /// Sniper: long range, high single-target damage.
    AntiSpyware,
    /// Tank: high health, absorbs damage.
    Firewall,
}

impl Archetype {
    /// All archetypes, for table-totality iteration.
    pub const ALL: [Self; 3] = [Self::AntiVirus, Self::AntiSpyware, Self::Firewall];

    /// Base statistics for this archetype.
    pub const fn base_stats(self) -> BaseStats {
        match self {
            Self::AntiVirus => BaseStats {
                max_health: 50,
                attack: 25,
                defense: 5,
                attack_speed: 1.0,
                range: 10.0,
            },
            Self::AntiSpyware => BaseStats {
                max_health: 40,
                attack: 10,
                defense: 8,
                attack_speed: 0.5,
                range: 6.0,
            },
            Self::Firewall => BaseStats {
                max_health: 60,
                attack: 20,
                defense: 30,
                attack_speed: 3.0,
                range: 12.0,
            },
        }
    }
}

/// Base statistics fixed by archetype at initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub attack_speed: f32,
    pub range: f32,
}
