/// Tower tuning constants and growth parameters.
///
/// All numeric tuning for the stat engine lives here; the stats and combat
/// modules reference these by name instead of embedding magic numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TowerConfig;

impl TowerConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of enhancement tags a tower can carry.
    pub const MAX_ENHANCEMENTS: usize = 8;

    // ===== progression =====
    /// Level is kept in `[1, LEVEL_CAP]`; at the cap XP keeps accumulating
    /// but no longer triggers level-ups.
    pub const LEVEL_CAP: u32 = 100;
    /// Stat points granted per level gained (and per starting level above 1).
    pub const POINTS_PER_LEVEL: u32 = 3;
    /// XP threshold for the next level: `XP_BASE + level * XP_PER_LEVEL`.
    pub const XP_BASE: u32 = 100;
    pub const XP_PER_LEVEL: u32 = 50;

    // ===== derived-stat growth =====
    /// Max health per allocated health point.
    pub const HEALTH_PER_POINT: u32 = 5;
    /// Max health per level.
    pub const HEALTH_PER_LEVEL: u32 = 3;
    /// Attack per allocated attack point.
    pub const ATTACK_PER_POINT: u32 = 2;
    /// Attack per level.
    pub const ATTACK_PER_LEVEL: u32 = 1;
    /// Defense per allocated defense point.
    pub const DEFENSE_PER_POINT: u32 = 2;
    /// Defense per level.
    pub const DEFENSE_PER_LEVEL: u32 = 1;
    /// Attack speed per allocated speed point.
    pub const SPEED_PER_POINT: f32 = 0.05;
    /// Range per allocated range point.
    pub const RANGE_PER_POINT: f32 = 0.2;

    // ===== combat =====
    /// A hit always deals at least this much damage, regardless of defense.
    pub const MIN_DAMAGE: u32 = 1;
}
