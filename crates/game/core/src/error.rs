//! Error infrastructure for tower-core.
//!
//! All expected failures are represented as return-value outcomes; the engine
//! never panics for ordinary control flow. Severity classifies how a caller
//! should react: retry with a smaller request, or fix the input.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or a smaller request.
    ///
    /// Example: not enough stat points for the requested allocation.
    Recoverable,

    /// Validation error - invalid input or state, should not retry without changes.
    ///
    /// Examples: zero-point allocation request, mutation of a destroyed tower.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors produced by the tower stat engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsError {
    /// Not enough available stat points for the requested allocation.
    #[error("Not enough stat points (requested: {requested}, available: {available})")]
    InsufficientStatPoints {
        /// Points the caller asked for.
        requested: u32,
        /// Points currently in the pool.
        available: u32,
    },

    /// Allocation requests must spend at least one point.
    #[error("Stat point allocation must request at least one point")]
    ZeroPointRequest,

    /// Enhancement list is full (max capacity reached).
    #[error("Enhancement list is full (max: {max})")]
    EnhancementListFull {
        /// Maximum capacity.
        max: usize,
    },

    /// The tower has been destroyed; its last recorded stats remain readable
    /// but no further mutation is accepted.
    #[error("Tower is destroyed")]
    TowerDestroyed,
}

impl StatsError {
    /// Severity classification for recovery strategies.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            // Retrying with a smaller request may succeed
            Self::InsufficientStatPoints { .. } => ErrorSeverity::Recoverable,

            Self::ZeroPointRequest | Self::EnhancementListFull { .. } | Self::TowerDestroyed => {
                ErrorSeverity::Validation
            }
        }
    }

    /// Stable machine-readable error code.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientStatPoints { .. } => "STATS_INSUFFICIENT_POINTS",
            Self::ZeroPointRequest => "STATS_ZERO_POINT_REQUEST",
            Self::EnhancementListFull { .. } => "STATS_ENHANCEMENT_LIST_FULL",
            Self::TowerDestroyed => "STATS_TOWER_DESTROYED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_points_is_recoverable() {
        let err = StatsError::InsufficientStatPoints {
            requested: 5,
            available: 2,
        };
        assert!(err.severity().is_recoverable());
        assert_eq!(err.error_code(), "STATS_INSUFFICIENT_POINTS");
    }

    #[test]
    fn destroyed_is_validation() {
        assert_eq!(StatsError::TowerDestroyed.severity(), ErrorSeverity::Validation);
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
