/// Configuration for the history system.
use anyhow::{ensure, Result};

/// Number of snapshots kept per stack when nothing else is configured.
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 5;

/// Smallest undo depth a user setting may request.
pub const MIN_HISTORY_DEPTH: usize = 5;

/// Largest undo depth a user setting may request.
pub const MAX_HISTORY_DEPTH: usize = 50;

/// Configuration for a `HistoryManager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max snapshots retained on each of the undo and redo stacks.
    pub max_history_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
        }
    }
}

impl HistoryConfig {
    /// Builds a config from a user-facing undo depth.
    ///
    /// The depth is clamped into `MIN_HISTORY_DEPTH..=MAX_HISTORY_DEPTH`.
    pub fn from_depth(depth: usize) -> Self {
        Self {
            max_history_size: depth.clamp(MIN_HISTORY_DEPTH, MAX_HISTORY_DEPTH),
        }
    }

    /// Checks that the config can back a history manager.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_history_size` is zero.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_history_size >= 1,
            "invalid argument: max_history_size must be at least 1, got {}",
            self.max_history_size
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_history_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_depth_clamps_low() {
        assert_eq!(HistoryConfig::from_depth(0).max_history_size, 5);
        assert_eq!(HistoryConfig::from_depth(2).max_history_size, 5);
    }

    #[test]
    fn test_from_depth_clamps_high() {
        assert_eq!(HistoryConfig::from_depth(51).max_history_size, 50);
        assert_eq!(HistoryConfig::from_depth(10_000).max_history_size, 50);
    }

    #[test]
    fn test_from_depth_keeps_valid_values() {
        assert_eq!(HistoryConfig::from_depth(5).max_history_size, 5);
        assert_eq!(HistoryConfig::from_depth(20).max_history_size, 20);
        assert_eq!(HistoryConfig::from_depth(50).max_history_size, 50);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = HistoryConfig {
            max_history_size: 0,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_history_size"));
    }

    #[test]
    fn test_validate_accepts_one() {
        let config = HistoryConfig {
            max_history_size: 1,
        };
        assert!(config.validate().is_ok());
    }
}
