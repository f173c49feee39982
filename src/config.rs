// Defaults for data generation and playback

use crate::errors::{Result, SortError};
use std::time::Duration;

/// Number of elements generated when no values are given
pub const NODE_COUNT: usize = 10;

/// Smallest generated value (inclusive)
pub const MIN_VALUE: i64 = 10;

/// Largest generated value (inclusive)
pub const MAX_VALUE: i64 = 99;

/// Delay between steps while playing
pub const PLAY_INTERVAL_MS: u64 = 300;

/// Upper bound on the element count; bubble sort traces grow quadratically
pub const MAX_NODE_COUNT: usize = 64;

/// Runtime configuration, built from the defaults above and overridden by the
/// command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub node_count: usize,
    pub min_value: i64,
    pub max_value: i64,
    pub play_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_count: NODE_COUNT,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            play_interval: Duration::from_millis(PLAY_INTERVAL_MS),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        check_element_count(self.node_count)?;
        self.check_value_range()?;
        if self.play_interval.is_zero() {
            return Err(SortError::invalid_config("play interval must be positive"));
        }
        Ok(())
    }

    /// `min_value..=max_value` must not be empty
    pub fn check_value_range(&self) -> Result<()> {
        if self.min_value > self.max_value {
            return Err(SortError::invalid_config(format!(
                "minimum value {} is greater than maximum value {}",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

/// Reject inputs longer than [`MAX_NODE_COUNT`], however they were supplied
pub fn check_element_count(count: usize) -> Result<()> {
    if count > MAX_NODE_COUNT {
        return Err(SortError::invalid_config(format!(
            "element count {} exceeds the maximum of {}",
            count, MAX_NODE_COUNT
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.node_count, 10);
        assert_eq!(config.play_interval, Duration::from_millis(300));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = Config {
            min_value: 50,
            max_value: 10,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(SortError::InvalidConfig { .. })));
    }

    #[test]
    fn test_too_many_nodes_rejected() {
        let config = Config {
            node_count: MAX_NODE_COUNT + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_element_count_cap() {
        assert!(check_element_count(MAX_NODE_COUNT).is_ok());
        assert!(matches!(
            check_element_count(MAX_NODE_COUNT + 1),
            Err(SortError::InvalidConfig { .. })
        ));
    }
}
