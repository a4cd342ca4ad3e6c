//! Runtime configuration read from the environment.

use shapeswifter_core::SessionRules;
use shapeswifter_types::{MAX_MOVES, TIME_LIMIT_SECS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Hard move cap per attempt.
    pub max_moves: u32,
    /// Countdown length in seconds.
    pub time_limit_secs: u32,
    /// Testing mode: extra output for puzzle authors.
    pub testing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_moves: MAX_MOVES,
            time_limit_secs: TIME_LIMIT_SECS,
            testing: false,
        }
    }
}

impl AppConfig {
    /// Create from `SHAPESWIFTER_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_moves = lookup("SHAPESWIFTER_MAX_MOVES")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &u32| n > 0)
            .unwrap_or(defaults.max_moves);

        let time_limit_secs = lookup("SHAPESWIFTER_TIME_LIMIT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &u32| n > 0)
            .unwrap_or(defaults.time_limit_secs);

        let testing = lookup("SHAPESWIFTER_TESTING")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.testing);

        Self {
            max_moves,
            time_limit_secs,
            testing,
        }
    }

    pub fn rules(&self) -> SessionRules {
        SessionRules {
            max_moves: self.max_moves,
            time_limit_secs: self.time_limit_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.rules(), SessionRules::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SHAPESWIFTER_MAX_MOVES", "8"),
            ("SHAPESWIFTER_TIME_LIMIT", " 45 "),
            ("SHAPESWIFTER_TESTING", "TRUE"),
        ]));
        assert_eq!(config.max_moves, 8);
        assert_eq!(config.time_limit_secs, 45);
        assert!(config.testing);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SHAPESWIFTER_MAX_MOVES", "lots"),
            ("SHAPESWIFTER_TIME_LIMIT", "0"),
            ("SHAPESWIFTER_TESTING", "yes"),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
