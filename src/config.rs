// Copyright Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Attribution cannot be removed

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SEED_ENV: &str = "PRUNER_SEED";
pub const PROGRESS_INTERVAL_ENV: &str = "PRUNER_PROGRESS_INTERVAL";

/// Default seed of the Mersenne Twister the graph tooling historically used.
pub const DEFAULT_SEED: u64 = 5489;
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse pruner config: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrunerConfig {
    /// Seed for the random initial center candidate.
    pub seed: u64,
    /// Report progress every this many processed nodes. 0 disables reporting.
    pub progress_interval: usize,
}

impl Default for PrunerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl PrunerConfig {
    /// Parses a RON document such as `(seed: 7, progress_interval: 500)`.
    /// Missing fields keep their defaults.
    pub fn from_ron_str(input: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(input)?)
    }

    /// Reads `PRUNER_SEED` and `PRUNER_PROGRESS_INTERVAL`, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_ENV) {
            config.seed = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    var: SEED_ENV,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(PROGRESS_INTERVAL_ENV) {
            config.progress_interval =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnv {
                        var: PROGRESS_INTERVAL_ENV,
                        value: value.clone(),
                    })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;

    #[test]
    fn test_defaults() {
        let config = PrunerConfig::default();
        assert_eq!(config.seed, 5489);
        assert_eq!(config.progress_interval, 1000);
    }

    #[test]
    fn test_from_ron_partial() {
        let config = PrunerConfig::from_ron_str("(seed: 7)").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);

        let config = PrunerConfig::from_ron_str("(seed: 1, progress_interval: 0)").unwrap();
        assert_eq!(
            config,
            PrunerConfig {
                seed: 1,
                progress_interval: 0
            }
        );
    }

    #[test]
    fn test_from_ron_invalid() {
        assert!(matches!(
            PrunerConfig::from_ron_str("(seed: \"abc\")"),
            Err(ConfigError::Ron(_))
        ));
    }

    #[test]
    fn test_from_lookup() {
        let mut vars = AHashMap::new();
        vars.insert(SEED_ENV, " 12 ".to_string());

        let config = PrunerConfig::from_lookup(|var| vars.get(var).cloned()).unwrap();
        assert_eq!(config.seed, 12);
        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);

        vars.insert(PROGRESS_INTERVAL_ENV, "lots".to_string());
        let err = PrunerConfig::from_lookup(|var| vars.get(var).cloned()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                var: PROGRESS_INTERVAL_ENV,
                ..
            }
        ));
    }
}
