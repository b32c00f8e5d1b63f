//! Configuration for key-player analysis runs.
//!
//! Load an analysis configuration from TOML or YAML files to control the
//! search strategy, metric, and parameters without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use keyplayer_config::{AnalysisConfig, SearchKind};
//!
//! let config = AnalysisConfig::from_toml_str(r#"
//!     search = "brute_force"
//!     metric = "distance_fragmentation"
//!     subset_size = 3
//!     random_seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.search, SearchKind::BruteForce);
//! assert_eq!(config.subset_size, Some(3));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use keyplayer_config::AnalysisConfig;
//!
//! let config = AnalysisConfig::load("keyplayer.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use keyplayer_metrics::KpMetric;
use keyplayer_paths::ShortestPathStrategy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which search drives the optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Randomized-start steepest-ascent local search.
    #[default]
    Greedy,
    /// Exhaustive enumeration of all k-subsets.
    BruteForce,
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchKind::Greedy => write!(f, "greedy"),
            SearchKind::BruteForce => write!(f, "brute_force"),
        }
    }
}

/// Main analysis configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisConfig {
    /// Search strategy.
    #[serde(default)]
    pub search: SearchKind,

    /// Shortest-path backend.
    #[serde(default)]
    pub shortest_path: ShortestPathStrategy,

    /// Metric to optimize.
    #[serde(default)]
    pub metric: KpMetric,

    /// Random seed for reproducible greedy runs.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Target subset size k.
    #[serde(default)]
    pub subset_size: Option<usize>,

    /// Hop limit m for the m-reach metric.
    #[serde(default)]
    pub reach_limit: Option<u32>,

    /// Distances beyond this are treated as disconnected.
    #[serde(default)]
    pub max_distance: Option<u32>,
}

impl AnalysisConfig {
    /// Parses a TOML configuration string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML configuration string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, dispatching on the extension
    /// (`.yaml`/`.yml` as YAML, anything else as TOML).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Self::from_toml_str(&contents),
        }
    }

    /// Checks the graph-independent constraints. Graph-dependent bounds
    /// (k < n, m ≤ n, max_distance ≤ n) are re-checked by the search layer
    /// once the graph is known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subset_size == Some(0) {
            return Err(ConfigError::Invalid(
                "subset_size must be at least 1".to_string(),
            ));
        }
        if self.reach_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "reach_limit must be at least 1".to_string(),
            ));
        }
        if self.max_distance == Some(0) {
            return Err(ConfigError::Invalid(
                "max_distance must be at least 1".to_string(),
            ));
        }
        if self.metric.takes_hop_limit() && self.reach_limit.is_none() {
            return Err(ConfigError::Invalid(
                "the m_reach metric requires reach_limit".to_string(),
            ));
        }
        Ok(())
    }
}
