//! Metric selector.

use std::fmt;
use std::str::FromStr;

use keyplayer_core::{KeyPlayerError, Result};
use serde::{Deserialize, Serialize};

/// Which key-player metric a search optimizes.
///
/// Disruption (KP-NEG) metrics score a candidate by how much *removing* it
/// fragments the graph; reachability (KP-POS) metrics score how well the
/// candidate reaches the rest of the graph directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpMetric {
    /// F: component-based fragmentation of the residual graph.
    #[default]
    Fragmentation,
    /// dF: distance-weighted fragmentation of the residual graph.
    DistanceFragmentation,
    /// m-reach: count of outside vertices within m hops of the set.
    MReach,
    /// dR: distance-weighted reachability of the set.
    DistanceReach,
}

impl KpMetric {
    /// Whether this metric scores the residual graph after removal.
    pub fn is_disruption(self) -> bool {
        matches!(self, KpMetric::Fragmentation | KpMetric::DistanceFragmentation)
    }

    /// Whether this metric needs a shortest-path matrix at all.
    pub fn needs_distances(self) -> bool {
        !matches!(self, KpMetric::Fragmentation)
    }

    /// Whether the hop parameter `m` applies to this metric.
    pub fn takes_hop_limit(self) -> bool {
        matches!(self, KpMetric::MReach)
    }
}

impl fmt::Display for KpMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpMetric::Fragmentation => write!(f, "fragmentation"),
            KpMetric::DistanceFragmentation => write!(f, "distance_fragmentation"),
            KpMetric::MReach => write!(f, "m_reach"),
            KpMetric::DistanceReach => write!(f, "distance_reach"),
        }
    }
}

impl FromStr for KpMetric {
    type Err = KeyPlayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fragmentation" => Ok(KpMetric::Fragmentation),
            "distance_fragmentation" => Ok(KpMetric::DistanceFragmentation),
            "m_reach" => Ok(KpMetric::MReach),
            "distance_reach" => Ok(KpMetric::DistanceReach),
            other => Err(KeyPlayerError::InvalidParameter(format!(
                "unknown metric '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert!(KpMetric::Fragmentation.is_disruption());
        assert!(KpMetric::DistanceFragmentation.is_disruption());
        assert!(!KpMetric::MReach.is_disruption());
        assert!(!KpMetric::DistanceReach.is_disruption());
        assert!(!KpMetric::Fragmentation.needs_distances());
        assert!(KpMetric::MReach.takes_hop_limit());
        assert!(!KpMetric::DistanceReach.takes_hop_limit());
    }

    #[test]
    fn test_round_trip() {
        for m in [
            KpMetric::Fragmentation,
            KpMetric::DistanceFragmentation,
            KpMetric::MReach,
            KpMetric::DistanceReach,
        ] {
            assert_eq!(m.to_string().parse::<KpMetric>().unwrap(), m);
        }
        assert!("betweenness".parse::<KpMetric>().is_err());
    }
}
