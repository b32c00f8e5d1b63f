//! Candidate scoring.
//!
//! One `Scorer` is built per search invocation: parameters are validated
//! up front (fail-fast, before any enumeration starts) and, for the
//! reachability metrics, the full-graph distance matrix is computed once
//! here and reused for every candidate. Disruption metrics cannot share a
//! matrix - every candidate changes the graph - so they score a fresh
//! residual copy per call.

use keyplayer_core::{DistanceMatrix, KeyPlayerError, NetworkGraph, NodeSubset, Result};
use keyplayer_metrics::{
    distance_fragmentation, distance_fragmentation_of, fragmentation, reach_within,
    validate_hop_limit, validate_max_distance, weighted_reach, KpMetric,
};
use keyplayer_paths::{distance_matrix, ShortestPathStrategy};

/// Scores candidate subsets for one fixed (graph, metric, parameters).
///
/// Shared immutably across rayon workers during brute-force enumeration;
/// scoring takes `&self` and touches no shared mutable state.
#[derive(Debug)]
pub(crate) enum Scorer<'g> {
    /// F on the residual graph after removal.
    Fragmentation { graph: &'g NetworkGraph },
    /// dF on the residual graph after removal.
    DistanceFragmentation {
        graph: &'g NetworkGraph,
        strategy: ShortestPathStrategy,
        max_distance: Option<u32>,
    },
    /// m-reach or dR against the precomputed full-graph matrix.
    Reach {
        matrix: DistanceMatrix,
        /// `Some(m)` for m-reach, `None` for dR.
        hop_limit: Option<u32>,
    },
}

impl<'g> Scorer<'g> {
    /// Validates all parameters and prepares shared state.
    pub fn new(
        graph: &'g NetworkGraph,
        metric: KpMetric,
        hop_limit: Option<u32>,
        strategy: ShortestPathStrategy,
        max_distance: Option<u32>,
    ) -> Result<Self> {
        let n = graph.vertex_count();

        if metric.takes_hop_limit() {
            let m = hop_limit.ok_or_else(|| {
                KeyPlayerError::InvalidParameter(
                    "the m_reach metric requires the hop limit m".to_string(),
                )
            })?;
            validate_hop_limit(n, m)?;
        } else if hop_limit.is_some() {
            return Err(KeyPlayerError::InvalidParameter(format!(
                "the hop limit m does not apply to the {metric} metric"
            )));
        }

        if let Some(md) = max_distance {
            if !metric.needs_distances() {
                return Err(KeyPlayerError::InvalidParameter(
                    "max_distance does not apply to the fragmentation metric".to_string(),
                ));
            }
            validate_max_distance(n, md)?;
        }

        match metric {
            KpMetric::Fragmentation => Ok(Scorer::Fragmentation { graph }),
            KpMetric::DistanceFragmentation => Ok(Scorer::DistanceFragmentation {
                graph,
                strategy,
                max_distance,
            }),
            KpMetric::MReach | KpMetric::DistanceReach => {
                let mut matrix = distance_matrix(graph, strategy)?;
                if let Some(md) = max_distance {
                    matrix.promote_beyond(md);
                }
                Ok(Scorer::Reach { matrix, hop_limit })
            }
        }
    }

    /// Scores one candidate subset. Rounded to 5 decimals at the source so
    /// tie detection and strict-improvement tests compare reproducibly.
    pub fn score(&self, subset: &NodeSubset) -> Result<f64> {
        match self {
            Scorer::Fragmentation { graph } => {
                Ok(fragmentation(&graph.remove(subset.as_slice())))
            }
            Scorer::DistanceFragmentation {
                graph,
                strategy,
                max_distance,
            } => {
                let residual = graph.remove(subset.as_slice());
                if residual.edge_count() == 0 {
                    return Ok(1.0);
                }
                let mut matrix = distance_matrix(&residual, *strategy)?;
                if let Some(md) = max_distance {
                    matrix.promote_beyond(*md);
                }
                Ok(distance_fragmentation_of(&matrix))
            }
            Scorer::Reach { matrix, hop_limit } => match hop_limit {
                Some(m) => Ok(reach_within(matrix, subset, *m) as f64),
                None => Ok(weighted_reach(matrix, subset)),
            },
        }
    }

    /// The pre-search score, where one exists: the disruption metric of
    /// the untouched graph. Reachability metrics have no set-independent
    /// baseline.
    pub fn baseline(&self) -> Result<Option<f64>> {
        match self {
            Scorer::Fragmentation { graph } => Ok(Some(fragmentation(graph))),
            Scorer::DistanceFragmentation {
                graph,
                strategy,
                max_distance,
            } => Ok(Some(distance_fragmentation(graph, *strategy, *max_distance)?)),
            Scorer::Reach { .. } => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyplayer_test::{path_graph, star_graph};

    const LIB: ShortestPathStrategy = ShortestPathStrategy::Library;

    #[test]
    fn test_fragmentation_scorer() {
        let g = path_graph(4);
        let scorer = Scorer::new(&g, KpMetric::Fragmentation, None, LIB, None).unwrap();
        assert_eq!(scorer.baseline().unwrap(), Some(0.0));
        assert_eq!(scorer.score(&NodeSubset::canonical([1, 2])).unwrap(), 1.0);
        assert_eq!(scorer.score(&NodeSubset::canonical([0, 3])).unwrap(), 0.0);
    }

    #[test]
    fn test_reach_scorer_scores_without_removal() {
        let g = star_graph(5);
        let scorer = Scorer::new(&g, KpMetric::MReach, Some(1), LIB, None).unwrap();
        assert_eq!(scorer.baseline().unwrap(), None);
        assert_eq!(scorer.score(&NodeSubset::canonical([0])).unwrap(), 4.0);
        assert_eq!(scorer.score(&NodeSubset::canonical([1])).unwrap(), 1.0);
    }

    #[test]
    fn test_hop_limit_compatibility() {
        let g = path_graph(4);
        assert!(matches!(
            Scorer::new(&g, KpMetric::MReach, None, LIB, None).unwrap_err(),
            KeyPlayerError::InvalidParameter(_)
        ));
        assert!(matches!(
            Scorer::new(&g, KpMetric::DistanceReach, Some(2), LIB, None).unwrap_err(),
            KeyPlayerError::InvalidParameter(_)
        ));
    }

    #[test]
    fn test_max_distance_rejected_for_component_fragmentation() {
        let g = path_graph(4);
        assert!(matches!(
            Scorer::new(&g, KpMetric::Fragmentation, None, LIB, Some(2)).unwrap_err(),
            KeyPlayerError::InvalidParameter(_)
        ));
    }

    #[test]
    fn test_distance_fragmentation_residual_larger_than_max_distance() {
        // max_distance = n is valid against the original graph and must
        // keep working even when residual graphs are smaller.
        let g = path_graph(5);
        let scorer =
            Scorer::new(&g, KpMetric::DistanceFragmentation, None, LIB, Some(5)).unwrap();
        assert!(scorer.score(&NodeSubset::canonical([2])).unwrap() > 0.0);
    }
}
