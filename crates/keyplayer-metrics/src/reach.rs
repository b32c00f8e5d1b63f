//! Reachability (KP-POS) metrics: m-reach and dR.
//!
//! Both metrics score a node set against the *full* graph, so searches
//! compute one distance matrix up front and call the `_within`/`weighted_`
//! functions per candidate instead of recomputing shortest paths each time.

use keyplayer_core::{Distance, DistanceMatrix, NetworkGraph, NodeSubset, Result};
use keyplayer_paths::{distance_matrix, ShortestPathStrategy};
use tracing::debug;

use crate::validate::{validate_hop_limit, validate_max_distance, validate_subset};
use crate::round5;

/// Count of vertices outside `nodes` whose minimum distance to the set is
/// at most `m`. Assumes parameters were validated up front.
pub fn reach_within(matrix: &DistanceMatrix, nodes: &NodeSubset, m: u32) -> usize {
    (0..matrix.order())
        .filter(|&j| !nodes.contains(j))
        .filter(|&j| {
            nodes
                .iter()
                .any(|i| matrix.distance(i, j).is_within(m))
        })
        .count()
}

/// Distance-weighted reachability of `nodes` over `matrix`.
///
/// Members count as fully reached (weight 1 each); every outside vertex
/// contributes the reciprocal of its minimum distance to the set, 0 when
/// unreachable. Divided by n, so a set that covers the whole graph at
/// distance 1 scores 1.0.
pub fn weighted_reach(matrix: &DistanceMatrix, nodes: &NodeSubset) -> f64 {
    let n = matrix.order();
    if n == 0 {
        return 0.0;
    }
    let outside_sum: f64 = (0..n)
        .filter(|&j| !nodes.contains(j))
        .map(|j| {
            nodes
                .iter()
                .map(|i| matrix.distance(i, j))
                .min()
                .unwrap_or(Distance::Unreachable)
                .reciprocal()
        })
        .sum();
    round5((nodes.len() as f64 + outside_sum) / n as f64)
}

/// m-reach of a node set: validates parameters, computes the distance
/// matrix with the given strategy, applies the `max_distance` promotion,
/// then counts reachable outside vertices.
pub fn m_reach(
    graph: &NetworkGraph,
    nodes: &NodeSubset,
    m: u32,
    strategy: ShortestPathStrategy,
    max_distance: Option<u32>,
) -> Result<usize> {
    let matrix = reach_matrix(graph, nodes, strategy, max_distance, Some(m))?;
    Ok(reach_within(&matrix, nodes, m))
}

/// dR of a node set, computed from scratch.
pub fn distance_reach(
    graph: &NetworkGraph,
    nodes: &NodeSubset,
    strategy: ShortestPathStrategy,
    max_distance: Option<u32>,
) -> Result<f64> {
    let matrix = reach_matrix(graph, nodes, strategy, max_distance, None)?;
    Ok(weighted_reach(&matrix, nodes))
}

/// Shared validation + matrix preparation for the reachability metrics.
pub fn reach_matrix(
    graph: &NetworkGraph,
    nodes: &NodeSubset,
    strategy: ShortestPathStrategy,
    max_distance: Option<u32>,
    hop_limit: Option<u32>,
) -> Result<DistanceMatrix> {
    let n = graph.vertex_count();
    validate_subset(n, nodes)?;
    if let Some(m) = hop_limit {
        validate_hop_limit(n, m)?;
    }
    if let Some(md) = max_distance {
        validate_max_distance(n, md)?;
    }
    debug!(event = "reach_matrix", n, set_size = nodes.len(), strategy = %strategy);
    let mut matrix = distance_matrix(graph, strategy)?;
    if let Some(md) = max_distance {
        matrix.promote_beyond(md);
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyplayer_core::KeyPlayerError;
    use keyplayer_test::{path_graph, star_graph};

    const LIB: ShortestPathStrategy = ShortestPathStrategy::Library;

    #[test]
    fn test_star_center_reaches_all() {
        let g = star_graph(5);
        let center = NodeSubset::canonical([0]);
        assert_eq!(m_reach(&g, &center, 1, LIB, None).unwrap(), 4);
        assert_eq!(distance_reach(&g, &center, LIB, None).unwrap(), 1.0);
    }

    #[test]
    fn test_star_leaf() {
        let g = star_graph(5);
        let leaf = NodeSubset::canonical([1]);
        // One hop reaches only the center; two hops reach everyone.
        assert_eq!(m_reach(&g, &leaf, 1, LIB, None).unwrap(), 1);
        assert_eq!(m_reach(&g, &leaf, 2, LIB, None).unwrap(), 4);
        // dR = (1 + 1 + 3 * 1/2) / 5
        assert_eq!(distance_reach(&g, &leaf, LIB, None).unwrap(), 0.7);
    }

    #[test]
    fn test_m_reach_monotone_and_saturates() {
        let g = path_graph(6);
        let nodes = NodeSubset::canonical([0]);
        let mut previous = 0;
        for m in 1..=5 {
            let reach = m_reach(&g, &nodes, m, LIB, None).unwrap();
            assert!(reach >= previous, "m-reach must be non-decreasing in m");
            previous = reach;
        }
        // At the diameter everything outside the set is reachable.
        assert_eq!(previous, 5);
    }

    #[test]
    fn test_max_distance_promotion_limits_reach() {
        let g = path_graph(5);
        let nodes = NodeSubset::canonical([0]);
        assert_eq!(m_reach(&g, &nodes, 4, LIB, None).unwrap(), 4);
        // Distances beyond 2 are treated as disconnected first.
        assert_eq!(m_reach(&g, &nodes, 4, LIB, Some(2)).unwrap(), 2);
    }

    #[test]
    fn test_weighted_reach_of_pair() {
        // Path 0-1-2-3, nodes {0, 3}: 1 and 2 are both at distance 1.
        let g = path_graph(4);
        let nodes = NodeSubset::canonical([0, 3]);
        assert_eq!(distance_reach(&g, &nodes, LIB, None).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_hop_limit() {
        let g = path_graph(4);
        let nodes = NodeSubset::canonical([0]);
        for bad in [0, 5] {
            let err = m_reach(&g, &nodes, bad, LIB, None).unwrap_err();
            assert!(matches!(err, KeyPlayerError::InvalidParameter(_)));
        }
        // n itself is still valid.
        assert!(m_reach(&g, &nodes, 4, LIB, None).is_ok());
    }

    #[test]
    fn test_invalid_subset() {
        let g = path_graph(4);
        let empty = NodeSubset::canonical([]);
        assert!(matches!(
            m_reach(&g, &empty, 1, LIB, None).unwrap_err(),
            KeyPlayerError::InvalidParameter(_)
        ));
        let out_of_range = NodeSubset::canonical([9]);
        assert!(matches!(
            distance_reach(&g, &out_of_range, LIB, None).unwrap_err(),
            KeyPlayerError::InvalidParameter(_)
        ));
    }
}
