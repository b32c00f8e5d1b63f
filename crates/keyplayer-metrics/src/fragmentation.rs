//! Disruption (KP-NEG) metrics: F and dF.

use keyplayer_core::{DistanceMatrix, NetworkGraph, Result};
use keyplayer_paths::{distance_matrix, ShortestPathStrategy};

use crate::validate::validate_max_distance;
use crate::round5;

/// Component-based fragmentation F, in [0, 1].
///
/// `1 − Σ s_k(s_k − 1) / (n(n − 1))` over connected component sizes `s_k`.
/// Zero-edge graphs are maximally fragmented (1.0); any connected graph
/// scores 0.0. Components suffice, no distances are computed.
pub fn fragmentation(graph: &NetworkGraph) -> f64 {
    if graph.edge_count() == 0 {
        return 1.0;
    }
    let n = graph.vertex_count();
    if graph.is_complete() {
        return 0.0;
    }
    let connected_pairs: usize = graph
        .connected_components()
        .iter()
        .map(|c| c.len() * (c.len() - 1))
        .sum();
    round5(1.0 - connected_pairs as f64 / (n * (n - 1)) as f64)
}

/// Distance-weighted fragmentation dF, in [0, 1].
///
/// `1 − 2 · Σ_{i<j} 1/d(i, j) / (n(n − 1))`, with unreachable pairs (and
/// pairs beyond `max_distance`, when given) contributing 0. Both
/// shortest-path strategies yield the same rounded value.
pub fn distance_fragmentation(
    graph: &NetworkGraph,
    strategy: ShortestPathStrategy,
    max_distance: Option<u32>,
) -> Result<f64> {
    if let Some(md) = max_distance {
        validate_max_distance(graph.vertex_count(), md)?;
    }
    if graph.edge_count() == 0 {
        return Ok(1.0);
    }

    let mut matrix = distance_matrix(graph, strategy)?;
    if let Some(md) = max_distance {
        matrix.promote_beyond(md);
    }
    Ok(distance_fragmentation_of(&matrix))
}

/// dF over an already prepared (and, if needed, promoted) matrix.
///
/// Searches scoring many residual graphs use this directly; the
/// `max_distance` bound is validated once against the original graph, not
/// against every residual.
pub fn distance_fragmentation_of(matrix: &DistanceMatrix) -> f64 {
    let n = matrix.order();
    if n < 2 {
        return 1.0;
    }
    let mut reciprocal_sum = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            reciprocal_sum += matrix.distance(i, j).reciprocal();
        }
    }
    round5(1.0 - 2.0 * reciprocal_sum / (n * (n - 1)) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyplayer_core::KeyPlayerError;
    use keyplayer_test::{complete_graph, empty_graph, path_graph, star_graph};

    #[test]
    fn test_fragmentation_bounds() {
        assert_eq!(fragmentation(&empty_graph(5)), 1.0);
        assert_eq!(fragmentation(&complete_graph(5)), 0.0);
        // Any connected graph scores 0.
        assert_eq!(fragmentation(&path_graph(4)), 0.0);
    }

    #[test]
    fn test_fragmentation_two_components() {
        // Components {0,1,2} and {3,4}: 1 - (6 + 2) / 20 = 0.6
        let g = keyplayer_core::NetworkGraph::from_edges(
            vec!["a", "b", "c", "d", "e"],
            &[(0, 1), (1, 2), (3, 4)],
        )
        .unwrap();
        assert_eq!(fragmentation(&g), 0.6);
    }

    #[test]
    fn test_fragmentation_residual_of_path() {
        // Removing {1, 2} from the 4-path leaves two isolates.
        let residual = path_graph(4).remove(&[1, 2]);
        assert_eq!(fragmentation(&residual), 1.0);
    }

    #[test]
    fn test_distance_fragmentation_path() {
        // Reciprocal sum: 1 + 1/2 + 1/3 + 1 + 1/2 + 1 = 13/3
        // dF = 1 - (26/3)/12 = 0.27778 after rounding.
        let df = distance_fragmentation(&path_graph(4), ShortestPathStrategy::Library, None)
            .unwrap();
        assert_eq!(df, 0.27778);
    }

    #[test]
    fn test_distance_fragmentation_star() {
        // 4 pairs at distance 1, 6 leaf pairs at distance 2:
        // dF = 1 - 2*(4 + 3)/20 = 0.3
        let df = distance_fragmentation(&star_graph(5), ShortestPathStrategy::ParallelCpu, None)
            .unwrap();
        assert_eq!(df, 0.3);
    }

    #[test]
    fn test_distance_fragmentation_max_distance_promotes() {
        // With max_distance = 1 the leaf pairs count as disconnected:
        // dF = 1 - 2*4/20 = 0.6
        let df = distance_fragmentation(&star_graph(5), ShortestPathStrategy::Library, Some(1))
            .unwrap();
        assert_eq!(df, 0.6);
    }

    #[test]
    fn test_distance_fragmentation_zero_edges_short_circuits() {
        let df = distance_fragmentation(&empty_graph(6), ShortestPathStrategy::Library, None)
            .unwrap();
        assert_eq!(df, 1.0);
    }

    #[test]
    fn test_distance_fragmentation_strategy_agreement() {
        let g = keyplayer_test::kite_graph();
        let lib = distance_fragmentation(&g, ShortestPathStrategy::Library, None).unwrap();
        let cpu = distance_fragmentation(&g, ShortestPathStrategy::ParallelCpu, None).unwrap();
        assert_eq!(lib, cpu);
    }

    #[test]
    fn test_invalid_max_distance() {
        for bad in [0, 6] {
            let err = distance_fragmentation(&path_graph(5), ShortestPathStrategy::Library, Some(bad))
                .unwrap_err();
            assert!(matches!(err, KeyPlayerError::InvalidParameter(_)));
        }
    }
}
