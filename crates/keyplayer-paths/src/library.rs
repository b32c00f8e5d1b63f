//! Library-delegated shortest paths.
//!
//! Per-source Dijkstra from petgraph over a unit-weight view of the graph.
//! petgraph reports unreachable vertices by leaving them out of the returned
//! distance map; those are normalized to the matrix sentinel here, so the
//! "infinity" convention never leaks past this module.

use keyplayer_core::{DistanceMatrix, NetworkGraph};
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};

/// Computes the full distance matrix by running Dijkstra from every source.
pub(crate) fn library_distances(graph: &NetworkGraph) -> DistanceMatrix {
    let n = graph.vertex_count();

    let mut pg = UnGraph::<(), ()>::with_capacity(n, graph.edge_count());
    let nodes: Vec<NodeIndex> = (0..n).map(|_| pg.add_node(())).collect();
    for i in 0..n {
        for j in graph.neighbors(i) {
            if j > i {
                pg.add_edge(nodes[i], nodes[j], ());
            }
        }
    }

    let mut matrix = DistanceMatrix::unreachable(n);
    for i in 0..n {
        let reached = dijkstra(&pg, nodes[i], None, |_| 1u32);
        for (node, d) in reached {
            matrix.set(i, node.index(), d);
        }
    }
    matrix
}
