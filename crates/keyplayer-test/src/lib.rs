//! Shared test fixtures for keyplayer crates.
//!
//! Small named graphs used across the workspace's tests. Vertex `i` is
//! always named `"v{i}"` so tests can translate between indices and names
//! without extra bookkeeping.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! keyplayer-test = { workspace = true }
//! ```

use keyplayer_core::NetworkGraph;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{i}")).collect()
}

/// A path graph `0-1-...-(n-1)`.
pub fn path_graph(n: usize) -> NetworkGraph {
    let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
    NetworkGraph::from_edges(names(n), &edges).unwrap()
}

/// A cycle graph on `n` vertices.
pub fn cycle_graph(n: usize) -> NetworkGraph {
    let mut edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
    edges.push((n - 1, 0));
    NetworkGraph::from_edges(names(n), &edges).unwrap()
}

/// A star graph: vertex 0 connected to every other vertex.
pub fn star_graph(n: usize) -> NetworkGraph {
    let edges: Vec<(usize, usize)> = (1..n).map(|i| (0, i)).collect();
    NetworkGraph::from_edges(names(n), &edges).unwrap()
}

/// A complete graph on `n` vertices.
pub fn complete_graph(n: usize) -> NetworkGraph {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    NetworkGraph::from_edges(names(n), &edges).unwrap()
}

/// `n` isolated vertices, no edges at all.
pub fn empty_graph(n: usize) -> NetworkGraph {
    NetworkGraph::from_edges(names(n), &[]).unwrap()
}

/// The Krackhardt kite, a standard 10-vertex key-player example.
///
/// Vertex 7 is the cut vertex separating the tail (8, 9) from the body.
pub fn kite_graph() -> NetworkGraph {
    NetworkGraph::from_edges(
        names(10),
        &[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 5),
            (1, 3),
            (1, 4),
            (1, 6),
            (2, 3),
            (2, 5),
            (3, 4),
            (3, 5),
            (3, 6),
            (4, 6),
            (5, 6),
            (5, 7),
            (6, 7),
            (7, 8),
            (8, 9),
        ],
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(path_graph(4).edge_count(), 3);
        assert_eq!(cycle_graph(5).edge_count(), 5);
        assert_eq!(star_graph(5).edge_count(), 4);
        assert_eq!(complete_graph(4).edge_count(), 6);
        assert_eq!(empty_graph(5).edge_count(), 0);
        assert_eq!(kite_graph().vertex_count(), 10);
        assert_eq!(kite_graph().edge_count(), 18);
    }

    #[test]
    fn test_kite_cut_vertex() {
        let kite = kite_graph();
        assert_eq!(kite.connected_components().len(), 1);
        assert_eq!(kite.remove(&[7]).connected_components().len(), 2);
    }
}
