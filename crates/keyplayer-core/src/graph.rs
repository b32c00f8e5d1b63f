//! Read-only graph view consumed by the analysis core.
//!
//! `NetworkGraph` stores a simple undirected graph as a dense adjacency
//! matrix with a bidirectional index↔name mapping. The analysis core never
//! mutates a graph in place: "removing" vertices produces a new induced
//! subgraph via [`NetworkGraph::remove`], so concurrent scoring of multiple
//! candidates against the same base graph needs no locking.

use std::collections::HashMap;

use crate::error::{KeyPlayerError, Result};

/// A simple undirected graph with named vertices.
///
/// Invariants, enforced at construction:
/// - vertex names are unique,
/// - no self-loops,
/// - no duplicate edges (a simple graph, not a multigraph).
///
/// Vertex indices are 0-based and dense.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    names: Vec<String>,
    index_by_name: HashMap<String, usize>,
    /// Row-major n×n adjacency matrix. Symmetric, false diagonal.
    adjacency: Vec<bool>,
    edge_count: usize,
}

impl NetworkGraph {
    /// Builds a graph from vertex names and an edge list of index pairs.
    pub fn from_edges<S: Into<String>>(names: Vec<S>, edges: &[(usize, usize)]) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let n = names.len();

        let mut index_by_name = HashMap::with_capacity(n);
        for (i, name) in names.iter().enumerate() {
            if index_by_name.insert(name.clone(), i).is_some() {
                return Err(KeyPlayerError::InvalidGraph(format!(
                    "duplicate vertex name '{name}'"
                )));
            }
        }

        let mut adjacency = vec![false; n * n];
        let mut edge_count = 0;
        for &(a, b) in edges {
            if a >= n || b >= n {
                return Err(KeyPlayerError::InvalidGraph(format!(
                    "edge ({a}, {b}) references a vertex outside 0..{n}"
                )));
            }
            if a == b {
                return Err(KeyPlayerError::InvalidGraph(format!(
                    "self-loop on vertex {a}"
                )));
            }
            if adjacency[a * n + b] {
                return Err(KeyPlayerError::InvalidGraph(format!(
                    "duplicate edge ({a}, {b})"
                )));
            }
            adjacency[a * n + b] = true;
            adjacency[b * n + a] = true;
            edge_count += 1;
        }

        Ok(Self {
            names,
            index_by_name,
            adjacency,
            edge_count,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether an edge exists between `i` and `j`.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency[i * self.names.len() + j]
    }

    /// Iterates over the neighbors of vertex `i` in ascending index order.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let n = self.names.len();
        (0..n).filter(move |&j| self.adjacency[i * n + j])
    }

    /// The name of vertex `i`.
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    /// Looks up the index of a vertex by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

    /// Resolves a list of names to indices, failing on the first unknown name.
    pub fn resolve_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.index_of(name)
                    .ok_or_else(|| KeyPlayerError::UnknownNode(name.to_string()))
            })
            .collect()
    }

    /// Returns the induced subgraph with the given vertices deleted.
    ///
    /// The original graph is left untouched. Surviving vertices keep their
    /// names; their indices are compacted in ascending order.
    pub fn remove(&self, indices: &[usize]) -> NetworkGraph {
        let n = self.names.len();
        let mut removed = vec![false; n];
        for &i in indices {
            if i < n {
                removed[i] = true;
            }
        }
        let kept: Vec<usize> = (0..n).filter(|&i| !removed[i]).collect();
        let m = kept.len();

        let mut names = Vec::with_capacity(m);
        let mut index_by_name = HashMap::with_capacity(m);
        for (new_i, &old_i) in kept.iter().enumerate() {
            names.push(self.names[old_i].clone());
            index_by_name.insert(self.names[old_i].clone(), new_i);
        }

        let mut adjacency = vec![false; m * m];
        let mut edge_count = 0;
        for (new_a, &old_a) in kept.iter().enumerate() {
            for (new_b, &old_b) in kept.iter().enumerate().skip(new_a + 1) {
                if self.adjacency[old_a * n + old_b] {
                    adjacency[new_a * m + new_b] = true;
                    adjacency[new_b * m + new_a] = true;
                    edge_count += 1;
                }
            }
        }

        NetworkGraph {
            names,
            index_by_name,
            adjacency,
            edge_count,
        }
    }

    /// Connected components as lists of vertex indices.
    ///
    /// Fragmentation (F) only needs component sizes, so this avoids the full
    /// shortest-path computation.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let n = self.names.len();
        let mut seen = vec![false; n];
        let mut components = Vec::new();

        for start in 0..n {
            if seen[start] {
                continue;
            }
            let mut component = vec![start];
            let mut queue = vec![start];
            seen[start] = true;
            while let Some(v) = queue.pop() {
                for w in self.neighbors(v) {
                    if !seen[w] {
                        seen[w] = true;
                        component.push(w);
                        queue.push(w);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }

    /// Whether every vertex pair is directly connected.
    pub fn is_complete(&self) -> bool {
        let n = self.names.len();
        n >= 2 && self.edge_count == n * (n - 1) / 2
    }
}
