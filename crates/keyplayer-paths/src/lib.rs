//! All-pairs shortest path engine.
//!
//! Produces a sentinel-coded [`DistanceMatrix`] from a graph's adjacency
//! relation via one of three strategies:
//!
//! - [`ShortestPathStrategy::Library`] - per-source Dijkstra delegated to
//!   petgraph (sequential)
//! - [`ShortestPathStrategy::ParallelCpu`] - Floyd-Warshall with rayon
//!   row-parallel relaxation
//! - [`ShortestPathStrategy::ParallelGpu`] - Floyd-Warshall as a wgpu
//!   compute kernel, behind the non-default `gpu` feature
//!
//! All strategies produce identical matrices for the same graph; a search
//! picks one strategy up front and threads it through every scoring call
//! rather than re-deciding per metric call.

mod library;
mod parallel;

#[cfg(feature = "gpu")]
mod gpu;

use std::fmt;
use std::str::FromStr;

use keyplayer_core::{DistanceMatrix, KeyPlayerError, NetworkGraph, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Strategy for computing all-pairs shortest paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortestPathStrategy {
    /// Per-source Dijkstra via the petgraph library.
    #[default]
    Library,
    /// Row-parallel Floyd-Warshall on the CPU.
    ParallelCpu,
    /// Floyd-Warshall compute kernel on the GPU (feature `gpu`).
    ParallelGpu,
}

impl ShortestPathStrategy {
    /// Picks a strategy from the graph shape: the dense-matrix kernel pays
    /// off on dense graphs, per-source Dijkstra on sparse ones.
    pub fn pick(vertex_count: usize, edge_count: usize) -> Self {
        let pairs = vertex_count * vertex_count.saturating_sub(1) / 2;
        if pairs > 0 && edge_count * 4 >= pairs {
            ShortestPathStrategy::ParallelCpu
        } else {
            ShortestPathStrategy::Library
        }
    }
}

impl fmt::Display for ShortestPathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortestPathStrategy::Library => write!(f, "library"),
            ShortestPathStrategy::ParallelCpu => write!(f, "parallel_cpu"),
            ShortestPathStrategy::ParallelGpu => write!(f, "parallel_gpu"),
        }
    }
}

impl FromStr for ShortestPathStrategy {
    type Err = KeyPlayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "library" => Ok(ShortestPathStrategy::Library),
            "parallel_cpu" => Ok(ShortestPathStrategy::ParallelCpu),
            "parallel_gpu" => Ok(ShortestPathStrategy::ParallelGpu),
            other => Err(KeyPlayerError::InvalidParameter(format!(
                "unknown shortest-path strategy '{other}'"
            ))),
        }
    }
}

/// Computes the full distance matrix for `graph` with the given strategy.
pub fn distance_matrix(
    graph: &NetworkGraph,
    strategy: ShortestPathStrategy,
) -> Result<DistanceMatrix> {
    debug!(
        event = "distance_matrix",
        strategy = %strategy,
        n = graph.vertex_count(),
        edges = graph.edge_count(),
    );
    match strategy {
        ShortestPathStrategy::Library => Ok(library::library_distances(graph)),
        ShortestPathStrategy::ParallelCpu => Ok(parallel::floyd_warshall(graph)),
        #[cfg(feature = "gpu")]
        ShortestPathStrategy::ParallelGpu => gpu::gpu_distances(graph),
        #[cfg(not(feature = "gpu"))]
        ShortestPathStrategy::ParallelGpu => Err(KeyPlayerError::GpuUnavailable),
    }
}
