//! Key-player network analysis.
//!
//! Identifies the vertices that matter most in an undirected graph,
//! following Borgatti's key-player problem in both directions:
//!
//! - **KPP-Neg (disruption)**: which k vertices, once removed, fragment
//!   the network the most? Scored by component-based fragmentation (F)
//!   or distance-weighted fragmentation (dF).
//! - **KPP-Pos (reachability)**: which k vertices together reach the most
//!   of the network? Scored by m-reach (hop-bounded head count) or
//!   distance-weighted reach (dR).
//!
//! # Example
//!
//! ```rust
//! use keyplayer::prelude::*;
//!
//! // A path a-b-c-d: the two interior vertices hold it together.
//! let graph = NetworkGraph::from_edges(
//!     vec!["a", "b", "c", "d"],
//!     &[(0, 1), (1, 2), (2, 3)],
//! )?;
//!
//! let options = SearchOptions {
//!     search: SearchKind::BruteForce,
//!     ..Default::default()
//! };
//! let result = search_disruption(&graph, 2, KpMetric::Fragmentation, &options)?;
//! assert_eq!(result.score, 1.0);
//! assert_eq!(result.subsets, vec![vec!["b".to_string(), "c".to_string()]]);
//! # Ok::<(), keyplayer::KeyPlayerError>(())
//! ```

// Graph model and shared primitives
pub use keyplayer_core::{
    Distance, DistanceMatrix, KeyPlayerError, NetworkGraph, NodeSubset, Result,
};

// Shortest-path engine
pub use keyplayer_paths::{distance_matrix, ShortestPathStrategy};

// Metric implementations, for callers that want a score without a search
pub use keyplayer_metrics::{
    distance_fragmentation, distance_reach, fragmentation, m_reach, KpMetric,
};

// Search API
pub use keyplayer_search::{
    score_subset, search_disruption, search_reachability, SearchOptions, SearchResult, SearchStats,
};

// File-based configuration
pub use keyplayer_config::{AnalysisConfig, ConfigError, SearchKind};

pub mod prelude {
    pub use super::{
        search_disruption, search_reachability, score_subset, AnalysisConfig, KeyPlayerError,
        KpMetric, NetworkGraph, SearchKind, SearchOptions, SearchResult, ShortestPathStrategy,
    };
}
