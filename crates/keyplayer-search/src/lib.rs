//! Key-player candidate search.
//!
//! Finds node subsets of size k that maximally fragment a network
//! (disruption metrics F and dF, scored on the residual graph after
//! removal) or maximally reach it (m-reach and dR, scored directly),
//! following Borgatti's key-player formalism.
//!
//! Two search strategies are available per call:
//!
//! - [`SearchKind::BruteForce`] enumerates all C(n, k) subsets and reports
//!   every subset tied at the global maximum.
//! - [`SearchKind::Greedy`] is a seeded randomized-start steepest-ascent
//!   hill climb over single-element swaps with score memoization. It finds
//!   a local optimum; its score never exceeds the brute-force maximum.
//!
//! # Example
//!
//! ```
//! use keyplayer_core::NetworkGraph;
//! use keyplayer_metrics::KpMetric;
//! use keyplayer_search::{search_disruption, SearchKind, SearchOptions};
//!
//! // Path 0-1-2-3: removing {1, 2} disconnects the ends completely.
//! let graph = NetworkGraph::from_edges(
//!     vec!["a", "b", "c", "d"],
//!     &[(0, 1), (1, 2), (2, 3)],
//! ).unwrap();
//!
//! let options = SearchOptions {
//!     search: SearchKind::BruteForce,
//!     ..Default::default()
//! };
//! let result = search_disruption(&graph, 2, KpMetric::Fragmentation, &options).unwrap();
//! assert_eq!(result.score, 1.0);
//! assert_eq!(result.subsets, vec![vec!["b".to_string(), "c".to_string()]]);
//! assert_eq!(result.baseline, Some(0.0));
//! ```

mod brute_force;
mod cache;
mod greedy;
mod result;
mod scorer;

use keyplayer_config::AnalysisConfig;
pub use keyplayer_config::SearchKind;
use keyplayer_core::{KeyPlayerError, NetworkGraph, NodeSubset, Result};
use keyplayer_metrics::KpMetric;
use keyplayer_paths::ShortestPathStrategy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

pub use result::{SearchResult, SearchStats};

use scorer::Scorer;

/// Per-call search options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Which search drives the optimization.
    pub search: SearchKind,
    /// Shortest-path backend, threaded through every scoring call.
    pub shortest_path: ShortestPathStrategy,
    /// Seed for the greedy starting subset; random when `None`.
    pub seed: Option<u64>,
    /// Distances beyond this are treated as disconnected.
    pub max_distance: Option<u32>,
}

impl From<&AnalysisConfig> for SearchOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            search: config.search,
            shortest_path: config.shortest_path,
            seed: config.random_seed,
            max_distance: config.max_distance,
        }
    }
}

/// Searches for the k-subset whose removal maximally fragments the graph.
///
/// `metric` must be one of the disruption metrics (F or dF). A zero-edge
/// graph is already maximally fragmented: the search is skipped and an
/// empty result with score 1.0 is returned without attempting any removal.
pub fn search_disruption(
    graph: &NetworkGraph,
    k: usize,
    metric: KpMetric,
    options: &SearchOptions,
) -> Result<SearchResult> {
    if !metric.is_disruption() {
        return Err(KeyPlayerError::InvalidParameter(format!(
            "{metric} is not a disruption metric"
        )));
    }
    validate_subset_size(graph.vertex_count(), k)?;

    if graph.edge_count() == 0 {
        info!(event = "search_skipped", reason = "zero_edges", metric = %metric);
        return Ok(SearchResult {
            subsets: Vec::new(),
            score: 1.0,
            baseline: Some(1.0),
            stats: SearchStats::default(),
        });
    }

    run_search(graph, k, metric, None, options)
}

/// Searches for the k-subset that maximally reaches the rest of the graph.
///
/// `metric` must be one of the reachability metrics; `m` is required for
/// m-reach and rejected otherwise.
pub fn search_reachability(
    graph: &NetworkGraph,
    k: usize,
    metric: KpMetric,
    m: Option<u32>,
    options: &SearchOptions,
) -> Result<SearchResult> {
    if metric.is_disruption() {
        return Err(KeyPlayerError::InvalidParameter(format!(
            "{metric} is not a reachability metric"
        )));
    }
    validate_subset_size(graph.vertex_count(), k)?;
    run_search(graph, k, metric, m, options)
}

/// Scores one caller-supplied node set without searching.
///
/// Used for "info" queries: disruption metrics score the graph with the
/// named vertices removed, reachability metrics score the set directly.
pub fn score_subset<S: AsRef<str>>(
    graph: &NetworkGraph,
    names: &[S],
    metric: KpMetric,
    m: Option<u32>,
    options: &SearchOptions,
) -> Result<f64> {
    let indices = graph.resolve_names(names)?;
    if indices.is_empty() {
        return Err(KeyPlayerError::InvalidParameter(
            "node subset must not be empty".to_string(),
        ));
    }
    let subset = NodeSubset::canonical(indices);
    let scorer = Scorer::new(graph, metric, m, options.shortest_path, options.max_distance)?;
    scorer.score(&subset)
}

fn validate_subset_size(vertex_count: usize, k: usize) -> Result<()> {
    if k == 0 || k >= vertex_count {
        return Err(KeyPlayerError::InvalidParameter(format!(
            "subset size k = {k} must be in 1..{vertex_count}"
        )));
    }
    Ok(())
}

fn run_search(
    graph: &NetworkGraph,
    k: usize,
    metric: KpMetric,
    m: Option<u32>,
    options: &SearchOptions,
) -> Result<SearchResult> {
    let n = graph.vertex_count();
    info!(
        event = "search_start",
        n,
        k,
        metric = %metric,
        search = %options.search,
        shortest_path = %options.shortest_path,
    );

    let scorer = Scorer::new(graph, metric, m, options.shortest_path, options.max_distance)?;
    let baseline = scorer.baseline()?;

    let result = match options.search {
        SearchKind::BruteForce => {
            let (optima, score, stats) = brute_force::run(&scorer, n, k)?;
            SearchResult::from_subsets(graph, optima, score, baseline, stats)
        }
        SearchKind::Greedy => {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let outcome = greedy::run(&scorer, n, k, &mut rng)?;
            // Reachability runs have no graph-level baseline; report the
            // starting subset's score instead.
            let baseline = baseline.or(Some(outcome.initial_score));
            SearchResult::from_subsets(
                graph,
                vec![outcome.subset],
                outcome.score,
                baseline,
                outcome.stats,
            )
        }
    };

    info!(
        event = "search_end",
        score = result.score,
        optima = result.subsets.len(),
        evaluated = result.stats.candidates_evaluated,
        cache_hits = result.stats.cache_hits,
    );
    Ok(result)
}
