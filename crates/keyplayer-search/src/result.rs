//! Search results and run statistics.

use keyplayer_core::{NetworkGraph, NodeSubset};

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct candidate subsets actually scored.
    pub candidates_evaluated: u64,
    /// Rescores avoided by the memoization cache (greedy only).
    pub cache_hits: u64,
    /// Accepted improvement steps (greedy only).
    pub steps: u64,
}

/// Outcome of a key-player search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Every optimal subset found, as vertex names in canonical order.
    ///
    /// Brute force reports *all* subsets tied at the maximum; greedy
    /// reports the single local optimum it converged to. Empty when a
    /// zero-edge disruption search short-circuits.
    pub subsets: Vec<Vec<String>>,
    /// The optimal score, rounded to 5 decimals.
    pub score: f64,
    /// Pre-search score: the disruption metric of the untouched graph, or
    /// the reachability of the greedy starting subset. `None` for
    /// brute-force reachability runs, which have no initial configuration.
    pub baseline: Option<f64>,
    /// Run counters.
    pub stats: SearchStats,
}

impl SearchResult {
    pub(crate) fn from_subsets(
        graph: &NetworkGraph,
        subsets: Vec<NodeSubset>,
        score: f64,
        baseline: Option<f64>,
        stats: SearchStats,
    ) -> Self {
        let subsets = subsets
            .into_iter()
            .map(|s| s.iter().map(|i| graph.name(i).to_string()).collect())
            .collect();
        Self {
            subsets,
            score,
            baseline,
            stats,
        }
    }

    /// Whether the search improved on the baseline at all.
    pub fn improved(&self) -> bool {
        self.baseline.map_or(true, |b| self.score > b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyplayer_test::path_graph;

    #[test]
    fn test_subset_name_translation() {
        let g = path_graph(4);
        let result = SearchResult::from_subsets(
            &g,
            vec![NodeSubset::canonical([2, 1])],
            1.0,
            Some(0.0),
            SearchStats::default(),
        );
        assert_eq!(result.subsets, vec![vec!["v1".to_string(), "v2".to_string()]]);
        assert!(result.improved());
    }

    #[test]
    fn test_improved() {
        let g = path_graph(3);
        let flat = SearchResult::from_subsets(&g, vec![], 0.5, Some(0.5), SearchStats::default());
        assert!(!flat.improved());
        let no_baseline =
            SearchResult::from_subsets(&g, vec![], 0.5, None, SearchStats::default());
        assert!(no_baseline.improved());
    }
}
