//! Score memoization for one search invocation.
//!
//! The cache is created empty when a search starts and dropped when it
//! returns. It is owned by the search scope and passed by reference into
//! scoring, never stored globally, so concurrent searches on different
//! graphs or metrics cannot interfere.

use std::collections::HashMap;

use keyplayer_core::NodeSubset;

/// Canonical-subset → score map, valid for one (graph, metric, parameters)
/// search invocation.
#[derive(Debug, Default)]
pub(crate) struct ScoreCache {
    map: HashMap<NodeSubset, f64>,
    hits: u64,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached score for a subset, counting the hit.
    pub fn get(&mut self, subset: &NodeSubset) -> Option<f64> {
        let cached = self.map.get(subset).copied();
        if cached.is_some() {
            self.hits += 1;
        }
        cached
    }

    pub fn insert(&mut self, subset: NodeSubset, score: f64) {
        self.map.insert(subset, score);
    }

    /// Number of cache hits so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of distinct subsets scored (cache misses).
    pub fn scored(&self) -> u64 {
        self.map.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_and_miss_accounting() {
        let mut cache = ScoreCache::new();
        let a = NodeSubset::canonical([0, 1]);
        assert_eq!(cache.get(&a), None);
        cache.insert(a.clone(), 0.5);
        assert_eq!(cache.get(&a), Some(0.5));
        // A permutation of the same set hits the same entry.
        assert_eq!(cache.get(&NodeSubset::canonical([1, 0])), Some(0.5));
        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.scored(), 1);
    }
}
