//! Canonical node subsets.
//!
//! A candidate key-player set is an unordered collection of vertex indices,
//! but it is stored sorted and deduplicated so that every permutation of the
//! same set hashes and compares identically. That canonical form is what the
//! search layer uses as its score-cache key.

use smallvec::SmallVec;

/// An ordered, deduplicated set of vertex indices.
///
/// Subset sizes are the search parameter `k`, which is small in practice,
/// so the indices live inline up to 8 elements.
///
/// # Example
///
/// ```
/// use keyplayer_core::NodeSubset;
///
/// let a = NodeSubset::canonical([3, 1, 2]);
/// let b = NodeSubset::canonical([2, 3, 1]);
/// assert_eq!(a, b);
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeSubset {
    indices: SmallVec<[usize; 8]>,
}

impl NodeSubset {
    /// Builds the canonical (sorted, deduplicated) form of a subset.
    pub fn canonical<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let mut indices: SmallVec<[usize; 8]> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Number of vertices in the subset.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the subset is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Membership test. The indices are sorted, so this is a binary search.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// The indices in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Iterates over the indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// The single-swap neighbor `(self − {out}) ∪ {in}` in canonical form.
    pub fn swap(&self, out: usize, into: usize) -> Self {
        Self::canonical(
            self.iter()
                .filter(|&i| i != out)
                .chain(std::iter::once(into)),
        )
    }

    /// The complement of this subset within `0..n`.
    pub fn complement(&self, n: usize) -> Vec<usize> {
        (0..n).filter(|&i| !self.contains(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_canonical_sorts_and_dedups() {
        let s = NodeSubset::canonical([5, 1, 5, 3]);
        assert_eq!(s.as_slice(), &[1, 3, 5]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_permutations_collapse_as_cache_keys() {
        let mut cache: HashMap<NodeSubset, f64> = HashMap::new();
        cache.insert(NodeSubset::canonical([2, 0, 1]), 0.5);
        assert_eq!(cache.get(&NodeSubset::canonical([1, 2, 0])), Some(&0.5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_contains() {
        let s = NodeSubset::canonical([4, 7]);
        assert!(s.contains(4));
        assert!(!s.contains(5));
    }

    #[test]
    fn test_swap() {
        let s = NodeSubset::canonical([1, 4, 6]);
        let swapped = s.swap(4, 0);
        assert_eq!(swapped.as_slice(), &[0, 1, 6]);
        // Original unchanged.
        assert_eq!(s.as_slice(), &[1, 4, 6]);
    }

    #[test]
    fn test_complement() {
        let s = NodeSubset::canonical([1, 3]);
        assert_eq!(s.complement(5), vec![0, 2, 4]);
    }
}
