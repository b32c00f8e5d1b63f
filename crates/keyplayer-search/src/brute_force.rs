//! Exhaustive k-subset enumeration.
//!
//! Every C(n, k) combination is scored exactly once; no pruning is applied,
//! which is what guarantees the returned maximum is the global optimum.
//! Combinations are independent of each other - no cache, no shared
//! mutable state - so they are scored in parallel and reduced afterwards
//! with a tie-preserving scan.

use keyplayer_core::{NodeSubset, Result};
use rayon::prelude::*;
use tracing::trace;

use crate::result::SearchStats;
use crate::scorer::Scorer;

/// All k-subsets of `0..n` in lexicographic order.
pub(crate) fn k_subsets(n: usize, k: usize) -> Vec<NodeSubset> {
    if k == 0 || k > n {
        return Vec::new();
    }
    let mut subsets = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        subsets.push(NodeSubset::canonical(indices.iter().copied()));
        // Find the rightmost index that can still advance.
        let mut pos = k;
        while pos > 0 && indices[pos - 1] == n - k + pos - 1 {
            pos -= 1;
        }
        if pos == 0 {
            break;
        }
        indices[pos - 1] += 1;
        for j in pos..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
    subsets
}

/// Scores every combination and returns all subsets tied at the maximum.
pub(crate) fn run(
    scorer: &Scorer<'_>,
    n: usize,
    k: usize,
) -> Result<(Vec<NodeSubset>, f64, SearchStats)> {
    let candidates = k_subsets(n, k);
    let scores: Vec<f64> = candidates
        .par_iter()
        .map(|subset| {
            let score = scorer.score(subset)?;
            trace!(event = "candidate_scored", subset = ?subset.as_slice(), score);
            Ok(score)
        })
        .collect::<Result<Vec<f64>>>()?;

    let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Scores are rounded at the source, so exact equality is the tie test.
    let optima: Vec<NodeSubset> = candidates
        .iter()
        .zip(&scores)
        .filter(|(_, &score)| score == best)
        .map(|(subset, _)| subset.clone())
        .collect();

    let stats = SearchStats {
        candidates_evaluated: candidates.len() as u64,
        cache_hits: 0,
        steps: 0,
    };
    Ok((optima, best, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyplayer_metrics::KpMetric;
    use keyplayer_paths::ShortestPathStrategy;
    use keyplayer_test::{cycle_graph, path_graph};

    #[test]
    fn test_k_subsets_counts() {
        assert_eq!(k_subsets(4, 2).len(), 6);
        assert_eq!(k_subsets(5, 3).len(), 10);
        assert_eq!(k_subsets(3, 3).len(), 1);
        assert!(k_subsets(3, 4).is_empty());
        assert!(k_subsets(3, 0).is_empty());
    }

    #[test]
    fn test_k_subsets_order_and_contents() {
        let subsets = k_subsets(4, 2);
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ];
        let actual: Vec<Vec<usize>> = subsets.iter().map(|s| s.as_slice().to_vec()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_finds_unique_optimum() {
        // Path 0-1-2-3: only {1, 2} fully fragments the graph.
        let g = path_graph(4);
        let scorer =
            Scorer::new(&g, KpMetric::Fragmentation, None, ShortestPathStrategy::Library, None)
                .unwrap();
        let (optima, best, stats) = run(&scorer, 4, 2).unwrap();
        assert_eq!(best, 1.0);
        assert_eq!(optima.len(), 1);
        assert_eq!(optima[0].as_slice(), &[1, 2]);
        assert_eq!(stats.candidates_evaluated, 6);
    }

    #[test]
    fn test_reports_all_ties() {
        // 4-cycle: both opposite pairs leave two isolates.
        let g = cycle_graph(4);
        let scorer =
            Scorer::new(&g, KpMetric::Fragmentation, None, ShortestPathStrategy::Library, None)
                .unwrap();
        let (optima, best, _) = run(&scorer, 4, 2).unwrap();
        assert_eq!(best, 1.0);
        let tied: Vec<&[usize]> = optima.iter().map(|s| s.as_slice()).collect();
        assert_eq!(tied, vec![&[0, 2][..], &[1, 3][..]]);
    }
}
