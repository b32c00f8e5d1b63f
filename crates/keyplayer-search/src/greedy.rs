//! Randomized-start steepest-ascent local search.
//!
//! The search state is a k-subset S and its complement. Each step evaluates
//! the *full* swap neighborhood - every (s, c) with s in S and c outside -
//! and takes the single best strictly-improving trial (steepest ascent, not
//! first improvement). Trial subsets revisited in later steps come out of
//! the score cache instead of being rescored. The walk terminates at a
//! local optimum with respect to single-element swaps, which is not
//! necessarily the global optimum brute force would find.

use keyplayer_core::{NodeSubset, Result};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::cache::ScoreCache;
use crate::result::SearchStats;
use crate::scorer::Scorer;

/// Outcome of one greedy walk.
pub(crate) struct GreedyOutcome {
    pub subset: NodeSubset,
    pub score: f64,
    /// Score of the random starting subset.
    pub initial_score: f64,
    pub stats: SearchStats,
}

/// Runs the hill climb from a uniformly random starting subset.
pub(crate) fn run(scorer: &Scorer<'_>, n: usize, k: usize, rng: &mut StdRng) -> Result<GreedyOutcome> {
    let mut cache = ScoreCache::new();

    let start = NodeSubset::canonical(rand::seq::index::sample(rng, n, k));
    let initial_score = scorer.score(&start)?;
    cache.insert(start.clone(), initial_score);
    debug!(event = "greedy_start", subset = ?start.as_slice(), score = initial_score);

    let mut current = start;
    let mut current_score = initial_score;
    let mut steps = 0u64;

    loop {
        let members: Vec<usize> = current.as_slice().to_vec();
        let complement = current.complement(n);

        // Best trial across the whole s×c grid. Ties keep the first trial
        // found in grid order, so a fixed seed gives a fixed walk.
        let mut best: Option<(NodeSubset, f64)> = None;
        for &s in &members {
            for &c in &complement {
                let trial = current.swap(s, c);
                let score = match cache.get(&trial) {
                    Some(cached) => cached,
                    None => {
                        let fresh = scorer.score(&trial)?;
                        cache.insert(trial.clone(), fresh);
                        fresh
                    }
                };
                trace!(event = "swap_scored", out = s, r#in = c, score);
                if best.as_ref().map_or(true, |(_, b)| score > *b) {
                    best = Some((trial, score));
                }
            }
        }

        match best {
            Some((trial, score)) if score > current_score => {
                current = trial;
                current_score = score;
                steps += 1;
                debug!(event = "greedy_step", step = steps, score = current_score);
            }
            // No strict improvement in the whole neighborhood: local optimum.
            _ => break,
        }
    }

    let stats = SearchStats {
        candidates_evaluated: cache.scored(),
        cache_hits: cache.hits(),
        steps,
    };
    Ok(GreedyOutcome {
        subset: current,
        score: current_score,
        initial_score,
        stats,
    })
}
