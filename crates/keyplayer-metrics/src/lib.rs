//! Borgatti key-player metrics.
//!
//! Pure scoring functions over a [`keyplayer_core::NetworkGraph`]:
//!
//! - [`fragmentation`] (F) and [`distance_fragmentation`] (dF) measure how
//!   fragmented a graph is; disruption searches evaluate them on the
//!   residual graph after removing a candidate set.
//! - [`m_reach`] and [`distance_reach`] (dR) measure how well a node set
//!   reaches the rest of the intact graph; [`reach_within`] and
//!   [`weighted_reach`] are the matrix-level variants searches use to score
//!   many candidates against one precomputed matrix.
//!
//! All float scores are rounded to 5 decimals so equality comparisons are
//! reproducible across shortest-path strategies.

mod fragmentation;
mod reach;
mod selector;
mod validate;

pub use fragmentation::{distance_fragmentation, distance_fragmentation_of, fragmentation};
pub use reach::{distance_reach, m_reach, reach_matrix, reach_within, weighted_reach};
pub use selector::KpMetric;
pub use validate::{validate_hop_limit, validate_max_distance, validate_subset};

/// Rounds to the fixed 5-decimal score precision.
pub fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round5() {
        assert_eq!(round5(0.123456789), 0.12346);
        assert_eq!(round5(1.0), 1.0);
        assert_eq!(round5(2.0 / 3.0), 0.66667);
    }
}
