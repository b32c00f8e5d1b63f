//! Core types for key-player network analysis.
//!
//! This crate holds the domain types shared by the whole workspace:
//!
//! - [`NetworkGraph`] - read-only simple undirected graph view with
//!   induced-subgraph removal
//! - [`DistanceMatrix`] / [`Distance`] - sentinel-coded pairwise shortest
//!   path lengths
//! - [`NodeSubset`] - canonical candidate subsets used as cache keys
//! - [`KeyPlayerError`] / [`Result`] - the shared error taxonomy

mod distance;
mod error;
mod graph;
mod subset;

pub use distance::{Distance, DistanceMatrix};
pub use error::{KeyPlayerError, Result};
pub use graph::NetworkGraph;
pub use subset::NodeSubset;
