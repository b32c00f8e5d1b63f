//! Fail-fast parameter validation.
//!
//! Every metric validates its inputs before any shortest-path work starts;
//! a failure is always a caller-input problem, never a partial result.

use keyplayer_core::{KeyPlayerError, NodeSubset, Result};

/// `m` must be a positive integer no greater than the vertex count.
pub fn validate_hop_limit(vertex_count: usize, m: u32) -> Result<()> {
    if m == 0 || m as usize > vertex_count {
        return Err(KeyPlayerError::InvalidParameter(format!(
            "hop limit m = {m} must be in 1..={vertex_count}"
        )));
    }
    Ok(())
}

/// `max_distance` must be a positive integer no greater than the vertex
/// count.
pub fn validate_max_distance(vertex_count: usize, max_distance: u32) -> Result<()> {
    if max_distance == 0 || max_distance as usize > vertex_count {
        return Err(KeyPlayerError::InvalidParameter(format!(
            "max_distance = {max_distance} must be in 1..={vertex_count}"
        )));
    }
    Ok(())
}

/// A query subset must be non-empty and reference existing vertices.
pub fn validate_subset(vertex_count: usize, nodes: &NodeSubset) -> Result<()> {
    if nodes.is_empty() {
        return Err(KeyPlayerError::InvalidParameter(
            "node subset must not be empty".to_string(),
        ));
    }
    if let Some(bad) = nodes.iter().find(|&i| i >= vertex_count) {
        return Err(KeyPlayerError::InvalidParameter(format!(
            "vertex index {bad} out of range 0..{vertex_count}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_limit_range() {
        assert!(validate_hop_limit(5, 1).is_ok());
        assert!(validate_hop_limit(5, 5).is_ok());
        assert!(validate_hop_limit(5, 0).is_err());
        assert!(validate_hop_limit(5, 6).is_err());
    }

    #[test]
    fn test_max_distance_range() {
        assert!(validate_max_distance(5, 1).is_ok());
        assert!(validate_max_distance(5, 5).is_ok());
        assert!(validate_max_distance(5, 0).is_err());
        assert!(validate_max_distance(5, 6).is_err());
    }

    #[test]
    fn test_subset() {
        assert!(validate_subset(3, &NodeSubset::canonical([0, 2])).is_ok());
        assert!(validate_subset(3, &NodeSubset::canonical([])).is_err());
        assert!(validate_subset(3, &NodeSubset::canonical([3])).is_err());
    }
}
