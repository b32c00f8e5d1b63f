//! Sentinel-coded distance matrix.
//!
//! Graph distances are small non-negative integers, so the matrix is stored
//! as fixed-width `u32` cells instead of floats. Unreachable pairs are coded
//! with the sentinel value `n + 1`, which no real shortest path in an
//! n-vertex graph can reach. The sentinel stays inside this type: consumers
//! read through [`DistanceMatrix::distance`], which translates any stored
//! value greater than `n` to [`Distance::Unreachable`], so no metric ever
//! does arithmetic on the sentinel by accident.

/// A distance exposed to consumers, with unreachability made explicit.
///
/// Ordering puts [`Distance::Unreachable`] above every finite distance, so
/// `min` over a set of distances picks the closest reachable vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    /// A finite shortest-path length (0 on the diagonal, ≥ 1 elsewhere).
    Finite(u32),
    /// No path exists between the two vertices.
    Unreachable,
}

impl Distance {
    /// `1/d` for finite positive distances, 0 otherwise.
    ///
    /// Self-distances (d = 0) never enter a reciprocal sum: every metric
    /// iterates over `i < j` pairs or over the complement of the query set.
    pub fn reciprocal(self) -> f64 {
        match self {
            Distance::Finite(d) if d > 0 => 1.0 / f64::from(d),
            _ => 0.0,
        }
    }

    /// Whether this distance is finite and at most `limit`.
    pub fn is_within(self, limit: u32) -> bool {
        matches!(self, Distance::Finite(d) if d <= limit)
    }
}

/// Dense n×n matrix of pairwise shortest-path lengths.
///
/// Invariants: symmetric (the graphs are undirected), zero diagonal, every
/// cell in `[0, n + 1]` with `n + 1` as the unreachable sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<u32>,
}

impl DistanceMatrix {
    /// A matrix with every off-diagonal pair marked unreachable.
    pub fn unreachable(n: usize) -> Self {
        let sentinel = n as u32 + 1;
        let mut cells = vec![sentinel; n * n];
        for i in 0..n {
            cells[i * n + i] = 0;
        }
        Self { n, cells }
    }

    /// Wraps a prefilled row-major cell buffer.
    pub fn from_cells(n: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { n, cells }
    }

    /// Number of vertices this matrix covers.
    pub fn order(&self) -> usize {
        self.n
    }

    /// The unreachable sentinel for this matrix, `n + 1`.
    pub fn sentinel(&self) -> u32 {
        self.n as u32 + 1
    }

    /// Raw stored cell value, sentinel included. Prefer [`Self::distance`].
    pub fn raw(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.n + j]
    }

    /// Stores a distance in both `(i, j)` and `(j, i)`.
    pub fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.n + j] = value;
        self.cells[j * self.n + i] = value;
    }

    /// The distance between `i` and `j` with the sentinel translated out.
    pub fn distance(&self, i: usize, j: usize) -> Distance {
        let raw = self.cells[i * self.n + j];
        if raw > self.n as u32 {
            Distance::Unreachable
        } else {
            Distance::Finite(raw)
        }
    }

    /// Promotes every finite distance greater than `max_distance` to the
    /// sentinel, treating far-apart vertices as disconnected.
    ///
    /// This is the shared `max_distance` rule of dF, m-reach and dR.
    pub fn promote_beyond(&mut self, max_distance: u32) {
        let sentinel = self.sentinel();
        for cell in &mut self.cells {
            if *cell > max_distance && *cell < sentinel {
                *cell = sentinel;
            }
        }
    }

    /// Whether the matrix is symmetric. Used by tests and debug assertions.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..i).all(|j| self.cells[i * self.n + j] == self.cells[j * self.n + i]))
    }

    /// Consumes the matrix, returning the raw cell buffer.
    pub fn into_cells(self) -> Vec<u32> {
        self.cells
    }
}
