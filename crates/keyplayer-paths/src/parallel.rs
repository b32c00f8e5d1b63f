//! Row-parallel Floyd-Warshall kernel.
//!
//! The outer pivot loop over k is strictly sequential: every row must
//! observe the fully relaxed matrix of pivot k before pivot k + 1 starts.
//! Within one pivot the rows are independent - each worker writes only its
//! own row and reads only that row plus the pivot row, which is copied out
//! before the parallel loop. The implicit join at the end of the parallel
//! iterator is the barrier between pivots; no cell is read and written by
//! two workers in the same step, so no locking is needed.

use keyplayer_core::{DistanceMatrix, NetworkGraph};
use rayon::prelude::*;

/// Builds the initial cell buffer from the adjacency relation:
/// 0 on the diagonal, 1 for a direct edge, sentinel otherwise.
pub(crate) fn seed_cells(graph: &NetworkGraph) -> Vec<u32> {
    let n = graph.vertex_count();
    let sentinel = n as u32 + 1;
    let mut cells = vec![sentinel; n * n];
    for i in 0..n {
        cells[i * n + i] = 0;
        for j in graph.neighbors(i) {
            cells[i * n + j] = 1;
        }
    }
    cells
}

/// All-pairs shortest paths via Floyd-Warshall, rows relaxed in parallel.
pub(crate) fn floyd_warshall(graph: &NetworkGraph) -> DistanceMatrix {
    let n = graph.vertex_count();
    let sentinel = n as u32 + 1;
    let mut cells = seed_cells(graph);

    for k in 0..n {
        // Pivot row k does not change during its own step (d[k][j] cannot
        // improve through k), so a copy taken here stays valid for the
        // whole parallel pass.
        let pivot_row: Vec<u32> = cells[k * n..(k + 1) * n].to_vec();

        cells.par_chunks_mut(n).for_each(|row| {
            let d_ik = row[k];
            if d_ik >= sentinel {
                // No path into the pivot; nothing can route through it.
                return;
            }
            for (j, cell) in row.iter_mut().enumerate() {
                // 0 (self) and 1 (direct edge) are already minimal for a
                // unit-weight simple graph.
                if *cell <= 1 {
                    continue;
                }
                let through = d_ik + pivot_row[j];
                if through < *cell {
                    *cell = through;
                }
            }
        });
    }

    DistanceMatrix::from_cells(n, cells)
}
