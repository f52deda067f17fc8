//! Path-Set Selector: picks the subset of a candidate path pool that
//! minimizes predicted total turns for a given ant count.

use crate::distribute::predicted_turns;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;
use tracing::debug;

/// When the candidate pool exceeds this size, full subset enumeration
/// (2^|pool|) is no longer tractable; fall back to the whole pool taken as
/// a single subset (it is already pairwise disjoint, being the output of
/// the greedy extractor) rather than exhaustively searching it.
const MAX_ENUMERATED_POOL: usize = 20;

/// Selects the subset of `pool` minimizing predicted turns for `ants`.
///
/// `pool` is assumed vertex-disjoint-safe to test pairwise (each entry is a
/// room-index path including start and end). Ties break toward the subset
/// found first in bitmask-ascending enumeration order, which favors
/// smaller, lower-indexed subsets — matching the spec's "smaller
/// subset-encoding value" tie-break.
pub fn select_best(pool: &[Vec<NodeIndex>], ants: usize) -> Vec<Vec<NodeIndex>> {
    if pool.is_empty() {
        return Vec::new();
    }
    if pool.len() > MAX_ENUMERATED_POOL {
        debug!(pool_size = pool.len(), "pool too large, using full disjoint pool");
        return pool.to_vec();
    }

    let lengths: Vec<usize> = pool.iter().map(|p| p.len() - 1).collect();
    let n = pool.len();
    let mut best: Option<(usize, u32)> = None;

    for mask in 1u32..(1u32 << n) {
        let indices: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
        if !pairwise_disjoint(pool, &indices) {
            continue;
        }
        let subset_lengths: Vec<usize> = indices.iter().map(|&i| lengths[i]).collect();
        let turns = predicted_turns(&subset_lengths, ants);
        if best.map_or(true, |(best_turns, _)| turns < best_turns) {
            best = Some((turns, mask));
        }
    }

    match best {
        Some((turns, mask)) => {
            debug!(turns, mask, "selected path subset");
            (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| pool[i].clone())
                .collect()
        }
        None => Vec::new(),
    }
}

fn pairwise_disjoint(pool: &[Vec<NodeIndex>], indices: &[usize]) -> bool {
    let mut seen_interior: HashSet<NodeIndex> = HashSet::new();
    for &i in indices {
        let path = &pool[i];
        if path.len() < 2 {
            continue;
        }
        for &room in &path[1..path.len() - 1] {
            if !seen_interior.insert(room) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
#[path = "unit_tests/select.rs"]
mod tests;
