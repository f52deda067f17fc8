//! Movement Simulator: steps a discrete clock, moving ants one edge per
//! turn under occupancy constraints, and emits the turn log.

use crate::error::{EngineError, Result};
use crate::graph::Graph;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;
use tracing::trace;

/// Safety multiplier for the infinite-loop guard: simulation aborts if it
/// runs past `ants * BOUND_FACTOR` turns. Exceeding this on well-formed
/// input indicates a bug upstream (selection or distribution), never a
/// property of the input itself.
const BOUND_FACTOR: usize = 100;

struct AntState {
    id: usize,
    path_idx: usize,
    pos: usize,
}

/// Simulates ant movement along `paths` with per-path launch counts
/// `counts`, returning one turn string per turn until every ant reaches
/// the end room.
///
/// `paths` and `counts` must be the same length and in the same order;
/// `counts[i]` ants are launched on `paths[i]`. Active ants are tracked in
/// launch order throughout, matching the spec's requirement that the
/// Advance phase visit them in that order within a turn.
pub fn simulate(graph: &Graph, paths: &[Vec<NodeIndex>], counts: &[usize]) -> Result<Vec<String>> {
    let total_ants: usize = counts.iter().sum();
    if total_ants == 0 {
        return Ok(Vec::new());
    }

    let lengths: Vec<usize> = paths.iter().map(|p| p.len() - 1).collect();
    let mut remaining = counts.to_vec();
    let mut active: Vec<AntState> = Vec::new();
    let mut next_id = 1usize;
    let mut finished = 0usize;
    let mut turns = Vec::new();
    let bound = total_ants.saturating_mul(BOUND_FACTOR).max(1);

    while finished < total_ants {
        if turns.len() >= bound {
            return Err(EngineError::InternalBound(bound));
        }

        let mut occupied: HashSet<NodeIndex> = HashSet::new();
        let mut moves: Vec<(usize, String)> = Vec::new();
        let mut still_active: Vec<AntState> = Vec::with_capacity(active.len());

        // Advance phase: launch-order iteration, as required for the
        // occupancy bookkeeping to match the reference behavior.
        for ant in active.into_iter() {
            let path = &paths[ant.path_idx];
            let next_pos = ant.pos + 1;
            let next_room = path[next_pos];
            if next_room == graph.end() {
                moves.push((ant.id, format!("L{}-{}", ant.id, graph.room(next_room).name)));
                finished += 1;
            } else if !occupied.contains(&next_room) {
                occupied.insert(next_room);
                moves.push((ant.id, format!("L{}-{}", ant.id, graph.room(next_room).name)));
                still_active.push(AntState {
                    id: ant.id,
                    path_idx: ant.path_idx,
                    pos: next_pos,
                });
            } else {
                // Stays put; its current room remains occupied so nothing
                // enters behind it this turn.
                occupied.insert(path[ant.pos]);
                still_active.push(ant);
            }
        }
        active = still_active;

        // Launch phase: path-index order, one launch per path per turn,
        // except the length-1-path-and-global-ants<=2 launch-together rule.
        for (i, path) in paths.iter().enumerate() {
            if remaining[i] == 0 {
                continue;
            }
            if lengths[i] == 1 {
                let end_name = &graph.room(graph.end()).name;
                if total_ants <= 2 {
                    while remaining[i] > 0 {
                        let id = next_id;
                        next_id += 1;
                        remaining[i] -= 1;
                        finished += 1;
                        moves.push((id, format!("L{id}-{end_name}")));
                    }
                } else {
                    let id = next_id;
                    next_id += 1;
                    remaining[i] -= 1;
                    finished += 1;
                    moves.push((id, format!("L{id}-{end_name}")));
                }
                continue;
            }

            let first_room = path[1];
            if occupied.contains(&first_room) {
                continue;
            }
            let id = next_id;
            next_id += 1;
            remaining[i] -= 1;
            occupied.insert(first_room);
            moves.push((id, format!("L{}-{}", id, graph.room(first_room).name)));
            active.push(AntState {
                id,
                path_idx: i,
                pos: 1,
            });
        }

        moves.sort_by_key(|(id, _)| *id);
        let turn = moves
            .into_iter()
            .map(|(_, s)| s)
            .collect::<Vec<_>>()
            .join(" ");
        trace!(turn = %turn, "turn assembled");
        turns.push(turn);
    }

    Ok(turns)
}

#[cfg(test)]
#[path = "unit_tests/simulate.rs"]
mod tests;
