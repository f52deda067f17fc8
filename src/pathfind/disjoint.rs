//! Greedy vertex-disjoint path extraction.

use super::bfs::shortest_path;
use crate::graph::{Graph, WorkingGraph};
use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

/// Repeatedly extracts a shortest start→end path from a working copy of
/// `graph`, deleting its interior vertices before the next extraction, until
/// no path remains.
///
/// The result is vertex-disjoint on interior vertices by construction and
/// is bounded in length by `min(degree(start), degree(end))`. Returns an
/// empty vector if even the first extraction fails to find a path — the
/// caller (the engine's top-level `run`) is responsible for turning that
/// into an `Unreachable` error; this function itself never fails.
pub fn extract_disjoint_paths(graph: &Graph) -> Vec<Vec<NodeIndex>> {
    let mut working = WorkingGraph::new(graph);
    let mut paths = Vec::new();

    loop {
        let found = shortest_path(working.num_rooms(), working.start(), working.end(), |room| {
            working.neighbors(room).collect::<Vec<_>>()
        });

        let Some(path) = found else {
            trace!(extracted = paths.len(), "no further disjoint path found");
            break;
        };

        for &room in &path[1..path.len() - 1] {
            working.remove_interior(room);
        }
        debug!(length = path.len() - 1, "extracted disjoint path");
        paths.push(path);
    }

    paths
}

#[cfg(test)]
#[path = "../unit_tests/disjoint.rs"]
mod tests;
