//! Breadth-first shortest-path search.
//!
//! Generic over a neighbor-producing closure rather than tied to [`Graph`]
//! or [`WorkingGraph`] directly, so the same search drives both the initial
//! extraction pool and any future caller with a different adjacency source
//! (the pattern mirrors the D*-style search primitives taking a neighbor
//! function rather than a concrete graph type).

use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

/// Finds the shortest path from `source` to `target` by edge count.
///
/// `num_rooms` sizes the internal visited/parent tables. `neighbors` is
/// called once per room as it's dequeued and must yield that room's
/// neighbors in stored adjacency order — the order BFS explores them in is
/// the order ties are broken by first-discovery.
///
/// Returns `None` if `target` is unreachable from `source`.
pub fn shortest_path<F, I>(
    num_rooms: usize,
    source: NodeIndex,
    target: NodeIndex,
    mut neighbors: F,
) -> Option<Vec<NodeIndex>>
where
    F: FnMut(NodeIndex) -> I,
    I: IntoIterator<Item = NodeIndex>,
{
    if source == target {
        return Some(vec![source]);
    }

    let mut visited = vec![false; num_rooms];
    let mut parent = vec![None; num_rooms];
    let mut queue = VecDeque::new();

    visited[source.index()] = true;
    queue.push_back(source);

    while let Some(room) = queue.pop_front() {
        for next in neighbors(room) {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            parent[next.index()] = Some(room);
            if next == target {
                return Some(reconstruct(&parent, source, target));
            }
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct(parent: &[Option<NodeIndex>], source: NodeIndex, target: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut cur = target;
    while cur != source {
        let prev = parent[cur.index()].expect("every non-source room on the path has a parent");
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
#[path = "../unit_tests/bfs.rs"]
mod tests;
