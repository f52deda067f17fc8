//! Graph model: rooms, tunnels, and the mutable working copy used during
//! disjoint-path extraction.
//!
//! `Graph` wraps a [`petgraph::graph::UnGraph`], the same representation the
//! teacher's `SimpleGraph` uses, for vertex/edge bookkeeping. Because
//! `UnGraph::neighbors` walks its adjacency list in reverse insertion order,
//! and the routing engine's tie-breaking is defined over *stored* adjacency
//! order, `Graph` additionally caches an explicit neighbor table built in
//! link-declaration order; all pathfinding code must go through that table,
//! never `UnGraph::neighbors` directly.

use crate::error::{EngineError, Result};
use crate::room::Room;
use bitvec::vec::BitVec;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// An immutable, validated ant farm graph.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<Room, ()>,
    by_name: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<NodeIndex>>,
    start: NodeIndex,
    end: NodeIndex,
    ants: usize,
}

impl Graph {
    pub fn num_rooms(&self) -> usize {
        self.inner.node_count()
    }

    pub fn num_links(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn start(&self) -> NodeIndex {
        self.start
    }

    pub fn end(&self) -> NodeIndex {
        self.end
    }

    pub fn ants(&self) -> usize {
        self.ants
    }

    pub fn room(&self, idx: NodeIndex) -> &Room {
        &self.inner[idx]
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.by_name.get(name).copied()
    }

    pub fn has_link(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.inner.find_edge(a, b).is_some()
    }

    /// Neighbors of `room`, in the order their links were declared in the
    /// input. This order is observable: it drives the BFS tie-break rule.
    pub fn neighbors_ordered(&self, room: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[room.index()]
    }

    pub fn degree(&self, room: NodeIndex) -> usize {
        self.adjacency[room.index()].len()
    }
}

/// Incrementally validates and assembles a [`Graph`] from parsed directives.
///
/// Mirrors the teacher's pattern of a dedicated builder type performing
/// invariant checks (see `SimpleGraph::new`'s bounds assertions) but returns
/// `Result` instead of panicking, since malformed input here is an expected,
/// recoverable outcome (spec: `ERROR: invalid data format`), not a caller bug.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    inner: UnGraph<Room, ()>,
    by_name: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<NodeIndex>>,
    start: Option<NodeIndex>,
    end: Option<NodeIndex>,
    ants: Option<usize>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, name: &str, x: i32, y: i32) -> Result<NodeIndex> {
        if name.starts_with('L') {
            return Err(EngineError::InvalidInput(format!(
                "room name cannot start with 'L': {name}"
            )));
        }
        if name.starts_with('#') {
            return Err(EngineError::InvalidInput(format!(
                "room name cannot start with '#': {name}"
            )));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(EngineError::InvalidInput(format!(
                "room name cannot contain whitespace: {name}"
            )));
        }
        if self.by_name.contains_key(name) {
            return Err(EngineError::InvalidInput(format!(
                "duplicate room declaration: {name}"
            )));
        }
        let idx = self.inner.add_node(Room::new(name, x, y));
        self.by_name.insert(name.to_string(), idx);
        self.adjacency.push(Vec::new());
        Ok(idx)
    }

    pub fn set_start(&mut self, name: &str) -> Result<()> {
        let idx = self.room_index(name)?;
        if self.start.is_some() {
            return Err(EngineError::InvalidInput(
                "exactly one start and one end room are required".into(),
            ));
        }
        self.inner[idx].is_start = true;
        self.start = Some(idx);
        Ok(())
    }

    pub fn set_end(&mut self, name: &str) -> Result<()> {
        let idx = self.room_index(name)?;
        if self.end.is_some() {
            return Err(EngineError::InvalidInput(
                "exactly one start and one end room are required".into(),
            ));
        }
        self.inner[idx].is_end = true;
        self.end = Some(idx);
        Ok(())
    }

    pub fn add_link(&mut self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(EngineError::InvalidInput(format!(
                "self-loop detected: {a}-{b}"
            )));
        }
        let ia = self.room_index(a)?;
        let ib = self.room_index(b)?;
        if self.inner.find_edge(ia, ib).is_some() {
            return Err(EngineError::InvalidInput(format!(
                "duplicate link: {a}-{b}"
            )));
        }
        self.inner.add_edge(ia, ib, ());
        self.adjacency[ia.index()].push(ib);
        self.adjacency[ib.index()].push(ia);
        Ok(())
    }

    pub fn set_ants(&mut self, ants: usize) {
        self.ants = Some(ants);
    }

    fn room_index(&self, name: &str) -> Result<NodeIndex> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::InvalidInput(format!("room not declared: {name}")))
    }

    pub fn build(self) -> Result<Graph> {
        let start = self
            .start
            .ok_or_else(|| EngineError::InvalidInput("missing start room".into()))?;
        let end = self
            .end
            .ok_or_else(|| EngineError::InvalidInput("missing end room".into()))?;
        if start == end {
            return Err(EngineError::InvalidInput(
                "start and end room must differ".into(),
            ));
        }
        let ants = self
            .ants
            .ok_or_else(|| EngineError::InvalidInput("missing number of ants".into()))?;
        if ants == 0 {
            return Err(EngineError::InvalidInput(
                "number of ants must be positive".into(),
            ));
        }
        Ok(Graph {
            inner: self.inner,
            by_name: self.by_name,
            adjacency: self.adjacency,
            start,
            end,
            ants,
        })
    }
}

/// A scoped, mutable clone of a [`Graph`]'s adjacency used by the
/// disjoint-path extractor.
///
/// Rather than cloning and mutating the `petgraph` structure directly (node
/// removal there renumbers indices, which would invalidate every
/// `NodeIndex` the rest of the engine holds), interior-vertex deletion is
/// modeled as a `removed` bit per room, checked when iterating neighbors.
/// This is the "index into a vector of rooms with a removed flag"
/// representation spec's Design Notes call for, and it never touches the
/// `Graph` it was built from.
pub struct WorkingGraph<'g> {
    graph: &'g Graph,
    removed: BitVec,
}

impl<'g> WorkingGraph<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            removed: BitVec::repeat(false, graph.num_rooms()),
        }
    }

    pub fn start(&self) -> NodeIndex {
        self.graph.start()
    }

    pub fn end(&self) -> NodeIndex {
        self.graph.end()
    }

    pub fn num_rooms(&self) -> usize {
        self.graph.num_rooms()
    }

    /// Neighbors of `room` still present in the working copy, in the
    /// graph's stored adjacency order.
    pub fn neighbors(&self, room: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .neighbors_ordered(room)
            .iter()
            .copied()
            .filter(move |n| !self.removed[n.index()])
    }

    /// Deletes `room` (an interior path vertex) from the working copy.
    /// Start and end are never passed here and must remain untouched.
    pub fn remove_interior(&mut self, room: NodeIndex) {
        debug_assert!(room != self.graph.start() && room != self.graph.end());
        self.removed.set(room.index(), true);
    }
}

#[cfg(test)]
#[path = "unit_tests/graph.rs"]
mod tests;
