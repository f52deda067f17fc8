//! Shortest-path primitives and the disjoint-path extractor built on them.

mod bfs;
mod disjoint;

pub use bfs::shortest_path;
pub use disjoint::extract_disjoint_paths;
