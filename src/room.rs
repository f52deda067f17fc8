//! Room: a single vertex in the ant farm graph.

use serde::{Deserialize, Serialize};

/// A room in the ant farm.
///
/// Coordinates are carried through from the input file for completeness but
/// are never read by the routing or simulation logic — only `name` and the
/// `is_start`/`is_end` flags participate in the engine's behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub is_start: bool,
    pub is_end: bool,
}

impl Room {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            is_start: false,
            is_end: false,
        }
    }
}
