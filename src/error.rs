//! Error types for the lemin engine.

use thiserror::Error;

/// Errors that can occur while validating, routing, or simulating an ant farm.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The input graph is malformed: bad room names, duplicate directives,
    /// missing start/end, self-loops, unknown rooms in a link, or a
    /// non-positive ant count.
    #[error("invalid data format: {0}")]
    InvalidInput(String),

    /// No path exists from start to end.
    #[error("no valid paths found")]
    Unreachable,

    /// The movement simulator exceeded its safety bound on turns. Indicates
    /// a bug in path selection or distribution, never a property of
    /// well-formed input.
    #[error("internal: simulation exceeded {0} turns without finishing")]
    InternalBound(usize),
}

/// Result type alias for lemin operations.
pub type Result<T> = std::result::Result<T, EngineError>;
