//! Error types shared by generation, search and replay

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::{Cell, Direction};

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Heap `pop` or `top` called with no elements
    ///
    /// Signals a caller bug: every consumer checks `is_empty` first.
    EmptyHeap,

    /// Configuration validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid dimensions leave no odd/odd interior room cell to carve from
    DegenerateGrid {
        /// Requested grid width
        width: usize,
        /// Requested grid height
        height: usize,
    },

    /// Start or end cell ended up impassable after the layout was generated
    BlockedEndpoint {
        /// The blocked endpoint
        cell: Cell,
    },

    /// A replayed move would carry the token off the grid
    InvalidMove {
        /// Token position before the move
        from: Cell,
        /// Direction of the rejected move
        direction: Direction,
    },

    /// Replay driven out of order
    ///
    /// Occurs when:
    /// - `start` is called while a step is still animating
    /// - a completion arrives while nothing is in flight
    ReplayState {
        /// Description of the violated sequencing rule
        reason: &'static str,
    },

    /// Failed to encode or save an exported image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHeap => write!(f, "No element in heap"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DegenerateGrid { width, height } => {
                write!(
                    f,
                    "Grid {width}x{height} is too small to hold an interior room cell"
                )
            }
            Self::BlockedEndpoint { cell } => {
                write!(f, "Endpoint {cell} is blocked")
            }
            Self::InvalidMove { from, direction } => {
                write!(f, "Move {direction:?} from {from} leaves the grid")
            }
            Self::ReplayState { reason } => {
                write!(f, "Replay sequencing violated: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
