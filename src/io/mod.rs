//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of the arena
pub mod image;
/// Terminal progress display during replay
pub mod progress;
/// Recording presenter, animation clock and GIF export
pub mod visualization;
