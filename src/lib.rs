//! Randomized maze carving, heuristic path search and paced move replay
//!
//! A maze is carved as a random spanning tree over odd/odd room cells, searched
//! from a start cell to an end cell, and the resulting moves are replayed one
//! animated step at a time. Each step's duration depends on how far its cell
//! lies from the nearest wall.

#![forbid(unsafe_code)]

/// Generation, search and replay
pub mod algorithm;
/// Wall-distance analysis and step pacing
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Fuzzy combinators and seeded randomness
pub mod math;
/// Grid, cells and visited sets
pub mod spatial;

pub use algorithm::search::{Move, Strategy};
pub use algorithm::session::{Layout, Session, SessionConfig};
pub use io::error::{MazeError, Result};
