//! Grid analysis feeding the step pacing

/// Multi-source distance transform from blocked cells
pub mod distance;
/// Fuzzy speed selection per wall distance
pub mod speed;
