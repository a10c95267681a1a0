//! Mathematical utilities shared by generation and pacing

/// Pointwise-minimum relations and first-index argmax
pub mod fuzzy;
/// Seeded inclusive integer draws
pub mod random;
