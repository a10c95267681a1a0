//! Per-cell step pacing derived from wall distance
//!
//! The distance histogram (how common each wall distance is among open cells)
//! is combined with the configured speed weighting through a fuzzy AND, giving
//! a relation table with one row per distance and one column per speed. Each
//! distance then takes the multiplier whose column scores highest in its row,
//! the first column winning exact ties.

use log::debug;
use ndarray::Array2;

use crate::algorithm::replay::StepTiming;
use crate::analysis::distance::{DistanceField, UNREACHABLE};
use crate::io::configuration::{
    BASE_TIME_UNIT_MS, NEUTRAL_SPEED_MULTIPLIER, SPEED_MULTIPLIERS, SPEED_PROBABILITIES,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::fuzzy::{first_argmax, min_relation};
use crate::spatial::grid::Cell;

/// Candidate step multipliers and their weighting
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedProfile {
    /// Step-duration multipliers, in bucket order
    pub multipliers: Vec<f64>,
    /// Weight of each multiplier, parallel to `multipliers`
    pub probabilities: Vec<f64>,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            multipliers: SPEED_MULTIPLIERS.to_vec(),
            probabilities: SPEED_PROBABILITIES.to_vec(),
        }
    }
}

impl SpeedProfile {
    /// Check that the profile is usable
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The profile is empty or the two lists differ in length
    /// - A multiplier is not finite and positive
    /// - A probability is not finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if self.multipliers.is_empty() {
            return Err(invalid_parameter(
                "speed_multipliers",
                &"[]",
                &"at least one multiplier is required",
            ));
        }
        if self.multipliers.len() != self.probabilities.len() {
            return Err(invalid_parameter(
                "speed_probabilities",
                &self.probabilities.len(),
                &format!("expected {} weights", self.multipliers.len()),
            ));
        }
        if let Some(bad) = self
            .multipliers
            .iter()
            .find(|m| !m.is_finite() || **m <= 0.0)
        {
            return Err(invalid_parameter(
                "speed_multipliers",
                bad,
                &"multipliers must be finite and positive",
            ));
        }
        if let Some(bad) = self
            .probabilities
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0)
        {
            return Err(invalid_parameter(
                "speed_probabilities",
                bad,
                &"weights must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Step pacing for every cell of a grid
#[derive(Debug, Clone)]
pub struct SpeedModel {
    base_time_ms: f64,
    field: DistanceField,
    relation: Array2<f64>,
    by_distance: Vec<f64>,
}

impl SpeedModel {
    /// Build the relation table and resolve a multiplier per distance
    pub fn new(field: DistanceField, profile: &SpeedProfile, base_time_ms: f64) -> Self {
        let histogram = field.histogram();
        let relation = min_relation(&histogram, &profile.probabilities);

        let by_distance = relation
            .rows()
            .into_iter()
            .map(|row| {
                first_argmax(row.iter().copied())
                    .and_then(|bucket| profile.multipliers.get(bucket).copied())
                    .unwrap_or(NEUTRAL_SPEED_MULTIPLIER)
            })
            .collect::<Vec<_>>();

        debug!(
            "Speed model over {} distance rows x {} speed buckets: {by_distance:?}",
            relation.nrows(),
            relation.ncols()
        );

        Self {
            base_time_ms,
            field,
            relation,
            by_distance,
        }
    }

    /// Build a model with the default profile and base time unit
    pub fn with_defaults(field: DistanceField) -> Self {
        Self::new(field, &SpeedProfile::default(), BASE_TIME_UNIT_MS)
    }

    /// Multiplier assigned to a given wall distance
    pub fn multiplier_for_distance(&self, distance: u32) -> f64 {
        if distance == UNREACHABLE {
            return NEUTRAL_SPEED_MULTIPLIER;
        }
        self.by_distance
            .get(distance as usize)
            .copied()
            .unwrap_or(NEUTRAL_SPEED_MULTIPLIER)
    }

    /// Multiplier assigned to a cell
    pub fn multiplier(&self, cell: Cell) -> f64 {
        self.multiplier_for_distance(self.field.distance(cell))
    }

    /// Fuzzy relation table, `[distance, speed bucket]`
    pub const fn relation(&self) -> &Array2<f64> {
        &self.relation
    }

    /// Distance field the model was built from
    pub const fn field(&self) -> &DistanceField {
        &self.field
    }

    /// Duration of one step at multiplier 1.0
    pub const fn base_time_ms(&self) -> f64 {
        self.base_time_ms
    }
}

impl StepTiming for SpeedModel {
    fn duration_ms(&self, cell: Cell) -> f64 {
        self.base_time_ms * self.multiplier(cell)
    }
}
