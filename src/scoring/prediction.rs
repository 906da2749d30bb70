use serde::Serialize;

use super::composite::round2;
use super::error::ScoringError;
use crate::grades::{GradeRecord, WeightingTable};

/// Message reported when no weighted grades exist yet.
pub const NO_DATA_MESSAGE: &str = "Noch keine Noten vorhanden.";

/// Outcome of a target-grade prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    /// Grade needed on the next assessment. Not clamped to any grade scale: a
    /// value above the scale's maximum means the target is out of reach.
    Required {
        required_grade: f64,
        current_weight: f64,
        next_weight: f64,
    },
    /// No weighted grades exist, so the target itself is echoed back.
    NoData { required_grade: f64, message: String },
}

impl Prediction {
    pub fn required_grade(&self) -> f64 {
        match self {
            Prediction::Required { required_grade, .. }
            | Prediction::NoData { required_grade, .. } => *required_grade,
        }
    }
}

/// Predict the grade needed on an upcoming assessment of weight `next_weight`
/// so that the weighted average of all grades reaches `target_average`.
///
/// Records whose subject is missing from `weights`, or whose weight is not
/// positive, do not contribute.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidArgument`] when `next_weight` is zero or not
/// finite.
pub fn predict(
    records: &[GradeRecord],
    weights: &WeightingTable,
    target_average: f64,
    next_weight: f64,
) -> Result<Prediction, ScoringError> {
    if next_weight == 0.0 || !next_weight.is_finite() {
        return Err(ScoringError::InvalidArgument(format!(
            "next_weight must be a non-zero finite number, got {}",
            next_weight
        )));
    }

    let mut total_score = 0.0;
    let mut total_weight = 0.0;

    for record in records {
        match weights.get(&record.subject) {
            Some(weight) if weight > 0.0 => {
                total_score += record.value * weight;
                total_weight += weight;
            }
            Some(weight) => {
                tracing::debug!(subject = %record.subject, weight, "skipping grade with non-positive weight");
            }
            None => {
                tracing::debug!(subject = %record.subject, "skipping grade for unweighted subject");
            }
        }
    }

    tracing::debug!(total_score, total_weight, "prediction sums");

    if total_weight == 0.0 {
        return Ok(Prediction::NoData {
            required_grade: target_average,
            message: NO_DATA_MESSAGE.to_string(),
        });
    }

    let required = (target_average * (total_weight + next_weight) - total_score) / next_weight;

    Ok(Prediction::Required {
        required_grade: round2(required),
        current_weight: total_weight,
        next_weight,
    })
}
