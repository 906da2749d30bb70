use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single recorded grade as supplied by the grade sheet.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GradeRecord {
    pub value: f64,
    pub subject: String, // e.g. "Mathematik", "Deutsch"
    #[serde(rename = "type")]
    pub assessment_type: String, // e.g. "Vornote", "Aufsatz (Gymiprüfung)"
    pub date: NaiveDate, // display only, never used in computation
}

impl GradeRecord {
    pub fn new(value: f64, subject: &str, assessment_type: &str, date: NaiveDate) -> Self {
        Self {
            value,
            subject: subject.to_string(),
            assessment_type: assessment_type.to_string(),
            date,
        }
    }
}

/// Subject name to weighting factor, used by the target predictor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightingTable {
    weights: HashMap<String, f64>,
}

impl WeightingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a subject's weight. Unknown subjects return None (no implicit 1.0).
    pub fn get(&self, subject: &str) -> Option<f64> {
        self.weights.get(subject).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for WeightingTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(s, w)| (s.into(), w)).collect(),
        }
    }
}
