use serde::{Deserialize, Serialize};

use super::composite::{BucketAverages, CompositeScore};
use super::vocabulary::Bucket;

/// Directly entered component grades for a "what if" calculation.
///
/// Each value stands in for the average of its bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct SimulatedGrades {
    pub math_pre_exam: Option<f64>,
    pub german_pre_exam: Option<f64>,
    pub math_exam: Option<f64>,
    pub german_essay: Option<f64>,
    pub german_language_analysis: Option<f64>,
}

impl SimulatedGrades {
    fn to_averages(self) -> BucketAverages {
        let mut averages = BucketAverages::default();
        averages.set(Bucket::PreExamMath, self.math_pre_exam);
        averages.set(Bucket::PreExamGerman, self.german_pre_exam);
        averages.set(Bucket::ExamMath, self.math_exam);
        averages.set(Bucket::ExamGermanEssay, self.german_essay);
        averages.set(Bucket::ExamGermanLanguageAnalysis, self.german_language_analysis);
        averages
    }
}

/// Simulate the composite score from component grades.
///
/// Returns `None` when no component is given; otherwise the same fallback
/// tree, rounding and pass rule as [`super::score`] apply.
pub fn simulate(grades: &SimulatedGrades) -> Option<CompositeScore> {
    let averages = grades.to_averages();
    if averages.is_empty() {
        return None;
    }
    Some(averages.compose())
}
