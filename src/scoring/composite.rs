use serde::Serialize;

use super::vocabulary::{classify, Bucket};
use crate::grades::GradeRecord;

/// Minimum unrounded composite that counts as passed.
pub const PASS_THRESHOLD: f64 = 4.75;

/// Composite admission score ("Gesamtnote") with its breakdown.
///
/// Field names keep the German report keys, so the JSON
/// form is `{ average, details: { vornote, exam }, passed }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeScore {
    pub average: f64,
    pub details: ScoreDetails,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDetails {
    #[serde(rename = "vornote")]
    pub pre_exam: PreExamScore,
    pub exam: ExamScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreExamScore {
    pub value: Option<f64>,
    pub math: Option<f64>,
    #[serde(rename = "deutsch")]
    pub german: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExamScore {
    pub value: Option<f64>,
    pub math: Option<f64>,
    #[serde(rename = "deutsch")]
    pub german: GermanExamScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GermanExamScore {
    pub value: Option<f64>,
    #[serde(rename = "aufsatz")]
    pub essay: Option<f64>,
    #[serde(rename = "sprachbetrachtung")]
    pub language_analysis: Option<f64>,
}

/// Round to two decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average of both sides when both are present, otherwise whichever one is.
fn combine(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Per-bucket arithmetic means. `None` means the bucket had no grades.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct BucketAverages([Option<f64>; 5]);

impl BucketAverages {
    pub(crate) fn from_records(records: &[GradeRecord]) -> Self {
        let mut sums = [0.0_f64; 5];
        let mut counts = [0_usize; 5];

        for record in records {
            if let Some(bucket) = classify(&record.subject, &record.assessment_type) {
                sums[bucket.index()] += record.value;
                counts[bucket.index()] += 1;
            }
        }

        let mut averages = Self::default();
        for bucket in Bucket::ALL {
            let i = bucket.index();
            tracing::debug!(bucket = bucket.label(), count = counts[i], "bucket size");
            if counts[i] > 0 {
                averages.set(bucket, Some(sums[i] / counts[i] as f64));
            }
        }
        averages
    }

    pub(crate) fn set(&mut self, bucket: Bucket, value: Option<f64>) {
        self.0[bucket.index()] = value;
    }

    pub(crate) fn get(&self, bucket: Bucket) -> Option<f64> {
        self.0[bucket.index()]
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Run the fallback tree over the bucket means and build the rounded result.
    pub(crate) fn compose(&self) -> CompositeScore {
        let math_pre_exam = self.get(Bucket::PreExamMath);
        let german_pre_exam = self.get(Bucket::PreExamGerman);
        let math_exam = self.get(Bucket::ExamMath);
        let essay = self.get(Bucket::ExamGermanEssay);
        let language_analysis = self.get(Bucket::ExamGermanLanguageAnalysis);

        let german_exam = combine(essay, language_analysis);
        let pre_exam = combine(math_pre_exam, german_pre_exam);
        let exam = combine(math_exam, german_exam);
        let composite = combine(pre_exam, exam).unwrap_or(0.0);

        tracing::debug!(?pre_exam, ?exam, composite, "composite computed");

        CompositeScore {
            average: round2(composite),
            details: ScoreDetails {
                pre_exam: PreExamScore {
                    value: pre_exam.map(round2),
                    math: math_pre_exam.map(round2),
                    german: german_pre_exam.map(round2),
                },
                exam: ExamScore {
                    value: exam.map(round2),
                    math: math_exam.map(round2),
                    german: GermanExamScore {
                        value: german_exam.map(round2),
                        essay: essay.map(round2),
                        language_analysis: language_analysis.map(round2),
                    },
                },
            },
            passed: composite >= PASS_THRESHOLD,
        }
    }
}

/// Compute the composite admission score from a student's grade records.
///
/// Records whose subject/type pair is not in the vocabulary are ignored. An
/// empty or fully unmatched input yields an average of `0.0` and `passed =
/// false` with every breakdown leaf absent.
pub fn score(records: &[GradeRecord]) -> CompositeScore {
    BucketAverages::from_records(records).compose()
}
