use serde::Serialize;

use super::composite::round2;
use crate::grades::GradeRecord;

/// Plain mean of every grade recorded for one subject, regardless of type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAverage {
    pub name: String,
    pub weighting: f64,
    /// `None` when the subject has no grades yet
    pub average: Option<f64>,
    pub count: usize,
}

/// Per-subject averages for the configured subjects, in configuration order.
///
/// Grades for subjects that are not configured are not listed.
pub fn subject_averages<'a, I>(subjects: I, records: &[GradeRecord]) -> Vec<SubjectAverage>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    subjects
        .into_iter()
        .map(|(name, weighting)| {
            let (sum, count) = records
                .iter()
                .filter(|r| r.subject == name)
                .fold((0.0, 0_usize), |(sum, count), r| (sum + r.value, count + 1));

            SubjectAverage {
                name: name.to_string(),
                weighting,
                average: (count > 0).then(|| round2(sum / count as f64)),
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn grade(value: f64, subject: &str, assessment_type: &str) -> GradeRecord {
        GradeRecord::new(
            value,
            subject,
            assessment_type,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        )
    }

    #[test]
    fn test_mixed_types_averaged_together() {
        let records = vec![
            grade(5.0, "Mathematik", "Vornote"),
            grade(4.0, "Mathematik", "Gymiprüfung"),
            grade(4.5, "Mathematik", "Mündlich"),
        ];
        let averages = subject_averages([("Mathematik", 2.0)], &records);
        assert_eq!(
            averages,
            vec![SubjectAverage {
                name: "Mathematik".to_string(),
                weighting: 2.0,
                average: Some(4.5),
                count: 3,
            }]
        );
    }

    #[test]
    fn test_subject_without_grades_is_none() {
        let records = vec![grade(5.0, "Mathematik", "Vornote")];
        let averages = subject_averages([("Mathematik", 1.0), ("Deutsch", 1.0)], &records);
        assert_eq!(averages[1].name, "Deutsch");
        assert_eq!(averages[1].average, None);
        assert_eq!(averages[1].count, 0);
    }

    #[test]
    fn test_unconfigured_subject_not_listed() {
        let records = vec![
            grade(5.0, "Deutsch", "Aufsatz"),
            grade(3.0, "Englisch", "Vornote"),
        ];
        let averages = subject_averages([("Deutsch", 1.0)], &records);
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].average, Some(5.0));
        assert!(averages.iter().all(|a| a.name != "Englisch"));
    }

    #[test]
    fn test_average_rounded() {
        let records = vec![
            grade(4.0, "Deutsch", "Vornote"),
            grade(4.0, "Deutsch", "Aufsatz"),
            grade(5.0, "Deutsch", "Sprachbetrachtung"),
        ];
        let averages = subject_averages([("Deutsch", 1.0)], &records);
        assert_eq!(averages[0].average, Some(4.33));
    }

    #[test]
    fn test_serializes_null_average() {
        let averages = subject_averages([("Deutsch", 1.0)], &[]);
        let json = serde_json::to_value(&averages).unwrap();
        assert!(json[0]["average"].is_null());
        assert_eq!(json[0]["count"], 0);
    }
}
