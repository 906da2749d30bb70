use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::grades::GradeRecord;
use crate::scoring::{classify, CompositeScore, Prediction, SubjectAverage};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format an optional sub-score with two decimals, "-" when absent
pub fn format_grade(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

fn verdict(passed: bool, use_colors: bool) -> String {
    let text = if passed { "BESTANDEN" } else { "NICHT BESTANDEN" };
    match (use_colors, passed) {
        (false, _) => text.to_string(),
        (true, true) => text.green().bold().to_string(),
        (true, false) => text.red().bold().to_string(),
    }
}

/// Format the composite score and its breakdown as an indented tree
pub fn format_score_report(result: &CompositeScore, use_colors: bool) -> String {
    let average = format!("{:.2}", result.average);
    let average = if use_colors {
        average.bold().to_string()
    } else {
        average
    };

    let pre_exam = &result.details.pre_exam;
    let exam = &result.details.exam;

    [
        format!("Gesamtnote: {}  {}", average, verdict(result.passed, use_colors)),
        format!("  Vornote: {}", format_grade(pre_exam.value)),
        format!("    Mathematik: {}", format_grade(pre_exam.math)),
        format!("    Deutsch: {}", format_grade(pre_exam.german)),
        format!("  Prüfung: {}", format_grade(exam.value)),
        format!("    Mathematik: {}", format_grade(exam.math)),
        format!("    Deutsch: {}", format_grade(exam.german.value)),
        format!("      Aufsatz: {}", format_grade(exam.german.essay)),
        format!(
            "      Sprachbetrachtung: {}",
            format_grade(exam.german.language_analysis)
        ),
    ]
    .join("\n")
}

/// Format a prediction for the terminal
pub fn format_prediction(prediction: &Prediction, target_average: f64, use_colors: bool) -> String {
    match prediction {
        Prediction::Required {
            required_grade,
            current_weight,
            next_weight,
        } => {
            let grade = format!("{:.2}", required_grade);
            let grade = if use_colors {
                grade.bold().to_string()
            } else {
                grade
            };
            format!(
                "Benötigte Note für {:.2}: {}\n  Bisheriges Gewicht: {}\n  Gewicht nächste Prüfung: {}",
                target_average, grade, current_weight, next_weight
            )
        }
        Prediction::NoData { message, .. } => {
            if use_colors {
                message.yellow().to_string()
            } else {
                message.clone()
            }
        }
    }
}

/// Format grade records one per line: date, subject, type, value.
/// Records outside the scoring vocabulary are marked as ignored.
pub fn format_grade_list(records: &[GradeRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "Noch keine Noten vorhanden.".to_string();
    }

    records
        .iter()
        .map(|r| {
            let line = format!(
                "{}  {:<10}  {:<32}  {:.2}",
                r.date, r.subject, r.assessment_type, r.value
            );
            let counted = classify(&r.subject, &r.assessment_type).is_some();
            match (counted, use_colors) {
                (true, _) => line,
                (false, true) => format!("{}", format!("{}  (ignored)", line).dimmed()),
                (false, false) => format!("{}  (ignored)", line),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the subject table: weighting, plain average and grade count
pub fn format_subjects(subjects: &[SubjectAverage], use_colors: bool) -> String {
    if subjects.is_empty() {
        return "No subjects configured.".to_string();
    }

    subjects
        .iter()
        .map(|s| {
            let average = format_grade(s.average);
            if use_colors {
                format!(
                    "{:<16} x{:<4}  Ø {}  ({} Noten)",
                    s.name.cyan(),
                    s.weighting,
                    average.bold(),
                    s.count
                )
            } else {
                format!(
                    "{:<16} x{:<4}  Ø {}  ({} Noten)",
                    s.name, s.weighting, average, s.count
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON for `--json` output
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score, subject_averages, NO_DATA_MESSAGE};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_format_grade() {
        assert_eq!(format_grade(Some(4.5)), "4.50");
        assert_eq!(format_grade(Some(0.0)), "0.00");
        assert_eq!(format_grade(None), "-");
    }

    #[test]
    fn test_format_score_report_full() {
        let records = vec![
            GradeRecord::new(5.0, "Mathematik", "Vornote", date()),
            GradeRecord::new(5.0, "Deutsch", "Vornote", date()),
            GradeRecord::new(4.0, "Mathematik", "Prüfung", date()),
            GradeRecord::new(4.0, "Deutsch", "Aufsatz", date()),
            GradeRecord::new(6.0, "Deutsch", "Sprachbetrachtung", date()),
        ];
        let report = format_score_report(&score(&records), false);
        assert!(report.starts_with("Gesamtnote: 4.75  BESTANDEN"));
        assert!(report.contains("  Vornote: 5.00"));
        assert!(report.contains("  Prüfung: 4.50"));
        assert!(report.contains("      Sprachbetrachtung: 6.00"));
    }

    #[test]
    fn test_format_score_report_empty() {
        let report = format_score_report(&score(&[]), false);
        assert!(report.starts_with("Gesamtnote: 0.00  NICHT BESTANDEN"));
        assert!(report.contains("  Vornote: -"));
        assert!(report.contains("      Aufsatz: -"));
    }

    #[test]
    fn test_format_prediction_required() {
        let prediction = Prediction::Required {
            required_grade: 6.0,
            current_weight: 1.0,
            next_weight: 1.0,
        };
        let text = format_prediction(&prediction, 5.0, false);
        assert!(text.contains("Benötigte Note für 5.00: 6.00"));
        assert!(text.contains("Bisheriges Gewicht: 1"));
    }

    #[test]
    fn test_format_prediction_no_data() {
        let prediction = Prediction::NoData {
            required_grade: 5.0,
            message: NO_DATA_MESSAGE.to_string(),
        };
        assert_eq!(format_prediction(&prediction, 5.0, false), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_format_grade_list_marks_ignored() {
        let records = vec![
            GradeRecord::new(5.0, "Mathematik", "Vornote", date()),
            GradeRecord::new(4.0, "Englisch", "Vornote", date()),
        ];
        let text = format_grade_list(&records, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2024-01-15  Mathematik"));
        assert!(!lines[0].contains("(ignored)"));
        assert!(lines[1].ends_with("(ignored)"));
    }

    #[test]
    fn test_format_subjects() {
        let records = vec![
            GradeRecord::new(5.0, "Mathematik", "Vornote", date()),
            GradeRecord::new(4.0, "Mathematik", "Prüfung", date()),
            GradeRecord::new(6.0, "Englisch", "Vornote", date()),
        ];
        let subjects = subject_averages([("Mathematik", 2.0), ("Deutsch", 1.0)], &records);
        let text = format_subjects(&subjects, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Mathematik"));
        assert!(lines[0].contains("x2"));
        assert!(lines[0].contains("Ø 4.50  (2 Noten)"));
        assert!(lines[1].contains("Ø -  (0 Noten)"));
        assert!(!text.contains("Englisch"));
        assert_eq!(format_subjects(&[], false), "No subjects configured.");
    }

    #[test]
    fn test_to_json_reports_serialization_failure() {
        // JSON object keys must be strings
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), 3.0);
        let err = to_json(&map).unwrap_err();
        assert!(err.to_string().contains("Failed to serialize"));
    }

    #[test]
    fn test_to_json_score() {
        let json = to_json(&score(&[])).unwrap();
        assert!(json.contains("\"average\": 0.0"));
        assert!(json.contains("\"vornote\""));
    }
}
