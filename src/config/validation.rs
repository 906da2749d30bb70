use std::collections::HashSet;

use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// Non-positive subject weights are accepted; the predictor ignores them.
/// `prediction.next_weight` is not checked here: it can be overridden on the
/// command line, and `predict` rejects a zero weight itself.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, subject) in config.subjects.iter().enumerate() {
        if subject.name.trim().is_empty() {
            errors.push(format!("subjects[{}].name: must not be empty", i));
        } else if !seen.insert(subject.name.as_str()) {
            errors.push(format!(
                "subjects[{}].name: duplicate subject '{}'",
                i, subject.name
            ));
        }
        if !subject.weighting.is_finite() {
            errors.push(format!(
                "subjects[{}].weighting: must be a finite number, got {}",
                i, subject.weighting
            ));
        }
    }

    if let Some(ref prediction) = config.prediction {
        if let Some(target) = prediction.target_average {
            if !target.is_finite() {
                errors.push(format!(
                    "prediction.target_average: must be a finite number, got {}",
                    target
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PredictionConfig, SubjectConfig};
    use crate::grades::GradeRecord;
    use crate::scoring::{predict, ScoringError};
    use chrono::NaiveDate;

    fn subject(name: &str, weighting: f64) -> SubjectConfig {
        SubjectConfig {
            name: name.to_string(),
            weighting,
        }
    }

    #[test]
    fn test_default_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_non_positive_weight_accepted() {
        let config = Config {
            subjects: vec![subject("Turnen", 0.0), subject("Zeichnen", -1.0)],
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_duplicate_subject() {
        let config = Config {
            subjects: vec![subject("Deutsch", 1.0), subject("Deutsch", 2.0)],
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("subjects[1].name"));
    }

    #[test]
    fn test_empty_subject_name() {
        let config = Config {
            subjects: vec![subject("  ", 1.0)],
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("must not be empty"));
    }

    #[test]
    fn test_zero_next_weight_left_to_predict() {
        let config = Config {
            prediction: Some(PredictionConfig {
                target_average: Some(4.75),
                next_weight: Some(0.0),
            }),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());

        let records = vec![GradeRecord::new(
            4.0,
            "Mathematik",
            "Prüfung",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )];
        let weights = config.weighting_table();
        let result = predict(&records, &weights, 4.75, config.next_weight());
        assert!(matches!(result, Err(ScoringError::InvalidArgument(_))));
        // A command-line weight replaces the configured zero
        assert!(predict(&records, &weights, 4.75, 1.0).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            grades_file: None,
            subjects: vec![subject("", 1.0), subject("Mathematik", f64::NAN)],
            prediction: Some(PredictionConfig {
                target_average: Some(f64::INFINITY),
                next_weight: Some(0.0),
            }),
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
