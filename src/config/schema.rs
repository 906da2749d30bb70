use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::grades::WeightingTable;

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// grades_file: ~/noten/grades.yaml
/// subjects:
///   - { name: Mathematik, weighting: 1.0 }
///   - { name: Deutsch }
/// prediction:
///   target_average: 4.75
///   next_weight: 1.0
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grade sheet used when `--grades` is not given. A leading `~/` is
    /// expanded to the home directory.
    #[serde(default)]
    pub grades_file: Option<PathBuf>,

    /// Subject weighting table for predictions
    #[serde(default)]
    pub subjects: Vec<SubjectConfig>,

    #[serde(default)]
    pub prediction: Option<PredictionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grades_file: None,
            subjects: vec![
                SubjectConfig {
                    name: "Mathematik".to_string(),
                    weighting: 1.0,
                },
                SubjectConfig {
                    name: "Deutsch".to_string(),
                    weighting: 1.0,
                },
            ],
            prediction: None,
        }
    }
}

impl Config {
    /// Build the weighting table from the configured subjects
    pub fn weighting_table(&self) -> WeightingTable {
        self.subjects
            .iter()
            .map(|s| (s.name.clone(), s.weighting))
            .collect()
    }

    /// Grade sheet path with a leading `~` expanded
    pub fn grades_path(&self) -> Option<PathBuf> {
        self.grades_file.as_deref().map(expand_home)
    }

    /// Target average from the config, if any
    pub fn target_average(&self) -> Option<f64> {
        self.prediction.as_ref().and_then(|p| p.target_average)
    }

    /// Next assessment weight from the config, falling back to 1.0
    pub fn next_weight(&self) -> f64 {
        self.prediction
            .as_ref()
            .and_then(|p| p.next_weight)
            .unwrap_or(DEFAULT_NEXT_WEIGHT)
    }
}

pub const DEFAULT_NEXT_WEIGHT: f64 = 1.0;

/// Replace a leading `~` component with the home directory.
/// Paths without it, or with no known home directory, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

fn default_weighting() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SubjectConfig {
    pub name: String,

    /// Weighting factor (default: 1.0)
    #[serde(default = "default_weighting")]
    pub weighting: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PredictionConfig {
    #[serde(default)]
    pub target_average: Option<f64>,

    #[serde(default)]
    pub next_weight: Option<f64>,
}
