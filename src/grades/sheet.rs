use super::types::GradeRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load grade records from a grade sheet.
///
/// The sheet is a top-level list of records. Files ending in `.json` are read
/// as JSON, everything else as YAML. Record order is preserved.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or does not
/// parse as a list of grade records.
pub fn load_grades(path: &Path) -> Result<Vec<GradeRecord>> {
    if !path.exists() {
        anyhow::bail!("Grade sheet not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read grade sheet at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records: Vec<GradeRecord> = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse grade sheet: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse grade sheet: invalid YAML in {}", path.display()))?
    };

    tracing::debug!(count = records.len(), path = %path.display(), "loaded grade sheet");
    Ok(records)
}
