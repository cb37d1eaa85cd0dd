//! CSV readers for measurement datasets.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ndarray::Array1;

/// Read a headerless single-column CSV of measurements.
///
/// # Arguments
///
/// * `path` - File with one f64 measurement per row.
///
/// # Returns
///
/// The measurements in file order.
pub fn read_measurements_csv<P: AsRef<Path>>(path: P) -> Result<Array1<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| {
            format!(
                "Failed to open measurement file: {}",
                path.as_ref().display()
            )
        })?;

    let mut values = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let field = record
            .get(0)
            .ok_or_else(|| anyhow!("Empty row {}", row_idx + 1))?;
        let value = field
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid measurement '{}' at row {}", field, row_idx + 1))?;
        values.push(value);
    }

    Ok(Array1::from_vec(values))
}

/// Read a headerless two-column `value,label` CSV.
///
/// Label 1 marks class A, label 0 class C.
///
/// # Returns
///
/// The measurements and a parallel class-A indicator vector.
pub fn read_labeled_measurements_csv<P: AsRef<Path>>(path: P) -> Result<(Array1<f64>, Vec<bool>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("Failed to open labeled file: {}", path.as_ref().display()))?;

    let mut values = Vec::new();
    let mut labels = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let value = record
            .get(0)
            .ok_or_else(|| anyhow!("Missing value at row {}", row_idx + 1))?
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid measurement at row {}", row_idx + 1))?;

        let label = match record
            .get(1)
            .ok_or_else(|| anyhow!("Missing label at row {}", row_idx + 1))?
            .trim()
        {
            "1" => true,
            "0" => false,
            other => {
                return Err(anyhow!(
                    "Invalid label '{}' at row {} (expected 0 or 1)",
                    other,
                    row_idx + 1
                ))
            }
        };

        values.push(value);
        labels.push(label);
    }

    Ok((Array1::from_vec(values), labels))
}
