use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use super::features::canonical_feature_order;
use super::model::{Dataset, Diagnosis, FeatureOrder, FeatureRecord};
use crate::error::DataLoadError;

/// Identifier column, dropped on load.
pub const ID_COLUMN: &str = "id";
/// Categorical label column (`M` / `B`).
pub const DIAGNOSIS_COLUMN: &str = "diagnosis";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the labelled cytology dataset from a CSV file.
///
/// CSV layout: header row, an `id` column, a `diagnosis` column holding `M`
/// or `B`, and the 30 feature columns. A trailing comma on every line yields
/// an extra column with an empty header. `id` is dropped. Blank-header and
/// pandas `Unnamed: N` columns are dropped only when every cell is empty.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_error = |source: csv::Error| DataLoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let diagnosis_idx = headers
        .iter()
        .position(|h| h == DIAGNOSIS_COLUMN)
        .ok_or_else(|| DataLoadError::MissingColumn(DIAGNOSIS_COLUMN.to_string()))?;

    let feature_columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|&(idx, h)| idx != diagnosis_idx && h != ID_COLUMN && !is_filler_column(h))
        .map(|(idx, h)| (idx, h.as_str()))
        .collect();
    let filler_columns: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|&(idx, h)| idx != diagnosis_idx && is_filler_column(h))
        .map(|(idx, _)| idx)
        .collect();
    let feature_order = check_feature_columns(&feature_columns)?;

    let mut records = Vec::new();
    let mut labels = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        // 1-based data row, header excluded
        let row = row_no + 1;

        let code = record.get(diagnosis_idx).unwrap_or("");
        let diagnosis = Diagnosis::from_code(code).ok_or_else(|| DataLoadError::InvalidDiagnosis {
            row,
            code: code.to_string(),
        })?;

        if let Some(&idx) = filler_columns
            .iter()
            .find(|&&idx| record.get(idx).is_some_and(|cell| !cell.is_empty()))
        {
            return Err(DataLoadError::UnexpectedColumn(filler_name(&headers[idx], idx)));
        }

        let mut features = FeatureRecord::new();
        for &(col_idx, name) in &feature_columns {
            let raw = record.get(col_idx).unwrap_or("");
            let value = parse_finite(raw).ok_or_else(|| DataLoadError::InvalidValue {
                row,
                column: name.to_string(),
                value: raw.to_string(),
            })?;
            features.insert(name, value);
        }

        records.push(features);
        labels.push(diagnosis);
    }

    if records.is_empty() {
        return Err(DataLoadError::Empty(path.to_path_buf()));
    }

    Ok(Dataset::new(feature_order, records, labels))
}

// ---------------------------------------------------------------------------
// Column handling
// ---------------------------------------------------------------------------

/// Export artifacts: the empty trailing column and pandas index columns.
fn is_filler_column(header: &str) -> bool {
    header.is_empty() || header.starts_with("Unnamed")
}

fn filler_name(header: &str, idx: usize) -> String {
    if header.is_empty() {
        format!("<blank header, column {}>", idx + 1)
    } else {
        header.to_string()
    }
}

/// The remaining columns must be exactly the canonical feature keys, each once.
/// Their file order becomes the dataset's feature order.
fn check_feature_columns(columns: &[(usize, &str)]) -> Result<FeatureOrder, DataLoadError> {
    let expected = canonical_feature_order();
    let mut seen = BTreeSet::new();

    for &(_, name) in columns {
        if !expected.contains(name) {
            return Err(DataLoadError::UnexpectedColumn(name.to_string()));
        }
        if !seen.insert(name) {
            return Err(DataLoadError::DuplicateColumn(name.to_string()));
        }
    }
    if let Some(missing) = expected.iter().find(|key| !seen.contains(key)) {
        return Err(DataLoadError::MissingColumn(missing.to_string()));
    }

    Ok(columns.iter().map(|&(_, name)| name.to_string()).collect())
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
