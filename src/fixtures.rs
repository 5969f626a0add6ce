//! Shared test data: a four-row dataset over the 30 canonical features and
//! artifacts fitted to it.
//!
//! Feature `j` of row `i` is `(j + 1) * (1 + 0.5 * i)`, so each column is
//! evenly spaced and its mean sits exactly mid-range. Rows 0-1 are benign,
//! rows 2-3 malignant.

use std::path::{Path, PathBuf};

use crate::context::PredictorContext;
use crate::data::features::canonical_feature_order;
use crate::data::model::{Dataset, Diagnosis, FeatureRecord};
use crate::inference::artifacts::{ModelArtifacts, ARTIFACT_FORMAT_VERSION};
use crate::inference::classifier::{FittedClassifier, LogisticRegression};
use crate::inference::scaler::FittedScaler;

pub const LABELS: [Diagnosis; 4] = [
    Diagnosis::Benign,
    Diagnosis::Benign,
    Diagnosis::Malignant,
    Diagnosis::Malignant,
];

pub fn feature_value(row: usize, feature: usize) -> f64 {
    (feature as f64 + 1.0) * (1.0 + 0.5 * row as f64)
}

pub fn dataset() -> Dataset {
    let order = canonical_feature_order();
    let records = (0..LABELS.len())
        .map(|row| {
            order
                .iter()
                .enumerate()
                .map(|(j, key)| (key.to_string(), feature_value(row, j)))
                .collect::<FeatureRecord>()
        })
        .collect();
    Dataset::new(order, records, LABELS.to_vec())
}

/// The dataset as it appears on disk: `id`, `diagnosis`, 30 features and a
/// trailing comma on every line.
pub fn dataset_csv() -> String {
    let order = canonical_feature_order();
    let mut out = String::from("id,diagnosis,");
    for key in order.iter() {
        out.push_str(key);
        out.push(',');
    }
    out.push('\n');

    for (row, label) in LABELS.iter().enumerate() {
        let code = match label {
            Diagnosis::Benign => "B",
            Diagnosis::Malignant => "M",
        };
        out.push_str(&format!("{},{code},", 842300 + row));
        for j in 0..order.len() {
            out.push_str(&format!("{},", feature_value(row, j)));
        }
        out.push('\n');
    }
    out
}

/// Standardises feature `j` to `(x - 1.5c) / c` with `c = j + 1`.
pub fn scaler() -> FittedScaler {
    let order = canonical_feature_order();
    let n = order.len();
    FittedScaler {
        format_version: ARTIFACT_FORMAT_VERSION,
        feature_order: order,
        mean: (0..n).map(|j| 1.5 * (j as f64 + 1.0)).collect(),
        scale: (0..n).map(|j| j as f64 + 1.0).collect(),
    }
}

/// Weights alternate 0.4 / -0.1 (sum 4.5), intercept -1.
pub fn classifier() -> FittedClassifier {
    let order = canonical_feature_order();
    let n = order.len();
    FittedClassifier::LogisticRegression(LogisticRegression {
        format_version: ARTIFACT_FORMAT_VERSION,
        feature_order: order,
        classes: vec![0, 1],
        coef: (0..n).map(|j| if j % 2 == 0 { 0.4 } else { -0.1 }).collect(),
        intercept: -1.0,
    })
}

pub fn artifacts() -> ModelArtifacts {
    ModelArtifacts {
        scaler: scaler(),
        classifier: classifier(),
    }
}

pub fn context() -> PredictorContext {
    PredictorContext::from_parts(dataset(), artifacts()).unwrap()
}

/// Write `scaler.json` and `model.json` into `dir`.
pub fn write_artifacts(dir: &Path, artifacts: &ModelArtifacts) -> (PathBuf, PathBuf) {
    let scaler_path = dir.join("scaler.json");
    let model_path = dir.join("model.json");
    std::fs::write(&scaler_path, serde_json::to_string_pretty(&artifacts.scaler).unwrap()).unwrap();
    std::fs::write(&model_path, serde_json::to_string_pretty(&artifacts.classifier).unwrap()).unwrap();
    (scaler_path, model_path)
}

/// Lay out a complete data root: `data/data.csv` plus `model/*.json`.
pub fn write_root(root: &Path) {
    std::fs::create_dir_all(root.join("data")).unwrap();
    std::fs::create_dir_all(root.join("model")).unwrap();
    std::fs::write(root.join("data").join("data.csv"), dataset_csv()).unwrap();
    write_artifacts(&root.join("model"), &artifacts());
}
