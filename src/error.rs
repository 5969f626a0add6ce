use std::path::PathBuf;

use thiserror::Error;

/// The dataset file is missing, malformed, or lacks required columns.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read dataset {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("dataset has unexpected column '{0}'")]
    UnexpectedColumn(String),

    #[error("dataset has column '{0}' more than once")]
    DuplicateColumn(String),

    #[error("row {row}, column '{column}': '{value}' is not a finite number")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: unknown diagnosis code '{code}' (expected M or B)")]
    InvalidDiagnosis { row: usize, code: String },

    #[error("dataset {} contains no records", .0.display())]
    Empty(PathBuf),
}

/// A fitted scaler or classifier could not be loaded.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("cannot read artifact {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse artifact {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {} has format version {found}, supported version is {supported}", .path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    #[error("artifact {} is invalid: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("scaler and classifier were fitted on different feature orders")]
    Schema(#[from] SchemaMismatchError),
}

/// Live input and fitted artifacts disagree on feature keys or their order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaMismatchError {
    #[error("feature '{0}' is missing from the input record")]
    MissingFeature(String),

    #[error("feature '{0}' is not part of the fitted feature order")]
    UnexpectedFeature(String),

    #[error("{left} lists {left_len} features but {right} lists {right_len}")]
    LengthMismatch {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },

    #[error("{left} and {right} disagree at position {position}: '{expected}' vs '{found}'")]
    OrderMismatch {
        left: String,
        right: String,
        position: usize,
        expected: String,
        found: String,
    },
}

/// Numerical failure while scaling or scoring a feature vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("feature '{key}' has non-finite value {value}")]
    NonFiniteInput { key: String, value: f64 },

    #[error("{stage} expects {expected} values, got {found}")]
    Shape {
        stage: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{stage} produced a non-finite value")]
    NonFinite { stage: &'static str },
}

/// Failure of a single prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Schema(#[from] SchemaMismatchError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Failure to build the session context from dataset and artifacts.
#[derive(Debug, Error)]
pub enum ContextLoadError {
    #[error(transparent)]
    Data(#[from] DataLoadError),

    #[error(transparent)]
    Artifact(#[from] ArtifactLoadError),

    #[error("artifacts were fitted on a different schema than the dataset")]
    Schema(#[from] SchemaMismatchError),
}
