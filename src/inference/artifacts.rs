use std::path::Path;

use serde::de::DeserializeOwned;

use super::classifier::FittedClassifier;
use super::scaler::FittedScaler;
use crate::data::model::FeatureOrder;
use crate::error::ArtifactLoadError;

/// Artifact format version this build reads.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Fitted scaler and classifier, loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelArtifacts {
    pub scaler: FittedScaler,
    pub classifier: FittedClassifier,
}

impl ModelArtifacts {
    /// Read and validate both artifacts. Their feature orders must agree.
    pub fn load(scaler_path: &Path, model_path: &Path) -> Result<Self, ArtifactLoadError> {
        let scaler: FittedScaler = read_json(scaler_path)?;
        check_version(scaler_path, scaler.format_version)?;
        scaler.validate().map_err(|reason| ArtifactLoadError::Invalid {
            path: scaler_path.to_path_buf(),
            reason,
        })?;

        let classifier: FittedClassifier = read_json(model_path)?;
        check_version(model_path, classifier.format_version())?;
        classifier
            .validate()
            .map_err(|reason| ArtifactLoadError::Invalid {
                path: model_path.to_path_buf(),
                reason,
            })?;

        scaler
            .feature_order
            .ensure_matches(classifier.feature_order(), "scaler", "classifier")?;

        log::info!(
            "Loaded scaler {} and classifier {} ({} features)",
            scaler_path.display(),
            model_path.display(),
            scaler.feature_order.len()
        );

        Ok(ModelArtifacts { scaler, classifier })
    }

    /// Column order both artifacts were fitted with.
    pub fn feature_order(&self) -> &FeatureOrder {
        &self.scaler.feature_order
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| ArtifactLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn check_version(path: &Path, found: u32) -> Result<(), ArtifactLoadError> {
    if found == ARTIFACT_FORMAT_VERSION {
        Ok(())
    } else {
        Err(ArtifactLoadError::UnsupportedVersion {
            path: path.to_path_buf(),
            found,
            supported: ARTIFACT_FORMAT_VERSION,
        })
    }
}
