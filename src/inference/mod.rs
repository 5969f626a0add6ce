/// Inference layer: fitted artifacts and the prediction pipeline.
///
/// ```text
///   FeatureRecord ──► raw vector (feature_order) ──► scaler ──► classifier ──► PredictionResult
/// ```
pub mod artifacts;
pub mod classifier;
pub mod scaler;

use crate::data::model::{Diagnosis, FeatureOrder, FeatureRecord};
use crate::error::{InferenceError, PredictError, SchemaMismatchError};

use classifier::FittedClassifier;
use scaler::FittedScaler;

/// A cluster is classified malignant when `probability_malignant >= MALIGNANT_THRESHOLD`.
pub const MALIGNANT_THRESHOLD: f64 = 0.5;

/// Class probabilities for one feature record. They sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub probability_benign: f64,
    pub probability_malignant: f64,
}

impl PredictionResult {
    pub fn diagnosis(&self) -> Diagnosis {
        if self.probability_malignant >= MALIGNANT_THRESHOLD {
            Diagnosis::Malignant
        } else {
            Diagnosis::Benign
        }
    }
}

/// Scale `record` with the fitted scaler and score it with the classifier.
///
/// `feature_order` is the schema the caller believes the artifacts were
/// fitted on; both artifacts must agree with it exactly.
pub fn predict(
    record: &FeatureRecord,
    scaler: &FittedScaler,
    classifier: &FittedClassifier,
    feature_order: &FeatureOrder,
) -> Result<PredictionResult, PredictError> {
    scaler
        .feature_order
        .ensure_matches(feature_order, "scaler", "input schema")?;
    classifier
        .feature_order()
        .ensure_matches(feature_order, "classifier", "input schema")?;

    let raw = assemble_vector(record, feature_order)?;
    let scaled = scaler.transform(&raw)?;
    let [probability_benign, probability_malignant] = classifier.predict_proba(&scaled)?;

    let result = PredictionResult {
        probability_benign,
        probability_malignant,
    };
    log::debug!(
        "Prediction: benign {:.4}, malignant {:.4} → {}",
        probability_benign,
        probability_malignant,
        result.diagnosis()
    );
    Ok(result)
}

/// Raw values of `record` in `feature_order`. Every key must be present,
/// no other key may be, and every value must be finite.
pub fn assemble_vector(
    record: &FeatureRecord,
    feature_order: &FeatureOrder,
) -> Result<Vec<f64>, PredictError> {
    if let Some(extra) = record.keys().find(|key| !feature_order.contains(key)) {
        return Err(SchemaMismatchError::UnexpectedFeature(extra.to_string()).into());
    }
    feature_order
        .iter()
        .map(|key| -> Result<f64, PredictError> {
            let value = record
                .get(key)
                .ok_or_else(|| SchemaMismatchError::MissingFeature(key.to_string()))?;
            if !value.is_finite() {
                return Err(InferenceError::NonFiniteInput {
                    key: key.to_string(),
                    value,
                }
                .into());
            }
            Ok(value)
        })
        .collect()
}
