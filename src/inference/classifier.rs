use serde::{Deserialize, Serialize};

use crate::data::model::FeatureOrder;
use crate::error::InferenceError;

/// A fitted binary classifier, tagged by `kind` in the artifact file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FittedClassifier {
    LogisticRegression(LogisticRegression),
}

impl FittedClassifier {
    pub fn format_version(&self) -> u32 {
        match self {
            FittedClassifier::LogisticRegression(m) => m.format_version,
        }
    }

    pub fn feature_order(&self) -> &FeatureOrder {
        match self {
            FittedClassifier::LogisticRegression(m) => &m.feature_order,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            FittedClassifier::LogisticRegression(m) => m.validate(),
        }
    }

    /// `[P(benign), P(malignant)]` for one scaled feature vector.
    pub fn predict_proba(&self, scaled: &[f64]) -> Result<[f64; 2], InferenceError> {
        match self {
            FittedClassifier::LogisticRegression(m) => m.predict_proba(scaled),
        }
    }
}

// ---------------------------------------------------------------------------
// Logistic regression
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub format_version: u32,
    pub feature_order: FeatureOrder,
    /// Class labels in probability-column order; must be `[0, 1]`.
    pub classes: Vec<u8>,
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_order.is_empty() {
            return Err("feature_order is empty".to_string());
        }
        let n = self.feature_order.len();
        if let Some(dup) = self.feature_order.first_duplicate() {
            return Err(format!("feature '{dup}' appears twice in feature_order"));
        }
        if self.classes != [0, 1] {
            return Err(format!("classes must be [0, 1], got {:?}", self.classes));
        }
        if self.coef.len() != n {
            return Err(format!(
                "feature_order has {n} keys but coef has {}",
                self.coef.len()
            ));
        }
        if self.coef.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err("coefficients must be finite".to_string());
        }
        Ok(())
    }

    /// Log-odds of the malignant class.
    pub fn decision_function(&self, scaled: &[f64]) -> Result<f64, InferenceError> {
        if scaled.len() != self.coef.len() {
            return Err(InferenceError::Shape {
                stage: "classifier",
                expected: self.coef.len(),
                found: scaled.len(),
            });
        }
        let z = self
            .coef
            .iter()
            .zip(scaled)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        if !z.is_finite() {
            return Err(InferenceError::NonFinite {
                stage: "classifier",
            });
        }
        Ok(z)
    }

    pub fn predict_proba(&self, scaled: &[f64]) -> Result<[f64; 2], InferenceError> {
        let malignant = sigmoid(self.decision_function(scaled)?);
        Ok([1.0 - malignant, malignant])
    }
}

/// Logistic function without overflow for large `|z|`.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
