use serde::{Deserialize, Serialize};

use crate::data::model::FeatureOrder;
use crate::error::InferenceError;

/// Standard scaler fitted at training time: `(x - mean) / scale` per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedScaler {
    pub format_version: u32,
    pub feature_order: FeatureOrder,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl FittedScaler {
    /// Internal consistency of the fitted statistics.
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_order.is_empty() {
            return Err("feature_order is empty".to_string());
        }
        let n = self.feature_order.len();
        if let Some(dup) = self.feature_order.first_duplicate() {
            return Err(format!("feature '{dup}' appears twice in feature_order"));
        }
        if self.mean.len() != n || self.scale.len() != n {
            return Err(format!(
                "feature_order has {n} keys but mean has {} and scale has {}",
                self.mean.len(),
                self.scale.len()
            ));
        }
        if let Some(i) = self.mean.iter().position(|v| !v.is_finite()) {
            return Err(format!("mean of '{}' is not finite", self.key(i)));
        }
        if let Some(i) = self
            .scale
            .iter()
            .position(|v| !v.is_finite() || *v == 0.0)
        {
            return Err(format!("scale of '{}' is zero or not finite", self.key(i)));
        }
        Ok(())
    }

    pub fn transform(&self, raw: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if raw.len() != self.mean.len() {
            return Err(InferenceError::Shape {
                stage: "scaler",
                expected: self.mean.len(),
                found: raw.len(),
            });
        }
        let scaled: Vec<f64> = raw
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect();
        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite { stage: "scaler" });
        }
        Ok(scaled)
    }

    fn key(&self, index: usize) -> &str {
        self.feature_order.get(index).unwrap_or("?")
    }
}
