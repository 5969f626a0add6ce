use std::collections::BTreeMap;

use super::model::{Dataset, FeatureRecord, NormalizedRecord};
use crate::error::SchemaMismatchError;

/// Output for a feature whose observed range is zero.
pub const ZERO_RANGE_FALLBACK: f64 = 0.0;

// ---------------------------------------------------------------------------
// Per-feature bounds
// ---------------------------------------------------------------------------

/// Observed `[min, max]` of one feature; `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureBounds {
    pub min: f64,
    pub max: f64,
}

impl FeatureBounds {
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_zero_range(&self) -> bool {
        self.range().abs() < f64::EPSILON
    }

    /// Min-max rescale. Not clamped: values outside the observed range
    /// land below 0 or above 1.
    pub fn rescale(&self, value: f64) -> f64 {
        if self.is_zero_range() {
            ZERO_RANGE_FALLBACK
        } else {
            (value - self.min) / self.range()
        }
    }
}

/// Feature key → observed bounds, derived once from the dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizationBounds {
    bounds: BTreeMap<String, FeatureBounds>,
}

impl NormalizationBounds {
    pub fn get(&self, key: &str) -> Option<FeatureBounds> {
        self.bounds.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Min and max of every feature column across all records.
pub fn compute_bounds(dataset: &Dataset) -> NormalizationBounds {
    let mut bounds = BTreeMap::new();

    for key in dataset.feature_order.iter() {
        let (min, max) = dataset
            .column(key)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        // no values for this key
        if min > max {
            continue;
        }
        let b = FeatureBounds { min, max };
        if b.is_zero_range() {
            log::warn!(
                "Feature '{key}' is constant ({min}) across the dataset; it normalizes to {ZERO_RANGE_FALLBACK}"
            );
        }
        bounds.insert(key.to_string(), b);
    }

    NormalizationBounds { bounds }
}

/// Rescale every value of `record` to the unit interval of its feature.
pub fn normalize(
    record: &FeatureRecord,
    bounds: &NormalizationBounds,
) -> Result<NormalizedRecord, SchemaMismatchError> {
    record
        .iter()
        .map(|(key, value)| -> Result<(String, f64), SchemaMismatchError> {
            let b = bounds
                .get(key)
                .ok_or_else(|| SchemaMismatchError::UnexpectedFeature(key.to_string()))?;
            Ok((key.to_string(), b.rescale(value)))
        })
        .collect()
}
