use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaMismatchError;

// ---------------------------------------------------------------------------
// Diagnosis – the binary label
// ---------------------------------------------------------------------------

/// Diagnosis of a cell cluster, either from the dataset or from the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Diagnosis {
    Benign,
    Malignant,
}

impl Diagnosis {
    /// Map the dataset's categorical code (`M` / `B`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Diagnosis::Malignant),
            "B" => Some(Diagnosis::Benign),
            _ => None,
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnosis::Benign => write!(f, "Benign"),
            Diagnosis::Malignant => write!(f, "Malignant"),
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureOrder – the column order the artifacts were fitted with
// ---------------------------------------------------------------------------

/// Ordered list of feature keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureOrder(Vec<String>);

impl FeatureOrder {
    pub fn new(keys: Vec<String>) -> Self {
        FeatureOrder(keys)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    /// First key that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = BTreeSet::new();
        self.iter().find(|key| !seen.insert(*key))
    }

    /// Require `other` to list exactly the same keys in exactly the same order.
    /// `this` and `that` name the two sides in the error.
    pub fn ensure_matches(
        &self,
        other: &FeatureOrder,
        this: &str,
        that: &str,
    ) -> Result<(), SchemaMismatchError> {
        if self.len() != other.len() {
            return Err(SchemaMismatchError::LengthMismatch {
                left: this.to_string(),
                left_len: self.len(),
                right: that.to_string(),
                right_len: other.len(),
            });
        }
        match self.iter().zip(other.iter()).position(|(a, b)| a != b) {
            None => Ok(()),
            Some(position) => Err(SchemaMismatchError::OrderMismatch {
                left: this.to_string(),
                right: that.to_string(),
                position,
                expected: self.0[position].clone(),
                found: other.0[position].clone(),
            }),
        }
    }
}

impl FromIterator<String> for FeatureOrder {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        FeatureOrder::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// FeatureRecord – one set of measurements
// ---------------------------------------------------------------------------

/// Feature key → value. Used for dataset rows, slider inputs and
/// normalized values alike.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRecord {
    values: BTreeMap<String, f64>,
}

/// A [`FeatureRecord`] rescaled by the display normalizer.
pub type NormalizedRecord = FeatureRecord;

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(key.into(), value)
    }

    #[cfg(test)]
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl FromIterator<(String, f64)> for FeatureRecord {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        FeatureRecord {
            values: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded training table
// ---------------------------------------------------------------------------

/// Labelled records with the column order they were read in.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature columns in file order (identifier and label excluded).
    pub feature_order: FeatureOrder,
    pub records: Vec<FeatureRecord>,
    /// One label per record.
    pub labels: Vec<Diagnosis>,
}

impl Dataset {
    pub fn new(feature_order: FeatureOrder, records: Vec<FeatureRecord>, labels: Vec<Diagnosis>) -> Self {
        debug_assert_eq!(records.len(), labels.len());
        Dataset {
            feature_order,
            records,
            labels,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// All values of one feature column.
    pub fn column<'a>(&'a self, key: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.records.iter().filter_map(move |r| r.get(key))
    }

    pub fn max(&self, key: &str) -> Option<f64> {
        self.column(key).reduce(f64::max)
    }

    pub fn mean(&self, key: &str) -> Option<f64> {
        let (sum, n) = self
            .column(key)
            .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
        (n > 0).then(|| sum / n as f64)
    }

    /// Column-wise mean of every feature.
    pub fn mean_record(&self) -> FeatureRecord {
        self.feature_order
            .iter()
            .filter_map(|key| self.mean(key).map(|m| (key.to_string(), m)))
            .collect()
    }

    pub fn count(&self, diagnosis: Diagnosis) -> usize {
        self.labels.iter().filter(|&&d| d == diagnosis).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn diagnosis_codes_map_to_labels() {
        assert_eq!(Diagnosis::from_code("M"), Some(Diagnosis::Malignant));
        assert_eq!(Diagnosis::from_code("B"), Some(Diagnosis::Benign));
        assert_eq!(Diagnosis::from_code("X"), None);
        assert_eq!(Diagnosis::from_code("m"), None);
    }

    #[test]
    fn ensure_matches_reports_first_differing_position() {
        let a: FeatureOrder = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        let b: FeatureOrder = ["x", "z", "y"].iter().map(|s| s.to_string()).collect();
        assert!(a.ensure_matches(&a.clone(), "a", "a").is_ok());
        match a.ensure_matches(&b, "scaler", "dataset") {
            Err(SchemaMismatchError::OrderMismatch { position, expected, found, .. }) => {
                assert_eq!(position, 1);
                assert_eq!(expected, "y");
                assert_eq!(found, "z");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        let short: FeatureOrder = ["x".to_string()].into_iter().collect();
        assert!(matches!(
            a.ensure_matches(&short, "a", "b"),
            Err(SchemaMismatchError::LengthMismatch { left_len: 3, right_len: 1, .. })
        ));
    }

    #[test]
    fn first_duplicate_finds_repeated_key() {
        let order: FeatureOrder = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(order.first_duplicate(), Some("a"));
        assert_eq!(fixtures::dataset().feature_order.first_duplicate(), None);
    }

    #[test]
    fn dataset_statistics() {
        let ds = fixtures::dataset();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.count(Diagnosis::Malignant), 2);
        assert_eq!(ds.count(Diagnosis::Benign), 2);
        // area_mean is feature 3: values 4, 6, 8, 10
        assert_eq!(ds.max("area_mean"), Some(10.0));
        assert_eq!(ds.mean("area_mean"), Some(7.0));
        assert_eq!(ds.mean("no_such_feature"), None);

        let mean = ds.mean_record();
        assert_eq!(mean.len(), 30);
        assert_eq!(mean.get("area_mean"), Some(7.0));
    }
}
