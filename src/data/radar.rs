use super::features::{MEASUREMENTS, Statistic};
use super::model::NormalizedRecord;
use crate::error::SchemaMismatchError;

/// Radial axis of the chart is fixed to this range.
pub const RADIAL_RANGE: [f64; 2] = [0.0, 1.0];

/// One closed trace of the radar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub statistic: Statistic,
    /// One value per category, in [`categories`] order.
    pub values: Vec<f64>,
}

impl RadarSeries {
    pub fn name(&self) -> &'static str {
        self.statistic.series_name()
    }
}

/// Angular axis labels.
pub fn categories() -> impl Iterator<Item = &'static str> {
    MEASUREMENTS.iter().map(|m| m.category)
}

/// Mean, standard-error and worst traces from a normalized record.
pub fn radar_series(normalized: &NormalizedRecord) -> Result<Vec<RadarSeries>, SchemaMismatchError> {
    Statistic::ALL
        .iter()
        .map(|&statistic| -> Result<RadarSeries, SchemaMismatchError> {
            let values = MEASUREMENTS
                .iter()
                .map(|m| {
                    let key = m.key(statistic);
                    normalized
                        .get(&key)
                        .ok_or(SchemaMismatchError::MissingFeature(key))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RadarSeries { statistic, values })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normalize::{compute_bounds, normalize};
    use crate::fixtures;

    #[test]
    fn three_series_of_ten_values() {
        let ds = fixtures::dataset();
        let bounds = compute_bounds(&ds);
        let normalized = normalize(&ds.records[3], &bounds).unwrap();

        let series = radar_series(&normalized).unwrap();
        let names: Vec<_> = series.iter().map(RadarSeries::name).collect();
        assert_eq!(names, ["Mean Value", "Standard Error", "Worst Value"]);
        assert!(series.iter().all(|s| s.values.len() == 10));
        assert_eq!(categories().nth(7), Some("Concave Points"));
    }

    #[test]
    fn mean_record_series_match_computed_normalization() {
        let ds = fixtures::dataset();
        let bounds = compute_bounds(&ds);
        let mean = ds.mean_record();
        let series = radar_series(&normalize(&mean, &bounds).unwrap()).unwrap();

        for s in &series {
            for (m, value) in MEASUREMENTS.iter().zip(&s.values) {
                let key = m.key(s.statistic);
                let b = bounds.get(&key).unwrap();
                let expected = (ds.mean(&key).unwrap() - b.min) / (b.max - b.min);
                assert!((value - expected).abs() < 1e-12, "{key}");
                // the fixture's columns are evenly spaced, so the mean sits mid-range
                assert!((value - 0.5).abs() < 1e-9, "{key}");
            }
        }
    }

    #[test]
    fn missing_key_is_reported() {
        let ds = fixtures::dataset();
        let bounds = compute_bounds(&ds);
        let mut normalized = normalize(&ds.records[0], &bounds).unwrap();
        normalized.remove("symmetry_worst");
        assert_eq!(
            radar_series(&normalized),
            Err(SchemaMismatchError::MissingFeature("symmetry_worst".to_string()))
        );
    }
}
