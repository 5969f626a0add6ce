use super::model::{Dataset, FeatureOrder};

// ---------------------------------------------------------------------------
// Cell nuclei measurements
// ---------------------------------------------------------------------------

/// Statistic reported for each base measurement over the nuclei of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statistic {
    Mean,
    StandardError,
    Worst,
}

impl Statistic {
    /// Column-block order of the dataset: every `_mean` key, then `_se`, then `_worst`.
    pub const ALL: [Statistic; 3] = [Statistic::Mean, Statistic::StandardError, Statistic::Worst];

    /// Suffix used in the dataset column names.
    pub fn suffix(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::StandardError => "se",
            Statistic::Worst => "worst",
        }
    }

    /// Name of the radar chart trace for this statistic.
    pub fn series_name(self) -> &'static str {
        match self {
            Statistic::Mean => "Mean Value",
            Statistic::StandardError => "Standard Error",
            Statistic::Worst => "Worst Value",
        }
    }
}

/// One of the ten base measurements of a cell nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Column stem, e.g. `concave points`.
    pub stem: &'static str,
    /// Slider label, e.g. `Concave points`.
    pub label: &'static str,
    /// Radar chart category, e.g. `Concave Points`.
    pub category: &'static str,
}

impl Measurement {
    pub fn key(&self, statistic: Statistic) -> String {
        format!("{}_{}", self.stem, statistic.suffix())
    }

    pub fn slider_label(&self, statistic: Statistic) -> String {
        format!("{} ({})", self.label, statistic.suffix())
    }
}

const fn measurement(stem: &'static str, label: &'static str, category: &'static str) -> Measurement {
    Measurement {
        stem,
        label,
        category,
    }
}

pub const MEASUREMENTS: [Measurement; 10] = [
    measurement("radius", "Radius", "Radius"),
    measurement("texture", "Texture", "Texture"),
    measurement("perimeter", "Perimeter", "Perimeter"),
    measurement("area", "Area", "Area"),
    measurement("smoothness", "Smoothness", "Smoothness"),
    measurement("compactness", "Compactness", "Compactness"),
    measurement("concavity", "Concavity", "Concavity"),
    measurement("concave points", "Concave points", "Concave Points"),
    measurement("symmetry", "Symmetry", "Symmetry"),
    measurement("fractal_dimension", "Fractal dimension", "Fractal Dimension"),
];

pub const FEATURE_COUNT: usize = MEASUREMENTS.len() * Statistic::ALL.len();

/// The 30 feature keys in dataset column order.
pub fn canonical_feature_order() -> FeatureOrder {
    Statistic::ALL
        .iter()
        .flat_map(|&stat| MEASUREMENTS.iter().map(move |m| m.key(stat)))
        .collect()
}

// ---------------------------------------------------------------------------
// Slider specifications
// ---------------------------------------------------------------------------

/// Range and default for one measurement slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    pub key: String,
    pub label: String,
    pub statistic: Statistic,
    /// Upper bound of the slider; the lower bound is always `0.0`.
    pub max: f64,
    pub default: f64,
}

/// One slider per feature key: range `[0, observed max]`, default the dataset mean.
pub fn slider_specs(dataset: &Dataset) -> Vec<SliderSpec> {
    Statistic::ALL
        .iter()
        .flat_map(|&stat| MEASUREMENTS.iter().map(move |m| (stat, m)))
        .filter_map(|(stat, m)| {
            let key = m.key(stat);
            let max = dataset.max(&key)?;
            let default = dataset.mean(&key)?;
            Some(SliderSpec {
                label: m.slider_label(stat),
                key,
                statistic: stat,
                max,
                default,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn canonical_order_has_thirty_keys_in_column_blocks() {
        let order = canonical_feature_order();
        assert_eq!(order.len(), FEATURE_COUNT);
        assert_eq!(order.get(0), Some("radius_mean"));
        assert_eq!(order.get(7), Some("concave points_mean"));
        assert_eq!(order.get(10), Some("radius_se"));
        assert_eq!(order.get(29), Some("fractal_dimension_worst"));
    }

    #[test]
    fn slider_labels_follow_measurement_and_statistic() {
        let m = MEASUREMENTS[7];
        assert_eq!(m.slider_label(Statistic::StandardError), "Concave points (se)");
        assert_eq!(m.key(Statistic::Worst), "concave points_worst");
    }

    #[test]
    fn sliders_span_zero_to_max_with_mean_default() {
        let dataset = fixtures::dataset();
        let specs = slider_specs(&dataset);
        assert_eq!(specs.len(), FEATURE_COUNT);

        let radius = &specs[0];
        assert_eq!(radius.key, "radius_mean");
        assert_eq!(radius.label, "Radius (mean)");
        assert!((radius.max - 2.5).abs() < 1e-12);
        assert!((radius.default - 1.75).abs() < 1e-12);
        assert!(specs.iter().all(|s| s.default <= s.max));
    }
}
