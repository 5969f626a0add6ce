use crate::config::AppPaths;
use crate::data::features::{slider_specs, SliderSpec, FEATURE_COUNT};
use crate::data::loader::load_dataset;
use crate::data::model::{Dataset, FeatureOrder, FeatureRecord, NormalizedRecord};
use crate::data::normalize::{compute_bounds, normalize, NormalizationBounds};
use crate::error::{ContextLoadError, PredictError, SchemaMismatchError};
use crate::inference::artifacts::ModelArtifacts;
use crate::inference::{predict, PredictionResult};

// ---------------------------------------------------------------------------
// Session context
// ---------------------------------------------------------------------------

/// Everything that is loaded once per session: the dataset, its
/// normalization bounds and the fitted artifacts. Immutable after
/// construction; the UI passes it by reference into every recomputation.
#[derive(Debug, Clone)]
pub struct PredictorContext {
    dataset: Dataset,
    bounds: NormalizationBounds,
    artifacts: ModelArtifacts,
}

impl PredictorContext {
    pub fn load(paths: &AppPaths) -> Result<Self, ContextLoadError> {
        let dataset = load_dataset(&paths.dataset)?;
        log::info!(
            "Loaded {} records ({} features) from {}",
            dataset.len(),
            dataset.feature_order.len(),
            paths.dataset.display()
        );
        let artifacts = ModelArtifacts::load(&paths.scaler, &paths.model)?;
        Ok(Self::from_parts(dataset, artifacts)?)
    }

    /// Check that the artifacts were fitted on the dataset's column order,
    /// then derive the bounds.
    pub fn from_parts(dataset: Dataset, artifacts: ModelArtifacts) -> Result<Self, SchemaMismatchError> {
        artifacts
            .feature_order()
            .ensure_matches(&dataset.feature_order, "fitted artifacts", "dataset")?;
        let bounds = compute_bounds(&dataset);
        if bounds.len() < FEATURE_COUNT {
            log::warn!(
                "Only {} of {FEATURE_COUNT} features have observed bounds",
                bounds.len()
            );
        }
        Ok(PredictorContext {
            dataset,
            bounds,
            artifacts,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn feature_order(&self) -> &FeatureOrder {
        &self.dataset.feature_order
    }

    pub fn sliders(&self) -> Vec<SliderSpec> {
        slider_specs(&self.dataset)
    }

    /// Slider defaults: the dataset mean of every feature.
    pub fn default_inputs(&self) -> FeatureRecord {
        self.dataset.mean_record()
    }

    pub fn normalize(&self, record: &FeatureRecord) -> Result<NormalizedRecord, SchemaMismatchError> {
        normalize(record, &self.bounds)
    }

    pub fn predict(&self, record: &FeatureRecord) -> Result<PredictionResult, PredictError> {
        predict(
            record,
            &self.artifacts.scaler,
            &self.artifacts.classifier,
            self.feature_order(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArtifactLoadError;
    use crate::fixtures;

    #[test]
    fn loads_from_data_root() {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_root(dir.path());

        let ctx = PredictorContext::load(&AppPaths::under(dir.path())).unwrap();
        assert_eq!(ctx.dataset().len(), 4);
        assert_eq!(ctx.normalize(&ctx.default_inputs()).unwrap().len(), 30);
        assert_eq!(ctx.sliders().len(), 30);
    }

    #[test]
    fn missing_model_surfaces_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_root(dir.path());
        std::fs::remove_file(dir.path().join("model").join("model.json")).unwrap();

        let err = PredictorContext::load(&AppPaths::under(dir.path())).unwrap_err();
        assert!(matches!(err, ContextLoadError::Artifact(ArtifactLoadError::Io { .. })));
    }

    #[test]
    fn missing_dataset_surfaces_data_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PredictorContext::load(&AppPaths::under(dir.path())).unwrap_err();
        assert!(matches!(err, ContextLoadError::Data(_)));
    }

    #[test]
    fn artifacts_fitted_on_other_order_are_rejected() {
        let mut ds = fixtures::dataset();
        let mut keys: Vec<String> = ds.feature_order.iter().map(str::to_string).collect();
        keys.swap(28, 29);
        ds.feature_order = FeatureOrder::new(keys);

        let err = PredictorContext::from_parts(ds, fixtures::artifacts()).unwrap_err();
        assert!(matches!(err, SchemaMismatchError::OrderMismatch { position: 28, .. }));
    }

    #[test]
    fn default_inputs_predict_and_normalize() {
        let ctx = fixtures::context();
        let inputs = ctx.default_inputs();

        let normalized = ctx.normalize(&inputs).unwrap();
        assert!(normalized.iter().all(|(_, v)| (v - 0.5).abs() < 1e-9));

        let first = ctx.predict(&inputs).unwrap();
        let second = ctx.predict(&inputs).unwrap();
        assert_eq!(first, second);
    }
}
