use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::AppPaths;
use crate::context::PredictorContext;
use crate::data::features::SliderSpec;
use crate::data::model::FeatureRecord;
use crate::data::radar::{radar_series, RadarSeries};
use crate::error::PredictError;
use crate::inference::PredictionResult;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Predictor,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub page: Page,

    /// Data root the context was (or failed to be) loaded from.
    pub root: PathBuf,

    /// Dataset, bounds and artifacts (None until a load succeeds).
    pub context: Option<PredictorContext>,

    /// One slider per feature, derived from the dataset.
    pub sliders: Vec<SliderSpec>,

    /// Current slider values.
    pub inputs: FeatureRecord,

    /// Chart traces for the current inputs.
    pub radar: Vec<RadarSeries>,

    /// Classifier output for the current inputs.
    pub prediction: Option<PredictionResult>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::default(),
            root: PathBuf::from("."),
            context: None,
            sliders: Vec::new(),
            inputs: FeatureRecord::new(),
            radar: Vec::new(),
            prediction: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Load dataset and artifacts from `root`, replacing the current context.
    /// On failure the previous context is dropped and the error is shown.
    pub fn load_from(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        match load_context(root) {
            Ok(context) => self.set_context(context),
            Err(e) => {
                log::error!("Failed to load predictor data: {e:#}");
                self.context = None;
                self.sliders.clear();
                self.inputs = FeatureRecord::new();
                self.radar.clear();
                self.prediction = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded context, reset sliders to the dataset means.
    pub fn set_context(&mut self, context: PredictorContext) {
        self.sliders = context.sliders();
        self.inputs = context.default_inputs();
        self.context = Some(context);
        self.status_message = None;
        self.recompute();
    }

    pub fn reset_inputs(&mut self) {
        if let Some(ctx) = &self.context {
            self.inputs = ctx.default_inputs();
            self.recompute();
        }
    }

    /// Set one slider value and recompute chart and prediction.
    pub fn set_input(&mut self, key: &str, value: f64) {
        self.inputs.insert(key, value);
        self.recompute();
    }

    /// Normalize the inputs, rebuild the radar traces and re-run the
    /// classifier. Any failure clears the outputs and is reported.
    pub fn recompute(&mut self) {
        let Some(ctx) = &self.context else {
            return;
        };

        let outcome = ctx
            .normalize(&self.inputs)
            .and_then(|normalized| radar_series(&normalized))
            .map_err(PredictError::from)
            .and_then(|radar| Ok((radar, ctx.predict(&self.inputs)?)));

        match outcome {
            Ok((radar, prediction)) => {
                self.radar = radar;
                self.prediction = Some(prediction);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Prediction failed: {e}");
                self.radar.clear();
                self.prediction = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

fn load_context(root: &Path) -> Result<PredictorContext> {
    let paths = AppPaths::under(root);
    PredictorContext::load(&paths)
        .with_context(|| format!("loading predictor data from {}", root.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Diagnosis;
    use crate::fixtures;

    #[test]
    fn set_context_starts_from_dataset_means() {
        let mut state = AppState::default();
        state.set_context(fixtures::context());

        assert_eq!(state.sliders.len(), 30);
        assert_eq!(state.inputs.get("radius_mean"), Some(1.75));
        assert_eq!(state.radar.len(), 3);
        assert_eq!(state.prediction.map(|p| p.diagnosis()), Some(Diagnosis::Malignant));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn slider_change_recomputes_prediction() {
        let mut state = AppState::default();
        state.set_context(fixtures::context());
        let before = state.prediction.unwrap();

        // radius_mean carries a positive weight; dropping it to zero lowers the score
        state.set_input("radius_mean", 0.0);
        let after = state.prediction.unwrap();
        assert!(after.probability_malignant < before.probability_malignant);
        assert_eq!(state.radar[0].values[0], -2.0 / 3.0);

        state.reset_inputs();
        assert_eq!(state.prediction.unwrap(), before);
    }

    #[test]
    fn non_finite_input_clears_outputs_and_reports() {
        let mut state = AppState::default();
        state.set_context(fixtures::context());

        state.set_input("area_mean", f64::INFINITY);
        assert!(state.prediction.is_none());
        assert!(state.radar.is_empty());
        assert!(state.status_message.as_deref().unwrap().contains("area_mean"));
    }

    #[test]
    fn load_from_reports_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.load_from(dir.path());

        assert!(state.context.is_none());
        let msg = state.status_message.unwrap();
        assert!(msg.starts_with("Error: loading predictor data from"));
        assert!(msg.contains("data.csv"));
    }

    #[test]
    fn load_from_populates_state() {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_root(dir.path());
        let mut state = AppState::default();
        state.load_from(dir.path());

        assert!(state.context.is_some());
        assert_eq!(state.root, dir.path());
        assert!(state.prediction.is_some());
    }
}
