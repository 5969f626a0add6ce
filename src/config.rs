use std::path::{Path, PathBuf};

use clap::Parser;

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Startup configuration. The only setting is the data root.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "cyto-predict",
    version,
    about = "Breast cytology predictor with a radar chart of cell nuclei measurements"
)]
pub struct AppConfig {
    /// Folder containing data/data.csv and model/{scaler,model}.json
    #[arg(value_name = "DATA_ROOT", default_value = ".")]
    pub root: PathBuf,
}

/// Locations of the dataset and the two fitted artifacts under a data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub dataset: PathBuf,
    pub scaler: PathBuf,
    pub model: PathBuf,
}

impl AppPaths {
    pub fn under(root: &Path) -> Self {
        AppPaths {
            dataset: root.join("data").join("data.csv"),
            scaler: root.join("model").join("scaler.json"),
            model: root.join("model").join("model.json"),
        }
    }
}
