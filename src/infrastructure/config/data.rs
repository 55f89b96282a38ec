//! Input file locations.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Prediction rows, as a JSON array.
    #[serde(default = "default_predictions")]
    pub predictions: PathBuf,
}

fn default_predictions() -> PathBuf {
    PathBuf::from("predictions.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            predictions: default_predictions(),
        }
    }
}
