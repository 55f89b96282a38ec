use std::path::Path;

use tracing::debug;

use crate::domain::{PredictionRecord, PredictionSet};
use crate::error::Result;

/// Read prediction rows from a JSON array file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a row is malformed.
pub fn load_predictions(path: impl AsRef<Path>) -> Result<PredictionSet> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let records: Vec<PredictionRecord> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), rows = records.len(), "Loaded predictions");
    Ok(PredictionSet::new(records))
}
