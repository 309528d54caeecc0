//! Local-file data provider.
//!
//! Reads the same JSON payload the remote provider fetches, either from a
//! directory holding `<market>_cot_data.json` files or from a single file
//! path pointed directly at one dataset.

use std::path::PathBuf;

use crate::metrics::build_dataset;
use crate::model::{Dataset, RawPayload};

use super::markets;
use super::provider::{CotProvider, DataError, DataOrigin};

/// Dataset provider over the local filesystem.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dataset_path(&self, market: &str) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(format!("{market}_cot_data.json"))
        } else {
            self.path.clone()
        }
    }
}

impl CotProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn origin(&self) -> DataOrigin {
        DataOrigin::File
    }

    fn fetch(&self, market: &str) -> Result<Dataset, DataError> {
        markets::validate_key(market)?;

        let path = self.dataset_path(market);
        let data = std::fs::read_to_string(&path)
            .map_err(|e| DataError::Io(format!("{}: {e}", path.display())))?;

        load_payload(&data)
    }
}

/// Parse and derive a dataset from raw JSON text.
pub fn load_payload(data: &str) -> Result<Dataset, DataError> {
    let payload: RawPayload =
        serde_json::from_str(data).map_err(|e| DataError::InvalidPayload(e.to_string()))?;
    Ok(build_dataset(payload)?)
}
