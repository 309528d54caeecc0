//! Dashboard configuration — optional `cotview.toml`.
//!
//! ```toml
//! market = "gold"
//! data_dir = "data"
//! # base_url = "https://example.com/data"
//! recent_weeks = 6
//! ```
//!
//! A missing file yields the defaults (gold, sample fallback only). Source
//! precedence when both are configured: remote wins, the data directory is
//! the explicit alternative.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cotview_core::data::file::FileProvider;
use cotview_core::data::remote::RemoteProvider;
use cotview_core::data::sample::SampleProvider;
use cotview_core::data::CotProvider;
use cotview_core::projections::DEFAULT_RECENT_WEEKS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Market key (see the core market catalog), e.g. `"gold"`.
    pub market: String,
    /// Directory holding `<market>_cot_data.json` files.
    pub data_dir: Option<PathBuf>,
    /// Base URL publishing the same files.
    pub base_url: Option<String>,
    /// Width of the long/short comparison window.
    pub recent_weeks: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            market: "gold".into(),
            data_dir: None,
            base_url: None,
            recent_weeks: DEFAULT_RECENT_WEEKS,
        }
    }
}

impl DashboardConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path).map_err(|e| format!("read config: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse config TOML: {e}"))
    }

    /// Load the config, defaulting when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the configured data provider.
    pub fn provider(&self) -> Box<dyn CotProvider> {
        if let Some(url) = &self.base_url {
            Box::new(RemoteProvider::new(url.clone()))
        } else if let Some(dir) = &self.data_dir {
            Box::new(FileProvider::new(dir.clone()))
        } else {
            Box::new(SampleProvider)
        }
    }
}
