//! Data provider trait and structured error types.
//!
//! The `CotProvider` trait abstracts over dataset sources (remote JSON, local
//! file, embedded sample) so the loader can swap implementations and tests
//! can mock failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CotError, Dataset};

/// Structured error types for data operations.
///
/// These are designed to be displayable in the dashboard's status line.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("unexpected HTTP status {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("unknown market key: '{0}'")]
    UnknownMarket(String),

    #[error("read error: {0}")]
    Io(String),
}

impl From<CotError> for DataError {
    fn from(err: CotError) -> Self {
        DataError::InvalidPayload(err.to_string())
    }
}

/// Where a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataOrigin {
    Remote,
    File,
    Sample,
}

impl DataOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            DataOrigin::Remote => "remote",
            DataOrigin::File => "local file",
            DataOrigin::Sample => "embedded sample",
        }
    }
}

/// Trait for dataset providers.
///
/// Implementations validate the payload through the record model and run it
/// through the derived-metrics computer before returning; a `Dataset` handed
/// out here is already safe for every projection.
pub trait CotProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Origin tag attached to datasets this provider returns.
    fn origin(&self) -> DataOrigin;

    /// Fetch and derive the dataset for a market key (e.g. `"gold"`).
    fn fetch(&self, market: &str) -> Result<Dataset, DataError>;
}
