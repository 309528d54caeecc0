//! Remote JSON data provider.
//!
//! Fetches the upstream fetcher's published dataset from
//! `<base_url>/<market>_cot_data.json` over a blocking HTTP client. The
//! payload is validated through the record model and re-derived before it
//! leaves this module; derived fields in the payload are never trusted.

use std::time::Duration;

use crate::metrics::build_dataset;
use crate::model::{Dataset, RawPayload};

use super::markets;
use super::provider::{CotProvider, DataError, DataOrigin};

/// Remote dataset provider over HTTP.
pub struct RemoteProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RemoteProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL for a market's dataset file.
    fn dataset_url(&self, market: &str) -> String {
        format!(
            "{}/{market}_cot_data.json",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl CotProvider for RemoteProvider {
    fn name(&self) -> &str {
        "remote"
    }

    fn origin(&self) -> DataOrigin {
        DataOrigin::Remote
    }

    fn fetch(&self, market: &str) -> Result<Dataset, DataError> {
        markets::validate_key(market)?;

        let url = self.dataset_url(market);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let payload: RawPayload = response
            .json()
            .map_err(|e| DataError::InvalidPayload(e.to_string()))?;

        Ok(build_dataset(payload)?)
    }
}
