//! Fetch-or-fallback orchestration.
//!
//! Tries the configured provider and, on any data error, substitutes the
//! embedded sample so the dashboard still renders. The error that caused the
//! fallback is carried along for the status line — degradation is reported,
//! never silent.

use crate::model::Dataset;

use super::provider::{CotProvider, DataOrigin};
use super::sample;

/// Result of a load: the dataset plus where it actually came from.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub origin: DataOrigin,
    /// Set when the provider failed and the sample was substituted.
    pub fallback_reason: Option<String>,
}

/// Load from `provider`, falling back to the embedded sample on failure.
pub fn load_or_fallback(provider: &dyn CotProvider, market: &str) -> LoadOutcome {
    match provider.fetch(market) {
        Ok(dataset) => LoadOutcome {
            dataset,
            origin: provider.origin(),
            fallback_reason: None,
        },
        Err(err) => LoadOutcome {
            dataset: sample::dataset(),
            origin: DataOrigin::Sample,
            fallback_reason: Some(format!("{} provider: {err}", provider.name())),
        },
    }
}
