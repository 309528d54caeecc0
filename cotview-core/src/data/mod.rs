//! Data acquisition — providers, the embedded sample, and fetch-or-fallback.
//!
//! The transformation core never sources its own data; everything under this
//! module exists to hand `metrics::build_dataset` a validated payload and to
//! decide what happens when a source is unavailable.

pub mod file;
pub mod loader;
pub mod markets;
pub mod provider;
pub mod remote;
pub mod sample;

pub use loader::{load_or_fallback, LoadOutcome};
pub use provider::{CotProvider, DataError, DataOrigin};
