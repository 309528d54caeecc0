//! cotview-core — transformation core for CFTC Commitments of Traders data.
//!
//! Turns raw weekly COT observations into the shapes the dashboard widgets
//! consume:
//! - record model with boundary validation (`model`)
//! - derived metrics: nets, week-over-week deltas, summary (`metrics`)
//! - pure view projections for charts and tables (`projections`)
//! - display formatting policy (`format`)
//! - data sources with fetch-or-fallback (`data`)

pub mod data;
pub mod format;
pub mod metrics;
pub mod model;
pub mod projections;

pub use model::{CotError, Dataset, RawPayload, RawWeeklyRecord, Summary, WeeklyRecord};
