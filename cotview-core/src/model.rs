//! Weekly COT record model — payload shapes, derived records, dataset.
//!
//! The boundary contract: external payloads arrive as untyped JSON and are
//! validated into `RawWeeklyRecord` before any arithmetic runs. Derived
//! fields (nets, week-over-week deltas, the summary) are never trusted from
//! a payload — the metrics layer recomputes them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error types for the transformation core.
///
/// All three propagate synchronously to the caller; none are converted into
/// silently wrong numeric values.
#[derive(Debug, Error)]
pub enum CotError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("empty dataset: no records to summarize")]
    EmptyDataset,

    #[error("date format error: {0}")]
    Format(String),
}

/// One week's raw COT observation as supplied by an external payload.
///
/// Position sizes are contract counts and therefore non-negative; a payload
/// carrying a negative or non-numeric value fails validation rather than
/// being coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWeeklyRecord {
    /// ISO 8601 calendar date (`YYYY-MM-DD`), ascending and unique across a
    /// payload's `weekly_data`.
    pub date: String,
    pub noncomm_long: u64,
    pub noncomm_short: u64,
    pub noncomm_spreading: u64,
    pub comm_long: u64,
    pub comm_short: u64,
    pub open_interest: u64,
}

impl RawWeeklyRecord {
    /// Build a record from an untyped JSON value.
    ///
    /// Rejects payloads with missing required fields or non-numeric values in
    /// numeric fields. Unknown fields (including derived fields emitted by
    /// upstream fetchers) are ignored.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CotError> {
        serde_json::from_value(value.clone()).map_err(|e| CotError::Validation(e.to_string()))
    }
}

/// A weekly record with derived net positions and week-over-week deltas.
///
/// Invariants (maintained by `metrics::compute_derived`):
/// - `noncomm_net == noncomm_long - noncomm_short`
/// - `comm_net == comm_long - comm_short`
/// - for index `i > 0`, each `*_change` equals the field minus its value in
///   the preceding record; for index 0 all three deltas are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRecord {
    pub date: String,
    pub noncomm_long: u64,
    pub noncomm_short: u64,
    pub noncomm_spreading: u64,
    pub comm_long: u64,
    pub comm_short: u64,
    pub open_interest: u64,
    pub noncomm_net: i64,
    pub comm_net: i64,
    pub noncomm_net_change: i64,
    pub comm_net_change: i64,
    pub oi_change: i64,
}

impl WeeklyRecord {
    /// Returns true if the net-position invariants hold for this record.
    pub fn nets_consistent(&self) -> bool {
        self.noncomm_net == self.noncomm_long as i64 - self.noncomm_short as i64
            && self.comm_net == self.comm_long as i64 - self.comm_short as i64
    }
}

/// Derived snapshot of the most recent record plus sequence metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub latest_date: String,
    pub noncomm_net: i64,
    pub comm_net: i64,
    pub open_interest: u64,
    pub noncomm_net_change: i64,
    pub comm_net_change: i64,
    pub oi_change: i64,
    /// `noncomm_long / noncomm_short` of the latest record.
    /// `f64::INFINITY` when the short side is zero; the formatting layer
    /// renders the sentinel as a dash.
    pub long_short_ratio: f64,
}

/// The payload shape an external source hands over, prior to derivation.
///
/// Any derived fields present in the payload are dropped during
/// deserialization of `weekly_data` and recomputed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPayload {
    pub market: String,
    pub updated_at: String,
    pub weekly_data: Vec<RawWeeklyRecord>,
}

/// A fully derived dataset: ordered records, summary, and metadata.
///
/// Constructed once per load and immutable thereafter; a reload replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub market: String,
    /// Opaque display metadata from the source; passed through verbatim.
    pub updated_at: String,
    pub weeks: usize,
    pub summary: Summary,
    pub weekly_data: Vec<WeeklyRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_record_from_valid_value() {
        let value = json!({
            "date": "2025-02-11",
            "noncomm_long": 328000,
            "noncomm_short": 73168,
            "noncomm_spreading": 53000,
            "comm_long": 112000,
            "comm_short": 399456,
            "open_interest": 542103
        });
        let record = RawWeeklyRecord::from_value(&value).unwrap();
        assert_eq!(record.date, "2025-02-11");
        assert_eq!(record.open_interest, 542103);
    }

    #[test]
    fn raw_record_rejects_missing_field() {
        // comm_short absent
        let value = json!({
            "date": "2025-02-11",
            "noncomm_long": 328000,
            "noncomm_short": 73168,
            "noncomm_spreading": 53000,
            "comm_long": 112000,
            "open_interest": 542103
        });
        let err = RawWeeklyRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, CotError::Validation(_)));
        assert!(err.to_string().contains("comm_short"));
    }

    #[test]
    fn raw_record_rejects_non_numeric_field() {
        let value = json!({
            "date": "2025-02-11",
            "noncomm_long": "lots",
            "noncomm_short": 73168,
            "noncomm_spreading": 53000,
            "comm_long": 112000,
            "comm_short": 399456,
            "open_interest": 542103
        });
        assert!(matches!(
            RawWeeklyRecord::from_value(&value),
            Err(CotError::Validation(_))
        ));
    }

    #[test]
    fn raw_record_rejects_negative_count() {
        let value = json!({
            "date": "2025-02-11",
            "noncomm_long": -5,
            "noncomm_short": 73168,
            "noncomm_spreading": 53000,
            "comm_long": 112000,
            "comm_short": 399456,
            "open_interest": 542103
        });
        assert!(matches!(
            RawWeeklyRecord::from_value(&value),
            Err(CotError::Validation(_))
        ));
    }

    #[test]
    fn raw_record_ignores_derived_fields_in_payload() {
        // Upstream fetchers emit nets and deltas; they are dropped here.
        let value = json!({
            "date": "2025-02-11",
            "noncomm_long": 328000,
            "noncomm_short": 73168,
            "noncomm_spreading": 53000,
            "comm_long": 112000,
            "comm_short": 399456,
            "open_interest": 542103,
            "noncomm_net": 1,
            "oi_change": -99
        });
        assert!(RawWeeklyRecord::from_value(&value).is_ok());
    }
}
