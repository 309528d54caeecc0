//! View projections — pure maps from the record sequence to widget shapes.
//!
//! Every projection is side-effect free and restartable: repeated calls on
//! the same input produce identical output, and nothing here aliases back
//! into the input sequence.

use chrono::NaiveDate;

use crate::model::{CotError, WeeklyRecord};

/// Default width of the recent long/short comparison window.
pub const DEFAULT_RECENT_WEEKS: usize = 6;

/// One point of the net-position trend lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetPoint {
    pub label: String,
    pub noncomm_net: i64,
    pub comm_net: i64,
}

/// One bar of the open-interest chart, tagged against the sequence mean.
#[derive(Debug, Clone, PartialEq)]
pub struct OiPoint {
    pub label: String,
    pub open_interest: u64,
    /// True when `open_interest >= mean` (ties count as above).
    pub above_average: bool,
}

/// The open-interest projection: bars plus the coloring threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct OiSeries {
    pub points: Vec<OiPoint>,
    /// Arithmetic mean of `open_interest` over the entire input sequence.
    /// Zero for an empty input, where no points exist to tag.
    pub mean: f64,
}

/// One group of the recent long/short comparison bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionPoint {
    pub label: String,
    pub noncomm_long: u64,
    pub noncomm_short: u64,
    pub comm_long: u64,
    pub comm_short: u64,
}

/// Month-day display label: drops the leading `YYYY-` from an ISO date.
///
/// The date must be `YYYY-MM-DD`; anything else fails with
/// `CotError::Format` rather than being guessed at.
pub fn short_label(date: &str) -> Result<String, CotError> {
    if date.len() != 10 {
        return Err(CotError::Format(format!(
            "expected YYYY-MM-DD, got '{date}'"
        )));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| CotError::Format(format!("bad date '{date}': {e}")))?;
    Ok(date[5..].to_string())
}

/// 1:1 order-preserving map to (label, noncomm_net, comm_net) points.
pub fn net_series(records: &[WeeklyRecord]) -> Result<Vec<NetPoint>, CotError> {
    records
        .iter()
        .map(|r| {
            Ok(NetPoint {
                label: short_label(&r.date)?,
                noncomm_net: r.noncomm_net,
                comm_net: r.comm_net,
            })
        })
        .collect()
}

/// Open-interest bars plus the whole-sequence mean used as the coloring
/// threshold. A bar exactly equal to the mean is tagged above-average.
pub fn open_interest_series(records: &[WeeklyRecord]) -> Result<OiSeries, CotError> {
    if records.is_empty() {
        return Ok(OiSeries {
            points: Vec::new(),
            mean: 0.0,
        });
    }

    let total: u64 = records.iter().map(|r| r.open_interest).sum();
    let mean = total as f64 / records.len() as f64;

    let points = records
        .iter()
        .map(|r| {
            Ok(OiPoint {
                label: short_label(&r.date)?,
                open_interest: r.open_interest,
                above_average: r.open_interest as f64 >= mean,
            })
        })
        .collect::<Result<Vec<_>, CotError>>()?;

    Ok(OiSeries { points, mean })
}

/// Last `n` records in sequence order, mapped for grouped-bar display.
///
/// Shorter input yields fewer rows; empty input yields an empty vec. Never
/// an error — the display layer renders nothing for an empty window.
pub fn recent_window(records: &[WeeklyRecord], n: usize) -> Result<Vec<PositionPoint>, CotError> {
    let start = records.len().saturating_sub(n);
    records[start..]
        .iter()
        .map(|r| {
            Ok(PositionPoint {
                label: short_label(&r.date)?,
                noncomm_long: r.noncomm_long,
                noncomm_short: r.noncomm_short,
                comm_long: r.comm_long,
                comm_short: r.comm_short,
            })
        })
        .collect()
}

/// Full sequence in descending order, all fields retained.
///
/// A stable reversal of the already-ascending input, not a resort.
pub fn reverse_chronological(records: &[WeeklyRecord]) -> Vec<WeeklyRecord> {
    records.iter().rev().cloned().collect()
}
