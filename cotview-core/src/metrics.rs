//! Derived-metrics computer — nets, week-over-week deltas, and the summary.
//!
//! Pure functions over slices. Input order is the output order; ascending
//! date order is a documented precondition of the callers, not re-validated
//! here.

use crate::model::{CotError, Dataset, RawPayload, RawWeeklyRecord, Summary, WeeklyRecord};

/// Derive net positions and week-over-week deltas for an ordered sequence.
///
/// Nets are exact integer subtractions (`long - short`). Each delta compares
/// against the immediately preceding element; the first element has no prior
/// reference, so all three of its deltas are zero.
pub fn compute_derived(records: &[RawWeeklyRecord]) -> Vec<WeeklyRecord> {
    let mut derived: Vec<WeeklyRecord> = Vec::with_capacity(records.len());

    for (i, raw) in records.iter().enumerate() {
        let noncomm_net = raw.noncomm_long as i64 - raw.noncomm_short as i64;
        let comm_net = raw.comm_long as i64 - raw.comm_short as i64;

        let (noncomm_net_change, comm_net_change, oi_change) = if i == 0 {
            (0, 0, 0)
        } else {
            let prev = &derived[i - 1];
            (
                noncomm_net - prev.noncomm_net,
                comm_net - prev.comm_net,
                raw.open_interest as i64 - prev.open_interest as i64,
            )
        };

        derived.push(WeeklyRecord {
            date: raw.date.clone(),
            noncomm_long: raw.noncomm_long,
            noncomm_short: raw.noncomm_short,
            noncomm_spreading: raw.noncomm_spreading,
            comm_long: raw.comm_long,
            comm_short: raw.comm_short,
            open_interest: raw.open_interest,
            noncomm_net,
            comm_net,
            noncomm_net_change,
            comm_net_change,
            oi_change,
        });
    }

    derived
}

/// Speculative long/short ratio for a single week.
///
/// Returns `f64::INFINITY` when the short side is zero — a defined sentinel
/// instead of a division fault. Display layers render it as a dash.
pub fn long_short_ratio(noncomm_long: u64, noncomm_short: u64) -> f64 {
    if noncomm_short == 0 {
        f64::INFINITY
    } else {
        noncomm_long as f64 / noncomm_short as f64
    }
}

/// Build the summary snapshot from the last element of a derived sequence.
///
/// Fails with `CotError::EmptyDataset` on an empty slice — there is no
/// meaningful "latest" record to fabricate a default from.
pub fn compute_summary(records: &[WeeklyRecord]) -> Result<Summary, CotError> {
    let latest = records.last().ok_or(CotError::EmptyDataset)?;

    Ok(Summary {
        latest_date: latest.date.clone(),
        noncomm_net: latest.noncomm_net,
        comm_net: latest.comm_net,
        open_interest: latest.open_interest,
        noncomm_net_change: latest.noncomm_net_change,
        comm_net_change: latest.comm_net_change,
        oi_change: latest.oi_change,
        long_short_ratio: long_short_ratio(latest.noncomm_long, latest.noncomm_short),
    })
}

/// Turn a validated payload into a fully derived, immutable dataset.
pub fn build_dataset(payload: RawPayload) -> Result<Dataset, CotError> {
    let weekly_data = compute_derived(&payload.weekly_data);
    let summary = compute_summary(&weekly_data)?;

    Ok(Dataset {
        market: payload.market,
        updated_at: payload.updated_at,
        weeks: weekly_data.len(),
        summary,
        weekly_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, nl: u64, ns: u64, cl: u64, cs: u64, oi: u64) -> RawWeeklyRecord {
        RawWeeklyRecord {
            date: date.into(),
            noncomm_long: nl,
            noncomm_short: ns,
            noncomm_spreading: 0,
            comm_long: cl,
            comm_short: cs,
            open_interest: oi,
        }
    }

    #[test]
    fn derives_nets_from_long_and_short() {
        let derived = compute_derived(&[raw("2025-02-11", 328000, 73168, 112000, 399456, 542103)]);
        assert_eq!(derived[0].noncomm_net, 254832);
        assert_eq!(derived[0].comm_net, -287456);
        assert!(derived[0].nets_consistent());
    }

    #[test]
    fn first_record_deltas_are_zero() {
        let derived = compute_derived(&[raw("2025-02-04", 100, 40, 50, 90, 1000)]);
        assert_eq!(derived[0].noncomm_net_change, 0);
        assert_eq!(derived[0].comm_net_change, 0);
        assert_eq!(derived[0].oi_change, 0);
    }

    #[test]
    fn deltas_compare_against_preceding_record() {
        let derived = compute_derived(&[
            raw("2025-02-04", 100, 40, 50, 90, 533182),
            raw("2025-02-11", 130, 35, 45, 100, 542103),
        ]);
        assert_eq!(derived[1].noncomm_net_change, (130 - 35) - (100 - 40));
        assert_eq!(derived[1].comm_net_change, (45 - 100) - (50 - 90));
        assert_eq!(derived[1].oi_change, 8921);
    }

    #[test]
    fn compute_derived_preserves_input_order() {
        let derived = compute_derived(&[
            raw("2025-01-28", 1, 0, 0, 0, 10),
            raw("2025-02-04", 2, 0, 0, 0, 20),
            raw("2025-02-11", 3, 0, 0, 0, 30),
        ]);
        let dates: Vec<&str> = derived.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2025-01-28", "2025-02-04", "2025-02-11"]);
    }

    #[test]
    fn summary_reflects_latest_record() {
        let derived = compute_derived(&[
            raw("2025-02-04", 100, 40, 50, 90, 533182),
            raw("2025-02-11", 130, 35, 45, 100, 542103),
        ]);
        let summary = compute_summary(&derived).unwrap();
        assert_eq!(summary.latest_date, "2025-02-11");
        assert_eq!(summary.open_interest, 542103);
        assert_eq!(summary.oi_change, 8921);
        assert_eq!(summary.long_short_ratio, 130.0 / 35.0);
    }

    #[test]
    fn summary_of_empty_sequence_is_an_error() {
        assert!(matches!(compute_summary(&[]), Err(CotError::EmptyDataset)));
    }

    #[test]
    fn ratio_sentinel_when_short_side_is_zero() {
        assert_eq!(long_short_ratio(5000, 0), f64::INFINITY);
        assert_eq!(long_short_ratio(9, 4), 2.25);
    }

    #[test]
    fn build_dataset_counts_weeks() {
        let payload = RawPayload {
            market: "GOLD (COMEX)".into(),
            updated_at: "2025-02-15 10:30:00".into(),
            weekly_data: vec![
                raw("2025-02-04", 100, 40, 50, 90, 533182),
                raw("2025-02-11", 130, 35, 45, 100, 542103),
            ],
        };
        let dataset = build_dataset(payload).unwrap();
        assert_eq!(dataset.weeks, 2);
        assert_eq!(dataset.summary.latest_date, "2025-02-11");
    }

    #[test]
    fn build_dataset_fails_on_empty_payload() {
        let payload = RawPayload {
            market: "GOLD (COMEX)".into(),
            updated_at: "2025-02-15 10:30:00".into(),
            weekly_data: vec![],
        };
        assert!(matches!(build_dataset(payload), Err(CotError::EmptyDataset)));
    }
}
