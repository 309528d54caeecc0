//! Embedded sample dataset — the last-resort fallback.
//!
//! Thirteen weeks of GOLD (COMEX) positioning, used when no other source is
//! reachable so the dashboard always has something real-shaped to render.
//! Only raw observations are embedded; nets, deltas, and the summary are
//! produced by the derived-metrics computer like any other payload.

use crate::metrics::build_dataset;
use crate::model::{Dataset, RawPayload, RawWeeklyRecord};

use super::provider::{CotProvider, DataError, DataOrigin};

/// Provider wrapper around the embedded sample.
///
/// Ignores the market key: the sample is the dataset of last resort, not a
/// catalog.
pub struct SampleProvider;

impl CotProvider for SampleProvider {
    fn name(&self) -> &str {
        "embedded-sample"
    }

    fn origin(&self) -> DataOrigin {
        DataOrigin::Sample
    }

    fn fetch(&self, _market: &str) -> Result<Dataset, DataError> {
        Ok(dataset())
    }
}

/// The derived sample dataset.
pub fn dataset() -> Dataset {
    let payload = RawPayload {
        market: "GOLD (COMEX)".into(),
        updated_at: "2025-02-15 10:30:00".into(),
        weekly_data: sample_weeks(),
    };
    // The embedded payload is non-empty and well-formed by construction.
    build_dataset(payload).expect("embedded sample dataset is valid")
}

fn sample_weeks() -> Vec<RawWeeklyRecord> {
    const WEEKS: &[(&str, u64, u64, u64, u64, u64, u64)] = &[
        ("2024-11-19", 298_000, 78_000, 45_000, 120_000, 385_000, 498_000),
        ("2024-11-26", 305_000, 75_000, 46_000, 118_000, 390_000, 505_000),
        ("2024-12-03", 295_000, 82_000, 44_000, 125_000, 378_000, 495_000),
        ("2024-12-10", 302_000, 79_000, 47_000, 122_000, 388_000, 512_000),
        ("2024-12-17", 310_000, 72_000, 48_000, 115_000, 395_000, 520_000),
        ("2024-12-24", 308_000, 74_000, 47_000, 117_000, 392_000, 518_000),
        ("2024-12-31", 312_000, 70_000, 49_000, 113_000, 398_000, 525_000),
        ("2025-01-07", 318_000, 68_000, 50_000, 110_000, 402_000, 530_000),
        ("2025-01-14", 315_000, 71_000, 49_000, 112_000, 398_000, 528_000),
        ("2025-01-21", 320_000, 69_000, 51_000, 108_000, 405_000, 535_000),
        ("2025-01-28", 317_000, 72_000, 50_000, 111_000, 400_000, 532_000),
        ("2025-02-04", 322_000, 80_000, 52_000, 115_000, 387_000, 533_182),
        ("2025-02-11", 328_000, 73_168, 53_000, 112_000, 399_456, 542_103),
    ];

    WEEKS
        .iter()
        .map(
            |&(date, noncomm_long, noncomm_short, noncomm_spreading, comm_long, comm_short, oi)| {
                RawWeeklyRecord {
                    date: date.into(),
                    noncomm_long,
                    noncomm_short,
                    noncomm_spreading,
                    comm_long,
                    comm_short,
                    open_interest: oi,
                }
            },
        )
        .collect()
}
