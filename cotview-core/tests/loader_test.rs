//! Loader integration: file provider round trip and fallback substitution.

use std::fs;

use cotview_core::data::file::FileProvider;
use cotview_core::data::loader::load_or_fallback;
use cotview_core::data::provider::DataOrigin;
use cotview_core::data::remote::RemoteProvider;

const GOLD_PAYLOAD: &str = r#"{
    "market": "GOLD (COMEX)",
    "updated_at": "2025-02-15 10:30:00",
    "weekly_data": [
        {"date": "2025-02-04", "noncomm_long": 322000, "noncomm_short": 80000,
         "noncomm_spreading": 52000, "comm_long": 115000, "comm_short": 387000,
         "open_interest": 533182},
        {"date": "2025-02-11", "noncomm_long": 328000, "noncomm_short": 73168,
         "noncomm_spreading": 53000, "comm_long": 112000, "comm_short": 399456,
         "open_interest": 542103}
    ]
}"#;

#[test]
fn file_provider_loads_dataset_from_directory() {
    let dir = std::env::temp_dir().join("cotview-loader-test");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("gold_cot_data.json"), GOLD_PAYLOAD).unwrap();

    let provider = FileProvider::new(&dir);
    let outcome = load_or_fallback(&provider, "gold");

    assert_eq!(outcome.origin, DataOrigin::File);
    assert!(outcome.fallback_reason.is_none());
    assert_eq!(outcome.dataset.weeks, 2);
    assert_eq!(outcome.dataset.summary.oi_change, 8_921);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_falls_back_to_sample() {
    let provider = FileProvider::new("/definitely/not/a/real/dir");
    let outcome = load_or_fallback(&provider, "gold");

    assert_eq!(outcome.origin, DataOrigin::Sample);
    assert_eq!(outcome.dataset.weeks, 13);
    assert!(outcome
        .fallback_reason
        .as_deref()
        .unwrap()
        .contains("file provider"));
}

#[test]
fn unknown_market_falls_back_with_reason() {
    let provider = RemoteProvider::new("http://127.0.0.1:9");
    let outcome = load_or_fallback(&provider, "tulips");

    assert_eq!(outcome.origin, DataOrigin::Sample);
    assert!(outcome
        .fallback_reason
        .as_deref()
        .unwrap()
        .contains("unknown market"));
}
