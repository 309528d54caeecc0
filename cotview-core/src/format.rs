//! Display formatting — presentation policy, separated from the metrics.
//!
//! Widgets call these; the derived values themselves stay unformatted.

/// Thousands-separated rendering: `254832` → `"254,832"`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    let lead = digits.len() % 3;
    if lead > 0 {
        grouped.push_str(&digits[..lead]);
    }
    for chunk in digits[lead..].as_bytes().chunks(3) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Signed weekly-change rendering: explicit `+` on positives.
pub fn signed_thousands(value: i64) -> String {
    if value > 0 {
        format!("+{}", thousands(value))
    } else {
        thousands(value)
    }
}

/// Compact axis-label rendering with K/M suffixing.
///
/// Magnitudes of a million and up get one decimal (`1.5M`); thousands get
/// none (`542K`); anything smaller renders as plain digits. The sign rides
/// along with the scaled value.
pub fn compact(value: i64) -> String {
    let abs = value.unsigned_abs();
    if abs >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if abs >= 1_000 {
        format!("{:.0}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Two-decimal ratio rendering; the non-finite sentinel becomes a dash.
pub fn ratio(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "-".to_string()
    }
}
