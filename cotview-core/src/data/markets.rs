//! Market catalog — the commodity markets the upstream fetcher publishes.
//!
//! Keys match the upstream file naming convention
//! (`<key>_cot_data.json`); display names match the CFTC report headings.

use super::provider::DataError;

/// (key, display name) pairs for the supported markets.
pub const MARKETS: &[(&str, &str)] = &[
    ("gold", "GOLD (COMEX)"),
    ("silver", "SILVER (COMEX)"),
    ("copper", "COPPER (COMEX)"),
    ("platinum", "PLATINUM (NYMEX)"),
    ("palladium", "PALLADIUM (NYMEX)"),
    ("micro_gold", "MICRO GOLD (COMEX)"),
    ("aluminum", "ALUMINUM (COMEX)"),
    ("wti", "WTI CRUDE OIL (NYMEX)"),
    ("palm_oil", "PALM OIL (CME)"),
];

/// Display name for a market key.
pub fn display_name(key: &str) -> Option<&'static str> {
    MARKETS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// Reject unknown market keys at the boundary.
pub fn validate_key(key: &str) -> Result<(), DataError> {
    if display_name(key).is_some() {
        Ok(())
    } else {
        Err(DataError::UnknownMarket(key.to_string()))
    }
}

/// All known market keys.
pub fn keys() -> impl Iterator<Item = &'static str> {
    MARKETS.iter().map(|(k, _)| *k)
}
