use serde::{Deserialize, Serialize};

/// Market-data configuration. Constructed in code; there are no config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Quote currency for prices and market caps (e.g., "usd").
    pub vs_currency: String,

    /// How many top-ranked assets one snapshot holds.
    pub snapshot_size: u32,

    /// Trailing window of the per-asset hourly history, in days.
    pub history_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vs_currency: "usd".to_string(),
            snapshot_size: 50,
            history_days: 1,
        }
    }
}
