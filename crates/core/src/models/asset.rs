use serde::{Deserialize, Serialize};

/// One row of the ranked market snapshot.
///
/// Field names follow the `/coins/markets` wire format, so a snapshot
/// response deserializes straight into `Vec<Asset>`.
///
/// Rows are immutable: every refresh replaces the whole snapshot, nothing
/// is mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// API identifier, unique and lowercase (e.g., "bitcoin").
    pub id: String,

    /// Ticker symbol as the API reports it, lowercase (e.g., "btc").
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin").
    pub name: String,

    /// Icon URL.
    pub image: String,

    /// Latest price in the quote currency.
    pub current_price: f64,

    /// Market capitalization in the quote currency — the ranking key.
    pub market_cap: Option<f64>,

    /// Percentage change over the trailing 24 hours. Absent when the API
    /// has no fresh data for the asset.
    pub price_change_percentage_24h: Option<f64>,
}

impl Asset {
    /// Ticker symbol uppercased for display (e.g., "BTC").
    #[must_use]
    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }
}
