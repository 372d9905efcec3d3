use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single (timestamp, price) sample from an asset's hourly history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// The trailing 24-hour hourly history for one asset.
///
/// Points are ordered ascending by timestamp, as the API returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHistory {
    /// API identifier of the asset this history belongs to.
    pub asset_id: String,

    /// Display name, carried along for the chart legend.
    pub name: String,

    pub points: Vec<PricePoint>,
}
