use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::history::PricePoint;

/// Trait abstraction for the market-data source.
///
/// The one production implementation talks to CoinGecko. The seam exists so
/// the services and the shell can be exercised against a mock source, and so
/// the API can be swapped without touching the rest of the codebase.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the ranked snapshot of top assets, market cap descending.
    async fn fetch_snapshot(
        &self,
        vs_currency: &str,
        limit: u32,
    ) -> Result<Vec<Asset>, CoreError>;

    /// Fetch one asset's trailing hourly price history.
    /// Returns points ascending by timestamp.
    async fn fetch_history(
        &self,
        asset_id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, CoreError>;
}
