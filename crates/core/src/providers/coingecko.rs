use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::debug;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::history::PricePoint;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko API provider for cryptocurrency market data.
///
/// - **Free**: No API key required for the endpoints used here.
/// - **Data**: ranked market snapshots and per-coin price histories.
/// - **Endpoints**: `/coins/markets`, `/coins/{id}/market_chart`
///
/// Note: CoinGecko uses lowercase ids like "bitcoin", "ethereum"; the
/// snapshot rows carry them, so no symbol resolution is needed.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

// `/coins/markets` rows deserialize straight into `Asset` — the model's
// field names follow the wire format.

#[derive(Deserialize)]
struct MarketChartResponse {
    /// `[timestampMillis, price]` pairs, ascending.
    prices: Vec<(f64, f64)>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch_snapshot(
        &self,
        vs_currency: &str,
        limit: u32,
    ) -> Result<Vec<Asset>, CoreError> {
        let url = format!(
            "{BASE_URL}/coins/markets?vs_currency={vs_currency}&order=market_cap_desc&per_page={limit}&page=1&sparkline=false"
        );
        debug!(limit, "fetching market snapshot");

        let assets: Vec<Asset> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse market snapshot: {e}"),
            })?;

        Ok(assets)
    }

    async fn fetch_history(
        &self,
        asset_id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let url = format!(
            "{BASE_URL}/coins/{asset_id}/market_chart?vs_currency={vs_currency}&days={days}&interval=hourly"
        );

        let chart: MarketChartResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse history for {asset_id}: {e}"),
            })?;

        let points = chart
            .prices
            .iter()
            .filter_map(|&(ts, price)| {
                let timestamp = DateTime::from_timestamp_millis(ts as i64)?;
                Some(PricePoint { timestamp, price })
            })
            .collect();

        Ok(points)
    }
}
