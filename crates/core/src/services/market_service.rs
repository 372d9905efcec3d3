use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::history::AssetHistory;
use crate::models::settings::Settings;
use crate::providers::traits::MarketDataProvider;

/// Fetches the ranked market snapshot and per-asset histories.
///
/// Stateless between calls: every invocation re-fetches from the network.
/// No retry, no backoff, no cache — a failed fetch degrades to "no data"
/// at the shell.
pub struct MarketService {
    provider: Arc<dyn MarketDataProvider>,
    settings: Settings,
}

impl MarketService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, settings: Settings) -> Self {
        Self { provider, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fetch the ranked snapshot of top assets (market cap descending).
    pub async fn fetch_snapshot(&self) -> Result<Vec<Asset>, CoreError> {
        let assets = self
            .provider
            .fetch_snapshot(&self.settings.vs_currency, self.settings.snapshot_size)
            .await?;
        debug!(
            count = assets.len(),
            provider = self.provider.name(),
            "market snapshot fetched"
        );
        Ok(assets)
    }

    /// Fetch the trailing hourly history for every given asset.
    ///
    /// All requests are issued concurrently; if any single one fails, the
    /// whole call fails and no partial result is returned. Output order
    /// equals input order.
    ///
    /// One request per asset is a scalability ceiling, acceptable at the
    /// snapshot sizes used here (≤50 per refresh).
    pub async fn fetch_histories(
        &self,
        assets: &[Asset],
    ) -> Result<Vec<AssetHistory>, CoreError> {
        let fetches = assets.iter().map(|asset| async move {
            let points = self
                .provider
                .fetch_history(
                    &asset.id,
                    &self.settings.vs_currency,
                    self.settings.history_days,
                )
                .await?;
            Ok::<_, CoreError>(AssetHistory {
                asset_id: asset.id.clone(),
                name: asset.name.clone(),
                points,
            })
        });

        let histories = try_join_all(fetches).await?;
        debug!(count = histories.len(), "asset histories fetched");
        Ok(histories)
    }
}
