// ═══════════════════════════════════════════════════════════════════
// Market Service Tests — snapshot fetch and the all-or-nothing
// history fan-out, against a mock provider
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::DateTime;
use std::collections::HashMap;
use std::sync::Arc;

use crypto_tracker_core::errors::CoreError;
use crypto_tracker_core::models::asset::Asset;
use crypto_tracker_core::models::history::PricePoint;
use crypto_tracker_core::models::settings::Settings;
use crypto_tracker_core::providers::traits::MarketDataProvider;
use crypto_tracker_core::services::market_service::MarketService;

// ═══════════════════════════════════════════════════════════════════
// Mock Provider
// ═══════════════════════════════════════════════════════════════════

struct MockMarketProvider {
    snapshot: Vec<Asset>,
    histories: HashMap<String, Vec<PricePoint>>,
    fail_snapshot: bool,
    fail_history_for: Option<String>,
}

impl MockMarketProvider {
    fn new(snapshot: Vec<Asset>) -> Self {
        let histories = snapshot
            .iter()
            .map(|a| (a.id.clone(), points(&[100.0, 101.0, 99.0])))
            .collect();
        Self {
            snapshot,
            histories,
            fail_snapshot: false,
            fail_history_for: None,
        }
    }
}

#[async_trait]
impl MarketDataProvider for MockMarketProvider {
    fn name(&self) -> &str {
        "MockMarket"
    }

    async fn fetch_snapshot(
        &self,
        _vs_currency: &str,
        limit: u32,
    ) -> Result<Vec<Asset>, CoreError> {
        if self.fail_snapshot {
            return Err(CoreError::Network("connection refused".into()));
        }
        Ok(self
            .snapshot
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_history(
        &self,
        asset_id: &str,
        _vs_currency: &str,
        _days: u32,
    ) -> Result<Vec<PricePoint>, CoreError> {
        if self.fail_history_for.as_deref() == Some(asset_id) {
            return Err(CoreError::Network(format!(
                "connection reset fetching {asset_id}"
            )));
        }
        self.histories
            .get(asset_id)
            .cloned()
            .ok_or_else(|| CoreError::Api {
                provider: "MockMarket".into(),
                message: format!("no history for {asset_id}"),
            })
    }
}

fn asset(id: &str, name: &str, change: Option<f64>) -> Asset {
    Asset {
        id: id.to_string(),
        symbol: id.chars().take(3).collect(),
        name: name.to_string(),
        image: format!("https://assets.example/{id}.png"),
        current_price: 100.0,
        market_cap: Some(1_000_000.0),
        price_change_percentage_24h: change,
    }
}

fn points(prices: &[f64]) -> Vec<PricePoint> {
    const BASE_MS: i64 = 1_700_000_000_000;
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint {
            timestamp: DateTime::from_timestamp_millis(BASE_MS + i as i64 * 3_600_000).unwrap(),
            price,
        })
        .collect()
}

fn top_three() -> Vec<Asset> {
    vec![
        asset("bitcoin", "Bitcoin", Some(-5.0)),
        asset("ethereum", "Ethereum", Some(4.0)),
        asset("dogecoin", "Dogecoin", Some(0.5)),
    ]
}

fn service(provider: MockMarketProvider) -> MarketService {
    MarketService::new(Arc::new(provider), Settings::default())
}

// ═══════════════════════════════════════════════════════════════════
//  Snapshot
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn snapshot_returns_rows_in_rank_order() {
    let service = service(MockMarketProvider::new(top_three()));

    let snapshot = service.fetch_snapshot().await.unwrap();
    let ids: Vec<&str> = snapshot.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["bitcoin", "ethereum", "dogecoin"]);
}

#[tokio::test]
async fn snapshot_respects_configured_size() {
    let provider = MockMarketProvider::new(top_three());
    let service = MarketService::new(
        Arc::new(provider),
        Settings {
            snapshot_size: 2,
            ..Settings::default()
        },
    );

    let snapshot = service.fetch_snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 2);
}

#[tokio::test]
async fn snapshot_failure_propagates() {
    let mut provider = MockMarketProvider::new(top_three());
    provider.fail_snapshot = true;
    let service = service(provider);

    let err = service.fetch_snapshot().await.unwrap_err();
    assert!(matches!(err, CoreError::Network(_)));
}

// ═══════════════════════════════════════════════════════════════════
//  History fan-out
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn histories_preserve_input_order() {
    let snapshot = top_three();
    let service = service(MockMarketProvider::new(snapshot.clone()));

    let histories = service.fetch_histories(&snapshot).await.unwrap();
    let ids: Vec<&str> = histories.iter().map(|h| h.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["bitcoin", "ethereum", "dogecoin"]);
    assert_eq!(histories[0].name, "Bitcoin");
    assert_eq!(histories[0].points.len(), 3);
}

/// One failing request fails the whole call — no partial results.
#[tokio::test]
async fn one_failure_fails_the_whole_call() {
    let snapshot = top_three();
    let mut provider = MockMarketProvider::new(snapshot.clone());
    provider.fail_history_for = Some("ethereum".to_string());
    let service = service(provider);

    let err = service.fetch_histories(&snapshot).await.unwrap_err();
    assert!(matches!(err, CoreError::Network(_)));
}

#[tokio::test]
async fn no_assets_means_no_requests() {
    let service = service(MockMarketProvider::new(top_three()));

    let histories = service.fetch_histories(&[]).await.unwrap();
    assert!(histories.is_empty());
}
