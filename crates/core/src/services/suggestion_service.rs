//! Price-change classification — maps a 24-hour percentage change to a
//! discrete trading suggestion.

use crate::models::asset::Asset;
use crate::models::suggestion::{AssetSuggestion, Suggestion};

/// A 24-hour drop at or beyond this (percent) is treated as a buying
/// opportunity.
pub const BUY_THRESHOLD: f64 = -3.0;

/// A 24-hour rise at or beyond this (percent) is treated as a take-profit
/// signal.
pub const SELL_THRESHOLD: f64 = 3.0;

/// Classify a 24-hour percentage change.
///
/// Total and side-effect free. Boundaries are inclusive: exactly -3.0
/// classifies as Buy and exactly 3.0 as Sell. An absent change (the API has
/// no fresh data for the asset) is a Hold. Single-sample — no hysteresis,
/// no smoothing, no historical weighting.
#[must_use]
pub fn classify(change: Option<f64>) -> Suggestion {
    match change {
        None => Suggestion::Hold,
        Some(c) if c <= BUY_THRESHOLD => Suggestion::Buy,
        Some(c) if c >= SELL_THRESHOLD => Suggestion::Sell,
        Some(_) => Suggestion::Hold,
    }
}

/// Derive a suggestion for every snapshot row, in snapshot order.
#[must_use]
pub fn suggest_all(assets: &[Asset]) -> Vec<AssetSuggestion> {
    assets
        .iter()
        .map(|asset| AssetSuggestion {
            asset_id: asset.id.clone(),
            suggestion: classify(asset.price_change_percentage_24h),
        })
        .collect()
}
