use tracing::warn;

use crate::models::chart::{ChartDisplayOptions, ChartSeries, CombinedChart};
use crate::models::history::AssetHistory;
use crate::models::theme::Theme;
use crate::services::palette::series_color;

/// Assembles chart-ready data from per-asset histories.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the combined 24-hour chart.
    ///
    /// Labels are taken from the FIRST history's timestamps; every series is
    /// laid out positionally against them with no re-alignment by timestamp.
    /// A history whose point count differs from the reference therefore
    /// misaligns silently against the shared labels — a known limitation
    /// carried over from the original behavior. A mismatch is logged, not
    /// corrected.
    ///
    /// Returns `None` when there is nothing to chart.
    #[must_use]
    pub fn build_combined_chart(&self, histories: &[AssetHistory]) -> Option<CombinedChart> {
        let reference = histories.first()?;

        let labels: Vec<String> = reference
            .points
            .iter()
            .map(|p| p.timestamp.format("%H:%M").to_string())
            .collect();

        let series = histories
            .iter()
            .map(|history| {
                if history.points.len() != labels.len() {
                    warn!(
                        asset_id = %history.asset_id,
                        points = history.points.len(),
                        labels = labels.len(),
                        "history cardinality differs from reference; series will misalign"
                    );
                }
                ChartSeries {
                    asset_id: history.asset_id.clone(),
                    name: history.name.clone(),
                    color: series_color(&history.asset_id),
                    values: history.points.iter().map(|p| p.price).collect(),
                }
            })
            .collect();

        Some(CombinedChart { labels, series })
    }

    /// Renderer configuration for the active theme.
    #[must_use]
    pub fn display_options(&self, theme: Theme) -> ChartDisplayOptions {
        ChartDisplayOptions::for_theme(theme)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
