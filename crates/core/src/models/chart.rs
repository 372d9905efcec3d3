use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// One renderable line in the combined chart.
///
/// Values are aligned positionally to the shared label sequence — there is
/// no per-point timestamp here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// API identifier of the asset this line shows.
    pub asset_id: String,

    /// Legend label.
    pub name: String,

    /// `#RRGGBB`, assigned deterministically from the asset id.
    pub color: String,

    /// Prices in chronological order.
    pub values: Vec<f64>,
}

/// Chart-ready structure for the rendering surface.
///
/// The core computes all the numbers — the frontend only renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedChart {
    /// Shared x-axis labels (HH:MM), taken from the reference asset's
    /// timestamps in chronological order.
    pub labels: Vec<String>,

    pub series: Vec<ChartSeries>,
}

/// Where the chart legend is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// How tooltips pick the highlighted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Highlight the point closest to the pointer.
    Nearest,
    /// Highlight every series at the pointer's label index.
    Index,
}

/// Renderer configuration derived from the active theme.
///
/// The rendering surface is opaque to the core; these are the display
/// options it consumes alongside [`CombinedChart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDisplayOptions {
    pub legend_position: LegendPosition,
    pub interaction_mode: InteractionMode,

    /// When false, the tooltip activates near a line without requiring the
    /// pointer to intersect it.
    pub intersect_only: bool,

    pub axis_tick_color: String,
    pub grid_line_color: String,
}

impl ChartDisplayOptions {
    /// The configuration the original UI used: legend at the bottom,
    /// nearest-point tooltips, theme-dependent axis colors.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            legend_position: LegendPosition::Bottom,
            interaction_mode: InteractionMode::Nearest,
            intersect_only: false,
            axis_tick_color: theme.axis_tick_color().to_string(),
            grid_line_color: theme.grid_line_color().to_string(),
        }
    }
}
