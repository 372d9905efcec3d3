use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// Discrete trading suggestion derived from an asset's 24-hour change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suggestion {
    Buy,
    Sell,
    Hold,
}

impl Suggestion {
    /// Background color of the suggestion badge in the asset list.
    #[must_use]
    pub fn badge_color(self, theme: Theme) -> &'static str {
        match self {
            Suggestion::Buy => "#4caf50",
            Suggestion::Sell => "#f44336",
            Suggestion::Hold => match theme {
                Theme::Light => "#ddd",
                Theme::Dark => "#555",
            },
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suggestion::Buy => write!(f, "Buy"),
            Suggestion::Sell => write!(f, "Sell"),
            Suggestion::Hold => write!(f, "Hold"),
        }
    }
}

/// A suggestion paired with the asset it was derived for.
///
/// Derived data, never stored — recomputed from the current snapshot
/// whenever it is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSuggestion {
    pub asset_id: String,
    pub suggestion: Suggestion,
}
