use serde::{Deserialize, Serialize};

/// Light/dark display theme.
///
/// The core keeps the flag and derives every theme-dependent color, so the
/// frontend never hardcodes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme. Used by the light/dark toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Color for chart axis tick labels.
    #[must_use]
    pub fn axis_tick_color(self) -> &'static str {
        match self {
            Theme::Light => "#222",
            Theme::Dark => "#eee",
        }
    }

    /// Color for chart grid lines.
    #[must_use]
    pub fn grid_line_color(self) -> &'static str {
        match self {
            Theme::Light => "#ddd",
            Theme::Dark => "#333",
        }
    }

    /// Muted text color (ticker symbols, zero-change rows).
    #[must_use]
    pub fn muted_text_color(self) -> &'static str {
        match self {
            Theme::Light => "#555",
            Theme::Dark => "#bbb",
        }
    }

    /// Color for a 24-hour change figure: green when positive, red when
    /// negative, muted when zero or absent.
    #[must_use]
    pub fn change_color(self, change: Option<f64>) -> &'static str {
        match change {
            Some(c) if c > 0.0 => "#4caf50",
            Some(c) if c < 0.0 => "#f44336",
            _ => self.muted_text_color(),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
        }
    }
}
