use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// Interactive controls whose styling reacts to pointer hover.
///
/// The original UI recolored buttons imperatively from pointer events; here
/// hover is explicit state and every color is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// The sign-in / sign-up submit button.
    Submit,
    /// The federated sign-in button.
    GoogleSignIn,
    /// The light/dark toggle.
    ThemeToggle,
    /// The header sign-out button.
    SignOut,
}

/// Every control turns this green while hovered.
pub const HOVER_COLOR: &str = "#388e3c";

impl Control {
    /// Resting background color.
    #[must_use]
    pub fn base_color(self, theme: Theme) -> &'static str {
        match self {
            Control::Submit => "#1976d2",
            Control::GoogleSignIn => "#db4437",
            Control::SignOut => "#f44336",
            Control::ThemeToggle => match theme {
                Theme::Light => "#ddd",
                Theme::Dark => "#333",
            },
        }
    }
}
