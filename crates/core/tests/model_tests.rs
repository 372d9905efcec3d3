// ═══════════════════════════════════════════════════════════════════
// Model Tests — Asset, Suggestion, Theme, Session, Settings, Chart
// options, and price formatting
// ═══════════════════════════════════════════════════════════════════

use crypto_tracker_core::fmt::display_price;
use crypto_tracker_core::models::asset::Asset;
use crypto_tracker_core::models::chart::{
    ChartDisplayOptions, InteractionMode, LegendPosition,
};
use crypto_tracker_core::models::controls::Control;
use crypto_tracker_core::models::session::{SessionState, UserSession};
use crypto_tracker_core::models::settings::Settings;
use crypto_tracker_core::models::suggestion::Suggestion;
use crypto_tracker_core::models::theme::Theme;

fn session(email: &str) -> UserSession {
    UserSession {
        email: email.to_string(),
        local_id: "uid-1".to_string(),
        id_token: "id-token".to_string(),
        refresh_token: "refresh-token".to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Asset
// ═══════════════════════════════════════════════════════════════════

mod asset {
    use super::*;

    /// A `/coins/markets` row (with fields we don't model) deserializes
    /// straight into `Asset`.
    #[test]
    fn deserializes_from_market_row() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 43210.55,
            "market_cap": 845000000000,
            "market_cap_rank": 1,
            "total_volume": 18000000000,
            "price_change_percentage_24h": -3.4
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, "bitcoin");
        assert_eq!(asset.symbol, "btc");
        assert_eq!(asset.name, "Bitcoin");
        assert_eq!(asset.current_price, 43210.55);
        assert_eq!(asset.market_cap, Some(845_000_000_000.0));
        assert_eq!(asset.price_change_percentage_24h, Some(-3.4));
    }

    #[test]
    fn missing_change_deserializes_to_none() {
        let json = r#"{
            "id": "newcoin",
            "symbol": "new",
            "name": "New Coin",
            "image": "https://assets.example/new.png",
            "current_price": 0.5
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.price_change_percentage_24h, None);
        assert_eq!(asset.market_cap, None);
    }

    #[test]
    fn null_change_deserializes_to_none() {
        let json = r#"{
            "id": "newcoin",
            "symbol": "new",
            "name": "New Coin",
            "image": "https://assets.example/new.png",
            "current_price": 0.5,
            "market_cap": null,
            "price_change_percentage_24h": null
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.price_change_percentage_24h, None);
    }

    #[test]
    fn ticker_uppercases_symbol() {
        let json = r#"{
            "id": "dogecoin",
            "symbol": "doge",
            "name": "Dogecoin",
            "image": "https://assets.example/doge.png",
            "current_price": 0.08
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.ticker(), "DOGE");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Suggestion
// ═══════════════════════════════════════════════════════════════════

mod suggestion {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Suggestion::Buy.to_string(), "Buy");
        assert_eq!(Suggestion::Sell.to_string(), "Sell");
        assert_eq!(Suggestion::Hold.to_string(), "Hold");
    }

    #[test]
    fn badge_colors() {
        assert_eq!(Suggestion::Buy.badge_color(Theme::Light), "#4caf50");
        assert_eq!(Suggestion::Buy.badge_color(Theme::Dark), "#4caf50");
        assert_eq!(Suggestion::Sell.badge_color(Theme::Light), "#f44336");
        assert_eq!(Suggestion::Sell.badge_color(Theme::Dark), "#f44336");
        // Only the neutral badge follows the theme
        assert_eq!(Suggestion::Hold.badge_color(Theme::Light), "#ddd");
        assert_eq!(Suggestion::Hold.badge_color(Theme::Dark), "#555");
    }

    #[test]
    fn serde_roundtrip() {
        for s in [Suggestion::Buy, Suggestion::Sell, Suggestion::Hold] {
            let json = serde_json::to_string(&s).unwrap();
            let back: Suggestion = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Theme
// ═══════════════════════════════════════════════════════════════════

mod theme {
    use super::*;

    #[test]
    fn defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn chart_colors() {
        assert_eq!(Theme::Light.axis_tick_color(), "#222");
        assert_eq!(Theme::Light.grid_line_color(), "#ddd");
        assert_eq!(Theme::Dark.axis_tick_color(), "#eee");
        assert_eq!(Theme::Dark.grid_line_color(), "#333");
    }

    #[test]
    fn change_color_by_sign() {
        assert_eq!(Theme::Light.change_color(Some(2.5)), "#4caf50");
        assert_eq!(Theme::Light.change_color(Some(-2.5)), "#f44336");
        assert_eq!(Theme::Light.change_color(Some(0.0)), "#555");
        assert_eq!(Theme::Dark.change_color(Some(0.0)), "#bbb");
        assert_eq!(Theme::Dark.change_color(None), "#bbb");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Controls
// ═══════════════════════════════════════════════════════════════════

mod controls {
    use super::*;

    #[test]
    fn base_colors() {
        assert_eq!(Control::Submit.base_color(Theme::Light), "#1976d2");
        assert_eq!(Control::GoogleSignIn.base_color(Theme::Light), "#db4437");
        assert_eq!(Control::SignOut.base_color(Theme::Dark), "#f44336");
    }

    #[test]
    fn theme_toggle_follows_theme() {
        assert_eq!(Control::ThemeToggle.base_color(Theme::Light), "#ddd");
        assert_eq!(Control::ThemeToggle.base_color(Theme::Dark), "#333");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Session
// ═══════════════════════════════════════════════════════════════════

mod session_state {
    use super::*;

    #[test]
    fn display_name_is_email_local_part() {
        assert_eq!(session("trader@example.com").display_name(), "trader");
    }

    #[test]
    fn display_name_without_at_sign_is_whole_email() {
        assert_eq!(session("not-an-email").display_name(), "not-an-email");
    }

    #[test]
    fn signed_in_exposes_session() {
        let state = SessionState::SignedIn(session("trader@example.com"));
        assert!(state.is_signed_in());
        assert_eq!(state.session().unwrap().email, "trader@example.com");
    }

    #[test]
    fn other_states_have_no_session() {
        for state in [
            SessionState::Initializing,
            SessionState::SignedOut,
            SessionState::Failed("observer broke".into()),
        ] {
            assert!(!state.is_signed_in());
            assert!(state.session().is_none());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.vs_currency, "usd");
        assert_eq!(settings.snapshot_size, 50);
        assert_eq!(settings.history_days, 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart display options
// ═══════════════════════════════════════════════════════════════════

mod display_options {
    use super::*;

    #[test]
    fn for_theme_light() {
        let opts = ChartDisplayOptions::for_theme(Theme::Light);
        assert_eq!(opts.legend_position, LegendPosition::Bottom);
        assert_eq!(opts.interaction_mode, InteractionMode::Nearest);
        assert!(!opts.intersect_only);
        assert_eq!(opts.axis_tick_color, "#222");
        assert_eq!(opts.grid_line_color, "#ddd");
    }

    #[test]
    fn for_theme_dark() {
        let opts = ChartDisplayOptions::for_theme(Theme::Dark);
        assert_eq!(opts.axis_tick_color, "#eee");
        assert_eq!(opts.grid_line_color, "#333");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Price formatting
// ═══════════════════════════════════════════════════════════════════

mod price_formatting {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(display_price(43210.55), "43,210.55");
        assert_eq!(display_price(1_234_567.0), "1,234,567.00");
    }

    #[test]
    fn no_separator_below_one_thousand() {
        assert_eq!(display_price(999.99), "999.99");
        assert_eq!(display_price(1000.0), "1,000.00");
    }

    #[test]
    fn sub_unit_prices_keep_precision() {
        assert_eq!(display_price(0.123456), "0.123");
        assert_eq!(display_price(0.000012345), "0.0000123");
    }

    #[test]
    fn zero_and_negative() {
        assert_eq!(display_price(0.0), "0.00");
        assert_eq!(display_price(-1234.5), "-1,234.50");
    }
}
