pub mod auth;
pub mod errors;
pub mod fmt;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use auth::firebase::{AuthConfig, FirebaseAuthProvider};
use auth::gateway::SessionGateway;
use errors::CoreError;
use models::asset::Asset;
use models::chart::{ChartDisplayOptions, CombinedChart};
use models::controls::{Control, HOVER_COLOR};
use models::session::SessionState;
use models::settings::Settings;
use models::suggestion::AssetSuggestion;
use models::theme::Theme;
use providers::coingecko::CoinGeckoProvider;
use services::chart_service::ChartService;
use services::market_service::MarketService;
use services::suggestion_service;

/// Which coarse phase the shell is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// No session; the sign-in/up form is showing.
    Unauthenticated,
    /// A sign-in or sign-up call is in flight.
    AuthPending,
    /// A session is present; market data is shown.
    Authenticated,
}

/// Ticket handed out when a market fetch starts.
///
/// Completions are applied only while the shell's fetch generation still
/// matches the ticket: a fetch outlived by a sign-out (or superseded by a
/// newer refresh) is discarded instead of writing into a shell that has
/// already moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Main entry point / composition root for the Crypto Price Tracker core.
///
/// Owns every service and all UI state, and is mutated only through the
/// transition methods below — one code path at a time, never concurrently.
/// The frontend renders from the accessors, feeds user input into the form
/// transitions, and drives presence changes from the session observer:
///
/// ```no_run
/// # async fn wiring(mut tracker: crypto_tracker_core::CryptoTracker) {
/// let mut sessions = tracker.subscribe_session();
/// tracker.resolve_initial_session();
/// while sessions.changed().await.is_ok() {
///     let state = sessions.borrow_and_update().clone();
///     if tracker.apply_session_state(&state) {
///         tracker.refresh_market_data().await;
///     }
/// }
/// # }
/// ```
#[must_use]
pub struct CryptoTracker {
    session_gateway: SessionGateway,
    market_service: MarketService,
    chart_service: ChartService,

    phase: AuthPhase,

    // Auth form state
    email_input: String,
    password_input: String,
    signing_up: bool,
    auth_error: Option<String>,
    session_failure: Option<String>,

    // Display state
    theme: Theme,
    hovered: Option<Control>,

    // Market data state
    snapshot: Vec<Asset>,
    chart: Option<CombinedChart>,
    loading_snapshot: bool,
    fetch_generation: u64,
}

impl std::fmt::Debug for CryptoTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoTracker")
            .field("phase", &self.phase)
            .field("theme", &self.theme)
            .field("snapshot", &self.snapshot.len())
            .field("chart", &self.chart.is_some())
            .field("loading_snapshot", &self.loading_snapshot)
            .finish()
    }
}

impl CryptoTracker {
    /// Compose the shell with the production providers.
    pub fn new(auth_config: AuthConfig) -> Self {
        let gateway = SessionGateway::new(Box::new(FirebaseAuthProvider::new(auth_config)));
        let market_service =
            MarketService::new(Arc::new(CoinGeckoProvider::new()), Settings::default());
        Self::compose(gateway, market_service)
    }

    /// Compose the shell from pre-built collaborators. Tests inject mock
    /// providers here.
    pub fn compose(session_gateway: SessionGateway, market_service: MarketService) -> Self {
        Self {
            session_gateway,
            market_service,
            chart_service: ChartService::new(),
            phase: AuthPhase::Unauthenticated,
            email_input: String::new(),
            password_input: String::new(),
            signing_up: false,
            auth_error: None,
            session_failure: None,
            theme: Theme::default(),
            hovered: None,
            snapshot: Vec::new(),
            chart: None,
            loading_snapshot: false,
            fetch_generation: 0,
        }
    }

    // ── Session Observation ─────────────────────────────────────────

    /// Subscribe to session-presence changes.
    pub fn subscribe_session(&self) -> watch::Receiver<SessionState> {
        self.session_gateway.subscribe()
    }

    /// Resolve the observer's transient `Initializing` state.
    pub fn resolve_initial_session(&self) {
        self.session_gateway.resolve_initial_session();
    }

    /// The session state as last published by the gateway.
    #[must_use]
    pub fn current_session_state(&self) -> SessionState {
        self.session_gateway.current()
    }

    /// Feed one observer emission into the shell.
    ///
    /// Every presence transition flows through here — whether it came from
    /// a local auth operation or anywhere else. Returns `true` when the
    /// caller should start a market refresh (a session just became present).
    pub fn apply_session_state(&mut self, state: &SessionState) -> bool {
        match state {
            SessionState::SignedIn(session) => {
                debug!(email = %session.email, "session present");
                self.phase = AuthPhase::Authenticated;
                true
            }
            SessionState::SignedOut => {
                self.phase = AuthPhase::Unauthenticated;
                // Drop the data and invalidate anything still in flight.
                self.snapshot.clear();
                self.chart = None;
                self.loading_snapshot = false;
                self.fetch_generation += 1;
                false
            }
            SessionState::Initializing => false,
            SessionState::Failed(message) => {
                self.session_failure = Some(message.clone());
                self.phase = AuthPhase::Unauthenticated;
                false
            }
        }
    }

    // ── Auth Form ───────────────────────────────────────────────────

    pub fn set_email_input(&mut self, value: impl Into<String>) {
        self.email_input = value.into();
    }

    pub fn set_password_input(&mut self, value: impl Into<String>) {
        self.password_input = value.into();
    }

    #[must_use]
    pub fn email_input(&self) -> &str {
        &self.email_input
    }

    #[must_use]
    pub fn password_input(&self) -> &str {
        &self.password_input
    }

    /// Flip the form between sign-in and sign-up. Clears any prior error.
    pub fn toggle_signup_mode(&mut self) {
        self.signing_up = !self.signing_up;
        self.auth_error = None;
    }

    #[must_use]
    pub fn is_signing_up(&self) -> bool {
        self.signing_up
    }

    // ── Auth Actions ────────────────────────────────────────────────

    /// Submit the form: sign in, or sign up when the form is in sign-up
    /// mode. On success the form is cleared and the gateway publishes the
    /// new session (the observer wiring then flips the phase). On failure
    /// the provider's message is surfaced and the shell returns to the
    /// prior phase.
    pub async fn submit_credentials(&mut self) -> Result<(), CoreError> {
        self.auth_error = None;
        let prior = self.phase;
        self.phase = AuthPhase::AuthPending;

        let result = if self.signing_up {
            self.session_gateway
                .create_account(&self.email_input, &self.password_input)
                .await
        } else {
            self.session_gateway
                .sign_in_with_password(&self.email_input, &self.password_input)
                .await
        };

        match result {
            Ok(_) => {
                self.email_input.clear();
                self.password_input.clear();
                Ok(())
            }
            Err(e) => {
                self.auth_error = Some(e.to_string());
                self.phase = prior;
                Err(e)
            }
        }
    }

    /// Complete a Google sign-in with the ID token the frontend's popup
    /// flow produced.
    pub async fn sign_in_with_google(&mut self, id_token: &str) -> Result<(), CoreError> {
        self.auth_error = None;
        let prior = self.phase;
        self.phase = AuthPhase::AuthPending;

        match self.session_gateway.sign_in_with_google(id_token).await {
            Ok(_) => Ok(()),
            Err(e) => {
                self.auth_error = Some(e.to_string());
                self.phase = prior;
                Err(e)
            }
        }
    }

    /// Sign out. The gateway publishes `SignedOut`; the observer wiring
    /// resets the shell (and invalidates in-flight fetches).
    pub fn sign_out(&mut self) {
        self.auth_error = None;
        self.session_gateway.sign_out();
    }

    /// Last auth-action error, verbatim from the provider.
    #[must_use]
    pub fn auth_error(&self) -> Option<&str> {
        self.auth_error.as_deref()
    }

    /// Terminal session-observer failure, if any.
    #[must_use]
    pub fn session_failure(&self) -> Option<&str> {
        self.session_failure.as_deref()
    }

    /// Header greeting for the signed-in view.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        self.session_gateway
            .session()
            .map(|s| format!("Hi {}", s.display_name()))
    }

    // ── Market Data ─────────────────────────────────────────────────

    /// Start a market fetch and hand back the ticket its completions must
    /// present. Any later sign-out or newer refresh invalidates the ticket.
    pub fn begin_market_refresh(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        self.loading_snapshot = true;
        FetchTicket {
            generation: self.fetch_generation,
        }
    }

    /// Apply a completed snapshot fetch. Returns `true` when the snapshot
    /// was accepted and the history fetch should proceed.
    ///
    /// A stale completion (ticket no longer current) is discarded without
    /// touching state. A failure degrades to an empty list — no user-visible
    /// message for market errors.
    pub fn apply_snapshot(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Asset>, CoreError>,
    ) -> bool {
        if ticket.generation != self.fetch_generation {
            debug!("discarding stale snapshot completion");
            return false;
        }
        self.loading_snapshot = false;
        match result {
            Ok(assets) => {
                self.snapshot = assets;
                true
            }
            Err(e) => {
                warn!(error = %e, "market snapshot fetch failed");
                self.snapshot.clear();
                self.chart = None;
                false
            }
        }
    }

    /// Apply a completed chart build (history fetch + shaping). Stale
    /// completions are discarded; a failure leaves the chart empty.
    pub fn apply_chart(
        &mut self,
        ticket: FetchTicket,
        result: Result<Option<CombinedChart>, CoreError>,
    ) {
        if ticket.generation != self.fetch_generation {
            debug!("discarding stale chart completion");
            return;
        }
        match result {
            Ok(chart) => self.chart = chart,
            Err(e) => {
                warn!(error = %e, "history fetch failed");
                self.chart = None;
            }
        }
    }

    /// The straight-line refresh: snapshot, then per-asset histories, then
    /// the combined chart. Each stage presents its ticket before writing,
    /// so the split `begin`/`apply` pieces behave identically when a
    /// frontend drives them around its own event loop.
    pub async fn refresh_market_data(&mut self) {
        let ticket = self.begin_market_refresh();

        let snapshot = self.market_service.fetch_snapshot().await;
        if !self.apply_snapshot(ticket, snapshot) {
            return;
        }
        if self.snapshot.is_empty() {
            // Empty snapshot: empty list, no chart.
            self.chart = None;
            return;
        }

        let chart = match self.market_service.fetch_histories(&self.snapshot).await {
            Ok(histories) => Ok(self.chart_service.build_combined_chart(&histories)),
            Err(e) => Err(e),
        };
        self.apply_chart(ticket, chart);
    }

    /// The current snapshot, ranked as fetched.
    #[must_use]
    pub fn snapshot(&self) -> &[Asset] {
        &self.snapshot
    }

    /// Suggestions derived fresh from the current snapshot — never stored.
    #[must_use]
    pub fn suggestions(&self) -> Vec<AssetSuggestion> {
        suggestion_service::suggest_all(&self.snapshot)
    }

    /// The combined 24-hour chart, when one has been built.
    #[must_use]
    pub fn chart(&self) -> Option<&CombinedChart> {
        self.chart.as_ref()
    }

    /// Renderer configuration for the active theme.
    #[must_use]
    pub fn chart_display_options(&self) -> ChartDisplayOptions {
        self.chart_service.display_options(self.theme)
    }

    #[must_use]
    pub fn is_loading_snapshot(&self) -> bool {
        self.loading_snapshot
    }

    // ── Display State ───────────────────────────────────────────────

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Track which control the pointer is over (`None` when it leaves).
    pub fn set_hovered(&mut self, control: Option<Control>) {
        self.hovered = control;
    }

    /// Background color for a control, derived from hover state and theme —
    /// the frontend never mutates colors itself.
    #[must_use]
    pub fn control_color(&self, control: Control) -> &'static str {
        if self.hovered == Some(control) {
            HOVER_COLOR
        } else {
            control.base_color(self.theme)
        }
    }
}
