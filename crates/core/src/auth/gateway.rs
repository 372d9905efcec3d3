use tokio::sync::watch;
use tracing::debug;

use super::traits::IdentityProvider;
use crate::errors::CoreError;
use crate::models::session::{SessionState, UserSession};

/// Owns the identity-provider client and the current session, and publishes
/// session-presence changes to observers.
///
/// Mirrors the auth half of the shell: four mutating operations plus an
/// observer stream. A failed operation surfaces its message through the
/// returned error and leaves the published state untouched — the caller
/// decides what to show, the session (if any) stays valid.
pub struct SessionGateway {
    provider: Box<dyn IdentityProvider>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionGateway {
    /// Wrap an identity provider. Observers see `Initializing` until
    /// [`resolve_initial_session`](Self::resolve_initial_session) runs.
    pub fn new(provider: Box<dyn IdentityProvider>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Initializing);
        Self { provider, state_tx }
    }

    /// Resolve the transient `Initializing` state. Tokens are not persisted
    /// anywhere, so there is never a session to restore: this always lands
    /// on `SignedOut`.
    pub fn resolve_initial_session(&self) {
        if matches!(&*self.state_tx.borrow(), SessionState::Initializing) {
            self.state_tx.send_replace(SessionState::SignedOut);
        }
    }

    // ── Observation ─────────────────────────────────────────────────

    /// Subscribe to session-presence changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// The state as last published.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// The current session, if one is present.
    #[must_use]
    pub fn session(&self) -> Option<UserSession> {
        self.state_tx.borrow().session().cloned()
    }

    // ── Mutating operations ─────────────────────────────────────────

    /// Sign in with email + password. Publishes the new session on success.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, CoreError> {
        let session = self.provider.sign_in_with_password(email, password).await?;
        self.publish(session.clone());
        Ok(session)
    }

    /// Create an email/password account and sign it in.
    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, CoreError> {
        let session = self.provider.sign_up_with_password(email, password).await?;
        self.publish(session.clone());
        Ok(session)
    }

    /// Complete a Google sign-in: exchange the ID token the frontend's popup
    /// flow produced for a session.
    pub async fn sign_in_with_google(&self, id_token: &str) -> Result<UserSession, CoreError> {
        let session = self
            .provider
            .sign_in_with_id_token("google.com", id_token)
            .await?;
        self.publish(session.clone());
        Ok(session)
    }

    /// Discard the local session. Tokens are stateless server-side, so
    /// sign-out is a local transition; it cannot fail.
    pub fn sign_out(&self) {
        debug!("signed out");
        self.state_tx.send_replace(SessionState::SignedOut);
    }

    fn publish(&self, session: UserSession) {
        debug!(email = %session.email, provider = self.provider.name(), "signed in");
        self.state_tx.send_replace(SessionState::SignedIn(session));
    }
}
