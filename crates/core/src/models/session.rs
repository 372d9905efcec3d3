use serde::{Deserialize, Serialize};

/// An authenticated identity-provider session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Email address of the signed-in user.
    pub email: String,

    /// Provider-local account id.
    pub local_id: String,

    /// Bearer token for authenticated provider calls.
    pub id_token: String,

    /// Token used to mint fresh id tokens.
    pub refresh_token: String,
}

impl UserSession {
    /// The part of the email before the '@', used for the greeting.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// What the session-presence observer currently reports.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// The gateway has not yet determined whether a session exists.
    Initializing,
    SignedOut,
    SignedIn(UserSession),
    /// The observer itself failed. Terminal.
    Failed(String),
}

impl SessionState {
    /// The current session, if one is present.
    #[must_use]
    pub fn session(&self) -> Option<&UserSession> {
        match self {
            SessionState::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }
}
