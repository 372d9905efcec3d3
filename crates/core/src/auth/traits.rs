use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::session::UserSession;

/// Trait abstraction for the identity provider.
///
/// The one production implementation talks to the Firebase Auth REST API.
/// Sign-out is not part of the trait: sessions are stateless bearer tokens,
/// so signing out is a local discard in the gateway.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait IdentityProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Exchange email + password for a session.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, CoreError>;

    /// Create a new email/password account and sign it in.
    async fn sign_up_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, CoreError>;

    /// Exchange a federated provider's ID token (obtained by the frontend's
    /// popup flow) for a session.
    async fn sign_in_with_id_token(
        &self,
        provider_id: &str,
        id_token: &str,
    ) -> Result<UserSession, CoreError>;
}
