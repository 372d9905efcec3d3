use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::IdentityProvider;
use crate::errors::CoreError;
use crate::models::session::UserSession;

const BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Configuration for the Firebase Auth REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Web API key of the Firebase project. Not a secret, but it travels in
    /// the query string — the error sanitization in `CoreError` redacts it.
    pub api_key: String,

    /// Endpoint base. Overridable for the local emulator.
    pub base_url: String,
}

impl AuthConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }
}

/// Firebase Auth REST API provider.
///
/// - **Operations**: `accounts:signInWithPassword`, `accounts:signUp`,
///   `accounts:signInWithIdp` — keyed by the project's web API key.
/// - **Sessions**: stateless bearer tokens; there is no sign-out endpoint.
///
/// Error bodies carry an upstream message string ("EMAIL_NOT_FOUND",
/// "INVALID_PASSWORD", ...) which is surfaced verbatim as `CoreError::Auth`.
pub struct FirebaseAuthProvider {
    client: Client,
    config: AuthConfig,
}

impl FirebaseAuthProvider {
    pub fn new(config: AuthConfig) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    /// POST one `accounts:{op}` request and shape the outcome.
    async fn account_op(
        &self,
        op: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<UserSession, CoreError> {
        let url = format!(
            "{}/accounts:{op}?key={}",
            self.config.base_url, self.config.api_key
        );

        let resp = self.client.post(&url).json(body).send().await?;
        let status = resp.status();

        if !status.is_success() {
            // Surface the provider's message string verbatim; the UI shows
            // it as-is, without categorization.
            let message = resp
                .json::<AuthErrorResponse>()
                .await
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("{op} failed with status {status}"));
            return Err(CoreError::Auth(message));
        }

        let signin: SignInResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "Firebase Auth".into(),
            message: format!("Failed to parse {op} response: {e}"),
        })?;

        Ok(UserSession {
            email: signin.email,
            local_id: signin.local_id,
            id_token: signin.id_token,
            refresh_token: signin.refresh_token,
        })
    }
}

// ── Firebase Auth REST request/response types ───────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    /// URL-encoded `id_token=...&providerId=...` pair.
    post_body: String,
    request_uri: &'a str,
    return_secure_token: bool,
    return_idp_credential: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    #[serde(default)]
    email: String,
    local_id: String,
    id_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct AuthErrorResponse {
    error: AuthErrorBody,
}

#[derive(Deserialize)]
struct AuthErrorBody {
    message: String,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl IdentityProvider for FirebaseAuthProvider {
    fn name(&self) -> &str {
        "Firebase Auth"
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, CoreError> {
        self.account_op(
            "signInWithPassword",
            &PasswordRequest {
                email,
                password,
                return_secure_token: true,
            },
        )
        .await
    }

    async fn sign_up_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, CoreError> {
        self.account_op(
            "signUp",
            &PasswordRequest {
                email,
                password,
                return_secure_token: true,
            },
        )
        .await
    }

    async fn sign_in_with_id_token(
        &self,
        provider_id: &str,
        id_token: &str,
    ) -> Result<UserSession, CoreError> {
        self.account_op(
            "signInWithIdp",
            &IdpRequest {
                post_body: format!("id_token={id_token}&providerId={provider_id}"),
                request_uri: "http://localhost",
                return_secure_token: true,
                return_idp_credential: true,
            },
        )
        .await
    }
}
