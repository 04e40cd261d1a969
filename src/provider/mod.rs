//! Boundary with the hosted backend.
//!
//! The session layer depends on these traits, not on the concrete transport,
//! so the controller can be exercised against mocks. `SupabaseProvider`
//! implements both against the platform's auth and data REST surfaces.

mod supabase;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::{Identity, Profile, SignUpRequest};
use crate::errors::AppResult;

pub use supabase::SupabaseProvider;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Provider-issued session: the identity plus the opaque tokens the client
/// carries on subsequent requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub identity: Identity,
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    /// True when the access token has expired (with a small safety margin)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => at <= Utc::now() + chrono::Duration::seconds(30),
            None => false,
        }
    }
}

/// Kind of session-change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// Session-change notification emitted by the provider client.
///
/// `session` is `None` exactly when the provider no longer considers any
/// identity signed in.
#[derive(Debug, Clone)]
pub struct AuthEvent {
    pub kind: AuthEventKind,
    pub session: Option<AuthSession>,
}

/// Authentication operations delegated to the external provider.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Retrieve the persisted session, refreshing it if necessary.
    /// `Ok(None)` means no session exists; `Err` means retrieval itself failed.
    async fn get_session(&self) -> AppResult<Option<AuthSession>>;

    /// Create an account with role metadata attached. The backend provisions
    /// the profile row asynchronously after this returns.
    async fn sign_up(&self, request: SignUpRequest) -> AppResult<AuthSession>;

    /// Credential check; `AppError::Auth` carries the provider's rejection.
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession>;

    /// Revoke the current session remotely. Local persistence is cleared
    /// regardless of the remote outcome.
    async fn sign_out(&self) -> AppResult<()>;

    /// Subscribe to session-change notifications. Dropping the receiver
    /// unsubscribes.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

/// Single-row profile lookup by identity.
///
/// `Ok(None)` (row not found, expected transiently after sign-up) and `Err`
/// (query error) are distinct outcomes the session layer handles differently.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_identity(&self, id: Uuid) -> AppResult<Option<Profile>>;
}
