//! Supabase-compatible backend client.
//!
//! Talks to the platform's auth endpoints (`/auth/v1/...`) and data REST
//! surface (`/rest/v1/<table>`). The session is persisted to a JSON file
//! between runs, the analog of the browser client's local storage, and every
//! session transition performed by this client is emitted on a broadcast
//! channel for the session controller to drain.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::config::{Settings, TABLE_PROFILES};
use crate::domain::{Identity, Profile, Role, SignUpRequest};
use crate::errors::{AppError, AppResult};

use super::{AuthEvent, AuthEventKind, AuthProvider, AuthSession, ProfileStore};

/// Capacity of the session-change channel; events are tiny and last-wins,
/// so a lagging subscriber may skip ahead.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Concrete provider over the hosted platform's REST surfaces.
pub struct SupabaseProvider {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    session_file: PathBuf,
    session: RwLock<Option<AuthSession>>,
    events: broadcast::Sender<AuthEvent>,
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct WireUser {
    id: Uuid,
    email: String,
}

#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    user: WireUser,
}

/// Sign-up response. With auto-confirm enabled the body is a full token
/// grant; with email confirmation pending it is just the user object.
#[derive(Debug, Deserialize)]
struct SignUpReply {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<WireUser>,
}

#[derive(Debug, Deserialize, Default)]
struct WireError {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl WireError {
    fn message(self, fallback: StatusCode) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .unwrap_or_else(|| format!("provider returned {fallback}"))
    }
}

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

/// Metadata the server-side trigger copies into the new profile row
#[derive(Debug, Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
    national_id: &'a str,
    role: Role,
}

impl SupabaseProvider {
    pub fn new(settings: &Settings) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.http_timeout)
            .build()?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            http,
            base_url: settings.backend_url.trim_end_matches('/').to_string(),
            anon_key: settings.anon_key().to_string(),
            session_file: PathBuf::from(&settings.session_file),
            session: RwLock::new(None),
            events,
        })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Bearer token for data requests: the signed-in access token when one
    /// exists, the public key otherwise.
    async fn bearer(&self) -> String {
        match self.session.read().await.as_ref() {
            Some(session) => session.access_token.clone(),
            None => self.anon_key.clone(),
        }
    }

    fn emit(&self, kind: AuthEventKind, session: Option<AuthSession>) {
        // No receivers is fine; nothing has subscribed yet.
        let _ = self.events.send(AuthEvent { kind, session });
    }

    async fn store_session(&self, session: &AuthSession) -> AppResult<()> {
        *self.session.write().await = Some(session.clone());
        let body = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.session_file, body).await?;
        Ok(())
    }

    async fn clear_session(&self) {
        *self.session.write().await = None;
        if let Err(e) = tokio::fs::remove_file(&self.session_file).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to remove session file: {e}");
            }
        }
    }

    async fn load_persisted(&self) -> AppResult<Option<AuthSession>> {
        match tokio::fs::read(&self.session_file).await {
            Ok(bytes) => {
                let session = serde_json::from_slice(&bytes)
                    .map_err(|e| AppError::session_retrieval(format!("corrupt session file: {e}")))?;
                Ok(Some(session))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::session_retrieval(e.to_string())),
        }
    }

    fn session_from_grant(grant: TokenGrant) -> AuthSession {
        AuthSession {
            identity: Identity {
                id: grant.user.id,
                email: grant.user.email,
            },
            access_token: grant.access_token,
            refresh_token: grant.refresh_token,
            expires_at: grant
                .expires_in
                .map(|secs| chrono::Utc::now() + chrono::Duration::seconds(secs)),
        }
    }

    /// Extract the provider's rejection message from an auth error response
    async fn auth_rejection(response: reqwest::Response) -> AppError {
        let status = response.status();
        let wire: WireError = response.json().await.unwrap_or_default();
        AppError::Auth(wire.message(status))
    }

    async fn refresh(&self, refresh_token: &str) -> AppResult<AuthSession> {
        let response = self
            .http
            .post(self.auth_url("token?grant_type=refresh_token"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .map_err(|e| AppError::session_retrieval(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let wire: WireError = response.json().await.unwrap_or_default();
            return Err(AppError::session_retrieval(wire.message(status)));
        }

        let grant: TokenGrant = response
            .json()
            .await
            .map_err(|e| AppError::session_retrieval(e.to_string()))?;
        let session = Self::session_from_grant(grant);
        self.store_session(&session).await?;
        self.emit(AuthEventKind::TokenRefreshed, Some(session.clone()));
        Ok(session)
    }

    // =========================================================================
    // Generic table access (PostgREST)
    // =========================================================================

    /// Select rows matching `query` pairs, e.g. `("id", "eq.<uuid>")`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> AppResult<Vec<T>> {
        let response = self
            .http
            .get(self.rest_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(self.bearer().await)
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::internal(format!(
                "select from {table} failed: {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    /// Insert one row and return the stored representation.
    pub async fn insert<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
    ) -> AppResult<T> {
        let response = self
            .http
            .post(self.rest_url(table))
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer().await)
            .json(row)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::internal(format!(
                "insert into {table} failed: {}",
                response.status()
            )));
        }
        let mut rows: Vec<T> = response.json().await?;
        rows.pop()
            .ok_or_else(|| AppError::internal(format!("insert into {table} returned no row")))
    }

    /// Update rows matching `query` and return the stored representations.
    pub async fn update<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
        patch: &B,
    ) -> AppResult<Vec<T>> {
        let response = self
            .http
            .patch(self.rest_url(table))
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer().await)
            .query(query)
            .json(patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::internal(format!(
                "update of {table} failed: {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    /// Delete rows matching `query`.
    pub async fn delete(&self, table: &str, query: &[(&str, String)]) -> AppResult<()> {
        let response = self
            .http
            .delete(self.rest_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(self.bearer().await)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::internal(format!(
                "delete from {table} failed: {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthProvider for SupabaseProvider {
    async fn get_session(&self) -> AppResult<Option<AuthSession>> {
        if let Some(session) = self.session.read().await.clone() {
            if !session.is_expired() {
                return Ok(Some(session));
            }
        }

        let Some(persisted) = self.load_persisted().await? else {
            return Ok(None);
        };

        if persisted.is_expired() {
            match persisted.refresh_token.as_deref() {
                Some(token) => return self.refresh(token).await.map(Some),
                None => {
                    self.clear_session().await;
                    return Ok(None);
                }
            }
        }

        *self.session.write().await = Some(persisted.clone());
        Ok(Some(persisted))
    }

    async fn sign_up(&self, request: SignUpRequest) -> AppResult<AuthSession> {
        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            data: SignUpMetadata {
                full_name: &request.full_name,
                national_id: &request.national_id,
                role: request.role,
            },
        };

        let response = self
            .http
            .post(self.auth_url("signup"))
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_rejection(response).await);
        }

        let reply: SignUpReply = response.json().await?;
        let (Some(access_token), Some(user)) = (reply.access_token, reply.user) else {
            // Confirmation-required projects never hand out a session here;
            // this application expects auto-confirm like the hosted setup.
            return Err(AppError::auth(
                "account created but no session was issued; confirm the email and sign in",
            ));
        };

        let session = AuthSession {
            identity: Identity {
                id: user.id,
                email: user.email,
            },
            access_token,
            refresh_token: reply.refresh_token,
            expires_at: reply
                .expires_in
                .map(|secs| chrono::Utc::now() + chrono::Duration::seconds(secs)),
        };
        self.store_session(&session).await?;
        self.emit(AuthEventKind::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let response = self
            .http
            .post(self.auth_url("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_rejection(response).await);
        }

        let grant: TokenGrant = response.json().await?;
        let session = Self::session_from_grant(grant);
        self.store_session(&session).await?;
        self.emit(AuthEventKind::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> AppResult<()> {
        let token = self.session.read().await.as_ref().map(|s| s.access_token.clone());

        // Local state goes first: staying signed in locally against a session
        // the provider may already consider dead is the worse failure mode.
        self.clear_session().await;
        self.emit(AuthEventKind::SignedOut, None);

        if let Some(token) = token {
            let response = self
                .http
                .post(self.auth_url("logout"))
                .header("apikey", &self.anon_key)
                .bearer_auth(token)
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(Self::auth_rejection(response).await);
            }
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

#[async_trait]
impl ProfileStore for SupabaseProvider {
    async fn find_by_identity(&self, id: Uuid) -> AppResult<Option<Profile>> {
        let response = self
            .http
            .get(self.rest_url(TABLE_PROFILES))
            .header("apikey", &self.anon_key)
            .bearer_auth(self.bearer().await)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| AppError::profile_fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::profile_fetch(format!(
                "profile query returned {}",
                response.status()
            )));
        }

        let mut rows: Vec<Profile> = response
            .json()
            .await
            .map_err(|e| AppError::profile_fetch(e.to_string()))?;
        Ok(rows.pop())
    }
}
