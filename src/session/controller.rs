//! Auth session controller - single source of truth for who is signed in.
//!
//! Owns the session store and profile resolver, delegates credential
//! operations to the provider, and keeps local state synchronized with the
//! provider's session-change notifications. The profile is re-resolved on
//! every notification rather than trusted from cache, so a role change lands
//! on the next auth event.

use std::sync::Arc;

use tokio::sync::broadcast;
use validator::Validate;

use crate::config::{Settings, PATH_LOGIN};
use crate::domain::{Identity, Profile, Role, SignUpRequest};
use crate::errors::{AppError, AppResult};
use crate::provider::{AuthEvent, AuthProvider, ProfileStore};

use super::{ProfileResolver, SessionState, SessionStore};

/// Destination an auth operation resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
}

pub struct SessionController<P: AuthProvider, S: ProfileStore> {
    provider: Arc<P>,
    resolver: ProfileResolver<S>,
    store: Arc<SessionStore>,
}

impl<P: AuthProvider, S: ProfileStore> SessionController<P, S> {
    pub fn new(
        provider: Arc<P>,
        profiles: Arc<S>,
        store: Arc<SessionStore>,
        settings: &Settings,
    ) -> Self {
        Self {
            provider,
            resolver: ProfileResolver::new(profiles, settings),
            store,
        }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Startup transition out of `Loading`: resolve the provider's persisted
    /// session, if any. Every failure path fails open to `Anonymous` so the
    /// application stays usable; there is no half-authenticated outcome.
    pub async fn initialize(&self) {
        let token = self.store.begin();

        let session = match self.provider.get_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "session retrieval failed, starting anonymous");
                self.store.commit(token, SessionState::Anonymous);
                return;
            }
        };

        let next = match session {
            None => SessionState::Anonymous,
            Some(session) => self.resolve_state(&session.identity).await,
        };
        self.store.commit(token, next);
    }

    /// Drain session-change notifications for the lifetime of the process.
    ///
    /// The generation token is allocated synchronously at receipt, in arrival
    /// order; each event is then applied on its own task so a slow profile
    /// fetch cannot block newer notifications, and `commit` discards any
    /// completion a newer event has superseded. Dropping the receiver (or the
    /// provider side closing) ends the loop.
    pub async fn run(self: Arc<Self>, mut events: broadcast::Receiver<AuthEvent>)
    where
        P: 'static,
        S: 'static,
    {
        loop {
            match events.recv().await {
                Ok(event) => {
                    let token = self.store.begin();
                    let this = self.clone();
                    tokio::spawn(async move { this.apply_event(event, token).await });
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Fine for correctness: the next received event is newer
                    // than anything skipped, and last wins.
                    tracing::warn!(skipped, "session events lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    /// Apply one session-change notification under its generation token.
    pub async fn apply_event(&self, event: AuthEvent, token: u64) {
        tracing::debug!(kind = ?event.kind, "auth state changed");
        let next = match event.session {
            None => SessionState::Anonymous,
            Some(session) => self.resolve_state(&session.identity).await,
        };
        if !self.store.commit(token, next) {
            tracing::debug!(token, "session update superseded by a newer event");
        }
    }

    /// Create an account, wait out profile provisioning, and redirect by
    /// role. If the profile never materializes the store is left `Anonymous`
    /// and the caller gets `ProfileMissing` — never a partially authenticated
    /// state.
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<Redirect> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        if matches!(request.role, Role::Unknown) {
            return Err(AppError::validation("role must be admin or student"));
        }

        let session = self.provider.sign_up(request).await?;

        match self.resolver.resolve_with_retry(&session.identity).await {
            Ok(profile) => Ok(self.commit_authenticated(session.identity, profile)),
            Err(e) => {
                let token = self.store.begin();
                self.store.commit(token, SessionState::Anonymous);
                Err(e)
            }
        }
    }

    /// Credential sign-in. A valid credential without a profile row is a
    /// data-integrity problem the user cannot self-resolve, so it surfaces
    /// as `ProfileMissing` instead of being silently retried.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<Redirect> {
        let session = self.provider.sign_in(email, password).await?;

        match self.resolver.resolve(&session.identity).await {
            Ok(Some(profile)) => Ok(self.commit_authenticated(session.identity, profile)),
            Ok(None) => {
                let token = self.store.begin();
                self.store.commit(token, SessionState::Anonymous);
                Err(AppError::ProfileMissing)
            }
            Err(e) => {
                let token = self.store.begin();
                self.store.commit(token, SessionState::Anonymous);
                Err(e)
            }
        }
    }

    /// Best-effort sign-out: local state is cleared and the login redirect
    /// returned even when the remote revoke fails. Remaining authenticated
    /// locally while the provider considers the session dead is the bigger
    /// correctness risk.
    pub async fn sign_out(&self) -> Redirect {
        if let Err(e) = self.provider.sign_out().await {
            tracing::warn!(error = %e, "remote sign-out failed, clearing local session anyway");
        }
        let token = self.store.begin();
        self.store.commit(token, SessionState::Anonymous);
        Redirect { to: PATH_LOGIN }
    }

    /// Resolve an identity to a session state: profile found means
    /// authenticated, anything else degrades to anonymous.
    async fn resolve_state(&self, identity: &Identity) -> SessionState {
        match self.resolver.resolve(identity).await {
            Ok(Some(profile)) => SessionState::Authenticated {
                identity: identity.clone(),
                profile,
            },
            Ok(None) => {
                tracing::warn!(identity = %identity.id, "no profile for identity");
                SessionState::Anonymous
            }
            Err(e) => {
                tracing::warn!(identity = %identity.id, error = %e, "profile fetch failed");
                SessionState::Anonymous
            }
        }
    }

    /// The token is allocated only now, after resolution: this operation's
    /// outcome is the newest information unless a genuinely newer event has
    /// arrived in the meantime.
    fn commit_authenticated(&self, identity: Identity, profile: Profile) -> Redirect {
        let to = profile.role.default_path();
        let token = self.store.begin();
        self.store.commit(
            token,
            SessionState::Authenticated { identity, profile },
        );
        Redirect { to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::Role;
    use crate::provider::{AuthEventKind, AuthSession, MockAuthProvider, MockProfileStore};

    fn profile_for(id: Uuid, role: Role) -> Profile {
        Profile {
            id,
            created_at: Utc::now(),
            email: "resident@example.com".to_string(),
            full_name: "Test Resident".to_string(),
            national_id: "12345678901234".to_string(),
            role,
            avatar_url: None,
            updated_at: None,
            phone: None,
            emergency_contact: None,
        }
    }

    fn session_for(id: Uuid) -> AuthSession {
        AuthSession {
            identity: Identity {
                id,
                email: "resident@example.com".to_string(),
            },
            access_token: "token".to_string(),
            refresh_token: None,
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn profile_is_re_resolved_on_every_event() {
        let id = Uuid::new_v4();
        let mut profiles = MockProfileStore::new();
        // A token refresh carries the same identity, but the role may have
        // changed remotely, so the lookup runs again.
        profiles
            .expect_find_by_identity()
            .times(2)
            .returning(move |id| Ok(Some(profile_for(id, Role::Student))));

        let store = Arc::new(SessionStore::new());
        let controller = SessionController::new(
            Arc::new(MockAuthProvider::new()),
            Arc::new(profiles),
            store.clone(),
            &Settings::default(),
        );

        let event = AuthEvent {
            kind: AuthEventKind::TokenRefreshed,
            session: Some(session_for(id)),
        };
        let token = store.begin();
        controller.apply_event(event.clone(), token).await;
        let token = store.begin();
        controller.apply_event(event, token).await;

        assert_eq!(store.current().role(), Some(Role::Student));
    }

    #[tokio::test]
    async fn event_without_session_clears_state() {
        let profiles = MockProfileStore::new();
        let store = Arc::new(SessionStore::new());
        let controller = SessionController::new(
            Arc::new(MockAuthProvider::new()),
            Arc::new(profiles),
            store.clone(),
            &Settings::default(),
        );

        let token = store.begin();
        controller
            .apply_event(
                AuthEvent {
                    kind: AuthEventKind::SignedOut,
                    session: None,
                },
                token,
            )
            .await;

        assert!(store.current().is_anonymous());
    }
}
