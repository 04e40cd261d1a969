//! Session controller integration tests.
//!
//! Exercise the controller against scripted provider stubs, without a real
//! backend: startup resolution, event ordering under overlapping profile
//! fetches, and the sign-in/sign-up/sign-out transitions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::broadcast;
use uuid::Uuid;

use hostelhub::config::Settings;
use hostelhub::domain::{Identity, Profile, Role, SignUpRequest};
use hostelhub::errors::{AppError, AppResult};
use hostelhub::provider::{AuthEvent, AuthEventKind, AuthProvider, AuthSession, ProfileStore};
use hostelhub::session::{SessionController, SessionState, SessionStore};

// =============================================================================
// Scripted stubs
// =============================================================================

/// Auth provider stub returning canned results
struct StubAuth {
    session: Option<AuthSession>,
    session_error: bool,
    credential_session: Option<AuthSession>,
    sign_out_fails: bool,
    events: broadcast::Sender<AuthEvent>,
}

impl StubAuth {
    fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            session: None,
            session_error: false,
            credential_session: None,
            sign_out_fails: false,
            events,
        }
    }
}

#[async_trait]
impl AuthProvider for StubAuth {
    async fn get_session(&self) -> AppResult<Option<AuthSession>> {
        if self.session_error {
            return Err(AppError::session_retrieval("connection refused"));
        }
        Ok(self.session.clone())
    }

    async fn sign_up(&self, _request: SignUpRequest) -> AppResult<AuthSession> {
        self.credential_session
            .clone()
            .ok_or_else(|| AppError::auth("User already registered"))
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> AppResult<AuthSession> {
        self.credential_session
            .clone()
            .ok_or_else(|| AppError::auth("Invalid login credentials"))
    }

    async fn sign_out(&self) -> AppResult<()> {
        if self.sign_out_fails {
            Err(AppError::auth("revoke failed"))
        } else {
            Ok(())
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

/// Profile store answering per identity, with a configurable delay so tests
/// can interleave completions out of order.
struct DelayedStore {
    responses: HashMap<Uuid, (Duration, Profile)>,
}

#[async_trait]
impl ProfileStore for DelayedStore {
    async fn find_by_identity(&self, id: Uuid) -> AppResult<Option<Profile>> {
        match self.responses.get(&id) {
            Some((delay, profile)) => {
                tokio::time::sleep(*delay).await;
                Ok(Some(profile.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Profile store with no rows at all
struct EmptyStore;

#[async_trait]
impl ProfileStore for EmptyStore {
    async fn find_by_identity(&self, _id: Uuid) -> AppResult<Option<Profile>> {
        Ok(None)
    }
}

/// Profile store whose queries always fail
struct FailingStore;

#[async_trait]
impl ProfileStore for FailingStore {
    async fn find_by_identity(&self, _id: Uuid) -> AppResult<Option<Profile>> {
        Err(AppError::profile_fetch("query error"))
    }
}

/// Profile store that has no row for the first `ready_after` lookups, like a
/// provisioning trigger that has not run yet.
struct ProvisioningStore {
    ready_after: u32,
    calls: AtomicU32,
    profile: Profile,
}

#[async_trait]
impl ProfileStore for ProvisioningStore {
    async fn find_by_identity(&self, _id: Uuid) -> AppResult<Option<Profile>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call > self.ready_after {
            Ok(Some(self.profile.clone()))
        } else {
            Ok(None)
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn profile(id: Uuid, role: Role) -> Profile {
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

fn session(id: Uuid) -> AuthSession {
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

fn controller<P: AuthProvider, S: ProfileStore>(
    provider: P,
    profiles: S,
) -> (Arc<SessionController<P, S>>, Arc<SessionStore>) {
    let store = Arc::new(SessionStore::new());
    let controller = Arc::new(SessionController::new(
        Arc::new(provider),
        Arc::new(profiles),
        store.clone(),
        &Settings::default(),
    ));
    (controller, store)
}

fn sign_up_request(role: Role) -> SignUpRequest {
    SignUpRequest {
        email: "resident@example.com".to_string(),
        password: "correct-horse".to_string(),
        full_name: "Test Resident".to_string(),
        national_id: "12345678901234".to_string(),
        role,
    }
}

// =============================================================================
// Startup
// =============================================================================

#[tokio::test]
async fn initialize_without_session_settles_anonymous() {
    let (controller, store) = controller(StubAuth::new(), EmptyStore);
    assert!(store.current().is_loading());

    controller.initialize().await;
    assert!(store.current().is_anonymous());
}

#[tokio::test]
async fn initialize_fails_open_when_session_retrieval_errors() {
    let mut auth = StubAuth::new();
    auth.session_error = true;

    let (controller, store) = controller(auth, EmptyStore);
    controller.initialize().await;
    assert!(store.current().is_anonymous());
}

#[tokio::test]
async fn initialize_resolves_persisted_session_to_authenticated() {
    let id = Uuid::new_v4();
    let mut auth = StubAuth::new();
    auth.session = Some(session(id));
    let profiles = DelayedStore {
        responses: HashMap::from([(id, (Duration::ZERO, profile(id, Role::Admin)))]),
    };

    let (controller, store) = controller(auth, profiles);
    controller.initialize().await;

    let state = store.current();
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Admin));
}

#[tokio::test]
async fn initialize_never_leaves_half_authenticated_state() {
    // A session exists but its profile query fails: the state must degrade
    // to anonymous, not to "identity without profile".
    let id = Uuid::new_v4();
    let mut auth = StubAuth::new();
    auth.session = Some(session(id));

    let (controller, store) = controller(auth, FailingStore);
    controller.initialize().await;
    assert!(store.current().is_anonymous());
}

// =============================================================================
// Event ordering
// =============================================================================

#[tokio::test(start_paused = true)]
async fn last_notification_wins_over_stale_fetch() {
    let slow = Uuid::new_v4();
    let fast = Uuid::new_v4();

    let auth = StubAuth::new();
    let events = auth.events.clone();
    let profiles = DelayedStore {
        responses: HashMap::from([
            (slow, (Duration::from_millis(500), profile(slow, Role::Admin))),
            (fast, (Duration::from_millis(10), profile(fast, Role::Student))),
        ]),
    };

    let (controller, store) = controller(auth, profiles);
    let subscription = events.subscribe();
    tokio::spawn(controller.clone().run(subscription));
    tokio::task::yield_now().await;

    // Older event resolves slowly, newer one quickly: the slow completion
    // must not overwrite the state committed for the newer event.
    events
        .send(AuthEvent {
            kind: AuthEventKind::SignedIn,
            session: Some(session(slow)),
        })
        .unwrap();
    events
        .send(AuthEvent {
            kind: AuthEventKind::SignedIn,
            session: Some(session(fast)),
        })
        .unwrap();

    tokio::time::sleep(Duration::from_secs(2)).await;

    let state = store.current();
    assert_eq!(state.profile().map(|p| p.id), Some(fast));
    assert_eq!(state.role(), Some(Role::Student));
}

#[tokio::test(start_paused = true)]
async fn sign_out_event_supersedes_in_flight_resolution() {
    let id = Uuid::new_v4();

    let auth = StubAuth::new();
    let events = auth.events.clone();
    let profiles = DelayedStore {
        responses: HashMap::from([(id, (Duration::from_millis(300), profile(id, Role::Student)))]),
    };

    let (controller, store) = controller(auth, profiles);
    let subscription = events.subscribe();
    tokio::spawn(controller.clone().run(subscription));
    tokio::task::yield_now().await;

    events
        .send(AuthEvent {
            kind: AuthEventKind::SignedIn,
            session: Some(session(id)),
        })
        .unwrap();
    events
        .send(AuthEvent {
            kind: AuthEventKind::SignedOut,
            session: None,
        })
        .unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(store.current().is_anonymous());
}

// =============================================================================
// Sign-in
// =============================================================================

#[tokio::test]
async fn sign_in_redirects_by_role() {
    let id = Uuid::new_v4();
    let mut auth = StubAuth::new();
    auth.credential_session = Some(session(id));
    let profiles = DelayedStore {
        responses: HashMap::from([(id, (Duration::ZERO, profile(id, Role::Admin)))]),
    };

    let (controller, store) = controller(auth, profiles);
    controller.initialize().await;

    let redirect = controller.sign_in("resident@example.com", "pw").await.unwrap();
    assert_eq!(redirect.to, "/admin");
    assert!(store.current().is_authenticated());
}

#[tokio::test]
async fn sign_in_without_profile_row_is_profile_missing() {
    let mut auth = StubAuth::new();
    auth.credential_session = Some(session(Uuid::new_v4()));

    let (controller, store) = controller(auth, EmptyStore);
    controller.initialize().await;

    let err = controller.sign_in("resident@example.com", "pw").await.unwrap_err();
    assert!(matches!(err, AppError::ProfileMissing));
    assert!(store.current().is_anonymous());
}

#[tokio::test]
async fn sign_in_surfaces_profile_query_errors() {
    let mut auth = StubAuth::new();
    auth.credential_session = Some(session(Uuid::new_v4()));

    let (controller, store) = controller(auth, FailingStore);
    controller.initialize().await;

    let err = controller.sign_in("resident@example.com", "pw").await.unwrap_err();
    assert!(matches!(err, AppError::ProfileFetch(_)));
    assert!(store.current().is_anonymous());
}

#[tokio::test]
async fn sign_in_with_rejected_credentials_surfaces_provider_message() {
    let (controller, store) = controller(StubAuth::new(), EmptyStore);
    controller.initialize().await;

    let err = controller.sign_in("resident@example.com", "wrong").await.unwrap_err();
    match err {
        AppError::Auth(message) => assert_eq!(message, "Invalid login credentials"),
        other => panic!("expected Auth error, got {other:?}"),
    }
    assert!(store.current().is_anonymous());
}

// =============================================================================
// Sign-up
// =============================================================================

#[tokio::test(start_paused = true)]
async fn sign_up_retries_past_provisioning_delay() {
    let id = Uuid::new_v4();
    let mut auth = StubAuth::new();
    auth.credential_session = Some(session(id));
    // Row appears only on the second lookup, i.e. after one retry.
    let profiles = ProvisioningStore {
        ready_after: 1,
        calls: AtomicU32::new(0),
        profile: profile(id, Role::Student),
    };

    let (controller, store) = controller(auth, profiles);
    controller.initialize().await;

    let redirect = controller.sign_up(sign_up_request(Role::Student)).await.unwrap();
    assert_eq!(redirect.to, "/student");
    assert!(store.current().is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn sign_up_exhausting_retries_lands_anonymous_with_profile_missing() {
    let mut auth = StubAuth::new();
    auth.credential_session = Some(session(Uuid::new_v4()));

    let (controller, store) = controller(auth, EmptyStore);
    controller.initialize().await;

    let err = controller.sign_up(sign_up_request(Role::Student)).await.unwrap_err();
    assert!(matches!(err, AppError::ProfileMissing));
    assert!(store.current().is_anonymous());
}

#[tokio::test(start_paused = true)]
async fn sign_up_surfaces_query_errors_when_every_lookup_fails() {
    let mut auth = StubAuth::new();
    auth.credential_session = Some(session(Uuid::new_v4()));

    let (controller, store) = controller(auth, FailingStore);
    controller.initialize().await;

    // No attempt ever observed a missing row, so the query error wins over
    // the provisioning-delay interpretation.
    let err = controller.sign_up(sign_up_request(Role::Student)).await.unwrap_err();
    assert!(matches!(err, AppError::ProfileFetch(_)));
    assert!(store.current().is_anonymous());
}

#[tokio::test]
async fn sign_up_rejects_invalid_requests_before_calling_the_provider() {
    let (controller, _store) = controller(StubAuth::new(), EmptyStore);

    let mut request = sign_up_request(Role::Student);
    request.password = "short".to_string();
    let err = controller.sign_up(request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

// =============================================================================
// Sign-out
// =============================================================================

#[tokio::test]
async fn sign_out_clears_state_even_when_remote_revoke_fails() {
    let id = Uuid::new_v4();
    let mut auth = StubAuth::new();
    auth.session = Some(session(id));
    auth.sign_out_fails = true;
    let profiles = DelayedStore {
        responses: HashMap::from([(id, (Duration::ZERO, profile(id, Role::Student)))]),
    };

    let (controller, store) = controller(auth, profiles);
    controller.initialize().await;
    assert!(store.current().is_authenticated());

    let redirect = controller.sign_out().await;
    assert_eq!(redirect.to, "/login");
    assert!(store.current().is_anonymous());
}
