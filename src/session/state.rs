//! Session state and its owning store.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::domain::{Identity, Profile, Role};

/// Tri-state session: the process starts in `Loading` and settles into
/// `Authenticated` or `Anonymous` once the persisted session is resolved.
/// There is no terminal state; every auth event re-enters the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Anonymous,
    Authenticated { identity: Identity, profile: Profile },
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, SessionState::Anonymous)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// Resolved profile, when authenticated
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            SessionState::Authenticated { profile, .. } => Some(profile),
            _ => None,
        }
    }

    /// Current role, when authenticated
    pub fn role(&self) -> Option<Role> {
        self.profile().map(|p| p.role)
    }
}

/// Explicitly owned session container.
///
/// Holds the current state behind a watch channel for observers (route guard,
/// screens) and a monotonically increasing generation counter guarding
/// against overlapping asynchronous resolutions: a profile fetch started for
/// an older event can never overwrite state committed for a newer one.
///
/// Created at application start and torn down by dropping; there is no
/// ambient global.
pub struct SessionStore {
    state: watch::Sender<SessionState>,
    generation: AtomicU64,
}

impl SessionStore {
    /// New store in the `Loading` state
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        Self {
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Observe state changes. Receivers see the latest value only.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Allocate the next generation token. Every session-changing operation
    /// takes one before its asynchronous resolution starts.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply `next` only if `token` is still the newest allocated.
    /// Returns false when the commit was superseded and discarded.
    pub fn commit(&self, token: u64, next: SessionState) -> bool {
        if self.generation.load(Ordering::SeqCst) != token {
            return false;
        }
        self.state.send_replace(next);
        true
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
