//! Profile resolution against the remote store.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::domain::{Identity, Profile};
use crate::errors::{AppError, AppResult};
use crate::provider::ProfileStore;

/// Resolves the role-bearing profile for an identity. Pure read; the only
/// cache is whatever the session store currently holds.
pub struct ProfileResolver<S: ProfileStore> {
    store: Arc<S>,
    grace: Duration,
    attempts: u32,
    initial_delay: Duration,
}

impl<S: ProfileStore> ProfileResolver<S> {
    pub fn new(store: Arc<S>, settings: &Settings) -> Self {
        Self {
            store,
            grace: settings.profile_grace,
            // At least one retry after the initial lookup, so a provisioning
            // trigger delayed past the grace window gets a second chance.
            attempts: settings.profile_retry_attempts.max(2),
            initial_delay: settings.profile_retry_delay,
        }
    }

    /// Single lookup. `Ok(None)` means the row does not exist; `Err` means
    /// the query itself failed.
    pub async fn resolve(&self, identity: &Identity) -> AppResult<Option<Profile>> {
        self.store.find_by_identity(identity.id).await
    }

    /// Lookup across the provisioning window after sign-up: wait out the
    /// grace delay, then retry with doubling backoff until the trigger has
    /// created the row or attempts are exhausted.
    ///
    /// Exhaustion surfaces `ProfileMissing` when any attempt saw the row
    /// absent; if every attempt failed with a query error, the last error is
    /// surfaced instead, keeping missing-row and failed-query outcomes apart.
    pub async fn resolve_with_retry(&self, identity: &Identity) -> AppResult<Profile> {
        tokio::time::sleep(self.grace).await;

        let mut delay = self.initial_delay;
        let mut row_seen_missing = false;
        let mut last_err = None;
        for attempt in 1..=self.attempts {
            match self.store.find_by_identity(identity.id).await {
                Ok(Some(profile)) => return Ok(profile),
                Ok(None) => {
                    row_seen_missing = true;
                    tracing::debug!(identity = %identity.id, attempt, "profile not provisioned yet");
                }
                Err(e) => {
                    // A failed query still gets the remaining attempts.
                    tracing::warn!(identity = %identity.id, attempt, error = %e, "profile lookup failed");
                    last_err = Some(e);
                }
            }
            if attempt < self.attempts {
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
        }

        match last_err {
            Some(e) if !row_seen_missing => Err(e),
            _ => Err(AppError::ProfileMissing),
        }
    }
}
