//! CLI command implementations.
//!
//! Every command bootstraps the same context: provider, session store, and
//! controller, with the session initialized before the command body runs.
//! Protected commands pass their page's path through the route guard first,
//! so the CLI is admitted exactly where the application would be.

pub mod auth;
pub mod chat;
pub mod maintenance;
pub mod notifications;
pub mod profile;
pub mod resources;
pub mod rooms;
pub mod students;
pub mod watch;

use std::sync::Arc;

use crate::config::{Settings, PATH_LOGIN};
use crate::domain::Profile;
use crate::errors::{AppError, AppResult};
use crate::provider::SupabaseProvider;
use crate::routing::{self, RouteDecision};
use crate::session::{SessionController, SessionStore};

/// Everything a command needs, wired together
pub struct AppContext {
    pub backend: Arc<SupabaseProvider>,
    pub store: Arc<SessionStore>,
    pub controller: Arc<SessionController<SupabaseProvider, SupabaseProvider>>,
}

/// Build the provider, store, and controller, and settle the session out of
/// `Loading` before any command logic runs.
pub async fn bootstrap(settings: &Settings) -> AppResult<AppContext> {
    let backend = Arc::new(SupabaseProvider::new(settings)?);
    let store = Arc::new(SessionStore::new());
    let controller = Arc::new(SessionController::new(
        backend.clone(),
        backend.clone(),
        store.clone(),
        settings,
    ));
    controller.initialize().await;
    Ok(AppContext {
        backend,
        store,
        controller,
    })
}

/// Route-guard admission for a protected page. Returns the current profile
/// when the guard renders, and maps redirects to the matching errors.
pub fn admit(ctx: &AppContext, path: &str) -> AppResult<Profile> {
    match routing::navigate(&ctx.store.current(), path) {
        RouteDecision::Render => ctx
            .store
            .current()
            .profile()
            .cloned()
            .ok_or(AppError::Unauthorized),
        RouteDecision::Wait => Err(AppError::internal("session is still loading")),
        RouteDecision::Redirect { to, .. } => {
            if to == PATH_LOGIN {
                tracing::info!(requested = path, "not signed in, go to {PATH_LOGIN}");
                Err(AppError::Unauthorized)
            } else {
                tracing::info!(requested = path, area = %to, "your role belongs elsewhere");
                Err(AppError::Forbidden)
            }
        }
    }
}
