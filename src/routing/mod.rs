//! Navigation: the application's route table and the guard that admits or
//! redirects each attempt.

mod guard;

pub use guard::{decide, RouteDecision};

use crate::config::{PATH_ADMIN, PATH_LOGIN, PATH_REGISTER, PATH_STUDENT};
use crate::domain::{redirect_for_role, Role};
use crate::session::SessionState;

/// A protected area: a path prefix and the roles admitted to it
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub prefix: &'static str,
    pub allowed: &'static [Role],
}

/// Protected areas of the application
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        prefix: PATH_ADMIN,
        allowed: &[Role::Admin],
    },
    RouteSpec {
        prefix: PATH_STUDENT,
        allowed: &[Role::Student],
    },
];

/// Pages reachable without authentication
pub fn is_public(path: &str) -> bool {
    path == PATH_LOGIN || path == PATH_REGISTER
}

/// Allowed roles for a protected path, by longest-prefix match on the area
/// root. `None` means the path belongs to no known area.
pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    ROUTES
        .iter()
        .find(|route| {
            path == route.prefix
                || path
                    .strip_prefix(route.prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
        .map(|route| route.allowed)
}

/// Full navigation decision for a path: public pages always render,
/// protected areas go through the guard, and anything unmatched falls back
/// to the anonymous entry point.
pub fn navigate(state: &SessionState, path: &str) -> RouteDecision {
    if is_public(path) {
        return RouteDecision::Render;
    }
    // Unmatched paths fall back to the absent-role default.
    match required_roles(path) {
        Some(allowed) => decide(state, allowed, path),
        None => RouteDecision::Redirect {
            to: redirect_for_role(None).to_string(),
            from: None,
        },
    }
}
