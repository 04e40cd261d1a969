//! Route guard - pure admission decision for a navigation attempt.

use crate::config::PATH_LOGIN;
use crate::domain::{redirect_for_role, Role};
use crate::session::SessionState;

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested destination
    Render,
    /// Session is still loading; show a neutral waiting indicator and do not
    /// commit to a decision
    Wait,
    /// Go elsewhere. `from` carries the originally requested path for an
    /// optional post-login return (best-effort; the entry point may ignore it).
    Redirect {
        to: String,
        from: Option<String>,
    },
}

/// Decide whether to render `requested`, wait, or redirect.
///
/// An empty `allowed` set means any authenticated role. An authenticated
/// user whose role is not allowed is sent to their own role-default area,
/// never back to sign-in; the `Unknown` role has no area, so its default is
/// the anonymous entry point.
pub fn decide(state: &SessionState, allowed: &[Role], requested: &str) -> RouteDecision {
    match state {
        SessionState::Loading => RouteDecision::Wait,
        SessionState::Anonymous => RouteDecision::Redirect {
            to: PATH_LOGIN.to_string(),
            from: Some(requested.to_string()),
        },
        SessionState::Authenticated { profile, .. } => {
            if allowed.is_empty() || allowed.contains(&profile.role) {
                RouteDecision::Render
            } else {
                RouteDecision::Redirect {
                    to: redirect_for_role(Some(profile.role)).to_string(),
                    from: None,
                }
            }
        }
    }
}
