//! Route guard and redirect-mapping tests.

use chrono::Utc;
use uuid::Uuid;

use hostelhub::domain::{redirect_for_role, Identity, Profile, Role};
use hostelhub::routing::{decide, navigate, RouteDecision};
use hostelhub::session::SessionState;

fn authenticated(role: Role) -> SessionState {
    let id = Uuid::new_v4();
    SessionState::Authenticated {
        identity: Identity {
            id,
            email: "resident@example.com".to_string(),
        },
        profile: Profile {
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
        },
    }
}

#[test]
fn loading_never_renders_a_protected_destination() {
    let decision = decide(&SessionState::Loading, &[Role::Admin], "/admin/rooms");
    assert_eq!(decision, RouteDecision::Wait);

    // Empty allowed set is still protected: no decision while loading.
    let decision = decide(&SessionState::Loading, &[], "/student/profile");
    assert_eq!(decision, RouteDecision::Wait);
}

#[test]
fn anonymous_is_redirected_to_login_with_the_requested_path() {
    let decision = decide(&SessionState::Anonymous, &[Role::Student], "/student/room");
    assert_eq!(
        decision,
        RouteDecision::Redirect {
            to: "/login".to_string(),
            from: Some("/student/room".to_string()),
        }
    );
}

#[test]
fn insufficient_role_bounces_to_own_area_not_to_login() {
    // An authenticated admin asking for a student page lands on /admin.
    let decision = decide(&authenticated(Role::Admin), &[Role::Student], "/student/chatbot");
    assert_eq!(
        decision,
        RouteDecision::Redirect {
            to: "/admin".to_string(),
            from: None,
        }
    );

    let decision = decide(&authenticated(Role::Student), &[Role::Admin], "/admin/rooms");
    assert_eq!(
        decision,
        RouteDecision::Redirect {
            to: "/student".to_string(),
            from: None,
        }
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(
        decide(&authenticated(Role::Admin), &[Role::Admin], "/admin"),
        RouteDecision::Render
    );
    assert_eq!(
        decide(&authenticated(Role::Student), &[Role::Student], "/student"),
        RouteDecision::Render
    );
}

#[test]
fn empty_allowed_set_admits_any_authenticated_role() {
    assert_eq!(
        decide(&authenticated(Role::Student), &[], "/student/settings"),
        RouteDecision::Render
    );
    assert_eq!(
        decide(&authenticated(Role::Unknown), &[], "/student/settings"),
        RouteDecision::Render
    );
}

#[test]
fn unknown_role_falls_back_to_login_when_not_allowed() {
    // Unknown has no role area of its own, so the total mapping sends it to
    // the anonymous entry point.
    let decision = decide(&authenticated(Role::Unknown), &[Role::Admin], "/admin");
    assert_eq!(
        decision,
        RouteDecision::Redirect {
            to: "/login".to_string(),
            from: None,
        }
    );
}

#[test]
fn redirect_mapping_is_total() {
    assert_eq!(redirect_for_role(Some(Role::Admin)), "/admin");
    assert_eq!(redirect_for_role(Some(Role::Student)), "/student");
    assert_eq!(redirect_for_role(Some(Role::Unknown)), "/login");
    assert_eq!(redirect_for_role(None), "/login");
}

#[test]
fn navigation_composes_table_and_guard() {
    // Public pages render regardless of session state.
    assert_eq!(navigate(&SessionState::Anonymous, "/login"), RouteDecision::Render);
    assert_eq!(navigate(&SessionState::Loading, "/register"), RouteDecision::Render);

    // Protected areas go through the guard.
    assert_eq!(
        navigate(&authenticated(Role::Admin), "/admin/maintenance"),
        RouteDecision::Render
    );
    assert_eq!(
        navigate(&authenticated(Role::Admin), "/student/room"),
        RouteDecision::Redirect {
            to: "/admin".to_string(),
            from: None,
        }
    );

    // Everything unmatched lands on the anonymous entry point.
    assert_eq!(
        navigate(&authenticated(Role::Student), "/"),
        RouteDecision::Redirect {
            to: "/login".to_string(),
            from: None,
        }
    );
}
