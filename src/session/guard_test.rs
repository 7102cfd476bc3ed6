use super::*;

use crate::session::manager::CurrentUser;

fn authenticated(role_id: i64) -> SessionState {
    SessionState::Authenticated(CurrentUser {
        user_id: 42,
        username: "someone".to_owned(),
        role_id,
        role_name: String::new(),
    })
}

// =============================================================
// Unauthenticated sessions
// =============================================================

#[test]
fn anonymous_always_redirects_to_login() {
    assert_eq!(
        evaluate(&SessionState::Anonymous, &[]),
        RouteDecision::RedirectToLogin
    );
    assert_eq!(
        evaluate(&SessionState::Anonymous, &[Role::Admin, Role::Owner]),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn initializing_is_not_authenticated() {
    assert_eq!(
        evaluate(&SessionState::Initializing, &[Role::Admin]),
        RouteDecision::RedirectToLogin
    );
}

// =============================================================
// Role allow-list
// =============================================================

#[test]
fn empty_allow_list_admits_any_authenticated_user() {
    assert_eq!(evaluate(&authenticated(3), &[]), RouteDecision::Render);
    // Even a role id the client does not recognize.
    assert_eq!(evaluate(&authenticated(99), &[]), RouteDecision::Render);
}

#[test]
fn matching_role_renders() {
    assert_eq!(
        evaluate(&authenticated(1), &[Role::Admin]),
        RouteDecision::Render
    );
    assert_eq!(
        evaluate(&authenticated(2), &[Role::Admin, Role::Guard]),
        RouteDecision::Render
    );
}

#[test]
fn owner_denied_admin_view_lands_on_owner_dashboard() {
    assert_eq!(
        evaluate(&authenticated(3), &[Role::Admin]),
        RouteDecision::Redirect("/owner")
    );
}

#[test]
fn guard_denied_admin_view_lands_on_guard_dashboard() {
    assert_eq!(
        evaluate(&authenticated(2), &[Role::Admin]),
        RouteDecision::Redirect("/guard")
    );
}

#[test]
fn unrecognized_role_lands_on_public_landing() {
    assert_eq!(
        evaluate(&authenticated(99), &[Role::Admin]),
        RouteDecision::Redirect("/")
    );
}

// =============================================================
// Admin scenario: own landing wins over the requested view
// =============================================================

#[test]
fn admin_passes_admin_gate_but_bounces_off_owner_gate() {
    let admin = authenticated(1);
    assert_eq!(evaluate(&admin, &[Role::Admin]), RouteDecision::Render);
    assert_eq!(
        evaluate(&admin, &[Role::Owner]),
        RouteDecision::Redirect("/admin")
    );
}
