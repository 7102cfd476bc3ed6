use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

const NOW: u64 = 1_700_000_000;

fn admin_token(exp: u64) -> String {
    let payload = serde_json::json!({
        "userId": 1,
        "username": "alice",
        "roleId": 1,
        "roleName": "Admin",
        "exp": exp,
    });
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes()),
    )
}

fn fresh_session() -> Session {
    token_store::clear();
    Session::new(HttpClient::default())
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_session_is_initializing() {
    let session = fresh_session();
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert_eq!(session.current_user(), None);
}

// =============================================================
// Startup restore
// =============================================================

#[test]
fn restore_without_stored_token_is_anonymous() {
    let session = fresh_session();
    session.restore_at(NOW);
    assert!(!session.is_loading());
    assert!(!session.is_authenticated());
}

#[test]
fn restore_with_live_token_authenticates_and_sets_header() {
    let session = fresh_session();
    let token = admin_token(NOW + 3600);
    token_store::save(&token);

    session.restore_at(NOW);

    let user = session.current_user().unwrap();
    assert_eq!(user.user_id, 1);
    assert_eq!(user.username, "alice");
    assert_eq!(user.role_id, 1);
    assert_eq!(user.role_name, "Admin");
    assert_eq!(
        session.http.authorization_header(),
        Some(format!("Bearer {token}"))
    );
    assert_eq!(token_store::read(), Some(token));
}

#[test]
fn restore_with_expired_token_purges_storage() {
    let session = fresh_session();
    token_store::save(&admin_token(NOW - 1));

    session.restore_at(NOW);

    assert!(!session.is_authenticated());
    assert_eq!(token_store::read(), None);
    assert_eq!(session.http.authorization_header(), None);
}

#[test]
fn restore_treats_expiry_equal_to_now_as_expired() {
    let session = fresh_session();
    token_store::save(&admin_token(NOW));
    session.restore_at(NOW);
    assert!(!session.is_authenticated());
    assert_eq!(token_store::read(), None);
}

#[test]
fn restore_with_malformed_token_purges_storage() {
    let session = fresh_session();
    token_store::save("garbage");

    session.restore_at(NOW);

    assert!(!session.is_authenticated());
    assert_eq!(token_store::read(), None);
    assert_eq!(session.http.authorization_header(), None);
}

// =============================================================
// Login commit step (token store + header + user as one step)
// =============================================================

#[test]
fn establish_commits_store_header_and_user_together() {
    let session = fresh_session();
    let user = CurrentUser {
        user_id: 9,
        username: "alice".to_owned(),
        role_id: 1,
        role_name: "Admin".to_owned(),
    };

    session.establish("tok-abc", user.clone());

    assert_eq!(token_store::read(), Some("tok-abc".to_owned()));
    assert_eq!(
        session.http.authorization_header(),
        Some("Bearer tok-abc".to_owned())
    );
    assert_eq!(session.current_user(), Some(user));
    assert!(session.is_authenticated());
}

#[test]
fn establish_overwrites_a_previous_session() {
    let session = fresh_session();
    session.establish(
        "tok-old",
        CurrentUser {
            user_id: 1,
            username: "alice".to_owned(),
            role_id: 1,
            role_name: "Admin".to_owned(),
        },
    );
    session.establish(
        "tok-new",
        CurrentUser {
            user_id: 2,
            username: "bob".to_owned(),
            role_id: 3,
            role_name: "Owner".to_owned(),
        },
    );

    assert_eq!(token_store::read(), Some("tok-new".to_owned()));
    assert_eq!(session.current_user().unwrap().username, "bob");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_everything() {
    let session = fresh_session();
    let token = admin_token(NOW + 3600);
    token_store::save(&token);
    session.restore_at(NOW);
    assert!(session.is_authenticated());

    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(token_store::read(), None);
    assert_eq!(session.http.authorization_header(), None);
}

#[test]
fn logout_is_idempotent_from_anonymous() {
    let session = fresh_session();
    session.restore_at(NOW);

    session.logout();
    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(token_store::read(), None);
}

// =============================================================
// Local user updates
// =============================================================

#[test]
fn update_user_merges_display_name_only() {
    let session = fresh_session();
    session.establish(
        "tok",
        CurrentUser {
            user_id: 7,
            username: "carla".to_owned(),
            role_id: 3,
            role_name: "Owner".to_owned(),
        },
    );

    session.update_user(&UserUpdate {
        username: Some("Carla P.".to_owned()),
    });

    let user = session.current_user().unwrap();
    assert_eq!(user.username, "Carla P.");
    assert_eq!(user.user_id, 7);
    assert_eq!(user.role_id, 3);
    // The persisted token is untouched by a local merge.
    assert_eq!(token_store::read(), Some("tok".to_owned()));
}

#[test]
fn update_user_with_no_fields_changes_nothing() {
    let session = fresh_session();
    session.establish(
        "tok",
        CurrentUser {
            user_id: 7,
            username: "carla".to_owned(),
            role_id: 3,
            role_name: "Owner".to_owned(),
        },
    );
    session.update_user(&UserUpdate::default());
    assert_eq!(session.current_user().unwrap().username, "carla");
}

#[test]
fn update_user_is_a_noop_when_anonymous() {
    let session = fresh_session();
    session.restore_at(NOW);
    session.update_user(&UserUpdate {
        username: Some("nobody".to_owned()),
    });
    assert!(!session.is_authenticated());
}

// =============================================================
// Login error mapping
// =============================================================

#[test]
fn login_error_uses_server_message_when_present() {
    let err = LoginError::from(ApiError::Status {
        status: 401,
        message: Some("Credenciales inválidas".to_owned()),
    });
    assert_eq!(err.to_string(), "Credenciales inválidas");
}

#[test]
fn login_error_falls_back_when_message_missing() {
    let err = LoginError::from(ApiError::Status {
        status: 500,
        message: None,
    });
    assert_eq!(err, LoginError::Unavailable);
    assert_eq!(err.to_string(), "Unable to sign in. Please try again.");
}

#[test]
fn login_error_falls_back_on_network_failure() {
    let err = LoginError::from(ApiError::Network("connection refused".to_owned()));
    assert_eq!(err, LoginError::Unavailable);
}
