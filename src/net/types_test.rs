use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_session(expires_at: i64) -> Session {
    Session {
        access_token: "access".to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_at,
        user: Identity { id: "u-1".to_owned(), email: Some("a@b.com".to_owned()) },
    }
}

// =============================================================
// UserRole
// =============================================================

#[test]
fn user_role_defaults_to_employee() {
    assert_eq!(UserRole::default(), UserRole::Employee);
}

#[test]
fn user_role_serializes_lowercase() {
    let json = serde_json::to_string(&UserRole::Industry).unwrap();
    assert_eq!(json, "\"industry\"");
    let role: UserRole = serde_json::from_str("\"college\"").unwrap();
    assert_eq!(role, UserRole::College);
}

#[test]
fn user_role_parse_matches_wire_values() {
    for role in UserRole::ALL {
        assert_eq!(UserRole::parse(role.as_str()), Some(role));
    }
    assert_eq!(UserRole::parse("manager"), None);
}

#[test]
fn user_role_labels_are_capitalized() {
    assert_eq!(UserRole::Admin.label(), "Admin");
    assert_eq!(UserRole::Employee.label(), "Employee");
}

// =============================================================
// AuthUser
// =============================================================

#[test]
fn auth_user_deserializes_profile_row() {
    let row = serde_json::json!({
        "id": "u-1",
        "email": "a@b.com",
        "name": "A",
        "surname": "B",
        "phone": "123",
        "role": "admin",
        "created_at": "2024-01-01T00:00:00Z"
    });
    let user: AuthUser = serde_json::from_value(row).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, UserRole::Admin);
}

#[test]
fn auth_user_missing_role_defaults_to_employee() {
    let row = serde_json::json!({
        "id": "u-1",
        "email": "a@b.com",
        "name": "A",
        "surname": "B",
        "phone": "123"
    });
    let user: AuthUser = serde_json::from_value(row).unwrap();
    assert_eq!(user.role, UserRole::Employee);
}

#[test]
fn auth_user_full_name_joins_and_trims() {
    let user = AuthUser {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "Ada".to_owned(),
        surname: String::new(),
        phone: String::new(),
        role: UserRole::Employee,
    };
    assert_eq!(user.full_name(), "Ada");
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_is_stale_inside_expiry_margin() {
    let session = make_session(1_000);
    assert!(session.is_stale(1_000 - SESSION_EXPIRY_MARGIN_SECS));
    assert!(session.is_stale(2_000));
}

#[test]
fn session_is_fresh_before_margin() {
    let session = make_session(1_000);
    assert!(!session.is_stale(1_000 - SESSION_EXPIRY_MARGIN_SECS - 1));
}

#[test]
fn session_event_names() {
    assert_eq!(SessionEvent::SignedIn.as_str(), "SIGNED_IN");
    assert_eq!(SessionEvent::TokenRefreshed.as_str(), "TOKEN_REFRESHED");
}

#[test]
fn session_expiry_near_i64_min_is_stale_without_overflow() {
    let session = make_session(i64::MIN + 1);
    assert!(session.is_stale(0));
}
