use super::*;

// =============================================================
// classify_auth_failure
// =============================================================

#[test]
fn auth_invalid_credentials_current_shape() {
    let body = r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#;
    let err = classify_auth_failure(400, body);
    assert_eq!(err, AuthError::InvalidCredentials("Invalid login credentials".to_owned()));
    assert_eq!(err.to_string(), "Invalid login credentials");
    assert_eq!(err.error_code(), "E_INVALID_CREDENTIALS");
}

#[test]
fn auth_invalid_grant_legacy_shape() {
    let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    assert_eq!(
        classify_auth_failure(400, body),
        AuthError::InvalidCredentials("Invalid login credentials".to_owned())
    );
}

#[test]
fn auth_duplicate_account() {
    let body = r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#;
    let err = classify_auth_failure(422, body);
    assert!(matches!(err, AuthError::DuplicateAccount(_)));
    assert_eq!(err.to_string(), "User already registered");
}

#[test]
fn auth_weak_password() {
    let body = r#"{"error_code":"weak_password","msg":"Password should be at least 6 characters."}"#;
    assert!(matches!(classify_auth_failure(422, body), AuthError::WeakPassword(_)));
}

#[test]
fn auth_unknown_code_is_rejected_with_status() {
    let body = r#"{"error_code":"over_request_rate_limit","msg":"Too many requests"}"#;
    assert_eq!(
        classify_auth_failure(429, body),
        AuthError::Rejected { status: 429, message: "Too many requests".to_owned() }
    );
}

#[test]
fn auth_unparseable_body_falls_back_to_status_message() {
    let err = classify_auth_failure(502, "<html>bad gateway</html>");
    assert_eq!(err.to_string(), "auth request failed: 502");
    assert_eq!(err.error_code(), "E_AUTH_REJECTED");
}

#[test]
fn auth_blank_message_is_ignored() {
    let body = r#"{"error_code":"invalid_credentials","msg":"  ","message":"fallback"}"#;
    assert_eq!(classify_auth_failure(400, body).to_string(), "fallback");
}

// =============================================================
// classify_store_failure
// =============================================================

#[test]
fn store_unique_violation_is_constraint() {
    let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint \"profiles_pkey\""}"#;
    let err = classify_store_failure(409, body);
    assert!(matches!(err, StoreError::ConstraintViolation(_)));
    assert_eq!(err.error_code(), "E_CONSTRAINT_VIOLATION");
}

#[test]
fn store_rls_denial_is_rejected() {
    let body = r#"{"code":"42501","message":"new row violates row-level security policy for table \"profiles\""}"#;
    let err = classify_store_failure(403, body);
    assert_eq!(
        err,
        StoreError::Rejected {
            status: 403,
            message: "new row violates row-level security policy for table \"profiles\"".to_owned()
        }
    );
}

#[test]
fn store_empty_body_falls_back_to_status_message() {
    assert_eq!(classify_store_failure(500, "").to_string(), "profile request failed: 500");
}
