use super::*;
use crate::protocol::{ApiRequest, DeleteUserRequest, HttpMethod};

// =========================================================
// 角色线格式
// =========================================================

#[test]
fn role_serializes_to_spring_security_names() {
    assert_eq!(
        serde_json::to_string(&UserRole::Admin).unwrap(),
        "\"ROLE_ADMIN\""
    );
    assert_eq!(
        serde_json::to_string(&UserRole::User).unwrap(),
        "\"ROLE_USER\""
    );
}

#[test]
fn role_parses_from_spring_security_names() {
    let role: UserRole = serde_json::from_str("\"ROLE_ADMIN\"").unwrap();
    assert!(role.is_admin());
    let role: UserRole = serde_json::from_str("\"ROLE_USER\"").unwrap();
    assert!(!role.is_admin());
}

// =========================================================
// 会话状态
// =========================================================

#[test]
fn authenticated_status_yields_identity() {
    let status: AuthStatus = serde_json::from_str(
        r#"{"authenticated": true, "username": "admin", "role": "ROLE_ADMIN"}"#,
    )
    .unwrap();

    let identity = status.into_identity().unwrap();
    assert_eq!(identity.username, "admin");
    assert_eq!(identity.role, UserRole::Admin);
}

#[test]
fn anonymous_status_yields_no_identity() {
    // 未认证的响应只有 authenticated 字段
    let status: AuthStatus = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
    assert!(status.into_identity().is_none());
}

#[test]
fn incomplete_status_is_treated_as_anonymous() {
    let status: AuthStatus =
        serde_json::from_str(r#"{"authenticated": true, "username": "admin"}"#).unwrap();
    assert!(status.into_identity().is_none());
}

// =========================================================
// 后端字段命名契约
// =========================================================

#[test]
fn password_request_uses_camel_case_fields() {
    let request = UpdatePasswordRequest {
        new_password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"newPassword\""));
    assert!(json.contains("\"confirmPassword\""));
}

#[test]
fn profile_parses_camel_case_offer_letter_flag() {
    let profile: ProfileInfo = serde_json::from_str(
        r#"{"id": 7, "username": "jane", "role": "ROLE_USER", "hasOfferLetter": true}"#,
    )
    .unwrap();
    assert!(profile.has_offer_letter);
}

// =========================================================
// 协议层
// =========================================================

#[test]
fn delete_request_path_embeds_user_id() {
    let request = DeleteUserRequest { user_id: 42 };
    assert_eq!(request.path(), "/api/users/42");
    assert_eq!(DeleteUserRequest::METHOD, HttpMethod::Delete);
}
