use super::*;
use acentrik_shared::{Identity, UserRole};

// =========================================================
// 辅助函数
// =========================================================

fn admin() -> Identity {
    Identity {
        username: "admin".to_string(),
        role: UserRole::Admin,
    }
}

fn employee() -> Identity {
    Identity {
        username: "jane".to_string(),
        role: UserRole::User,
    }
}

// =========================================================
// path 映射
// =========================================================

#[test]
fn from_path_maps_known_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
    assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("/profile"), AppRoute::Profile);
}

#[test]
fn unknown_path_maps_to_not_found() {
    assert_eq!(AppRoute::from_path("/no-such-page"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
}

// =========================================================
// resolve_view 决策
// =========================================================

#[test]
fn absent_identity_always_redirects_to_login() {
    // 无论角色要求如何，匿名访问一律去登录页
    for required_role in [None, Some(UserRole::Admin), Some(UserRole::User)] {
        assert_eq!(
            resolve_view(None, required_role),
            ViewDecision::RedirectToLogin
        );
    }
}

#[test]
fn role_mismatch_redirects_home() {
    assert_eq!(
        resolve_view(Some(&employee()), Some(UserRole::Admin)),
        ViewDecision::RedirectToHome
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(
        resolve_view(Some(&admin()), Some(UserRole::Admin)),
        ViewDecision::Render
    );
}

#[test]
fn authenticated_without_role_requirement_renders() {
    assert_eq!(resolve_view(Some(&employee()), None), ViewDecision::Render);
    assert_eq!(resolve_view(Some(&admin()), None), ViewDecision::Render);
}

// =========================================================
// 路由守卫表
// =========================================================

#[test]
fn public_routes_render_for_anonymous() {
    for route in [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::NotFound,
    ] {
        assert_eq!(route.resolve(None), ViewDecision::Render);
    }
}

#[test]
fn dashboard_requires_admin_role() {
    assert_eq!(
        AppRoute::Dashboard.resolve(None),
        ViewDecision::RedirectToLogin
    );
    assert_eq!(
        AppRoute::Dashboard.resolve(Some(&employee())),
        ViewDecision::RedirectToHome
    );
    assert_eq!(
        AppRoute::Dashboard.resolve(Some(&admin())),
        ViewDecision::Render
    );
}

#[test]
fn profile_requires_any_identity() {
    assert_eq!(
        AppRoute::Profile.resolve(None),
        ViewDecision::RedirectToLogin
    );
    assert_eq!(
        AppRoute::Profile.resolve(Some(&employee())),
        ViewDecision::Render
    );
    assert_eq!(
        AppRoute::Profile.resolve(Some(&admin())),
        ViewDecision::Render
    );
}
