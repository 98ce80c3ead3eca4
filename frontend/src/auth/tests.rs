use super::*;
use acentrik_shared::UserRole;

// =========================================================
// 辅助函数
// =========================================================

fn identity(username: &str, role: UserRole) -> Identity {
    Identity {
        username: username.to_string(),
        role,
    }
}

// =========================================================
// 导航条目映射
// =========================================================

#[test]
fn anonymous_sees_public_entries_only() {
    let entries = nav_entries(None);
    assert_eq!(
        entries,
        vec![NavEntry::Home, NavEntry::Login, NavEntry::Register]
    );
}

#[test]
fn employee_sees_profile_but_not_dashboard() {
    let entries = nav_entries(Some(&identity("jane", UserRole::User)));
    assert_eq!(
        entries,
        vec![
            NavEntry::Home,
            NavEntry::Profile,
            NavEntry::Logout,
            NavEntry::Welcome("jane".to_string()),
        ]
    );
}

#[test]
fn admin_additionally_sees_dashboard() {
    let entries = nav_entries(Some(&identity("admin", UserRole::Admin)));
    assert_eq!(
        entries,
        vec![
            NavEntry::Home,
            NavEntry::Dashboard,
            NavEntry::Profile,
            NavEntry::Logout,
            NavEntry::Welcome("admin".to_string()),
        ]
    );
}

#[test]
fn welcome_banner_carries_username() {
    let entries = nav_entries(Some(&identity("michael", UserRole::User)));
    assert!(
        entries
            .iter()
            .any(|e| matches!(e, NavEntry::Welcome(name) if name == "michael"))
    );
}
