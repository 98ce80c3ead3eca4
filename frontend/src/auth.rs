//! 认证模块
//!
//! 管理页面会话期内的用户身份，与路由系统解耦。
//! 路由服务通过注入的认证快照信号执行守卫。

use crate::api;
use acentrik_shared::Identity;
use acentrik_shared::protocol::CurrentUserRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 认证状态
#[derive(Clone, PartialEq)]
pub struct AuthState {
    /// 当前身份；None 即匿名
    pub identity: Option<Identity>,
    /// 会话恢复尚未完成
    pub is_loading: bool,
}

/// 守卫求值所需的认证快照
#[derive(Clone, PartialEq)]
pub struct AuthSnapshot {
    pub is_loading: bool,
    pub identity: Option<Identity>,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文；初始为"会话恢复中"
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            identity: None,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// 获取认证快照信号（用于路由服务注入）
    pub fn snapshot_signal(&self) -> Signal<AuthSnapshot> {
        let state = self.state;
        Signal::derive(move || {
            let state = state.get();
            AuthSnapshot {
                is_loading: state.is_loading,
                identity: state.identity,
            }
        })
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 启动时恢复会话
///
/// 向 /api/auth/me 询问当前身份；任何失败都只表现为匿名。
pub fn init_auth(ctx: &AuthContext) {
    let set_state = ctx.set_state;
    spawn_local(async move {
        let identity = match api::send(&CurrentUserRequest).await {
            Ok(status) => status.into_identity(),
            Err(_) => None,
        };
        set_state.update(|state| {
            state.identity = identity;
            state.is_loading = false;
        });
    });
}

/// 登录并更新身份状态
///
/// 表单登录完成后必须重新查询 /api/auth/me 才能得知结果；
/// 查询仍为匿名即视为凭据无效。
pub async fn login(
    ctx: &AuthContext,
    username: String,
    password: String,
) -> Result<Identity, String> {
    api::login(&username, &password)
        .await
        .map_err(|e| e.to_string())?;

    let status = api::send(&CurrentUserRequest)
        .await
        .map_err(|e| e.to_string())?;

    match status.into_identity() {
        Some(identity) => {
            ctx.set_state.update(|state| {
                state.identity = Some(identity.clone());
                state.is_loading = false;
            });
            Ok(identity)
        }
        None => Err("Invalid username or password".to_string()),
    }
}

/// 注销并清除身份
///
/// 先同步清除本地身份，再异步通知服务端；
/// 调用方随后负责导航回首页。
pub fn logout(ctx: &AuthContext) {
    ctx.set_state.update(|state| state.identity = None);
    spawn_local(async {
        let _ = api::logout().await;
    });
}

// =========================================================
// 导航条目
// =========================================================

/// 页头导航条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    Home,
    Login,
    Register,
    Dashboard,
    Profile,
    Logout,
    /// 欢迎横幅，携带用户名
    Welcome(String),
}

/// 身份到可见导航条目集合的全映射；每种身份状态恰好对应一个集合
pub fn nav_entries(identity: Option<&Identity>) -> Vec<NavEntry> {
    match identity {
        None => vec![NavEntry::Home, NavEntry::Login, NavEntry::Register],
        Some(identity) if identity.role.is_admin() => vec![
            NavEntry::Home,
            NavEntry::Dashboard,
            NavEntry::Profile,
            NavEntry::Logout,
            NavEntry::Welcome(identity.username.clone()),
        ],
        Some(identity) => vec![
            NavEntry::Home,
            NavEntry::Profile,
            NavEntry::Logout,
            NavEntry::Welcome(identity.username.clone()),
        ],
    }
}

#[cfg(test)]
mod tests;
