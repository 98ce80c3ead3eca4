//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、访问要求与视图决策。

use acentrik_shared::{Identity, UserRole};
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 管理面板 (仅 ADMIN)
    Dashboard,
    /// 个人资料 (需要登录)
    Profile,
    /// 页面未找到
    NotFound,
}

/// 一次导航请求的视图决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDecision {
    /// 渲染请求的视图
    Render,
    /// 重定向到登录页
    RedirectToLogin,
    /// 重定向到首页
    RedirectToHome,
}

/// **核心守卫逻辑：根据身份与角色要求决定视图去向**
///
/// 纯函数，无副作用；每次导航都必须重新求值，
/// 身份可能在两次导航之间因登录/注销而变化。
pub fn resolve_view(
    identity: Option<&Identity>,
    required_role: Option<UserRole>,
) -> ViewDecision {
    let Some(identity) = identity else {
        return ViewDecision::RedirectToLogin;
    };
    match required_role {
        Some(role) if identity.role != role => ViewDecision::RedirectToHome,
        _ => ViewDecision::Render,
    }
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// 路由的访问要求
    ///
    /// 外层 None 表示公开路由；Some(required_role) 表示需要登录，
    /// 其中内层 Some 还要求特定角色。
    pub fn guard(&self) -> Option<Option<UserRole>> {
        match self {
            Self::Dashboard => Some(Some(UserRole::Admin)),
            Self::Profile => Some(None),
            _ => None,
        }
    }

    /// 对当前身份求值本路由的视图决策
    pub fn resolve(&self, identity: Option<&Identity>) -> ViewDecision {
        match self.guard() {
            None => ViewDecision::Render,
            Some(required_role) => resolve_view(identity, required_role),
        }
    }

    /// 获取认证缺失时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取角色不足时的重定向目标
    pub fn auth_denied_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
