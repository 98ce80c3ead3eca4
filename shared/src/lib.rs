use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端会话登录端点（表单编码，非 JSON）
pub const LOGIN_PATH: &str = "/login";
/// 后端会话注销端点
pub const LOGOUT_PATH: &str = "/logout";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色
///
/// 线格式沿用后端的 Spring Security 角色字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ROLE_ADMIN",
            UserRole::User => "ROLE_USER",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 当前页面会话内的已认证身份
///
/// 整个会话期内至多存在一个；None 即匿名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: UserRole,
}

/// /api/auth/me 的响应体
///
/// 未认证时只有 authenticated 字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl AuthStatus {
    /// 转换为身份；任何不完整的响应都视为匿名
    pub fn into_identity(self) -> Option<Identity> {
        if !self.authenticated {
            return None;
        }
        match (self.username, self.role) {
            (Some(username), Some(role)) => Some(Identity { username, role }),
            _ => None,
        }
    }
}

/// 员工列表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
}

/// /api/profile 的响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    pub has_offer_letter: bool,
}

/// 创建员工账号请求（也用于公开注册）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// 修改密码请求；字段名按后端契约使用 camelCase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub new_password: String,
    pub confirm_password: String,
}

/// 成功响应的统一消息体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// 创建账号成功的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedUser {
    pub message: String,
    pub username: String,
}

/// 非 2xx 响应的统一错误体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests;
