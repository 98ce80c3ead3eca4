//! HTTP API 客户端
//!
//! 基于 gloo-net 封装对后端 REST 接口的调用；
//! 请求与响应类型由 acentrik-shared 的协议层定义。
//! 同源请求自动携带会话 Cookie。

use acentrik_shared::protocol::{ApiRequest, HttpMethod};
use acentrik_shared::{ErrorBody, LOGIN_PATH, LOGOUT_PATH};
use gloo_net::http::{Request, Response};

/// API 错误类型
#[derive(Debug, Clone)]
pub enum ApiError {
    /// 网络请求失败
    Network(String),
    /// 响应解析失败
    Decode(String),
    /// 服务端返回非 2xx；message 取自 {"error": ...} 响应体
    Server { status: u16, message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "unexpected response: {}", msg),
            ApiError::Server { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// 非 2xx 响应统一转为 ApiError::Server
async fn reject(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {}", status),
    };
    ApiError::Server { status, message }
}

/// 发送协议层定义的请求并解析其响应类型
pub async fn send<R: ApiRequest>(request: &R) -> Result<R::Response, ApiError> {
    let path = request.path();
    let builder = match R::METHOD {
        HttpMethod::Get => Request::get(&path),
        HttpMethod::Post => Request::post(&path),
        HttpMethod::Put => Request::put(&path),
        HttpMethod::Delete => Request::delete(&path),
    };

    // GET/DELETE 不携带请求体
    let response = match R::METHOD {
        HttpMethod::Get | HttpMethod::Delete => builder.send().await,
        HttpMethod::Post | HttpMethod::Put => match builder.json(request) {
            Ok(req) => req.send().await,
            Err(e) => return Err(ApiError::Network(e.to_string())),
        },
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(reject(response).await);
    }

    response
        .json::<R::Response>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// =========================================================
// 会话端点 (Spring 表单登录契约，不走 JSON 协议层)
// =========================================================

/// 提交表单登录
///
/// 表单登录无论成败都重定向回 HTML 页面；
/// 真正的结果由随后的 /api/auth/me 查询得出。
pub async fn login(username: &str, password: &str) -> Result<(), ApiError> {
    let params = web_sys::UrlSearchParams::new()
        .map_err(|_| ApiError::Network("failed to build form body".to_string()))?;
    params.append("username", username);
    params.append("password", password);
    let body: String = params.to_string().into();

    let response = Request::post(LOGIN_PATH)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(reject(response).await);
    }
    Ok(())
}

/// 结束服务端会话
pub async fn logout() -> Result<(), ApiError> {
    let response = Request::post(LOGOUT_PATH)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(reject(response).await);
    }
    Ok(())
}
