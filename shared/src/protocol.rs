use crate::{
    ApiMessage, AuthStatus, CreateUserRequest, CreatedUser, ProfileInfo, UpdatePasswordRequest,
    UserSummary,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// `path` is a method rather than a constant because some endpoints embed the
/// target id in the URL.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path.
    fn path(&self) -> String;
}

// =========================================================
// Request Definitions
// =========================================================

/// Query the current session identity
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUserRequest;

impl ApiRequest for CurrentUserRequest {
    type Response = AuthStatus;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/auth/me".to_string()
    }
}

/// List all employee accounts (admin only on the server side)
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersRequest;

impl ApiRequest for ListUsersRequest {
    type Response = Vec<UserSummary>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/users".to_string()
    }
}

// Note: CreateUserRequest is defined in lib.rs
impl ApiRequest for CreateUserRequest {
    type Response = CreatedUser;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/users".to_string()
    }
}

/// Delete an employee account by id
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub user_id: i64,
}

impl ApiRequest for DeleteUserRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/api/users/{}", self.user_id)
    }
}

/// Fetch the current user's profile
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = ProfileInfo;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/profile".to_string()
    }
}

// Note: UpdatePasswordRequest is defined in lib.rs
impl ApiRequest for UpdatePasswordRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        "/api/profile/password".to_string()
    }
}
