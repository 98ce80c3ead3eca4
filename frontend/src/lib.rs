//! Acentrik 企业站前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `animate`: 滚动/悬停动画引擎（规则层 + DOM 驱动层）
//! - `components`: UI 组件层

mod api;
mod auth;
mod animate {
    pub mod engine;
    pub mod rules;
}
mod components {
    pub mod dashboard;
    pub mod header;
    pub mod home;
    pub mod login;
    pub mod profile;
    pub mod register;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装：
// History 路由与 requestAnimationFrame 帧循环都集中在这里。
pub(crate) mod web {
    pub mod frame;
    pub mod route;
    pub mod router;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="not-found">
                <h1>"404"</h1>
                <p>"Page not found"</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 恢复会话（异步；完成前路由出口渲染加载占位）
    init_auth(&auth_ctx);

    // 3. 获取认证快照信号，用于注入路由服务（解耦！）
    let auth = auth_ctx.snapshot_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router auth=auth>
            <Header />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
