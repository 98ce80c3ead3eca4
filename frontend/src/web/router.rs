//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 守卫 -> 处理 -> 加载"的导航流程。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, ViewDecision};
use crate::auth::AuthSnapshot;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证快照信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证快照（注入的信号，实现解耦）
    auth: Signal<AuthSnapshot>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `auth` - 认证快照信号，由外部注入实现解耦
    fn new(auth: Signal<AuthSnapshot>) -> Self {
        // 初始化当前路由（从 URL 解析）
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            auth,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 会话恢复是否仍在进行
    pub fn is_loading(&self) -> Signal<bool> {
        let auth = self.auth;
        Signal::derive(move || auth.get().is_loading)
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 守卫求值 -> 处理 -> 加载。
    /// 守卫对每次导航重新求值，身份可能在导航之间变化。
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let snapshot = self.auth.get_untracked();

        // 会话恢复尚未完成时先放行；恢复完成后守卫 Effect 会重新求值
        let decision = if snapshot.is_loading {
            ViewDecision::Render
        } else {
            target_route.resolve(snapshot.identity.as_ref())
        };

        let destination = match decision {
            ViewDecision::Render => target_route,
            ViewDecision::RedirectToLogin => {
                web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
                AppRoute::auth_failure_redirect()
            }
            ViewDecision::RedirectToHome => {
                web_sys::console::log_1(&"[Router] Insufficient role. Redirecting home.".into());
                AppRoute::auth_denied_redirect()
            }
        };

        if use_push {
            push_history_state(destination.to_path());
        } else {
            replace_history_state(destination.to_path());
        }
        self.set_route.set(destination);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let auth = self.auth;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let snapshot = auth.get_untracked();

            // popstate 时也执行守卫逻辑
            let decision = if snapshot.is_loading {
                ViewDecision::Render
            } else {
                target_route.resolve(snapshot.identity.as_ref())
            };

            match decision {
                ViewDecision::Render => set_route.set(target_route),
                ViewDecision::RedirectToLogin => {
                    let redirect = AppRoute::auth_failure_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                ViewDecision::RedirectToHome => {
                    let redirect = AppRoute::auth_denied_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时对当前路由重新求值
    ///
    /// 覆盖两种情况：深链接打开受保护页且会话恢复刚完成；
    /// 在受保护页上注销。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let auth = self.auth;

        Effect::new(move |_| {
            let snapshot = auth.get();
            if snapshot.is_loading {
                return;
            }
            let route = current_route.get_untracked();

            match route.resolve(snapshot.identity.as_ref()) {
                ViewDecision::Render => {}
                ViewDecision::RedirectToLogin => {
                    web_sys::console::log_1(
                        &"[Router] Auth state changed. Redirecting to login.".into(),
                    );
                    let redirect = AppRoute::auth_failure_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                ViewDecision::RedirectToHome => {
                    web_sys::console::log_1(
                        &"[Router] Auth state changed. Redirecting home.".into(),
                    );
                    let redirect = AppRoute::auth_denied_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(auth: Signal<AuthSnapshot>) -> RouterService {
    let router = RouterService::new(auth);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证快照信号
    auth: Signal<AuthSnapshot>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(auth);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
/// 会话恢复期间渲染加载占位，避免守卫在身份未知时误判。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let is_loading = router.is_loading();

    move || {
        if is_loading.get() {
            view! { <div class="loading">"Loading..."</div> }.into_any()
        } else {
            matcher(router.current_route().get())
        }
    }
}

/// 站内链接：拦截点击并走路由服务
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let to_clone = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to_clone);
    };

    view! {
        <a href=to on:click=on_click>
            {children()}
        </a>
    }
}
