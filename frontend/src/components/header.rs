use crate::auth::{NavEntry, logout, nav_entries, use_auth};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

/// 站点页头：Logo 与按身份渲染的导航
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();
    let state = ctx.state;

    let on_logout = move |_| {
        logout(&ctx);
        router.navigate("/");
    };

    view! {
        <header class="header">
            <div class="header-container">
                <div class="logo">
                    <Link to="/">"Acentrik Technology Solutions"</Link>
                </div>
                <nav>
                    <ul class="nav-list">
                        {move || {
                            let state = state.get();
                            nav_entries(state.identity.as_ref())
                                .into_iter()
                                .map(|entry| match entry {
                                    NavEntry::Home => {
                                        view! { <li><Link to="/">"Home"</Link></li> }.into_any()
                                    }
                                    NavEntry::Login => {
                                        view! { <li><Link to="/login">"Login"</Link></li> }
                                            .into_any()
                                    }
                                    NavEntry::Register => {
                                        view! { <li><Link to="/register">"Register"</Link></li> }
                                            .into_any()
                                    }
                                    NavEntry::Dashboard => {
                                        view! { <li><Link to="/dashboard">"Dashboard"</Link></li> }
                                            .into_any()
                                    }
                                    NavEntry::Profile => {
                                        view! { <li><Link to="/profile">"My Profile"</Link></li> }
                                            .into_any()
                                    }
                                    NavEntry::Logout => {
                                        view! {
                                            <li>
                                                <button on:click=on_logout class="logout-btn">
                                                    "Logout"
                                                </button>
                                            </li>
                                        }
                                        .into_any()
                                    }
                                    NavEntry::Welcome(username) => {
                                        view! {
                                            <li class="user-info">
                                                {format!("Welcome, {}!", username)}
                                            </li>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
