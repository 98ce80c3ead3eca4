use crate::auth::{login, use_auth};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let user = username.get();
        let pass = password.get();
        spawn_local(async move {
            match login(&ctx, user, pass).await {
                Ok(_) => router.navigate("/"),
                Err(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="login">
            <h1>"Login"</h1>

            <Show when=move || error_msg.get().is_some()>
                <div class="error-message">{move || error_msg.get().unwrap_or_default()}</div>
            </Show>

            <form class="login-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="username">"Username:"</label>
                    <input
                        id="username"
                        type="text"
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        prop:value=username
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password:"</label>
                    <input
                        id="password"
                        type="password"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        required
                    />
                </div>
                <button type="submit" class="btn login-button" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
