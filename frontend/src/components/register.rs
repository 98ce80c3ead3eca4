use crate::api;
use crate::web::router::use_router;
use acentrik_shared::CreateUserRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 注册页：开放的账号创建入口，成功后转到登录页
#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if password.get() != confirm.get() {
            set_error_msg.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let request = CreateUserRequest {
            username: username.get(),
            password: password.get(),
        };
        spawn_local(async move {
            match api::send(&request).await {
                Ok(_) => router.navigate("/login"),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="register">
            <h1>"Register"</h1>

            <Show when=move || error_msg.get().is_some()>
                <div class="error-message">{move || error_msg.get().unwrap_or_default()}</div>
            </Show>

            <form class="register-form" on:submit=on_submit>
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
                <div class="form-group">
                    <label for="confirmPassword">"Confirm Password:"</label>
                    <input
                        id="confirmPassword"
                        type="password"
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        prop:value=confirm
                        required
                    />
                </div>
                <button type="submit" class="btn register-button" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}
