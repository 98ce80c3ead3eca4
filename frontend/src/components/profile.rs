use crate::api;
use acentrik_shared::protocol::ProfileRequest;
use acentrik_shared::{ProfileInfo, UpdatePasswordRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 个人资料页：资料展示与密码修改
#[component]
pub fn ProfilePage() -> impl IntoView {
    let (profile, set_profile) = signal(Option::<ProfileInfo>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    // 初始加载
    Effect::new(move |_| {
        spawn_local(async move {
            match api::send(&ProfileRequest).await {
                Ok(info) => set_profile.set(Some(info)),
                Err(_) => {
                    set_error_msg.set(Some("Failed to fetch profile".to_string()));
                    set_success_msg.set(None);
                }
            }
            set_loading.set(false);
        });
    });

    let on_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // 与服务端相同的校验，先在客户端拦下
        if new_password.get() != confirm_password.get() {
            set_error_msg.set(Some("Passwords do not match".to_string()));
            set_success_msg.set(None);
            return;
        }

        let request = UpdatePasswordRequest {
            new_password: new_password.get(),
            confirm_password: confirm_password.get(),
        };
        spawn_local(async move {
            match api::send(&request).await {
                Ok(message) => {
                    set_success_msg.set(Some(message.message));
                    set_error_msg.set(None);
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(e) => {
                    set_error_msg.set(Some(e.to_string()));
                    set_success_msg.set(None);
                }
            }
        });
    };

    view! {
        <div class="profile">
            <h1>"My Profile"</h1>

            <Show when=move || error_msg.get().is_some()>
                <div class="error-message">{move || error_msg.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || success_msg.get().is_some()>
                <div class="success-message">{move || success_msg.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                {move || {
                    profile
                        .get()
                        .map(|info| {
                            view! {
                                <div class="profile-section">
                                    <h2>"Profile Information"</h2>
                                    <div class="profile-info">
                                        <p>
                                            <strong>"Username: "</strong>
                                            {info.username.clone()}
                                        </p>
                                        <p>
                                            <strong>"Role: "</strong>
                                            {info.role.to_string()}
                                        </p>
                                        <p>
                                            <strong>"Offer Letter: "</strong>
                                            {if info.has_offer_letter {
                                                "Available"
                                            } else {
                                                "Not Available"
                                            }}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>

            <div class="profile-section">
                <h2>"Update Password"</h2>
                <form class="password-form" on:submit=on_update>
                    <div class="form-group">
                        <label for="newPassword">"New Password:"</label>
                        <input
                            id="newPassword"
                            type="password"
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            prop:value=new_password
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirmPassword">"Confirm Password:"</label>
                        <input
                            id="confirmPassword"
                            type="password"
                            on:input=move |ev| {
                                set_confirm_password.set(event_target_value(&ev))
                            }
                            prop:value=confirm_password
                            required
                        />
                    </div>
                    <button type="submit" class="btn update-button">"Update Password"</button>
                </form>
            </div>
        </div>
    }
}
