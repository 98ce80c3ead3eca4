use crate::api;
use acentrik_shared::protocol::{DeleteUserRequest, ListUsersRequest};
use acentrik_shared::{CreateUserRequest, UserSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 管理面板：员工账号的增删查
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (users, set_users) = signal(Vec::<UserSummary>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let (new_username, set_new_username) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());

    let load_users = move || {
        spawn_local(async move {
            match api::send(&ListUsersRequest).await {
                Ok(list) => set_users.set(list),
                Err(_) => {
                    set_error_msg.set(Some("Failed to fetch users".to_string()));
                    set_success_msg.set(None);
                }
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| load_users());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = CreateUserRequest {
            username: new_username.get(),
            password: new_password.get(),
        };
        spawn_local(async move {
            match api::send(&request).await {
                Ok(created) => {
                    set_success_msg.set(Some(created.message));
                    set_error_msg.set(None);
                    set_new_username.set(String::new());
                    set_new_password.set(String::new());
                    load_users();
                }
                Err(e) => {
                    set_error_msg.set(Some(e.to_string()));
                    set_success_msg.set(None);
                }
            }
        });
    };

    let on_delete = move |user_id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this user?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::send(&DeleteUserRequest { user_id }).await {
                Ok(message) => {
                    set_success_msg.set(Some(message.message));
                    set_error_msg.set(None);
                    load_users();
                }
                Err(e) => {
                    set_error_msg.set(Some(e.to_string()));
                    set_success_msg.set(None);
                }
            }
        });
    };

    view! {
        <div class="dashboard">
            <h1>"Admin Dashboard"</h1>

            <Show when=move || error_msg.get().is_some()>
                <div class="error-message">{move || error_msg.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || success_msg.get().is_some()>
                <div class="success-message">{move || success_msg.get().unwrap_or_default()}</div>
            </Show>

            <div class="dashboard-section">
                <h2>"Add New Employee"</h2>
                <form class="add-user-form" on:submit=on_add>
                    <div class="form-group">
                        <label for="newUsername">"Username:"</label>
                        <input
                            id="newUsername"
                            type="text"
                            on:input=move |ev| set_new_username.set(event_target_value(&ev))
                            prop:value=new_username
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="newPassword">"Password:"</label>
                        <input
                            id="newPassword"
                            type="password"
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            prop:value=new_password
                            required
                        />
                    </div>
                    <button type="submit" class="btn add-button">"Add Employee"</button>
                </form>
            </div>

            <div class="dashboard-section">
                <h2>"Employee List"</h2>
                <div class="table-container">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="loading">"Loading..."</div> }
                    >
                        <table class="user-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Username"</th>
                                    <th>"Role"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || users.get()
                                    key=|user| user.id
                                    children=move |user| {
                                        let UserSummary { id, username, role } = user;
                                        let is_admin = role.is_admin();
                                        view! {
                                            <tr class="animate-on-scroll">
                                                <td>{id}</td>
                                                <td>{username}</td>
                                                <td>{role.to_string()}</td>
                                                <td>
                                                    <button
                                                        class="delete-button"
                                                        disabled=is_admin
                                                        on:click=move |_| on_delete(id)
                                                    >
                                                        {if is_admin { "Protected" } else { "Delete" }}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </div>
            </div>
        </div>
    }
}
