//! 登录页面
//!
//! 本系统没有后端：登录即把三个会话键写入存储，然后进入面板。
//! 已认证的访问者直接送往用户面板。

use leptos::prelude::*;

use crate::auth::use_sessions;
use crate::components::icons::Wallet;
use crate::web::route::{AppRoute, UserPage};
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let sessions = use_sessions();
    let router = use_router();

    let (user_id, set_user_id) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (as_admin, set_as_admin) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // Redirect if already authenticated
    Effect::new({
        let router = router.clone();
        let sessions = sessions.clone();
        move |_| {
            if sessions.load().is_authenticated() {
                router.navigate(AppRoute::User(UserPage::Dashboard).to_path());
            }
        }
    });

    let on_submit = {
        let router = router.clone();
        let sessions = sessions.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            if user_id.get().trim().is_empty() || name.get().trim().is_empty() {
                set_error_msg.set(Some("Please fill in all fields".to_string()));
                return;
            }
            set_error_msg.set(None);

            let admin = as_admin.get();
            sessions.save(user_id.get().trim(), name.get().trim(), admin);

            let target = if admin {
                AppRoute::from_path("/admin/dashboard")
            } else {
                AppRoute::User(UserPage::Dashboard)
            };
            router.navigate(target.to_path());
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Wallet />
                        </div>
                        <h1 class="text-3xl font-bold">"Expense Tracker"</h1>
                        <p class="text-base-content/70">"Sign in to continue"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="user-id">
                                <span class="label-text">"User ID"</span>
                            </label>
                            <input
                                id="user-id"
                                type="text"
                                placeholder="u1"
                                on:input=move |ev| set_user_id.set(event_target_value(&ev))
                                prop:value=user_id
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="display-name">
                                <span class="label-text">"Display Name"</span>
                            </label>
                            <input
                                id="display-name"
                                type="text"
                                placeholder="Jane Doe"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-2">
                            <label class="label cursor-pointer justify-start gap-3">
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-primary"
                                    on:change=move |ev| set_as_admin.set(event_target_checked(&ev))
                                    prop:checked=as_admin
                                />
                                <span class="label-text">"Sign in as administrator"</span>
                            </label>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary">"Sign In"</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
