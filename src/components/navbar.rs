//! 桌面顶栏组件（纯渲染协作方）

use leptos::prelude::*;

use crate::auth::use_sessions;

#[component]
pub fn Navbar() -> impl IntoView {
    let sessions = use_sessions();
    let display_name = sessions.load().name.unwrap_or_else(|| "User".to_string());

    view! {
        <header class="h-16 bg-white shadow-sm flex items-center justify-between px-6">
            <span class="text-lg font-semibold text-gray-800">"Expense Tracker"</span>
            <div class="flex items-center gap-2 text-gray-600">
                <span class="text-sm font-medium">{display_name}</span>
            </div>
        </header>
    }
}
