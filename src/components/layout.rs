//! 侧边栏外壳组件
//!
//! 持有侧边栏状态信号并完成全部接线：
//! 视口变化、路由变化、菜单选中、展开切换与登出。
//! 具体的尺寸/可见性一律来自 `sidebar::geometry` 的纯映射。

use leptos::prelude::*;

use crate::auth::use_sessions;
use crate::components::icons::{ChevronRight, LogOut, Wallet, menu_icon};
use crate::components::navbar::Navbar;
use crate::menu::{self, MenuItem};
use crate::notify::use_toasts;
use crate::sidebar::{Anchor, SidebarState, geometry};
use crate::viewport::use_viewport;
use crate::web::Timeout;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

/// 登出成功提示的固定延迟（毫秒）
const LOGOUT_NOTICE_DELAY_MS: u32 = 1500;

#[component]
pub fn SidebarLayout(children: Children) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let sessions = use_sessions();
    let viewport = use_viewport();
    let route = router.current_route();

    let (state, set_state) = signal(SidebarState::new(viewport.get_untracked()));

    // 视口分类变化：只切换解释，保留 is_open 原值
    Effect::new(move |_| {
        let mode = viewport.get();
        set_state.update(|s| s.set_mode(mode));
    });

    // 路由变化：移动端收起遮罩
    Effect::new(move |_| {
        route.track();
        set_state.update(|s| s.route_changed());
    });

    let geo = Memo::new(move |_| geometry(&state.get()));
    let is_mobile = move || matches!(geo.get().anchor, Anchor::Bottom);

    // 登出定时器：组件销毁时随 StoredValue 一起释放，
    // 延迟回调不会打到已卸载的界面上
    let logout_timer = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || logout_timer.set_value(None));

    let on_logout = {
        let router = router.clone();
        let sessions = sessions.clone();
        move |_| {
            // 移动端立即同步收起
            set_state.update(|s| s.logout());
            // 顺序要求：三个会话键全部清除之后才会发起跳转
            sessions.clear();
            let router = router.clone();
            logout_timer.set_value(Some(Timeout::new(LOGOUT_NOTICE_DELAY_MS, move || {
                toasts.success("Logout Successfully");
                router.navigate(AppRoute::auth_failure_redirect().to_path());
            })));
        }
    };

    let aside_class = move || match geo.get().anchor {
        Anchor::Left => {
            "fixed top-0 left-0 z-50 flex flex-col bg-gradient-to-b from-white \
             to-gray-50 shadow-lg border-r border-gray-100 transition-all duration-300"
        }
        Anchor::Bottom => {
            "fixed bottom-0 left-0 right-0 z-50 flex flex-row justify-around \
             items-center bg-gradient-to-b from-white to-gray-50 shadow-lg \
             border-t border-gray-100"
        }
    };

    view! {
        // 移动端遮罩：点击收起
        <Show when=move || geo.get().overlay_visible>
            <div
                class="fixed inset-0 bg-black/30 backdrop-blur-sm z-40"
                on:click=move |_| set_state.update(|s| s.select_item())
            />
        </Show>

        <aside
            class=aside_class
            style:width=move || geo.get().width
            style:height=move || geo.get().height
        >
            // 展开/折叠按钮（仅桌面）
            <Show when=move || !is_mobile()>
                <div class="flex justify-end p-4">
                    <button
                        class="text-gray-600 hover:text-blue-600 p-2 rounded-full hover:bg-blue-50"
                        aria-label=move || {
                            if state.get().is_open { "Collapse Sidebar" } else { "Expand Sidebar" }
                        }
                        on:click=move |_| set_state.update(|s| s.toggle())
                    >
                        <div class=move || {
                            if state.get().is_open {
                                "rotate-180 transition-transform duration-300"
                            } else {
                                "transition-transform duration-300"
                            }
                        }>
                            <ChevronRight />
                        </div>
                    </button>
                </div>

                <div class="flex items-center justify-center py-6 mb-4 border-b border-gray-100">
                    <div class="flex items-center space-x-3">
                        <div class="flex-shrink-0 ml-2 w-8 h-8 text-blue-600">
                            <Wallet />
                        </div>
                        <Link to="/">
                            <Show when=move || geo.get().labels_visible>
                                <div class="flex flex-col">
                                    <span class="text-xl font-bold text-gray-800">"Expense"</span>
                                    <span class="text-md font-medium text-blue-600">"Tracker"</span>
                                </div>
                            </Show>
                        </Link>
                    </div>
                </div>
            </Show>

            <nav class=move || if is_mobile() { "flex-1" } else { "mt-2 flex-1 px-3" }>
                <ul class=move || {
                    if is_mobile() { "flex justify-around" } else { "space-y-2" }
                }>
                    <For
                        each={move || menu::items_for(route.get()).iter().copied().collect::<Vec<_>>()}
                        key=|item| item.segment
                        children=move |item: MenuItem| {
                            let router = use_router();
                            let active = move || menu::is_active(&item, route.get());
                            let on_select = move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                set_state.update(|s| s.select_item());
                                router.navigate(&menu::item_path(&item, route.get_untracked()));
                            };
                            view! {
                                <li class=move || if is_mobile() { "flex-1" } else { "" }>
                                    <a
                                        href=move || menu::item_path(&item, route.get())
                                        class=move || {
                                            let layout = if is_mobile() {
                                                "flex flex-col items-center justify-center"
                                            } else {
                                                "flex items-center"
                                            };
                                            let tone = if active() {
                                                "bg-gradient-to-r from-blue-600 to-indigo-600 \
                                                 text-white shadow-md shadow-blue-200"
                                            } else {
                                                "hover:bg-blue-50 text-gray-700 hover:text-blue-600"
                                            };
                                            format!("{layout} p-3 rounded-xl mx-1 cursor-pointer {tone}")
                                        }
                                        on:click=on_select
                                    >
                                        <div class=move || {
                                            if active() {
                                                "min-w-[24px] flex items-center justify-center text-white"
                                            } else {
                                                "min-w-[24px] flex items-center justify-center text-blue-600"
                                            }
                                        }>
                                            {menu_icon(item.icon)}
                                        </div>
                                        <Show when=move || geo.get().labels_visible>
                                            <span class=move || {
                                                if is_mobile() {
                                                    "text-xs mt-1 whitespace-nowrap"
                                                } else {
                                                    "ml-3 font-medium whitespace-nowrap"
                                                }
                                            }>
                                                {item.label}
                                            </span>
                                        </Show>
                                        <Show when=move || {
                                            !is_mobile() && geo.get().labels_visible && active()
                                        }>
                                            <div class="w-1.5 h-1.5 rounded-full bg-white ml-auto" />
                                        </Show>
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </nav>

            <div class=move || if is_mobile() { "p-3 mt-auto" } else { "p-3 mt-auto mb-6" }>
                <button
                    class="flex items-center p-3 rounded-xl w-full cursor-pointer text-gray-700 \
                           hover:bg-red-400 hover:text-white"
                    aria-label="Logout"
                    on:click=on_logout
                >
                    <div class="min-w-[24px] flex items-center justify-center text-red-500">
                        <LogOut />
                    </div>
                    <Show when=move || !is_mobile() && geo.get().labels_visible>
                        <span class="ml-3 whitespace-nowrap font-medium">"Logout"</span>
                    </Show>
                </button>
            </div>
        </aside>

        // 内容容器
        <div class=move || {
            format!("min-h-screen bg-gray-50 {}", geo.get().content_offset_class)
        }>
            <Show when=move || !is_mobile()>
                <Navbar />
            </Show>
            <div class=move || if is_mobile() { "p-4 mt-10" } else { "p-4" }>
                {children()}
            </div>
        </div>
    }
}
