//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。
//! 守卫在**每次**路径变化时运行：用户点击、浏览器前进后退、
//! 以及守卫自身触发的程序化重定向，都会用一份新鲜的会话
//! 快照从头评估，快照不跨检查缓存。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, Shell};
use crate::auth::{GuardDecision, Sessions, check_navigation};
use crate::notify::{Toasts, use_toasts};

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

/// History 写入方式
#[derive(Clone, Copy)]
enum HistoryWrite {
    /// 用户主动导航：pushState
    Push,
    /// 重定向或初始加载：replaceState
    Replace,
    /// popstate：浏览器已经改写了 History，放行时不再写入
    Sync,
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 会话存储与通知服务由外部注入，路由层不关心它们的实现。
#[derive(Clone)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 会话存储（注入，守卫每次导航读取一份新鲜快照）
    sessions: Sessions,
    /// 通知服务（越权访问时提示一次）
    toasts: Toasts,
}

impl RouterService {
    fn new(sessions: Sessions, toasts: Toasts) -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        Self {
            current_route,
            set_route,
            sessions,
            toasts,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.apply(AppRoute::from_path(path), HistoryWrite::Push);
    }

    /// 应用一次导航
    ///
    /// 重定向通过递归重新进入本方法，对重定向目标从头评估守卫。
    /// 递归有界：Login 不需要认证，用户面板不属于管理区，
    /// 两个重定向目标对触发它们的会话必然放行。
    fn apply(&self, target: AppRoute, write: HistoryWrite) {
        let session = self.sessions.load();

        match check_navigation(target, &session) {
            GuardDecision::Allow => {
                match write {
                    HistoryWrite::Push => push_history_state(target.to_path()),
                    HistoryWrite::Replace => replace_history_state(target.to_path()),
                    HistoryWrite::Sync => {}
                }
                self.set_route.set(target);
            }
            GuardDecision::RedirectToLogin => {
                web_sys::console::log_1(
                    &"[Router] No session. Redirecting to Login.".into(),
                );
                self.apply(AppRoute::auth_failure_redirect(), HistoryWrite::Replace);
            }
            GuardDecision::RedirectToDashboard => {
                web_sys::console::log_1(
                    &"[Router] Admin section denied. Redirecting to Dashboard.".into(),
                );
                // 每次越权导航恰好提示一次
                self.toasts.error("Unauthorized access");
                self.apply(AppRoute::unauthorized_redirect(), HistoryWrite::Replace);
            }
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    ///
    /// popstate 走与主动导航同一条守卫路径。
    fn init_popstate_listener(&self) {
        let service = self.clone();

        let closure = Closure::<dyn Fn()>::new(move || {
            service.apply(AppRoute::from_path(&current_path()), HistoryWrite::Sync);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与应用同寿命，泄漏闭包以保持其存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
///
/// 初始加载同样经过守卫（replace 语义）。
fn provide_router(sessions: Sessions, toasts: Toasts) -> RouterService {
    let router = RouterService::new(sessions, toasts);

    router.apply(AppRoute::from_path(&current_path()), HistoryWrite::Replace);
    router.init_popstate_listener();

    provide_context(router.clone());
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
    /// 会话存储，注入给导航守卫
    sessions: Sessions,
    /// 子组件
    children: Children,
) -> impl IntoView {
    let toasts = use_toasts();
    provide_router(sessions, toasts);

    children()
}

/// 路由出口组件
///
/// 根据当前路由的外壳种类渲染对应的子树。
/// 种类经过 Memo 去重：受保护页面之间的导航不重建外壳，
/// 外壳内部的内容出口自行响应路由变化。
#[component]
pub fn RouterOutlet(
    /// 外壳匹配函数：接收外壳种类，返回对应视图
    matcher: fn(Shell) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let shell = Memo::new(move |_| router.current_route().get().shell());

    move || matcher(shell.get())
}

/// 声明式链接组件
///
/// 拦截点击事件，交给路由服务处理（经过守卫）。
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// 附加的 class
    #[prop(optional, into)]
    class: String,
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
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
