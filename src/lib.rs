//! Expense Tracker 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，含导航守卫）
//! - `auth`: 会话模型与守卫决策树
//! - `viewport`: 视口分类追踪
//! - `sidebar`: 侧边栏状态机与几何映射
//! - `menu`: 菜单派生与高亮判定
//! - `notify`: 通知服务
//! - `components`: UI 组件层

use std::sync::Arc;

mod auth;
mod menu;
mod notify;
mod sidebar;
mod viewport;

mod components {
    pub mod icons;
    pub mod layout;
    pub mod login;
    pub mod navbar;
    pub mod pages;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，
// 存储/定时器/事件监听都只在这里接触 web_sys。
pub(crate) mod web {
    mod listener;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use listener::WindowListener;
    pub use storage::LocalStorage;
    pub use timer::Timeout;
}

use leptos::prelude::*;

use crate::auth::{BrowserSessions, Sessions, provide_sessions};
use crate::components::layout::SidebarLayout;
use crate::components::login::LoginPage;
use crate::components::pages::{NotFoundPage, PlaceholderPage};
use crate::notify::{Toaster, provide_toasts};
use crate::viewport::provide_viewport;
use crate::web::route::{AdminPage, AppRoute, Shell, UserPage};
use crate::web::router::{Router, RouterOutlet, use_router};

/// 受保护区域的内容出口
///
/// 侧边栏外壳保持挂载，只有这里随路由切换内容。
#[component]
fn RoutedContent() -> impl IntoView {
    let router = use_router();
    move || page_for(router.current_route().get())
}

/// 路由对应的占位内容页
fn page_for(route: AppRoute) -> AnyView {
    let title = match route {
        AppRoute::User(page) => match page {
            UserPage::Profile => "Profile",
            UserPage::Dashboard => "Dashboard",
            UserPage::Charts => "Financial Dashboard",
            UserPage::Transactions => "Transactions",
            UserPage::AddBudget => "Budgets",
            UserPage::Settings => "Settings",
        },
        AppRoute::Admin(page) => match page {
            AdminPage::Profile => "Profile",
            AdminPage::Dashboard => "Admin Dashboard",
            AdminPage::Users => "Manage Users",
            AdminPage::Settings => "Settings",
        },
        // 受保护外壳下不会出现其他路由
        AppRoute::Login | AppRoute::NotFound => return ().into_any(),
    };
    view! { <PlaceholderPage title=title /> }.into_any()
}

/// 外壳匹配函数
///
/// 根据外壳种类返回对应的子树。
fn route_matcher(shell: Shell) -> AnyView {
    match shell {
        Shell::Login => view! { <LoginPage /> }.into_any(),
        Shell::Protected => view! {
            <SidebarLayout>
                <RoutedContent />
            </SidebarLayout>
        }
        .into_any(),
        Shell::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 通知服务（守卫与登出都会用到，必须先于路由提供）
    provide_toasts();

    // 2. 会话存储：显式注入，守卫每次导航读取新鲜快照
    let sessions: Sessions = Arc::new(BrowserSessions);
    provide_sessions(sessions.clone());

    // 3. 视口信号
    provide_viewport();

    view! {
        <Toaster />
        // 4. 路由器组件：注入会话存储实现守卫
        <Router sessions=sessions>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
