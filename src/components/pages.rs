//! 路由内容占位页面
//!
//! 出口内容是领域之外的渲染协作方；每个路由渲染一张
//! 简单卡片，保证整棵路由树都有落点。

use leptos::prelude::*;

/// 通用的占位内容页
#[component]
pub fn PlaceholderPage(
    /// 页面标题
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title text-gray-800">{title}</h2>
                <p class="text-base-content/60">"Content for " {title} " goes here."</p>
            </div>
        </div>
    }
}

/// 404 页面
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        </div>
    }
}
