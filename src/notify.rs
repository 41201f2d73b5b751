//! 通知服务模块
//!
//! fire-and-forget 的成功/错误提示，不消费返回值。
//! 由 Context 提供全局句柄：守卫、登出与登录各自独立触发，
//! 展示层只有 `Toaster` 一个出口，固定在右下角。

use std::time::Duration;

use leptos::prelude::*;

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// 单条提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub level: ToastLevel,
}

/// 通知服务句柄
///
/// 基于 `RwSignal`，实现 `Copy`，可直接在组件间传递。
#[derive(Clone, Copy)]
pub struct Toasts {
    current: RwSignal<Option<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text.into(), ToastLevel::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text.into(), ToastLevel::Error);
    }

    fn show(&self, text: String, level: ToastLevel) {
        self.current.set(Some(Toast { text, level }));
    }

    fn clear(&self) {
        self.current.set(None);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// 创建通知服务并注入 Context，在 App 根部调用一次
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

/// 从 Context 获取通知服务
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts should be provided")
}


/// 提示渲染出口
///
/// 固定右下角；3 秒后自动清除当前提示。
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    let current = toasts.current;

    // 自动清除
    Effect::new(move |_| {
        if current.get().is_some() {
            set_timeout(move || toasts.clear(), Duration::from_secs(3));
        }
    });

    view! {
        <Show when=move || current.get().is_some()>
            <div class="toast toast-bottom toast-end z-[60]">
                <div class=move || {
                    match current.get().map(|t| t.level) {
                        Some(ToastLevel::Error) => "alert alert-error shadow-lg",
                        _ => "alert alert-success shadow-lg",
                    }
                }>
                    <span>{move || current.get().map(|t| t.text).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
