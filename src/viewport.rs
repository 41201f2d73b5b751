//! 视口追踪模块
//!
//! 根据窗口宽度推导布局分类（桌面/移动），随 resize 事件重算。
//! 分类是宽度的纯函数；监听器随响应式作用域释放，不会泄漏。

use leptos::prelude::*;

use crate::web::WindowListener;

/// 移动布局的宽度阈值（逻辑像素）
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// 布局分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    /// 由窗口宽度推导布局分类：宽度 < 768 即为移动布局
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// 重算布局分类
///
/// 仅当分类真正变化时返回新值；相同宽度分类的重复事件
/// 返回 `None`，不产生可观察的状态变化（幂等）。
fn reconcile(current: ViewportMode, width: f64) -> Option<ViewportMode> {
    let next = ViewportMode::from_width(width);
    (next != current).then_some(next)
}

/// 读取当前窗口宽度
fn current_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT)
}

/// 创建视口信号并注入 Context
///
/// 在 App 根部调用一次。resize 监听器的生命周期绑定在
/// 当前响应式作用域上，作用域销毁时自动移除。
pub fn provide_viewport() {
    let (mode, set_mode) = signal(ViewportMode::from_width(current_width()));

    let listener = WindowListener::new("resize", move || {
        if let Some(next) = reconcile(mode.get_untracked(), current_width()) {
            set_mode.set(next);
        }
    });
    let holder = StoredValue::new_local(Some(listener));
    on_cleanup(move || holder.set_value(None));

    provide_context(mode);
}

/// 从 Context 获取视口信号
pub fn use_viewport() -> ReadSignal<ViewportMode> {
    use_context::<ReadSignal<ViewportMode>>().expect("viewport signal should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_iff_width_below_threshold() {
        assert_eq!(ViewportMode::from_width(500.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(767.9), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(768.0), ViewportMode::Desktop);
        assert_eq!(ViewportMode::from_width(1200.0), ViewportMode::Desktop);
    }

    #[test]
    fn test_reconcile_is_idempotent_for_equal_category() {
        // 同分类的重复宽度不产生变化
        assert_eq!(reconcile(ViewportMode::Mobile, 500.0), None);
        assert_eq!(reconcile(ViewportMode::Mobile, 500.0), None);
        assert_eq!(reconcile(ViewportMode::Desktop, 1200.0), None);
    }

    #[test]
    fn test_reconcile_detects_category_change() {
        assert_eq!(
            reconcile(ViewportMode::Desktop, 500.0),
            Some(ViewportMode::Mobile)
        );
        assert_eq!(
            reconcile(ViewportMode::Mobile, 1024.0),
            Some(ViewportMode::Desktop)
        );
    }
}
