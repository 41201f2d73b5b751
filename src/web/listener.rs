//! DOM 事件监听封装模块
//!
//! 与 `timer.rs` 同样的获取/释放模式：监听器的生命周期
//! 绑定在持有它的组件上，drop 时自动从 window 上移除，
//! 不会留下泄漏的回调。

use wasm_bindgen::prelude::*;

/// 作用域化的 window 事件监听器
///
/// 持有期间监听有效；被 drop 时调用 `removeEventListener`。
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn Fn()>,
}

impl WindowListener {
    /// 在 window 上注册事件监听
    ///
    /// # 参数
    /// - `event`: 事件名（如 `"resize"`）
    /// - `callback`: 事件触发时的回调函数
    pub fn new<F>(event: &'static str, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        Self { event, closure }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
