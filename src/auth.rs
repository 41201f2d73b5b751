//! 认证模块
//!
//! 管理会话状态与导航守卫，与路由系统解耦：
//! 路由服务通过注入的 `SessionStore` 在每次导航时读取一份
//! 新鲜的会话快照，快照不做任何缓存。
//! 会话缺失不是错误，而是正常的"未登录"状态，
//! 一律由重定向解决，从不作为异常向上抛出。

use std::sync::Arc;

use leptos::prelude::*;

use crate::web::LocalStorage;
use crate::web::route::AppRoute;

/// 会话在 LocalStorage 中占用的三个键
///
/// 约定：`user_id` 键的存在即视为已认证。
pub const KEY_USER_ID: &str = "user_id";
pub const KEY_NAME: &str = "name";
pub const KEY_IS_ADMIN: &str = "isAdmin";

// =========================================================
// 会话快照
// =========================================================

/// 会话快照
///
/// 在单次导航检查的范围内有效，检查完即丢弃。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// 用户标识（存在即已认证）
    pub user_id: Option<String>,
    /// 显示名称（仅供界面展示）
    pub name: Option<String>,
    /// 管理员角色标记
    pub is_admin: bool,
}

impl Session {
    /// 是否已认证
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

// =========================================================
// 会话存储抽象
// =========================================================

/// 抽象会话存储接口
///
/// 浏览器实现落在 LocalStorage 的三个字符串键上；
/// 测试使用内存实现。
pub trait SessionStore {
    /// 读取当前会话快照
    fn load(&self) -> Session;
    /// 写入三个会话键（登录）
    fn save(&self, user_id: &str, name: &str, is_admin: bool);
    /// 清除全部三个会话键（登出）
    ///
    /// 必须同步完成，调用方保证"先清后跳转"的顺序，
    /// 中间的重渲染不会观察到半清除的会话。
    fn clear(&self);
}

/// 共享的会话存储句柄
///
/// 要求 `Send + Sync` 以便在视图闭包与 Effect 中自由捕获。
pub type Sessions = Arc<dyn SessionStore + Send + Sync>;

/// 将会话存储注入 Context，在 App 根部调用一次
pub fn provide_sessions(sessions: Sessions) {
    provide_context(sessions);
}

/// 从 Context 获取会话存储
pub fn use_sessions() -> Sessions {
    use_context::<Sessions>().expect("SessionStore should be provided")
}

/// 浏览器 LocalStorage 实现
pub struct BrowserSessions;

impl SessionStore for BrowserSessions {
    fn load(&self) -> Session {
        Session {
            user_id: LocalStorage::get(KEY_USER_ID),
            name: LocalStorage::get(KEY_NAME),
            is_admin: LocalStorage::get(KEY_IS_ADMIN).as_deref() == Some("true"),
        }
    }

    fn save(&self, user_id: &str, name: &str, is_admin: bool) {
        LocalStorage::set(KEY_USER_ID, user_id);
        LocalStorage::set(KEY_NAME, name);
        LocalStorage::set(KEY_IS_ADMIN, if is_admin { "true" } else { "false" });
    }

    fn clear(&self) {
        LocalStorage::remove(KEY_USER_ID);
        LocalStorage::remove(KEY_NAME);
        LocalStorage::remove(KEY_IS_ADMIN);
    }
}

// =========================================================
// 导航守卫
// =========================================================

/// 守卫裁决结果
///
/// 每次导航恰好评估一次的三分支决策树。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 放行，正常渲染
    Allow,
    /// 未认证，重定向至登录页
    RedirectToLogin,
    /// 已认证但角色不足，重定向至用户面板并提示一次
    RedirectToDashboard,
}

/// **核心守卫逻辑：对目标路由与会话快照做一次性裁决**
///
/// 未认证的判定优先于角色判定；重定向目标自身对同一会话
/// 必然放行，因此守卫在重定向后重新评估时不会形成循环。
pub fn check_navigation(route: AppRoute, session: &Session) -> GuardDecision {
    if !route.requires_auth() {
        return GuardDecision::Allow;
    }
    if !session.is_authenticated() {
        return GuardDecision::RedirectToLogin;
    }
    if route.is_admin_section() && !session.is_admin {
        return GuardDecision::RedirectToDashboard;
    }
    GuardDecision::Allow
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::web::route::{AdminPage, UserPage};
    use std::cell::RefCell;
    use std::collections::HashMap;

    // =========================================================
    // 内存会话存储（测试用）
    // =========================================================

    /// 按键存储的内存实现，镜像浏览器实现的三键契约
    #[derive(Default)]
    pub struct MemorySessions {
        keys: RefCell<HashMap<&'static str, String>>,
    }

    impl MemorySessions {
        pub fn logged_in(user_id: &str, is_admin: bool) -> Self {
            let store = Self::default();
            store.save(user_id, "Test User", is_admin);
            store
        }

        pub fn key_count(&self) -> usize {
            self.keys.borrow().len()
        }
    }

    impl SessionStore for MemorySessions {
        fn load(&self) -> Session {
            let keys = self.keys.borrow();
            Session {
                user_id: keys.get(KEY_USER_ID).cloned(),
                name: keys.get(KEY_NAME).cloned(),
                is_admin: keys.get(KEY_IS_ADMIN).map(String::as_str) == Some("true"),
            }
        }

        fn save(&self, user_id: &str, name: &str, is_admin: bool) {
            let mut keys = self.keys.borrow_mut();
            keys.insert(KEY_USER_ID, user_id.to_string());
            keys.insert(KEY_NAME, name.to_string());
            keys.insert(KEY_IS_ADMIN, if is_admin { "true" } else { "false" }.to_string());
        }

        fn clear(&self) {
            let mut keys = self.keys.borrow_mut();
            keys.remove(KEY_USER_ID);
            keys.remove(KEY_NAME);
            keys.remove(KEY_IS_ADMIN);
        }
    }

    // =========================================================
    // 守卫决策树测试
    // =========================================================

    #[test]
    fn test_logged_out_redirects_to_login_on_any_protected_path() {
        let session = Session::default();
        let protected = [
            AppRoute::User(UserPage::Dashboard),
            AppRoute::User(UserPage::Transactions),
            AppRoute::Admin(AdminPage::Dashboard),
            AppRoute::Admin(AdminPage::Users),
        ];
        for route in protected {
            assert_eq!(
                check_navigation(route, &session),
                GuardDecision::RedirectToLogin
            );
        }
    }

    #[test]
    fn test_logged_out_is_allowed_on_public_routes() {
        let session = Session::default();
        assert_eq!(
            check_navigation(AppRoute::Login, &session),
            GuardDecision::Allow
        );
        assert_eq!(
            check_navigation(AppRoute::NotFound, &session),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_non_admin_redirected_from_admin_section() {
        let session = MemorySessions::logged_in("u1", false).load();
        assert_eq!(
            check_navigation(AppRoute::Admin(AdminPage::Users), &session),
            GuardDecision::RedirectToDashboard
        );
        // 用户区正常放行
        assert_eq!(
            check_navigation(AppRoute::User(UserPage::Dashboard), &session),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_admin_allowed_everywhere() {
        let session = MemorySessions::logged_in("a1", true).load();
        assert_eq!(
            check_navigation(AppRoute::Admin(AdminPage::Settings), &session),
            GuardDecision::Allow
        );
        assert_eq!(
            check_navigation(AppRoute::User(UserPage::Charts), &session),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_redirect_targets_are_stable_for_the_same_session() {
        // 未认证 → 登录页：对同一会话重新评估必然放行
        let logged_out = Session::default();
        assert_eq!(
            check_navigation(AppRoute::auth_failure_redirect(), &logged_out),
            GuardDecision::Allow
        );
        // 角色不足 → 用户面板：同样不会再次触发重定向
        let non_admin = MemorySessions::logged_in("u1", false).load();
        assert_eq!(
            check_navigation(AppRoute::unauthorized_redirect(), &non_admin),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_clear_removes_all_three_keys() {
        let store = MemorySessions::logged_in("u1", true);
        assert_eq!(store.key_count(), 3);

        store.clear();

        assert_eq!(store.key_count(), 0);
        let session = store.load();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin);
        assert!(session.name.is_none());
    }

    #[test]
    fn test_admin_flag_parses_only_literal_true() {
        let store = MemorySessions::default();
        store.keys.borrow_mut().insert(KEY_USER_ID, "u1".into());
        store.keys.borrow_mut().insert(KEY_IS_ADMIN, "TRUE".into());
        assert!(!store.load().is_admin);
    }
}
