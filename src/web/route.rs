//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、所属区域及其守卫属性。

use std::fmt::Display;

/// 用户区页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserPage {
    Profile,
    Dashboard,
    Charts,
    Transactions,
    AddBudget,
    Settings,
}

/// 管理区页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPage {
    Profile,
    Dashboard,
    Users,
    Settings,
}

/// 顶层外壳种类
///
/// 受保护页面共用同一个侧边栏外壳；外壳只在种类变化时重建，
/// 受保护页面之间的导航不会重置侧边栏状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Login,
    Protected,
    NotFound,
}

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 用户区 (需要认证)
    User(UserPage),
    /// 管理区 (需要认证 + 管理员角色)
    Admin(AdminPage),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 根路径与区域根路径均落在对应的 Dashboard 上。
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Self::Login,
            "" | "/user" | "/user/dashboard" => Self::User(UserPage::Dashboard),
            "/user/profile" => Self::User(UserPage::Profile),
            "/user/charts" => Self::User(UserPage::Charts),
            "/user/transactions" => Self::User(UserPage::Transactions),
            "/user/addbudget" => Self::User(UserPage::AddBudget),
            "/user/settings" => Self::User(UserPage::Settings),
            "/admin" | "/admin/dashboard" => Self::Admin(AdminPage::Dashboard),
            "/admin/profile" => Self::Admin(AdminPage::Profile),
            "/admin/users" => Self::Admin(AdminPage::Users),
            "/admin/settings" => Self::Admin(AdminPage::Settings),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::User(page) => match page {
                UserPage::Profile => "/user/profile",
                UserPage::Dashboard => "/user/dashboard",
                UserPage::Charts => "/user/charts",
                UserPage::Transactions => "/user/transactions",
                UserPage::AddBudget => "/user/addbudget",
                UserPage::Settings => "/user/settings",
            },
            Self::Admin(page) => match page {
                AdminPage::Profile => "/admin/profile",
                AdminPage::Dashboard => "/admin/dashboard",
                AdminPage::Users => "/admin/users",
                AdminPage::Settings => "/admin/settings",
            },
            Self::NotFound => "/404",
        }
    }

    /// 获取路由的末级路径段，用于菜单高亮的精确匹配
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            Self::User(page) => Some(match page {
                UserPage::Profile => "profile",
                UserPage::Dashboard => "dashboard",
                UserPage::Charts => "charts",
                UserPage::Transactions => "transactions",
                UserPage::AddBudget => "addbudget",
                UserPage::Settings => "settings",
            }),
            Self::Admin(page) => Some(match page {
                AdminPage::Profile => "profile",
                AdminPage::Dashboard => "dashboard",
                AdminPage::Users => "users",
                AdminPage::Settings => "settings",
            }),
            Self::Login | Self::NotFound => None,
        }
    }

    /// 路由所属的外壳种类
    pub fn shell(&self) -> Shell {
        match self {
            Self::Login => Shell::Login,
            Self::User(_) | Self::Admin(_) => Shell::Protected,
            Self::NotFound => Shell::NotFound,
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::User(_) | Self::Admin(_))
    }

    /// 该路由是否属于管理区（需要管理员角色）
    pub fn is_admin_section(&self) -> bool {
        matches!(self, Self::Admin(_))
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取角色不足时的重定向目标
    pub fn unauthorized_redirect() -> Self {
        Self::User(UserPage::Dashboard)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_covers_all_user_pages() {
        assert_eq!(
            AppRoute::from_path("/user/profile"),
            AppRoute::User(UserPage::Profile)
        );
        assert_eq!(
            AppRoute::from_path("/user/charts"),
            AppRoute::User(UserPage::Charts)
        );
        assert_eq!(
            AppRoute::from_path("/user/transactions"),
            AppRoute::User(UserPage::Transactions)
        );
        assert_eq!(
            AppRoute::from_path("/user/addbudget"),
            AppRoute::User(UserPage::AddBudget)
        );
        assert_eq!(
            AppRoute::from_path("/user/settings"),
            AppRoute::User(UserPage::Settings)
        );
    }

    #[test]
    fn test_root_and_section_roots_land_on_dashboard() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::User(UserPage::Dashboard));
        assert_eq!(
            AppRoute::from_path("/user"),
            AppRoute::User(UserPage::Dashboard)
        );
        assert_eq!(
            AppRoute::from_path("/admin"),
            AppRoute::Admin(AdminPage::Dashboard)
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/unknown"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/user/unknown"), AppRoute::NotFound);
    }

    #[test]
    fn test_to_path_round_trips() {
        let routes = [
            AppRoute::Login,
            AppRoute::User(UserPage::Dashboard),
            AppRoute::User(UserPage::Transactions),
            AppRoute::Admin(AdminPage::Users),
            AppRoute::Admin(AdminPage::Settings),
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_guard_attributes() {
        // 登录页与 404 不需要认证
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
        // 用户区需要认证但不属于管理区
        assert!(AppRoute::User(UserPage::Profile).requires_auth());
        assert!(!AppRoute::User(UserPage::Profile).is_admin_section());
        // 管理区两者皆是
        assert!(AppRoute::Admin(AdminPage::Users).requires_auth());
        assert!(AppRoute::Admin(AdminPage::Users).is_admin_section());
    }

    #[test]
    fn test_protected_routes_share_one_shell() {
        assert_eq!(
            AppRoute::User(UserPage::Charts).shell(),
            AppRoute::Admin(AdminPage::Users).shell()
        );
        assert_eq!(AppRoute::Login.shell(), Shell::Login);
        assert_eq!(AppRoute::NotFound.shell(), Shell::NotFound);
    }

    #[test]
    fn test_redirect_targets_cannot_loop() {
        // 认证失败的重定向目标本身不需要认证
        assert!(!AppRoute::auth_failure_redirect().requires_auth());
        // 角色不足的重定向目标不属于管理区
        assert!(!AppRoute::unauthorized_redirect().is_admin_section());
    }
}
