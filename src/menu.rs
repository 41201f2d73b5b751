//! 菜单派生模块
//!
//! 两组静态有序菜单（管理区/用户区），启动时定义，只读不变。
//! 菜单集合按当前路由所属区域派生，从不存储；
//! 高亮判定采用精确路径段相等，而非子串包含。

use crate::web::route::AppRoute;

/// 菜单图标标识
///
/// 纯领域符号，具体 SVG 由渲染层解析。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    User,
    Gauge,
    Users,
    Settings,
    Chart,
    Transactions,
    Banknote,
}

/// 菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: IconKind,
    pub label: &'static str,
    pub segment: &'static str,
}

/// 管理区菜单
pub const ADMIN_MENU: &[MenuItem] = &[
    MenuItem {
        icon: IconKind::User,
        label: "Profile",
        segment: "profile",
    },
    MenuItem {
        icon: IconKind::Gauge,
        label: "Dashboard",
        segment: "dashboard",
    },
    MenuItem {
        icon: IconKind::Users,
        label: "Manage Users",
        segment: "users",
    },
    MenuItem {
        icon: IconKind::Settings,
        label: "Settings",
        segment: "settings",
    },
];

/// 用户区菜单
pub const USER_MENU: &[MenuItem] = &[
    MenuItem {
        icon: IconKind::User,
        label: "Profile",
        segment: "profile",
    },
    MenuItem {
        icon: IconKind::Gauge,
        label: "Dashboard",
        segment: "dashboard",
    },
    MenuItem {
        icon: IconKind::Chart,
        label: "Financial Dashboard",
        segment: "charts",
    },
    MenuItem {
        icon: IconKind::Transactions,
        label: "Transactions",
        segment: "transactions",
    },
    MenuItem {
        icon: IconKind::Banknote,
        label: "Budgets",
        segment: "addbudget",
    },
    MenuItem {
        icon: IconKind::Settings,
        label: "Settings",
        segment: "settings",
    },
];

/// 按路由所属区域派生菜单集合
pub fn items_for(route: AppRoute) -> &'static [MenuItem] {
    if route.is_admin_section() {
        ADMIN_MENU
    } else {
        USER_MENU
    }
}

/// 菜单项对应的完整跳转路径（区域前缀 + 路径段）
pub fn item_path(item: &MenuItem, route: AppRoute) -> String {
    let section = if route.is_admin_section() {
        "admin"
    } else {
        "user"
    };
    format!("/{}/{}", section, item.segment)
}

/// 高亮判定：当前路由的末级路径段与菜单项路径段**精确相等**
///
/// 路径段互为前缀/子串时不会误判。
pub fn is_active(item: &MenuItem, route: AppRoute) -> bool {
    route.segment() == Some(item.segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::route::{AdminPage, UserPage};

    #[test]
    fn test_menu_set_follows_section() {
        assert_eq!(
            items_for(AppRoute::Admin(AdminPage::Users)),
            ADMIN_MENU
        );
        assert_eq!(items_for(AppRoute::User(UserPage::Charts)), USER_MENU);
        // 非管理区一律是用户菜单
        assert_eq!(items_for(AppRoute::Login), USER_MENU);
    }

    #[test]
    fn test_menu_order_is_fixed() {
        let labels: Vec<_> = USER_MENU.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            [
                "Profile",
                "Dashboard",
                "Financial Dashboard",
                "Transactions",
                "Budgets",
                "Settings"
            ]
        );
        let admin_labels: Vec<_> = ADMIN_MENU.iter().map(|i| i.label).collect();
        assert_eq!(
            admin_labels,
            ["Profile", "Dashboard", "Manage Users", "Settings"]
        );
    }

    #[test]
    fn test_active_item_on_user_dashboard() {
        let route = AppRoute::User(UserPage::Dashboard);
        let active: Vec<_> = USER_MENU.iter().filter(|i| is_active(i, route)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Dashboard");
    }

    #[test]
    fn test_prefix_segment_does_not_match() {
        // "dash" 是 "dashboard" 的前缀，精确匹配不得命中
        let truncated = MenuItem {
            icon: IconKind::Gauge,
            label: "Dash",
            segment: "dash",
        };
        assert!(!is_active(&truncated, AppRoute::User(UserPage::Dashboard)));
    }

    #[test]
    fn test_item_path_respects_section() {
        let profile = &ADMIN_MENU[0];
        assert_eq!(
            item_path(profile, AppRoute::Admin(AdminPage::Dashboard)),
            "/admin/profile"
        );
        assert_eq!(
            item_path(&USER_MENU[3], AppRoute::User(UserPage::Dashboard)),
            "/user/transactions"
        );
    }

    #[test]
    fn test_item_paths_parse_back_to_routes() {
        // 每个菜单项的跳转路径都必须是可解析的已知路由
        for item in USER_MENU {
            let path = item_path(item, AppRoute::User(UserPage::Dashboard));
            assert_ne!(AppRoute::from_path(&path), AppRoute::NotFound, "{}", path);
        }
        for item in ADMIN_MENU {
            let path = item_path(item, AppRoute::Admin(AdminPage::Dashboard));
            assert_ne!(AppRoute::from_path(&path), AppRoute::NotFound, "{}", path);
        }
    }
}
