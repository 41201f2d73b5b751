//! 侧边栏状态机模块
//!
//! 持有 {布局分类, 展开标志} 并定义全部状态迁移。
//! `is_open` 的原始布尔值在布局切换时保留，但它的**含义**
//! 只在 `geometry` 这一个纯函数里解释：桌面上表示宽度展开，
//! 移动端表示底栏遮罩可见。两种含义不允许泄漏到其他模块。

use crate::viewport::ViewportMode;

// =========================================================
// 状态与迁移
// =========================================================

/// 侧边栏状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub mode: ViewportMode,
    pub is_open: bool,
}

impl SidebarState {
    /// 初始状态：折叠
    pub fn new(mode: ViewportMode) -> Self {
        Self {
            mode,
            is_open: false,
        }
    }

    /// 展开/折叠切换（仅桌面布局有切换按钮，移动端为空操作）
    pub fn toggle(&mut self) {
        if !self.mode.is_mobile() {
            self.is_open = !self.is_open;
        }
    }

    /// 布局分类变化：保留 `is_open` 的原始值，只切换其解释
    pub fn set_mode(&mut self, mode: ViewportMode) {
        self.mode = mode;
    }

    /// 选中菜单项：移动端导航后收起遮罩
    pub fn select_item(&mut self) {
        self.collapse_on_mobile();
    }

    /// 路由变化：移动端重置为折叠
    pub fn route_changed(&mut self) {
        self.collapse_on_mobile();
    }

    /// 登出动作：移动端立即同步收起，不等待延迟通知
    pub fn logout(&mut self) {
        self.collapse_on_mobile();
    }

    fn collapse_on_mobile(&mut self) {
        if self.mode.is_mobile() {
            self.is_open = false;
        }
    }
}

// =========================================================
// 几何映射（纯函数，替代动画变体对象）
// =========================================================

/// 侧边栏停靠边
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// 桌面：左侧纵向栏
    Left,
    /// 移动：底部横向栏
    Bottom,
}

/// {布局, 展开标志} 映射出的具体几何记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarGeometry {
    pub width: &'static str,
    pub height: &'static str,
    pub anchor: Anchor,
    /// 菜单文字是否可见
    pub labels_visible: bool,
    /// 移动端遮罩是否可见
    pub overlay_visible: bool,
    /// 内容区为侧边栏让出的空间
    pub content_offset_class: &'static str,
}

/// 将侧边栏状态映射为几何记录
///
/// `is_open` 的两种解释只存在于此处：
/// 桌面 = 栏宽展开；移动 = 遮罩与文字可见，栏本身尺寸不变。
pub fn geometry(state: &SidebarState) -> SidebarGeometry {
    match state.mode {
        ViewportMode::Desktop => SidebarGeometry {
            width: if state.is_open { "18rem" } else { "5rem" },
            height: "100vh",
            anchor: Anchor::Left,
            labels_visible: state.is_open,
            overlay_visible: false,
            content_offset_class: if state.is_open { "ml-72" } else { "ml-20" },
        },
        ViewportMode::Mobile => SidebarGeometry {
            width: "100%",
            height: "5rem",
            anchor: Anchor::Bottom,
            labels_visible: state.is_open,
            overlay_visible: state.is_open,
            content_offset_class: "pb-20",
        },
    }
}
