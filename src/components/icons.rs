//! 内联 SVG 图标组件（lucide 风格线条图标）
//!
//! 样式通过 `attr:class` 由调用方传入顶层 `<svg>`。

use leptos::prelude::*;

use crate::menu::IconKind;

macro_rules! icon {
    ($name:ident, $($path:expr),+ $(,)?) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    $(<path d=$path />)+
                </svg>
            }
        }
    };
}

icon!(
    UserRound,
    "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z",
    "M20 21a8 8 0 0 0-16 0",
);

icon!(
    Gauge,
    "M12 14l3.5-3.5",
    "M3.3 15a9 9 0 1 1 17.4 0",
);

icon!(
    UsersRound,
    "M18 21a8 8 0 0 0-16 0",
    "M10 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z",
    "M22 20c0-3.4-2.2-6.3-5.3-7.4",
    "M15 3.1a4 4 0 0 1 0 7.8",
);

icon!(
    Settings,
    "M12.2 2h-.4a2 2 0 0 0-2 2v.2a2 2 0 0 1-1 1.7l-.4.3a2 2 0 0 1-2 0l-.2-.1a2 2 0 0 0-2.7.7l-.2.4a2 2 0 0 0 .7 2.7l.2.1a2 2 0 0 1 1 1.7v.6a2 2 0 0 1-1 1.7l-.2.1a2 2 0 0 0-.7 2.7l.2.4a2 2 0 0 0 2.7.7l.2-.1a2 2 0 0 1 2 0l.4.3a2 2 0 0 1 1 1.7v.2a2 2 0 0 0 2 2h.4a2 2 0 0 0 2-2v-.2a2 2 0 0 1 1-1.7l.4-.3a2 2 0 0 1 2 0l.2.1a2 2 0 0 0 2.7-.7l.2-.4a2 2 0 0 0-.7-2.7l-.2-.1a2 2 0 0 1-1-1.7v-.6a2 2 0 0 1 1-1.7l.2-.1a2 2 0 0 0 .7-2.7l-.2-.4a2 2 0 0 0-2.7-.7l-.2.1a2 2 0 0 1-2 0l-.4-.3a2 2 0 0 1-1-1.7V4a2 2 0 0 0-2-2Z",
    "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z",
);

icon!(
    ChartColumn,
    "M3 3v16a2 2 0 0 0 2 2h16",
    "M18 17V9",
    "M13 17V5",
    "M8 17v-3",
);

icon!(
    ArrowLeftRight,
    "M8 3 4 7l4 4",
    "M4 7h16",
    "M16 21l4-4-4-4",
    "M20 17H4",
);

icon!(
    Banknote,
    "M2 6h20v12H2z",
    "M12 12a2 2 0 1 0 0 .01",
    "M6 12h.01",
    "M18 12h.01",
);

icon!(
    Wallet,
    "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1",
    "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4",
);

icon!(
    LogOut,
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
    "M16 17l5-5-5-5",
    "M21 12H9",
);

icon!(
    ChevronRight,
    "m9 18 6-6-6-6",
);

/// 将菜单图标标识解析为具体 SVG 视图
pub fn menu_icon(kind: IconKind) -> AnyView {
    match kind {
        IconKind::User => view! { <UserRound /> }.into_any(),
        IconKind::Gauge => view! { <Gauge /> }.into_any(),
        IconKind::Users => view! { <UsersRound /> }.into_any(),
        IconKind::Settings => view! { <Settings /> }.into_any(),
        IconKind::Chart => view! { <ChartColumn /> }.into_any(),
        IconKind::Transactions => view! { <ArrowLeftRight /> }.into_any(),
        IconKind::Banknote => view! { <Banknote /> }.into_any(),
    }
}
