//! Main layout: sidebar navigation, mobile header and theme toggle.
//!
//! All interactive controls are plain `POST` forms against `/shell/*`, so the
//! shell works without JavaScript. `static/shell.js` only reports the
//! viewport width.

use leptos::prelude::*;

use crate::shell::ShellSnapshot;
use crate::ui::components::{Icon, IconKind};

/// Brand shown in the header and sidebar.
pub const BRAND: &str = "Rautine";

/// A sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

/// Sidebar entries in display order.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { path: "/", label: "Главная", icon: IconKind::Home },
    NavItem { path: "/courses", label: "Курсы", icon: IconKind::BookOpen },
    NavItem { path: "/assignments", label: "Задания", icon: IconKind::FileText },
    NavItem { path: "/grades", label: "Оценки", icon: IconKind::BarChart },
    NavItem { path: "/schedule", label: "Расписание", icon: IconKind::Calendar },
    NavItem { path: "/profile", label: "Профиль", icon: IconKind::User },
];

impl NavItem {
    /// Whether this entry is the current section. Nested routes such as
    /// `/courses/1` highlight their parent section.
    #[must_use]
    pub fn is_active(&self, route: &str) -> bool {
        if self.path == "/" {
            route == "/"
        } else {
            route == self.path
                || route
                    .strip_prefix(self.path)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}

/// Page chrome around every route.
#[component]
pub fn Layout(
    /// Current shell state.
    shell: ShellSnapshot,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let route = shell.route.clone();
    let return_to = shell.return_to.clone();
    let sidebar_open = shell.sidebar_open;
    let expanded = if sidebar_open { "true" } else { "false" };
    // Desktop visibility comes from the `lg:` classes, so a phone that never
    // reported its width still gets a hidden sidebar.
    let aside_class = format!(
        "fixed top-0 left-0 h-full w-64 bg-white dark:bg-gray-900 shadow-xl z-40 lg:shadow-md {}",
        if sidebar_open { "block" } else { "hidden lg:block" }
    );

    let nav = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = if item.is_active(&route) {
                "flex items-center space-x-3 px-4 py-3 rounded-lg transition-all bg-primary-500 text-white shadow-lg"
            } else {
                "flex items-center space-x-3 px-4 py-3 rounded-lg transition-all text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-white/10"
            };
            view! {
                <a href=item.path class=class>
                    <Icon kind=item.icon />
                    <span class="font-medium">{item.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-950 dark:via-gray-900 dark:to-gray-950">
            <header class="lg:hidden fixed top-0 left-0 right-0 bg-white dark:bg-gray-900 shadow-md z-50">
                <div class="flex items-center justify-between p-4">
                    <h1 class="text-2xl font-bold text-primary-600">{BRAND}</h1>
                    <div class="flex items-center gap-2">
                        <ThemeToggle shell=shell.clone() />
                        <form method="post" action="/shell/sidebar">
                            <input type="hidden" name="return_to" value=return_to.clone() />
                            <button
                                type="submit"
                                class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-white/10 transition-colors"
                                aria-label="Меню"
                                aria-expanded=expanded
                            >
                                {if sidebar_open {
                                    view! { <Icon kind=IconKind::Close size="h-6 w-6" /> }.into_any()
                                } else {
                                    view! { <Icon kind=IconKind::Menu size="h-6 w-6" /> }.into_any()
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </header>

            <aside id="sidebar" class=aside_class>
                <div class="p-6">
                    <div class="flex items-center justify-between mb-8">
                        <h1 class="text-3xl font-bold text-primary-600">{BRAND}</h1>
                        <div class="hidden lg:block">
                            <ThemeToggle shell=shell.clone() />
                        </div>
                    </div>
                    <nav class="space-y-2">{nav}</nav>
                </div>
            </aside>

            {sidebar_open.then(|| view! {
                <form method="post" action="/shell/sidebar/close" class="lg:hidden">
                    <input type="hidden" name="return_to" value=return_to.clone() />
                    <button
                        type="submit"
                        class="fixed inset-0 w-full h-full bg-black bg-opacity-50 z-30 cursor-default"
                        aria-label="Закрыть меню"
                    ></button>
                </form>
            })}

            <main class="lg:ml-64 pt-20 lg:pt-0 min-h-screen">
                <div class="p-4 lg:p-8">
                    {children()}
                </div>
            </main>
        </div>
    }
}

/// Light/dark switch; submits to `/shell/theme`.
#[component]
pub fn ThemeToggle(
    /// Current shell state.
    shell: ShellSnapshot,
) -> impl IntoView {
    let (icon, label) = if shell.theme.is_dark() {
        (IconKind::Sun, "Светлая тема")
    } else {
        (IconKind::Moon, "Тёмная тема")
    };

    view! {
        <form method="post" action="/shell/theme">
            <input type="hidden" name="return_to" value=shell.return_to />
            <button
                type="submit"
                class="p-2 rounded-lg text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-white/10 transition-colors"
                aria-label=label
                title=label
            >
                <Icon kind=icon />
            </button>
        </form>
    }
}
