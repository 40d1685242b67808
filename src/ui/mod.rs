//! Server-rendered UI.
//!
//! Leptos SSR components rendered to HTML strings by the Axum handlers.
//!
//! # Structure
//!
//! - [`components`]: Reusable presentational primitives
//! - [`layout`]: Navigation shell around every page
//! - [`pages`]: One component per route

pub mod components;
pub mod layout;
pub mod pages;

use std::sync::Arc;

use leptos::prelude::*;

use crate::portal::Portal;
use crate::shell::ShellSnapshot;
use layout::{BRAND, Layout};
use pages::{
    AssignmentsPage, CourseDetailPage, CoursesPage, DashboardPage, GradesPage, NotFoundPage, Page,
    ProfilePage, SchedulePage,
};

/// Render a full HTML document for `page`.
#[must_use]
pub fn render_document(portal: Arc<Portal>, shell: ShellSnapshot, page: Page) -> String {
    view! { <Document portal=portal shell=shell page=page /> }.to_html()
}

/// `<html>` root: head assets, theme class and the layout shell.
#[component]
fn Document(portal: Arc<Portal>, shell: ShellSnapshot, page: Page) -> impl IntoView {
    let title = format!("{} · {}", page.title(), BRAND);
    let theme = shell.theme.as_str();
    let breakpoint = shell.breakpoint_px.to_string();
    let desktop = if shell.desktop { "true" } else { "false" };

    view! {
        <!DOCTYPE html>
        <html lang="ru" class=theme>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="color-scheme" content="light dark" />
                <title>{title}</title>
                <link rel="stylesheet" href="/static/app.css" />
                <script
                    defer
                    src="/static/shell.js"
                    data-breakpoint=breakpoint
                    data-desktop=desktop
                ></script>
            </head>
            <body class="antialiased text-gray-900 dark:text-gray-100">
                <Layout shell=shell>
                    {page_view(portal, page)}
                </Layout>
            </body>
        </html>
    }
}

fn page_view(portal: Arc<Portal>, page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <DashboardPage portal=portal /> }.into_any(),
        Page::Courses => view! { <CoursesPage portal=portal /> }.into_any(),
        Page::CourseDetail(id) => view! { <CourseDetailPage portal=portal id=id /> }.into_any(),
        Page::Assignments(filter) => {
            view! { <AssignmentsPage portal=portal filter=filter /> }.into_any()
        }
        Page::Grades => view! { <GradesPage portal=portal /> }.into_any(),
        Page::Schedule => view! { <SchedulePage portal=portal /> }.into_any(),
        Page::Profile => view! { <ProfilePage portal=portal /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Theme;

    fn shell(route: &str, theme: Theme) -> ShellSnapshot {
        ShellSnapshot {
            route: route.to_string(),
            return_to: route.to_string(),
            theme,
            ..ShellSnapshot::default()
        }
    }

    #[test]
    fn test_document_carries_theme_and_title() {
        let portal = Arc::new(Portal::fixtures());
        let html = render_document(portal, shell("/grades", Theme::Dark), Page::Grades);
        assert!(html.to_lowercase().starts_with("<!doctype html>"));
        assert!(html.contains("class=\"dark\""));
        assert!(html.contains("Оценки · Rautine"));
        assert!(html.contains("/static/shell.js"));
    }

    #[test]
    fn test_not_found_document() {
        let portal = Arc::new(Portal::fixtures());
        let html = render_document(portal, shell("/404", Theme::Light), Page::NotFound);
        assert!(html.contains("Страница не найдена"));
        assert!(html.contains("class=\"light\""));
    }
}
