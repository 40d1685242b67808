//! Assignment list with status filter tabs.
//!
//! Tabs are links carrying `?status=`; the server parses the query into a
//! [`StatusFilter`].

use std::sync::Arc;

use leptos::prelude::*;

use crate::portal::stats::{self, StatusFilter};
use crate::portal::{AssignmentStatus, Portal, dates};
use crate::ui::components::{
    Badge, Button, ButtonSize, Card, CardPadding, Icon, IconKind, PageContainer,
};

/// Link target for a filter tab.
#[must_use]
pub fn filter_href(filter: StatusFilter) -> String {
    match filter {
        StatusFilter::All => "/assignments".to_string(),
        other => format!("/assignments?status={}", other.as_str()),
    }
}

#[component]
pub fn AssignmentsPage(
    /// Portal data.
    portal: Arc<Portal>,
    /// Selected tab.
    #[prop(default = StatusFilter::All)]
    filter: StatusFilter,
) -> impl IntoView {
    let tabs = StatusFilter::TABS
        .iter()
        .map(|&tab| {
            let selected = tab == filter;
            let class = if selected {
                "px-4 py-2 rounded-lg font-medium transition-all bg-primary-500 text-white shadow-md"
            } else {
                "px-4 py-2 rounded-lg font-medium transition-all bg-gray-100 dark:bg-white/10 text-gray-700 dark:text-gray-300 hover:bg-gray-200"
            };
            let current = selected.then_some("page");
            view! {
                <a href=filter_href(tab) class=class aria-current=current>{tab.label()}</a>
            }
        })
        .collect_view();

    let visible = stats::filter_by_status(portal.assignments(), filter);
    let list = if visible.is_empty() {
        view! {
            <Card padding=CardPadding::Lg class="p-12 text-center">
                <Icon kind=IconKind::FileText size="h-16 w-16" class="mx-auto text-gray-300 mb-4" />
                <h3 class="text-xl font-semibold text-gray-800 dark:text-gray-100 mb-2">"Нет заданий"</h3>
                <p class="text-gray-600 dark:text-gray-400">"В этой категории пока нет заданий"</p>
            </Card>
        }
        .into_any()
    } else {
        visible
            .into_iter()
            .map(|assignment| {
                let status = assignment.status;
                let title = assignment.title.clone();
                let course_name = assignment.course_name.clone();
                let description = assignment.description.clone();
                let due = format!("Срок: {}", dates::long(assignment.due_date));
                let grade = assignment.grade.map(|g| {
                    view! {
                        <div class="flex items-center font-semibold text-green-600">
                            {format!("Оценка: {g}/100")}
                        </div>
                    }
                });
                let pending = status == AssignmentStatus::Pending;
                view! {
                    <Card hover=true class="overflow-hidden">
                        <div class="p-6" data-status=status.as_str()>
                            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4">
                                <div class="flex-1">
                                    <div class="flex items-start space-x-3 mb-3">
                                        <Icon kind=IconKind::FileText size="h-6 w-6" class="text-primary-600 mt-1" />
                                        <div>
                                            <h3 class="text-xl font-bold text-gray-800 dark:text-gray-100">{title}</h3>
                                            <p class="text-primary-600 font-medium">{course_name}</p>
                                        </div>
                                    </div>
                                    <p class="text-gray-600 dark:text-gray-400 mb-4">{description}</p>
                                    <div class="flex flex-wrap gap-4 text-sm">
                                        <div class="flex items-center text-gray-600 dark:text-gray-400">
                                            <Icon kind=IconKind::Calendar size="h-4 w-4" class="mr-2" />
                                            <span>{due}</span>
                                        </div>
                                        {grade}
                                    </div>
                                </div>
                                <div class="flex flex-col items-end space-y-3">
                                    <Badge variant=status.into() class="px-4 py-2 border-2 text-sm">
                                        {status.label()}
                                    </Badge>
                                    {pending.then(|| view! {
                                        <Button size=ButtonSize::Md left_icon=IconKind::Upload>"Сдать работу"</Button>
                                    })}
                                </div>
                            </div>
                        </div>
                    </Card>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <PageContainer>
            <Card padding=CardPadding::Md>
                <h1 class="text-3xl font-bold text-gray-800 dark:text-gray-100 mb-4">"Задания"</h1>
                <nav class="flex flex-wrap gap-2">{tabs}</nav>
            </Card>
            <div class="space-y-4">{list}</div>
        </PageContainer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(filter: StatusFilter) -> String {
        let portal = Arc::new(Portal::fixtures());
        view! { <AssignmentsPage portal=portal filter=filter /> }.to_html()
    }

    #[test]
    fn test_filter_href() {
        assert_eq!(filter_href(StatusFilter::All), "/assignments");
        assert_eq!(
            filter_href(StatusFilter::Only(AssignmentStatus::Graded)),
            "/assignments?status=graded"
        );
    }

    #[test]
    fn test_pending_filter_shows_only_pending() {
        let html = render(StatusFilter::Only(AssignmentStatus::Pending));
        assert!(html.contains("data-status=\"pending\""));
        assert!(!html.contains("data-status=\"graded\""));
        assert!(!html.contains("data-status=\"submitted\""));
        assert!(html.contains("Сдать работу"));
    }

    #[test]
    fn test_graded_filter_shows_grade() {
        let html = render(StatusFilter::Only(AssignmentStatus::Graded));
        assert!(html.contains("Оценка: 87/100"));
        assert!(!html.contains("data-status=\"pending\""));
        assert!(!html.contains("Сдать работу"));
    }

    #[test]
    fn test_all_filter_marks_tab_current() {
        let html = render(StatusFilter::All);
        assert!(html.contains("aria-current=\"page\""));
        assert!(html.contains("data-status=\"submitted\""));
    }
}
