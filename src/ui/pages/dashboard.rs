//! Home page: greeting, headline numbers, recent courses and deadlines.

use std::sync::Arc;

use leptos::prelude::*;

use super::format_percent;
use crate::portal::{Portal, dates, stats};
use crate::ui::components::{
    Card, CardPadding, IconKind, PageContainer, ProgressBar, StatCard, StatGradient,
};

/// Courses and deadlines previewed on the dashboard.
const PREVIEW_LIMIT: usize = 3;

#[component]
pub fn DashboardPage(
    /// Portal data.
    portal: Arc<Portal>,
) -> impl IntoView {
    let student = portal.student();
    let greeting = format!("Добро пожаловать, {}!", student.name);
    let summary = format!(
        "{} · Курс {} · GPA: {}",
        student.program, student.year, student.gpa
    );

    let counts = stats::status_counts(portal.assignments());
    let upcoming = stats::upcoming_deadlines(portal.assignments(), PREVIEW_LIMIT);
    let average = format_percent(stats::average_progress(portal.courses()), 0);
    let upcoming_count = upcoming.len().to_string();

    let recent_courses = portal
        .courses()
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|course| {
            let href = format!("/courses/{}", course.id);
            let dot = format!("background-color: {}", course.color);
            let done = format!("{}% завершено", course.progress);
            view! {
                <a
                    href=href
                    class="block p-4 rounded-xl border-2 border-gray-100 dark:border-white/10 hover:border-primary-300 hover:shadow-md transition-all"
                >
                    <div class="flex items-center space-x-3 mb-2">
                        <div class="w-3 h-3 rounded-full" style=dot></div>
                        <h3 class="font-semibold text-gray-800 dark:text-gray-100">{course.name.clone()}</h3>
                    </div>
                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-2">{course.code.clone()}</p>
                    <ProgressBar percent=f64::from(course.progress) />
                    <p class="text-xs text-gray-500 mt-1">{done}</p>
                </a>
            }
        })
        .collect_view();

    let deadlines = upcoming
        .iter()
        .map(|assignment| {
            view! {
                <div class="p-4 rounded-xl border-2 border-gray-100 dark:border-white/10 hover:border-orange-300 hover:shadow-md transition-all">
                    <h3 class="font-semibold text-gray-800 dark:text-gray-100 mb-1">{assignment.title.clone()}</h3>
                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-2">{assignment.course_name.clone()}</p>
                    <div class="flex items-center justify-between text-sm">
                        <span class="text-gray-500">"Срок сдачи:"</span>
                        <span class="text-orange-600 font-medium">{dates::short(assignment.due_date)}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageContainer>
            <Card padding=CardPadding::Lg>
                <h1 class="text-3xl font-bold text-gray-800 dark:text-gray-100 mb-2">{greeting}</h1>
                <p class="text-gray-600 dark:text-gray-400">{summary}</p>
            </Card>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard
                    value=portal.courses().len().to_string()
                    label="Активных курсов"
                    icon=IconKind::BookOpen
                    gradient=StatGradient::Blue
                />
                <StatCard
                    value=counts.pending.to_string()
                    label="Текущих заданий"
                    icon=IconKind::FileText
                    gradient=StatGradient::Purple
                />
                <StatCard
                    value=average
                    label="Средний прогресс"
                    icon=IconKind::BarChart
                    gradient=StatGradient::Green
                />
                <StatCard
                    value=upcoming_count
                    label="Предстоящие дедлайны"
                    icon=IconKind::Clock
                    gradient=StatGradient::Orange
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Card padding=CardPadding::Lg>
                    <div class="flex justify-between items-center mb-4">
                        <h2 class="text-xl font-bold text-gray-800 dark:text-gray-100">"Мои курсы"</h2>
                        <a href="/courses" class="text-primary-600 hover:text-primary-700 font-medium">
                            "Все курсы →"
                        </a>
                    </div>
                    <div class="space-y-4">{recent_courses}</div>
                </Card>

                <Card padding=CardPadding::Lg>
                    <div class="flex justify-between items-center mb-4">
                        <h2 class="text-xl font-bold text-gray-800 dark:text-gray-100">"Предстоящие задания"</h2>
                        <a href="/assignments" class="text-primary-600 hover:text-primary-700 font-medium">
                            "Все задания →"
                        </a>
                    </div>
                    <div class="space-y-4">{deadlines}</div>
                </Card>
            </div>
        </PageContainer>
    }
}
