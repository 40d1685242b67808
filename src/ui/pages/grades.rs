//! Grades overview: overall average, per-course averages and recent scores.

use std::sync::Arc;

use leptos::prelude::*;

use super::{format_percent, plural};
use crate::portal::stats::{self, GradeBand};
use crate::portal::{Portal, dates};
use crate::ui::components::{
    Card, CardPadding, IconKind, PageContainer, ProgressBar, StatCard, StatGradient,
};

/// Overall average, per-course averages and the list of recent grades.
#[component]
pub fn GradesPage(portal: Arc<Portal>) -> impl IntoView {
    let average = format_percent(stats::average_grade_percentage(portal.grades()), 1);
    let total = portal.grades().len().to_string();

    let per_course = stats::course_grade_summaries(portal.courses(), portal.grades())
        .into_iter()
        .map(|summary| {
            let course = summary.course;
            let dot = format!("background-color: {}", course.color);
            let count = format!(
                "{} {}",
                summary.count,
                plural(summary.count, "оценка", "оценки", "оценок")
            );
            let bar = summary.average.map(|avg| {
                view! { <ProgressBar percent=avg color=course.color.clone() /> }
            });
            view! {
                <div class="border-b border-gray-200 dark:border-white/10 last:border-b-0 pb-6 last:pb-0">
                    <div class="flex items-center justify-between mb-3">
                        <div class="flex items-center space-x-3">
                            <div class="w-4 h-4 rounded-full" style=dot></div>
                            <div>
                                <h3 class="font-semibold text-gray-800 dark:text-gray-100">{course.name.clone()}</h3>
                                <p class="text-sm text-gray-600 dark:text-gray-400">{course.code.clone()}</p>
                            </div>
                        </div>
                        <div class="text-right">
                            <p class="text-2xl font-bold text-gray-800 dark:text-gray-100">{format_percent(summary.average, 1)}</p>
                            <p class="text-sm text-gray-600 dark:text-gray-400">{count}</p>
                        </div>
                    </div>
                    {bar}
                </div>
            }
        })
        .collect_view();

    let recent = portal
        .grades()
        .iter()
        .map(|grade| {
            let percent = stats::grade_percentage(grade);
            let band_class = format!(
                "text-sm font-semibold {}",
                GradeBand::from_percentage(percent).text_class()
            );
            let max = format!("/{}", grade.max_grade);
            view! {
                <div class="flex items-center justify-between p-4 rounded-xl border-2 border-gray-100 dark:border-white/10 hover:border-primary-300 hover:shadow-md transition-all">
                    <div class="flex-1">
                        <h3 class="font-semibold text-gray-800 dark:text-gray-100">{grade.assignment_name.clone()}</h3>
                        <p class="text-sm text-gray-600 dark:text-gray-400">{grade.course_name.clone()}</p>
                        <p class="text-xs text-gray-500 mt-1">{dates::long(grade.date)}</p>
                    </div>
                    <div class="text-right">
                        <div class="text-3xl font-bold text-gray-800 dark:text-gray-100">
                            {grade.grade.to_string()}
                            <span class="text-lg text-gray-500">{max}</span>
                        </div>
                        <div class=band_class>{format!("{percent:.0}%")}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageContainer>
            <Card padding=CardPadding::Md>
                <h1 class="text-3xl font-bold text-gray-800 dark:text-gray-100 mb-2">"Оценки"</h1>
                <p class="text-gray-600 dark:text-gray-400">"Ваши академические результаты"</p>
            </Card>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <StatCard
                    value=average
                    label="Средний балл"
                    icon=IconKind::BarChart
                    gradient=StatGradient::Green
                />
                <StatCard
                    value=total
                    label="Всего оценок"
                    icon=IconKind::TrendingUp
                    gradient=StatGradient::Blue
                />
            </div>

            <Card padding=CardPadding::Md>
                <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-6">"Оценки по курсам"</h2>
                <div class="space-y-6">{per_course}</div>
            </Card>

            <Card padding=CardPadding::Md>
                <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-6">"Последние оценки"</h2>
                <div class="space-y-4">{recent}</div>
            </Card>
        </PageContainer>
    }
}
