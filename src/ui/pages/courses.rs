//! Course list.

use std::sync::Arc;

use leptos::prelude::*;

use crate::portal::Portal;
use crate::ui::components::{Card, CardPadding, Icon, IconKind, PageContainer, ProgressBar};

/// Grid of all enrolled courses.
#[component]
pub fn CoursesPage(portal: Arc<Portal>) -> impl IntoView {
    let total = format!("Всего курсов: {}", portal.courses().len());

    let cards = portal
        .courses()
        .iter()
        .map(|course| {
            let href = format!("/courses/{}", course.id);
            let banner = format!(
                "background: linear-gradient(135deg, {0} 0%, {0}dd 100%)",
                course.color
            );
            let progress = format!("{}%", course.progress);
            view! {
                <a
                    href=href
                    class="block bg-white dark:bg-gray-900 rounded-2xl shadow-lg hover:shadow-xl transition-all overflow-hidden group"
                >
                    <div class="h-32 p-6 flex items-center justify-center text-white" style=banner>
                        <Icon kind=IconKind::BookOpen size="h-12 w-12" />
                    </div>
                    <div class="p-6">
                        <div class="flex items-center justify-between mb-2">
                            <h2 class="text-xl font-bold text-gray-800 dark:text-gray-100">{course.name.clone()}</h2>
                            <span class="text-sm font-medium text-gray-500 bg-gray-100 dark:bg-white/10 px-3 py-1 rounded-full">
                                {course.code.clone()}
                            </span>
                        </div>
                        <p class="text-gray-600 dark:text-gray-400 mb-4 line-clamp-2">{course.description.clone()}</p>
                        <div class="space-y-3">
                            <div class="flex items-center text-sm text-gray-600 dark:text-gray-400">
                                <Icon kind=IconKind::User size="h-4 w-4" class="mr-2" />
                                {course.instructor.clone()}
                            </div>
                            <div class="flex items-center text-sm text-gray-600 dark:text-gray-400">
                                <Icon kind=IconKind::Clock size="h-4 w-4" class="mr-2" />
                                {course.schedule.clone()}
                            </div>
                            <div>
                                <div class="flex justify-between text-sm mb-1">
                                    <span class="text-gray-600 dark:text-gray-400">"Прогресс"</span>
                                    <span class="font-medium text-gray-800 dark:text-gray-100">{progress}</span>
                                </div>
                                <ProgressBar percent=f64::from(course.progress) color=course.color.clone() />
                            </div>
                        </div>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <PageContainer>
            <Card padding=CardPadding::Md>
                <h1 class="text-3xl font-bold text-gray-800 dark:text-gray-100">"Мои курсы"</h1>
                <p class="text-gray-600 dark:text-gray-400 mt-2">{total}</p>
            </Card>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">{cards}</div>
        </PageContainer>
    }
}
