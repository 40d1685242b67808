//! Single course: header, materials outline, progress and assignments.

use std::sync::Arc;

use leptos::prelude::*;

use crate::portal::{Assignment, Course, LessonKind, Portal, dates};
use crate::ui::components::{Badge, Card, CardPadding, Icon, IconKind, PageContainer, ProgressBar};

/// Downloadable resources listed for every course.
const RESOURCES: [&str; 2] = ["Программа курса", "Дополнительные материалы"];

/// Course page, or the not-found state when `id` is not in the portal.
#[component]
pub fn CourseDetailPage(
    /// Portal data.
    portal: Arc<Portal>,
    /// Course id from the path.
    id: String,
) -> impl IntoView {
    match portal.course(&id) {
        Some(course) => view! { <CourseDetail portal=portal.clone() course=course.clone() /> }.into_any(),
        None => view! { <CourseNotFound /> }.into_any(),
    }
}

#[component]
fn CourseNotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-96">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-2">"Курс не найден"</h2>
                <a href="/courses" class="text-primary-600 hover:text-primary-700">"Вернуться к курсам"</a>
            </div>
        </div>
    }
}

#[component]
fn CourseDetail(portal: Arc<Portal>, course: Course) -> impl IntoView {
    let banner = format!(
        "background: linear-gradient(135deg, {0} 0%, {0}dd 100%)",
        course.color
    );
    let progress = format!("{}%", course.progress);
    let progress_total = progress.clone();
    let encouragement = if course.is_completed() {
        "Курс завершен!"
    } else {
        "Продолжайте в том же духе!"
    };

    let modules = portal
        .syllabus()
        .iter()
        .map(|module| {
            let heading = format!("Модуль {}: {}", module.id, module.title);
            let lessons = module
                .lessons
                .iter()
                .map(|lesson| {
                    let icon = match lesson.kind {
                        LessonKind::Video => IconKind::Video,
                        LessonKind::Document => IconKind::FileText,
                    };
                    let duration = format!("{} мин", lesson.duration_minutes);
                    view! {
                        <button
                            type="button"
                            class="w-full px-4 py-3 flex items-center justify-between hover:bg-gray-50 dark:hover:bg-white/5 transition-colors text-left"
                        >
                            <div class="flex items-center space-x-3">
                                <Icon kind=icon class="text-primary-600" />
                                <span class="text-gray-800 dark:text-gray-100">{lesson.title.clone()}</span>
                            </div>
                            <span class="text-sm text-gray-500">{duration}</span>
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class="border border-gray-200 dark:border-white/10 rounded-xl overflow-hidden">
                    <div class="bg-gray-50 dark:bg-white/5 px-4 py-3 border-b border-gray-200 dark:border-white/10">
                        <h3 class="font-semibold text-gray-800 dark:text-gray-100">{heading}</h3>
                    </div>
                    <div class="divide-y divide-gray-200 dark:divide-white/10">{lessons}</div>
                </div>
            }
        })
        .collect_view();

    let assignments: Vec<Assignment> = portal.assignments_for(&course.id).cloned().collect();
    let assignment_list = if assignments.is_empty() {
        view! { <p class="text-gray-600 dark:text-gray-400 text-sm">"Нет заданий"</p> }.into_any()
    } else {
        let items = assignments
            .into_iter()
            .map(|assignment| {
                let status = assignment.status;
                view! {
                    <div class="p-3 rounded-lg border border-gray-200 dark:border-white/10 hover:border-primary-300 transition-colors">
                        <h4 class="font-semibold text-gray-800 dark:text-gray-100 text-sm mb-1">{assignment.title}</h4>
                        <div class="flex items-center justify-between text-xs">
                            <Badge variant=status.into()>{status.label()}</Badge>
                            <span class="text-gray-500">{dates::short(assignment.due_date)}</span>
                        </div>
                    </div>
                }
            })
            .collect_view();
        view! { <div class="space-y-3">{items}</div> }.into_any()
    };

    let resources = RESOURCES
        .iter()
        .map(|title| {
            view! {
                <button
                    type="button"
                    class="w-full flex items-center space-x-3 p-3 rounded-lg hover:bg-gray-50 dark:hover:bg-white/5 transition-colors text-left"
                >
                    <Icon kind=IconKind::Download class="text-primary-600" />
                    <span class="text-gray-800 dark:text-gray-100">{*title}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <PageContainer>
            <Card class="overflow-hidden">
                <div class="h-40 p-6 flex flex-col justify-between text-white" style=banner>
                    <a href="/courses" class="inline-flex items-center text-white hover:text-gray-100 transition-colors w-fit">
                        <Icon kind=IconKind::ArrowLeft class="mr-2" />
                        "Назад к курсам"
                    </a>
                    <div>
                        <h1 class="text-3xl font-bold">{course.name.clone()}</h1>
                        <p class="text-white/90 mt-1">{course.code.clone()}</p>
                    </div>
                </div>
                <div class="p-6">
                    <p class="text-gray-700 dark:text-gray-300 mb-4">{course.description.clone()}</p>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <InfoTile label="Преподаватель" value=course.instructor.clone() />
                        <InfoTile label="Расписание" value=course.schedule.clone() />
                        <InfoTile label="Прогресс" value=progress />
                    </div>
                </div>
            </Card>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <Card padding=CardPadding::Md class="lg:col-span-2">
                    <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-4">"Материалы курса"</h2>
                    <div class="space-y-4">{modules}</div>
                </Card>

                <div class="space-y-6">
                    <Card padding=CardPadding::Md>
                        <h3 class="font-bold text-gray-800 dark:text-gray-100 mb-4">"Ваш прогресс"</h3>
                        <div class="mb-4">
                            <ProgressBar percent=f64::from(course.progress) color=course.color.clone() height="h-3" />
                            <p class="text-center text-2xl font-bold text-gray-800 dark:text-gray-100 mt-2">{progress_total}</p>
                        </div>
                        <p class="text-sm text-gray-600 dark:text-gray-400 text-center">{encouragement}</p>
                    </Card>

                    <Card padding=CardPadding::Md>
                        <h3 class="font-bold text-gray-800 dark:text-gray-100 mb-4">"Задания"</h3>
                        {assignment_list}
                    </Card>

                    <Card padding=CardPadding::Md>
                        <h3 class="font-bold text-gray-800 dark:text-gray-100 mb-4">"Ресурсы"</h3>
                        <div class="space-y-2">{resources}</div>
                    </Card>
                </div>
            </div>
        </PageContainer>
    }
}

#[component]
fn InfoTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-50 dark:bg-white/5 rounded-lg p-4">
            <p class="text-sm text-gray-600 dark:text-gray-400 mb-1">{label}</p>
            <p class="font-semibold text-gray-800 dark:text-gray-100">{value}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(id: &str) -> String {
        let portal = Arc::new(Portal::fixtures());
        view! { <CourseDetailPage portal=portal id=id.to_string() /> }.to_html()
    }

    #[test]
    fn test_unknown_course_renders_not_found() {
        let html = render("999");
        assert!(html.contains("Курс не найден"));
        assert!(html.contains("href=\"/courses\""));
        assert!(!html.contains("Материалы курса"));
    }

    #[test]
    fn test_completed_course_message() {
        let portal = Portal::fixtures();
        let completed = portal
            .courses()
            .iter()
            .find(|c| c.is_completed())
            .map(|c| c.id.clone())
            .unwrap();
        let html = render(&completed);
        assert!(html.contains("Курс завершен!"));
        assert!(html.contains("Модуль 1: "));
    }

    #[test]
    fn test_in_progress_course_lists_its_assignments() {
        let portal = Portal::fixtures();
        let course = &portal.courses()[0];
        let html = render(&course.id);
        assert!(html.contains(&course.name));
        assert!(html.contains("Продолжайте в том же духе!"));
        for assignment in portal.assignments_for(&course.id) {
            assert!(html.contains(&assignment.title));
        }
    }
}
