//! Student profile with course counters, achievements and settings.

use std::sync::Arc;

use leptos::prelude::*;

use crate::portal::{Portal, stats};
use crate::ui::components::{
    Button, ButtonVariant, Card, CardPadding, Icon, IconKind, PageContainer, StatCard,
    StatGradient,
};

/// Courses listed under "current courses".
const CURRENT_COURSES_LIMIT: usize = 4;

/// (title, description, tint classes, icon color)
const ACHIEVEMENTS: [(&str, &str, &str, &str); 3] = [
    (
        "Отличник",
        "GPA выше 4.0",
        "from-yellow-100 to-yellow-50 border-yellow-200",
        "text-yellow-600",
    ),
    (
        "Активный студент",
        "Все задания сданы вовремя",
        "from-blue-100 to-blue-50 border-blue-200",
        "text-blue-600",
    ),
    (
        "Быстрый старт",
        "Завершен первый курс",
        "from-green-100 to-green-50 border-green-200",
        "text-green-600",
    ),
];

const SETTINGS: [&str; 3] = ["Изменить пароль", "Уведомления", "Конфиденциальность"];

/// Student card, course counters, achievements and settings.
#[component]
pub fn ProfilePage(portal: Arc<Portal>) -> impl IntoView {
    let student = portal.student().clone();
    let courses = portal.courses();
    let year = format!("{} курс", student.year);
    let gpa = student.gpa.to_string();
    let total = courses.len().to_string();
    let completed = stats::completed_courses(courses).to_string();
    let in_progress = stats::in_progress_courses(courses).to_string();

    let current = courses
        .iter()
        .take(CURRENT_COURSES_LIMIT)
        .map(|course| {
            let dot = format!("background-color: {}", course.color);
            let name = course.name.clone();
            let code = course.code.clone();
            let progress = format!("{}%", course.progress);
            view! {
                <div class="flex items-center justify-between p-3 rounded-lg border border-gray-200 dark:border-white/10 hover:border-primary-300 transition-colors">
                    <div class="flex items-center space-x-3">
                        <div class="w-3 h-3 rounded-full" style=dot></div>
                        <div>
                            <p class="font-medium text-gray-800 dark:text-gray-100">{name}</p>
                            <p class="text-sm text-gray-600 dark:text-gray-400">{code}</p>
                        </div>
                    </div>
                    <span class="text-sm font-semibold text-gray-700 dark:text-gray-300">{progress}</span>
                </div>
            }
        })
        .collect_view();

    let achievements = ACHIEVEMENTS
        .iter()
        .map(|&(title, description, tint, icon_color)| {
            let class = format!("p-4 rounded-lg bg-gradient-to-r border {tint}");
            view! {
                <div class=class>
                    <div class="flex items-center space-x-3">
                        <Icon kind=IconKind::Award size="h-6 w-6" class=icon_color />
                        <div>
                            <p class="font-semibold text-gray-800">{title}</p>
                            <p class="text-sm text-gray-600">{description}</p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let settings = SETTINGS
        .iter()
        .map(|&label| {
            view! {
                <Button variant=ButtonVariant::Secondary class="w-full md:w-auto">{label}</Button>
            }
        })
        .collect_view();

    view! {
        <PageContainer>
            <Card class="overflow-hidden">
                <div class="h-32 bg-gradient-to-r from-primary-500 to-primary-600"></div>
                <div class="px-6 pb-6">
                    <div class="flex flex-col md:flex-row md:items-end md:justify-between -mt-16 mb-4">
                        <div class="flex items-end space-x-4">
                            <div class="w-32 h-32 bg-white rounded-2xl shadow-lg flex items-center justify-center border-4 border-white">
                                <Icon kind=IconKind::User size="h-16 w-16" class="text-primary-600" />
                            </div>
                            <div class="pb-2">
                                <h1 class="text-3xl font-bold text-gray-800 dark:text-gray-100">{student.name.clone()}</h1>
                                <p class="text-gray-600 dark:text-gray-400">{student.student_id.clone()}</p>
                            </div>
                        </div>
                        <Button left_icon=IconKind::Edit class="mt-4 md:mt-0 md:mb-2">"Редактировать профиль"</Button>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <ProfileField icon=IconKind::Mail label="Email" value=student.email.clone() />
                        <ProfileField icon=IconKind::BookOpen label="Программа" value=student.program.clone() />
                        <ProfileField icon=IconKind::Calendar label="Год обучения" value=year />
                    </div>
                </div>
            </Card>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard value=gpa label="GPA" icon=IconKind::Award gradient=StatGradient::Blue />
                <StatCard value=total label="Всего курсов" icon=IconKind::BookOpen gradient=StatGradient::Green />
                <StatCard
                    value=completed
                    label="Завершено"
                    icon=IconKind::BookOpen
                    gradient=StatGradient::Purple
                />
                <StatCard
                    value=in_progress
                    label="В процессе"
                    icon=IconKind::BookOpen
                    gradient=StatGradient::Orange
                />
            </div>

            <Card padding=CardPadding::Md>
                <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-6">"Академическая информация"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <h3 class="font-semibold text-gray-800 dark:text-gray-100 mb-3">"Текущие курсы"</h3>
                        <div class="space-y-2">{current}</div>
                    </div>
                    <div>
                        <h3 class="font-semibold text-gray-800 dark:text-gray-100 mb-3">"Достижения"</h3>
                        <div class="space-y-3">{achievements}</div>
                    </div>
                </div>
            </Card>

            <Card padding=CardPadding::Md>
                <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-6">"Настройки"</h2>
                <div class="flex flex-col md:flex-row gap-3">{settings}</div>
            </Card>
        </PageContainer>
    }
}

#[component]
fn ProfileField(icon: IconKind, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-50 dark:bg-white/5 rounded-lg p-4">
            <div class="flex items-center text-gray-600 dark:text-gray-400 mb-1">
                <Icon kind=icon size="h-[18px] w-[18px]" class="mr-2" />
                <span class="text-sm">{label}</span>
            </div>
            <p class="font-semibold text-gray-800 dark:text-gray-100">{value}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_shows_student_and_counters() {
        let portal = Arc::new(Portal::fixtures());
        let html = view! { <ProfilePage portal=portal.clone() /> }.to_html();
        let student = portal.student();
        assert!(html.contains(&student.name));
        assert!(html.contains(&student.email));
        assert!(html.contains(&format!("{} курс", student.year)));
        assert!(html.contains("Завершено"));
        assert!(html.contains("Конфиденциальность"));
    }
}
