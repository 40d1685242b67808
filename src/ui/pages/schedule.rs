//! Weekly schedule.

use std::sync::Arc;

use leptos::prelude::*;

use crate::portal::{Portal, ScheduleEvent, Weekday};
use crate::ui::components::{Badge, Card, CardPadding, Icon, IconKind, PageContainer};

/// Weekly timetable: one card per teaching day, then every event in a list.
#[component]
pub fn SchedulePage(portal: Arc<Portal>) -> impl IntoView {
    let days = Weekday::WEEK
        .iter()
        .map(|&day| {
            let events: Vec<&ScheduleEvent> = portal.events_on(day).collect();
            let body = if events.is_empty() {
                view! {
                    <div class="py-8 text-center">
                        <Icon kind=IconKind::Calendar size="h-11 w-11" class="mx-auto text-gray-300 mb-2" />
                        <p class="text-[15px] text-gray-500">"Нет занятий"</p>
                    </div>
                }
                .into_any()
            } else {
                let items = events
                    .into_iter()
                    .map(|event| view! { <DayEvent event=event.clone() /> })
                    .collect_view();
                view! { <div class="space-y-3">{items}</div> }.into_any()
            };
            view! {
                <Card class="overflow-hidden">
                    <div class="bg-gradient-to-r from-primary-500 to-primary-600 p-4">
                        <h2 class="text-lg font-semibold text-white flex items-center">
                            <Icon kind=IconKind::Calendar size="h-[18px] w-[18px]" class="mr-2" />
                            {day.label()}
                        </h2>
                    </div>
                    <div class="p-4">{body}</div>
                </Card>
            }
        })
        .collect_view();

    let all_events = portal
        .schedule()
        .iter()
        .map(|event| {
            let time = format!("{} - {}", event.start_time, event.end_time);
            let kind = event.kind;
            let course_name = event.course_name.clone();
            let room = event.room.clone();
            view! {
                <div class="flex flex-col md:flex-row md:items-center md:justify-between p-4 rounded-xl border border-gray-200 dark:border-white/10 hover:border-primary-300 transition-all gap-3">
                    <div class="flex-1">
                        <div class="flex items-center space-x-2 mb-1">
                            <h3 class="font-semibold text-gray-900 dark:text-gray-100 text-[15px]">{course_name}</h3>
                            <Badge variant=kind.into()>{kind.label()}</Badge>
                        </div>
                        <p class="text-[13px] text-gray-600 dark:text-gray-400">{event.day.label()}</p>
                    </div>
                    <div class="flex flex-wrap gap-4 text-[13px] text-gray-600 dark:text-gray-400">
                        <div class="flex items-center">
                            <Icon kind=IconKind::Clock size="h-4 w-4" class="mr-2" />
                            <span>{time}</span>
                        </div>
                        <div class="flex items-center">
                            <Icon kind=IconKind::MapPin size="h-4 w-4" class="mr-2" />
                            <span>{room}</span>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageContainer class="space-y-8">
            <Card padding=CardPadding::Lg>
                <h1 class="text-3xl font-semibold text-gray-900 dark:text-gray-100 mb-2 tracking-tight">"Расписание"</h1>
                <p class="text-[15px] text-gray-600 dark:text-gray-400">"Ваше еженедельное расписание занятий"</p>
            </Card>

            <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-6">{days}</div>

            <Card padding=CardPadding::Md>
                <h2 class="text-2xl font-semibold text-gray-900 dark:text-gray-100 mb-6 tracking-tight">"Все занятия"</h2>
                <div class="space-y-3">{all_events}</div>
            </Card>
        </PageContainer>
    }
}

#[component]
fn DayEvent(event: ScheduleEvent) -> impl IntoView {
    let time = format!("{} - {}", event.start_time, event.end_time);
    view! {
        <div class="p-3.5 rounded-xl border border-gray-200 dark:border-white/10 hover:border-primary-300 transition-all">
            <div class="flex items-start justify-between mb-2">
                <h3 class="font-semibold text-gray-900 dark:text-gray-100 flex-1 text-[15px]">{event.course_name}</h3>
                <Badge variant=event.kind.into()>{event.kind.label()}</Badge>
            </div>
            <div class="space-y-1 text-[13px] text-gray-600 dark:text-gray-400">
                <div class="flex items-center">
                    <Icon kind=IconKind::Clock size="h-3 w-3" class="mr-2" />
                    <span>{time}</span>
                </div>
                <div class="flex items-center">
                    <Icon kind=IconKind::MapPin size="h-3 w-3" class="mr-2" />
                    <span>{event.room}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_weekday_has_a_card() {
        let portal = Arc::new(Portal::fixtures());
        let html = view! { <SchedulePage portal=portal.clone() /> }.to_html();
        for day in Weekday::WEEK {
            assert!(html.contains(day.label()));
            if portal.events_on(day).next().is_none() {
                assert!(html.contains("Нет занятий"));
            }
        }
        assert!(html.contains("Все занятия"));
    }

    #[test]
    fn test_empty_schedule_shows_placeholder_per_day() {
        let mut value = serde_json::to_value(Portal::fixtures()).unwrap();
        value["schedule"] = serde_json::json!([]);
        let portal: Portal = serde_json::from_value(value).unwrap();
        let html = view! { <SchedulePage portal=Arc::new(portal) /> }.to_html();
        assert_eq!(html.matches("Нет занятий").count(), Weekday::WEEK.len());
    }
}
