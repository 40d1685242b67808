//! Route pages.
//!
//! Each page reads from the shared [`Portal`](crate::portal::Portal) and
//! renders inside the [`Layout`](crate::ui::layout::Layout).

mod assignments;
mod course_detail;
mod courses;
mod dashboard;
mod grades;
mod not_found;
mod profile;
mod schedule;

pub use assignments::AssignmentsPage;
pub use course_detail::CourseDetailPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use grades::GradesPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use schedule::SchedulePage;

use crate::portal::stats::StatusFilter;

/// A routed page and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Courses,
    CourseDetail(String),
    Assignments(StatusFilter),
    Grades,
    Schedule,
    Profile,
    NotFound,
}

impl Page {
    /// Document title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Главная",
            Self::Courses => "Мои курсы",
            Self::CourseDetail(_) => "Курс",
            Self::Assignments(_) => "Задания",
            Self::Grades => "Оценки",
            Self::Schedule => "Расписание",
            Self::Profile => "Профиль",
            Self::NotFound => "Страница не найдена",
        }
    }

    /// Path recorded by the shell for this page, without query string.
    #[must_use]
    pub fn route(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Courses => "/courses".to_string(),
            Self::CourseDetail(id) => format!("/courses/{id}"),
            Self::Assignments(_) => "/assignments".to_string(),
            Self::Grades => "/grades".to_string(),
            Self::Schedule => "/schedule".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Route plus the query that selected this page, for redirects back to it.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Assignments(filter) => assignments::filter_href(*filter),
            other => other.route(),
        }
    }
}

/// Percentage with the given number of decimals, or a dash when absent.
#[must_use]
pub fn format_percent(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}%"),
        None => "—".to_string(),
    }
}

/// Russian plural form for a count: `one` (1, 21), `few` (2-4, 22-24) or `many`.
#[must_use]
pub fn plural<'a>(n: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let rem100 = n % 100;
    let rem10 = n % 10;
    if (11..=14).contains(&rem100) {
        many
    } else if rem10 == 1 {
        one
    } else if (2..=4).contains(&rem10) {
        few
    } else {
        many
    }
}
