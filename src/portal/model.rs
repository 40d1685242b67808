//! Portal entities.
//!
//! Every record is created once when the [`Portal`](super::Portal) is loaded
//! and is read-only afterwards. Field names serialize in camelCase
//! (`courseId`, `maxGrade`, `dueDate`) in dataset files.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The signed-in student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub student_id: String,
    pub program: String,
    pub year: u8,
    pub gpa: f32,
}

/// A course catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
    pub instructor: String,
    pub description: String,
    /// Completion percentage, `0..=100`.
    pub progress: u8,
    /// Display color as a CSS hex string.
    pub color: String,
    /// Human readable meeting times.
    pub schedule: String,
}

impl Course {
    /// Whether the course has been fully completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.progress >= 100
    }

    /// Whether the course has been started but not finished.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.progress > 0 && self.progress < 100
    }
}

/// Lifecycle state of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Submitted, Self::Graded];

    /// Stable lowercase key used in URLs and fixture files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Graded => "graded",
        }
    }

    /// Russian display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "В ожидании",
            Self::Submitted => "Сдано",
            Self::Graded => "Оценено",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assignment status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for AssignmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "submitted" => Ok(Self::Submitted),
            "graded" => Ok(Self::Graded),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Coursework item belonging to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    /// Score out of 100, present once graded.
    #[serde(default)]
    pub grade: Option<u32>,
}

/// A recorded score for one assignment of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub assignment_name: String,
    pub grade: f64,
    pub max_grade: f64,
    pub date: NaiveDate,
}

/// Kind of a scheduled class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Lecture,
    Lab,
    Tutorial,
    Exam,
}

impl EventKind {
    /// Russian display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lecture => "Лекция",
            Self::Lab => "Лабораторная",
            Self::Tutorial => "Семинар",
            Self::Exam => "Экзамен",
        }
    }
}

/// Teaching day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// The portal week in calendar order.
    pub const WEEK: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Russian display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Понедельник",
            Self::Tuesday => "Вторник",
            Self::Wednesday => "Среда",
            Self::Thursday => "Четверг",
            Self::Friday => "Пятница",
        }
    }
}

/// A weekly class slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
}

/// Format of a course lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Document,
}

/// A single lesson inside a course module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub kind: LessonKind,
    pub duration_minutes: u32,
}

/// A section of the course material outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub id: u32,
    pub title: String,
    pub lessons: Vec<Lesson>,
}
