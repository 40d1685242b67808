//! Read-only portal catalog.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::fixtures;
use super::model::{Assignment, Course, CourseModule, Grade, ScheduleEvent, Student, Weekday};

/// Errors raised while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid dataset: {0}")]
    Invalid(String),
}

/// All portal data, loaded once and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portal {
    student: Student,
    courses: Vec<Course>,
    assignments: Vec<Assignment>,
    grades: Vec<Grade>,
    schedule: Vec<ScheduleEvent>,
    #[serde(default = "fixtures::syllabus")]
    syllabus: Vec<CourseModule>,
}

impl Portal {
    /// The built-in mock dataset.
    #[must_use]
    pub fn fixtures() -> Self {
        Self {
            student: fixtures::student(),
            courses: fixtures::courses(),
            assignments: fixtures::assignments(),
            grades: fixtures::grades(),
            schedule: fixtures::schedule(),
            syllabus: fixtures::syllabus(),
        }
    }

    /// Load a dataset from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PortalError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| PortalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let portal: Self = serde_json::from_str(&raw).map_err(|source| PortalError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        portal.validate()?;
        Ok(portal)
    }

    /// Load from `path` when given, otherwise use the built-in fixtures.
    pub fn load(path: Option<&Path>) -> Result<Self, PortalError> {
        let portal = match path {
            Some(p) => Self::from_json_file(p)?,
            None => Self::fixtures(),
        };

        info!(
            name: "portal.loaded",
            source = %path.map_or_else(|| "fixtures".to_string(), |p| p.display().to_string()),
            courses = portal.courses.len(),
            assignments = portal.assignments.len(),
            grades = portal.grades.len(),
            events = portal.schedule.len(),
            "Portal data loaded"
        );

        Ok(portal)
    }

    fn validate(&self) -> Result<(), PortalError> {
        ensure_unique("course", self.courses.iter().map(|c| c.id.as_str()))?;
        ensure_unique("assignment", self.assignments.iter().map(|a| a.id.as_str()))?;
        ensure_unique("grade", self.grades.iter().map(|g| g.id.as_str()))?;
        ensure_unique("event", self.schedule.iter().map(|e| e.id.as_str()))?;

        if let Some(course) = self.courses.iter().find(|c| c.progress > 100) {
            return Err(PortalError::Invalid(format!(
                "course {} has progress {} above 100",
                course.id, course.progress
            )));
        }
        if let Some(grade) = self.grades.iter().find(|g| g.max_grade <= 0.0) {
            return Err(PortalError::Invalid(format!(
                "grade {} has a non-positive maximum",
                grade.id
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn student(&self) -> &Student {
        &self.student
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    #[must_use]
    pub fn schedule(&self) -> &[ScheduleEvent] {
        &self.schedule
    }

    #[must_use]
    pub fn syllabus(&self) -> &[CourseModule] {
        &self.syllabus
    }

    /// Look up a course by id.
    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Assignments of a course, in dataset order.
    pub fn assignments_for<'a>(&'a self, course_id: &'a str) -> impl Iterator<Item = &'a Assignment> {
        self.assignments.iter().filter(move |a| a.course_id == course_id)
    }

    /// Grades of a course, in dataset order.
    pub fn grades_for<'a>(&'a self, course_id: &'a str) -> impl Iterator<Item = &'a Grade> {
        self.grades.iter().filter(move |g| g.course_id == course_id)
    }

    /// Classes held on `day`, in dataset order.
    pub fn events_on(&self, day: Weekday) -> impl Iterator<Item = &ScheduleEvent> {
        self.schedule.iter().filter(move |e| e.day == day)
    }
}

impl Default for Portal {
    fn default() -> Self {
        Self::fixtures()
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), PortalError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PortalError::Invalid(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}
