//! Derived statistics over the portal lists.
//!
//! Every function here is a single pass over a small in-memory slice. Means
//! return `None` for empty input instead of dividing by zero; callers decide
//! how to render the missing value.

use std::str::FromStr;

use super::model::{Assignment, AssignmentStatus, Course, Grade, UnknownStatus};

/// Mean completion percentage across courses.
#[must_use]
pub fn average_progress(courses: &[Course]) -> Option<f64> {
    mean(courses.iter().map(|c| f64::from(c.progress)))
}

/// Score of a single grade as a percentage of its maximum.
///
/// A non-positive maximum yields `0.0`.
#[must_use]
pub fn grade_percentage(grade: &Grade) -> f64 {
    if grade.max_grade > 0.0 {
        grade.grade / grade.max_grade * 100.0
    } else {
        0.0
    }
}

/// Mean of [`grade_percentage`] across all grades.
#[must_use]
pub fn average_grade_percentage(grades: &[Grade]) -> Option<f64> {
    mean(grades.iter().map(grade_percentage))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

/// Assignment list filter selected on the assignments page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every assignment.
    #[default]
    All,
    /// Only assignments with the given status.
    Only(AssignmentStatus),
}

impl StatusFilter {
    /// Filters in tab order.
    pub const TABS: [Self; 4] = [
        Self::All,
        Self::Only(AssignmentStatus::Pending),
        Self::Only(AssignmentStatus::Submitted),
        Self::Only(AssignmentStatus::Graded),
    ];

    /// Query-string key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Only(AssignmentStatus::Pending) => "В ожидании",
            Self::Only(AssignmentStatus::Submitted) => "Сданные",
            Self::Only(AssignmentStatus::Graded) => "Оцененные",
        }
    }

    /// Whether an assignment passes this filter.
    #[must_use]
    pub fn matches(self, assignment: &Assignment) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => assignment.status == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Assignments passing `filter`, in their original order.
#[must_use]
pub fn filter_by_status(assignments: &[Assignment], filter: StatusFilter) -> Vec<&Assignment> {
    assignments.iter().filter(|a| filter.matches(a)).collect()
}

/// The first `limit` pending assignments.
#[must_use]
pub fn upcoming_deadlines(assignments: &[Assignment], limit: usize) -> Vec<&Assignment> {
    assignments
        .iter()
        .filter(|a| a.status == AssignmentStatus::Pending)
        .take(limit)
        .collect()
}

/// Number of assignments in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub submitted: usize,
    pub graded: usize,
}

impl StatusCounts {
    /// Count for a single status.
    #[must_use]
    pub fn get(&self, status: AssignmentStatus) -> usize {
        match status {
            AssignmentStatus::Pending => self.pending,
            AssignmentStatus::Submitted => self.submitted,
            AssignmentStatus::Graded => self.graded,
        }
    }

    /// Sum across statuses.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pending + self.submitted + self.graded
    }
}

#[must_use]
pub fn status_counts(assignments: &[Assignment]) -> StatusCounts {
    assignments
        .iter()
        .fold(StatusCounts::default(), |mut counts, a| {
            match a.status {
                AssignmentStatus::Pending => counts.pending += 1,
                AssignmentStatus::Submitted => counts.submitted += 1,
                AssignmentStatus::Graded => counts.graded += 1,
            }
            counts
        })
}

/// Per-course grade aggregate shown on the grades page.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseGradeSummary<'a> {
    pub course: &'a Course,
    pub average: Option<f64>,
    pub count: usize,
}

/// Grade average and count for each course, in course order.
#[must_use]
pub fn course_grade_summaries<'a>(
    courses: &'a [Course],
    grades: &[Grade],
) -> Vec<CourseGradeSummary<'a>> {
    courses
        .iter()
        .map(|course| {
            let mine: Vec<&Grade> = grades.iter().filter(|g| g.course_id == course.id).collect();
            CourseGradeSummary {
                course,
                average: mean(mine.iter().map(|g| grade_percentage(g))),
                count: mine.len(),
            }
        })
        .collect()
}

#[must_use]
pub fn completed_courses(courses: &[Course]) -> usize {
    courses.iter().filter(|c| c.is_completed()).count()
}

#[must_use]
pub fn in_progress_courses(courses: &[Course]) -> usize {
    courses.iter().filter(|c| c.is_in_progress()).count()
}

/// Qualitative band of a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    Satisfactory,
    Failing,
}

impl GradeBand {
    #[must_use]
    pub fn from_percentage(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Excellent
        } else if percent >= 75.0 {
            Self::Good
        } else if percent >= 60.0 {
            Self::Satisfactory
        } else {
            Self::Failing
        }
    }

    /// Text color class for the band.
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Excellent => "text-green-600",
            Self::Good => "text-blue-600",
            Self::Satisfactory => "text-orange-600",
            Self::Failing => "text-red-600",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn course(id: &str, progress: u8) -> Course {
        Course {
            id: id.to_string(),
            name: format!("Course {id}"),
            code: id.to_uppercase(),
            instructor: "Instructor".to_string(),
            description: String::new(),
            progress,
            color: "#007aff".to_string(),
            schedule: String::new(),
        }
    }

    fn assignment(id: &str, status: AssignmentStatus, grade: Option<u32>) -> Assignment {
        Assignment {
            id: id.to_string(),
            course_id: "c1".to_string(),
            course_name: "Course c1".to_string(),
            title: format!("Assignment {id}"),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            status,
            grade,
        }
    }

    fn grade(course_id: &str, score: f64, max: f64) -> Grade {
        Grade {
            id: format!("{course_id}-{score}"),
            course_id: course_id.to_string(),
            course_name: String::new(),
            assignment_name: String::new(),
            grade: score,
            max_grade: max,
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        }
    }

    #[test]
    fn test_average_progress() {
        let courses = vec![course("a", 100), course("b", 50), course("c", 0)];
        assert_eq!(average_progress(&courses), Some(50.0));
        assert_eq!(average_progress(&[]), None);
    }

    #[test]
    fn test_average_grade_percentage() {
        let grades = vec![grade("c1", 45.0, 50.0), grade("c1", 70.0, 100.0)];
        let avg = average_grade_percentage(&grades).unwrap();
        assert!((avg - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_grade_percentage_empty() {
        assert_eq!(average_grade_percentage(&[]), None);
    }

    #[test]
    fn test_grade_percentage_zero_max() {
        assert!(grade_percentage(&grade("c1", 5.0, 0.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_filter_pending_preserves_order() {
        let list = vec![
            assignment("1", AssignmentStatus::Pending, None),
            assignment("2", AssignmentStatus::Graded, Some(90)),
            assignment("3", AssignmentStatus::Pending, None),
            assignment("4", AssignmentStatus::Submitted, None),
        ];

        let ids: Vec<&str> = filter_by_status(&list, StatusFilter::Only(AssignmentStatus::Pending))
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(filter_by_status(&list, StatusFilter::All).len(), 4);
    }

    #[test]
    fn test_filter_single_graded_item() {
        let list = vec![
            assignment("p", AssignmentStatus::Pending, None),
            assignment("g", AssignmentStatus::Graded, Some(87)),
        ];

        let graded = filter_by_status(&list, StatusFilter::Only(AssignmentStatus::Graded));
        assert_eq!(graded.len(), 1);
        assert_eq!(graded[0].id, "g");
        assert_eq!(graded[0].grade, Some(87));
    }

    #[test]
    fn test_status_counts() {
        let list = vec![
            assignment("1", AssignmentStatus::Pending, None),
            assignment("2", AssignmentStatus::Pending, None),
            assignment("3", AssignmentStatus::Graded, Some(70)),
        ];
        let counts = status_counts(&list);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.submitted, 0);
        assert_eq!(counts.get(AssignmentStatus::Graded), 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_upcoming_deadlines_limit() {
        let list: Vec<Assignment> = (0..5)
            .map(|i| assignment(&i.to_string(), AssignmentStatus::Pending, None))
            .collect();
        assert_eq!(upcoming_deadlines(&list, 3).len(), 3);
    }

    #[test]
    fn test_course_grade_summaries() {
        let courses = vec![course("c1", 10), course("c2", 20)];
        let grades = vec![grade("c1", 9.0, 10.0), grade("c1", 7.0, 10.0)];

        let summaries = course_grade_summaries(&courses, &grades);
        assert_eq!(summaries[0].count, 2);
        assert!((summaries[0].average.unwrap() - 80.0).abs() < 1e-9);
        assert_eq!(summaries[1].count, 0);
        assert_eq!(summaries[1].average, None);
    }

    #[test]
    fn test_course_completion_counts() {
        let courses = vec![course("a", 100), course("b", 50), course("c", 0)];
        assert_eq!(completed_courses(&courses), 1);
        assert_eq!(in_progress_courses(&courses), 1);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "submitted".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(AssignmentStatus::Submitted))
        );
        assert!("late".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(GradeBand::from_percentage(95.0), GradeBand::Excellent);
        assert_eq!(GradeBand::from_percentage(75.0), GradeBand::Good);
        assert_eq!(GradeBand::from_percentage(60.0), GradeBand::Satisfactory);
        assert_eq!(GradeBand::from_percentage(59.9), GradeBand::Failing);
    }
}
