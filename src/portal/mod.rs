//! Student portal data and derived statistics.
//!
//! The portal is a read-only catalog: it is built once at startup, either
//! from the built-in fixtures or from a JSON file, and shared behind an `Arc`.
//!
//! # Structure
//!
//! - [`model`]: Plain records (student, courses, assignments, grades, schedule)
//! - [`Portal`]: The catalog and its lookups
//! - [`stats`]: Reductions shown on the pages (averages, status filters)
//! - [`dates`]: `ru-RU` date rendering
//!
//! # Example
//!
//! ```rust
//! use rautine_portal::portal::{Portal, stats};
//!
//! let portal = Portal::fixtures();
//! let average = stats::average_grade_percentage(portal.grades());
//! assert!(average.is_some());
//! ```

mod catalog;
pub mod dates;
mod fixtures;
pub mod model;
pub mod stats;

pub use catalog::{Portal, PortalError};
pub use model::{
    Assignment, AssignmentStatus, Course, CourseModule, EventKind, Grade, Lesson, LessonKind,
    ScheduleEvent, Student, Weekday,
};
