//! Data models for `course_advisor`

pub mod catalog;
pub mod course;
pub mod profile;

pub use catalog::CourseCatalog;
pub use course::Course;
pub use profile::{ProfileValidationError, StudentProfile, SEMESTERS};
