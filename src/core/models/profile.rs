//! Student profile model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Terms a student can register for
pub const SEMESTERS: [&str; 3] = ["Fall", "Spring", "Summer"];

/// Lowest accepted CGPA
pub const MIN_CGPA: f64 = 0.0;

/// Highest accepted CGPA
pub const MAX_CGPA: f64 = 4.0;

/// Reasons a profile is rejected before it reaches the advisor
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileValidationError {
    /// CGPA is NaN or outside `[0.0, 4.0]`
    #[error("CGPA must be between 0.0 and 4.0, got {0}")]
    CgpaOutOfRange(f64),

    /// Semester is not one of Fall, Spring or Summer
    #[error("Unknown semester '{0}' (expected Fall, Spring or Summer)")]
    UnknownSemester(String),
}

/// Academic standing of one student for one term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Cumulative GPA
    pub cgpa: f64,
    /// Target term (e.g., "Fall")
    pub semester: String,
    /// Codes of passed courses
    pub passed_courses: BTreeSet<String>,
    /// Codes of failed courses
    pub failed_courses: BTreeSet<String>,
}

impl StudentProfile {
    /// Create a profile. Codes are trimmed and blank codes are dropped.
    ///
    /// A code may appear in both `passed` and `failed`; the advisor treats
    /// such a course as passed.
    #[must_use]
    pub fn new<P, F, S>(cgpa: f64, semester: impl Into<String>, passed: P, failed: F) -> Self
    where
        P: IntoIterator<Item = S>,
        F: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            cgpa,
            semester: semester.into().trim().to_string(),
            passed_courses: normalize_codes(passed),
            failed_courses: normalize_codes(failed),
        }
    }

    /// Whether the student passed `code`
    #[must_use]
    pub fn has_passed(&self, code: &str) -> bool {
        self.passed_courses.contains(code)
    }

    /// Whether the student failed `code`
    #[must_use]
    pub fn has_failed(&self, code: &str) -> bool {
        self.failed_courses.contains(code)
    }

    /// Check the profile against the registration input rules.
    ///
    /// # Errors
    /// Returns [`ProfileValidationError`] when the CGPA is out of range or
    /// the semester is not a registrable term.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if !(MIN_CGPA..=MAX_CGPA).contains(&self.cgpa) {
            return Err(ProfileValidationError::CgpaOutOfRange(self.cgpa));
        }
        if !SEMESTERS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(&self.semester))
        {
            return Err(ProfileValidationError::UnknownSemester(
                self.semester.clone(),
            ));
        }
        Ok(())
    }
}

fn normalize_codes<I, S>(codes: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .map(|c| c.as_ref().trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}
