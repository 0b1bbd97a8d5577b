//! Report generation for advising runs
//!
//! Renders an [`AdvisingResult`] for people (terminal text, HTML) or for
//! other tools (JSON). Every renderer reads the same [`ReportContext`].

pub mod formats;

use crate::core::advisor::{AdvisingResult, RecommendationDetails, Restriction};
use crate::core::export::format_cgpa;
use crate::core::models::{Course, CourseCatalog, StudentProfile};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, ReportFormat, TextReporter};

/// Data context for report generation
///
/// `result` must come from evaluating `catalog` against `profile`.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Catalog the run evaluated
    pub catalog: &'a CourseCatalog,
    /// Student the run was for
    pub profile: &'a StudentProfile,
    /// Outcome of the run
    pub result: &'a AdvisingResult,
    /// Program label shown in the header (e.g., "Computer Engineering")
    pub track_label: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        catalog: &'a CourseCatalog,
        profile: &'a StudentProfile,
        result: &'a AdvisingResult,
        track_label: &'a str,
    ) -> Self {
        Self {
            catalog,
            profile,
            result,
            track_label,
        }
    }

    /// CGPA formatted for display
    #[must_use]
    pub fn cgpa(&self) -> String {
        format_cgpa(self.profile.cgpa)
    }

    /// Recommended courses with their acceptance details, in catalog order
    pub fn recommended(&self) -> impl Iterator<Item = (&'a Course, &'a RecommendationDetails)> {
        self.catalog
            .iter()
            .zip(&self.result.explanations)
            .filter_map(|(course, explanation)| explanation.details().map(|d| (course, d)))
    }

    /// Rejected courses with their restriction, in catalog order
    pub fn restricted(&self) -> impl Iterator<Item = (&'a Course, &'a Restriction)> {
        self.catalog
            .iter()
            .zip(&self.result.explanations)
            .filter_map(|(course, explanation)| explanation.restriction().map(|r| (course, r)))
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

fn list_or(codes: &[String], empty: &str) -> String {
    if codes.is_empty() {
        empty.to_string()
    } else {
        codes.join(", ")
    }
}

/// Human-readable lines explaining why a course was recommended
#[must_use]
pub fn recommendation_notes(details: &RecommendationDetails) -> Vec<String> {
    let mut notes = vec![format!(
        "Prerequisites: {}",
        list_or(&details.prerequisites_met, "none required")
    )];
    if !details.corequisites_met.is_empty() {
        notes.push(format!(
            "Corequisites completed: {}",
            details.corequisites_met.join(", ")
        ));
    }
    if !details.corequisites_concurrent.is_empty() {
        notes.push(format!(
            "Take alongside: {}",
            details.corequisites_concurrent.join(", ")
        ));
    }
    notes.push(format!("Offered: {}", details.semester_match));
    notes.push(format!("Track: {}", details.track_match));
    notes
}

/// Human-readable lines detailing a restriction
#[must_use]
pub fn restriction_notes(restriction: &Restriction) -> Vec<String> {
    match restriction {
        Restriction::AlreadyPassed { semester_passed } => {
            vec![format!("Status: {semester_passed}")]
        }
        Restriction::PreviouslyFailed {
            priority,
            action_needed,
        } => vec![
            format!("Priority: {priority}"),
            format!("Action: {action_needed}"),
        ],
        Restriction::TrackMismatch {
            current_track,
            course_track,
        } => vec![
            format!("Your track: {current_track}"),
            format!("Course track: {course_track}"),
        ],
        Restriction::SemesterMismatch {
            current_semester,
            offered_semester,
        } => vec![
            format!("Registering for: {current_semester}"),
            format!("Offered in: {offered_semester}"),
        ],
        Restriction::MissingPrerequisites {
            missing_courses,
            required_courses,
        }
        | Restriction::MissingCorequisites {
            missing_courses,
            required_courses,
        } => vec![
            format!("Missing: {}", missing_courses.join(", ")),
            format!("Required: {}", required_courses.join(", ")),
        ],
        Restriction::CreditLimit {
            current_credits,
            course_credits,
            max_credits,
        } => vec![
            format!("Credits so far: {current_credits}"),
            format!("Course credits: {course_credits}"),
            format!("Credit limit: {max_credits}"),
        ],
    }
}
