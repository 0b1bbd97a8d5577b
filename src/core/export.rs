//! Export recommendations as a CSV table
//!
//! One row per recommended course, with the run summary repeated on every
//! row so the file stays usable once split from the report.

use crate::core::advisor::AdvisingResult;
use crate::core::models::{Course, CourseCatalog, StudentProfile};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Export column headers, in order
pub const EXPORT_COLUMNS: [&str; 14] = [
    "Course Code",
    "Course Name",
    "Credit Hours",
    "Description",
    "Prerequisites",
    "Co-requisites",
    "Program/Track",
    "Semester Offered",
    "Recommended",
    "Total Credits",
    "Credit Limit",
    "Remaining Credits",
    "Student CGPA",
    "Current Semester",
];

/// Failures while writing an export
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output could not be created or written
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed
    #[error("Failed to encode export CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Recommended courses of `result`, looked up in `catalog`.
///
/// `result` must come from evaluating `catalog`; explanations and catalog
/// entries line up one to one.
pub fn recommended_courses<'a>(
    catalog: &'a CourseCatalog,
    result: &'a AdvisingResult,
) -> impl Iterator<Item = &'a Course> {
    catalog
        .iter()
        .zip(&result.explanations)
        .filter(|(_, explanation)| explanation.is_recommended())
        .map(|(course, _)| course)
}

/// CGPA as shown to students: always at least one decimal (`3.0`, `3.25`)
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_cgpa(cgpa: f64) -> String {
    if cgpa.fract() == 0.0 {
        format!("{cgpa:.1}")
    } else {
        format!("{cgpa}")
    }
}

/// File name used when no export path is given
#[must_use]
pub fn default_export_file_name(profile: &StudentProfile) -> String {
    format!(
        "course_recommendations_{}_{}.csv",
        profile.semester,
        format_cgpa(profile.cgpa)
    )
}

/// Write the export table to `writer`
///
/// # Errors
/// Returns an error if encoding or writing fails.
pub fn write_recommendations_csv<W: Write>(
    writer: W,
    catalog: &CourseCatalog,
    profile: &StudentProfile,
    result: &AdvisingResult,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_COLUMNS)?;

    let total = result.total_credits.to_string();
    let limit = result.max_credits.to_string();
    let remaining = result.remaining_credits().to_string();
    let cgpa = format_cgpa(profile.cgpa);

    for course in recommended_courses(catalog, result) {
        let credits = course.credit_hours.to_string();
        let prerequisites = Course::requisite_cell(&course.prerequisites);
        let corequisites = Course::requisite_cell(&course.corequisites);
        csv_writer.write_record([
            course.code.as_str(),
            course.name.as_str(),
            credits.as_str(),
            course.description.as_str(),
            prerequisites.as_str(),
            corequisites.as_str(),
            course.program_track.as_str(),
            course.semester_offered.as_str(),
            "Yes",
            total.as_str(),
            limit.as_str(),
            remaining.as_str(),
            cgpa.as_str(),
            profile.semester.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the export table to a string
///
/// # Errors
/// Returns an error if encoding fails.
pub fn render_recommendations_csv(
    catalog: &CourseCatalog,
    profile: &StudentProfile,
    result: &AdvisingResult,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_recommendations_csv(&mut buffer, catalog, profile, result)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the export table to `output_path`
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_recommendations_csv(
    catalog: &CourseCatalog,
    profile: &StudentProfile,
    result: &AdvisingResult,
    output_path: &Path,
) -> Result<(), ExportError> {
    let file = File::create(output_path)?;
    write_recommendations_csv(file, catalog, profile, result)
}
