//! Terminal text report

use crate::core::report::{
    recommendation_notes, restriction_notes, ReportContext, ReportGenerator,
};
use std::error::Error;
use std::fmt::Write;

/// Plain text report, as printed after an advising run
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter {
    detailed: bool,
}

impl TextReporter {
    /// Create a text reporter; `detailed` adds the explanation lines under
    /// every course
    #[must_use]
    pub const fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    fn codes_or_none<'a>(codes: impl IntoIterator<Item = &'a String>) -> String {
        let codes: Vec<&str> = codes.into_iter().map(String::as_str).collect();
        if codes.is_empty() {
            "None".to_string()
        } else {
            codes.join(", ")
        }
    }

    fn write_report(&self, ctx: &ReportContext, out: &mut String) -> std::fmt::Result {
        let result = ctx.result;

        writeln!(out, "=== STUDENT PROFILE ===")?;
        writeln!(out, "Program: {}", ctx.track_label)?;
        writeln!(out, "CGPA: {}", ctx.cgpa())?;
        writeln!(out, "Semester: {}", ctx.profile.semester)?;
        writeln!(
            out,
            "Passed Courses: {}",
            Self::codes_or_none(&ctx.profile.passed_courses)
        )?;
        writeln!(
            out,
            "Failed Courses: {}",
            Self::codes_or_none(&ctx.profile.failed_courses)
        )?;
        writeln!(out, "Maximum credit hours allowed: {}", result.max_credits)?;

        writeln!(out)?;
        writeln!(out, "=== COURSE RECOMMENDATIONS ===")?;
        if result.recommended.is_empty() {
            writeln!(out, "No courses can be recommended for this semester.")?;
        } else {
            writeln!(out, "Recommended courses for this semester:")?;
            for (course, details) in ctx.recommended() {
                writeln!(
                    out,
                    "• {} - {} ({} credits)",
                    course.code, course.name, course.credit_hours
                )?;
                if self.detailed {
                    for note in recommendation_notes(details) {
                        writeln!(out, "    {note}")?;
                    }
                }
            }
            writeln!(out)?;
            writeln!(
                out,
                "Total recommended credits: {}/{} ({} remaining)",
                result.total_credits,
                result.max_credits,
                result.remaining_credits()
            )?;
        }

        if !result.skipped.is_empty() {
            writeln!(out)?;
            writeln!(out, "=== COURSES NOT RECOMMENDED ===")?;
            for (course, restriction) in ctx.restricted() {
                writeln!(out, "• {} - {}", course.code, course.name)?;
                writeln!(out, "  Reason: {restriction}")?;
                if self.detailed {
                    for note in restriction_notes(restriction) {
                        writeln!(out, "    {note}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        self.write_report(ctx, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::advisor::RecommendationEngine;
    use crate::core::models::{Course, CourseCatalog, StudentProfile};

    fn render(detailed: bool, failed: &[&str]) -> String {
        let catalog: CourseCatalog = vec![
            Course::new("MAT111", "Calculus I", 3),
            Course::new("CSE221", "Algorithms", 3).with_prerequisite("CSE014"),
        ]
        .into();
        let profile = StudentProfile::new(1.5, "Spring", Vec::<&str>::new(), failed.to_vec());
        let result = RecommendationEngine::default().evaluate(&catalog, &profile);
        let ctx = ReportContext::new(&catalog, &profile, &result, "Computer Engineering");
        TextReporter::new(detailed).render(&ctx).unwrap()
    }

    #[test]
    fn test_text_report_sections() {
        let text = render(false, &[]);

        assert!(text.contains("CGPA: 1.5"));
        assert!(text.contains("Failed Courses: None"));
        assert!(text.contains("Maximum credit hours allowed: 12"));
        assert!(text.contains("• MAT111 - Calculus I (3 credits)"));
        assert!(text.contains("Total recommended credits: 3/12 (9 remaining)"));
        assert!(text.contains("• CSE221 - Algorithms\n  Reason: Missing prerequisites: CSE014"));
        assert!(!text.contains("Required: CSE014"));
    }

    #[test]
    fn test_detailed_text_report_lists_notes() {
        let text = render(true, &[]);
        assert!(text.contains("    Prerequisites: none required"));
        assert!(text.contains("    Required: CSE014"));
    }

    #[test]
    fn test_text_report_without_recommendations() {
        let text = render(false, &["MAT111"]);
        assert!(text.contains("No courses can be recommended for this semester."));
        assert!(text.contains("Reason: Course previously failed - may need retaking"));
    }
}
