//! HTML report generator
//!
//! Renders a self-contained page (embedded CSS, no scripts) from the
//! `advising_report.html` askama template.

use crate::core::report::{
    recommendation_notes, restriction_notes, ReportContext, ReportGenerator,
};
use askama::Template;
use std::error::Error;

/// One recommended course, ready for the template
struct RecommendedRow<'a> {
    code: &'a str,
    name: &'a str,
    description: &'a str,
    credit_hours: u32,
    notes: Vec<String>,
}

/// One rejected course, ready for the template
struct RestrictedRow<'a> {
    code: &'a str,
    name: &'a str,
    reason_tag: &'static str,
    reason: String,
    notes: Vec<String>,
}

#[derive(Template)]
#[template(path = "advising_report.html")]
struct AdvisingReportTemplate<'a> {
    program: &'a str,
    cgpa: String,
    semester: &'a str,
    passed: String,
    failed: String,
    total_credits: u32,
    max_credits: u32,
    remaining_credits: u32,
    recommended: Vec<RecommendedRow<'a>>,
    restricted: Vec<RestrictedRow<'a>>,
}

/// HTML report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn join_or_none<'a>(codes: impl IntoIterator<Item = &'a String>) -> String {
        let codes: Vec<&str> = codes.into_iter().map(String::as_str).collect();
        if codes.is_empty() {
            "None".to_string()
        } else {
            codes.join(", ")
        }
    }

    fn build<'a>(ctx: &ReportContext<'a>) -> AdvisingReportTemplate<'a> {
        let recommended = ctx
            .recommended()
            .map(|(course, details)| RecommendedRow {
                code: &course.code,
                name: &course.name,
                description: &course.description,
                credit_hours: course.credit_hours,
                notes: recommendation_notes(details),
            })
            .collect();

        let restricted = ctx
            .restricted()
            .map(|(course, restriction)| RestrictedRow {
                code: &course.code,
                name: &course.name,
                reason_tag: restriction.reason(),
                reason: restriction.to_string(),
                notes: restriction_notes(restriction),
            })
            .collect();

        AdvisingReportTemplate {
            program: ctx.track_label,
            cgpa: ctx.cgpa(),
            semester: &ctx.profile.semester,
            passed: Self::join_or_none(&ctx.profile.passed_courses),
            failed: Self::join_or_none(&ctx.profile.failed_courses),
            total_credits: ctx.result.total_credits,
            max_credits: ctx.result.max_credits,
            remaining_credits: ctx.result.remaining_credits(),
            recommended,
            restricted,
        }
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build(ctx).render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::advisor::RecommendationEngine;
    use crate::core::models::{Course, CourseCatalog, StudentProfile};

    #[test]
    fn test_html_report_sections() {
        let catalog: CourseCatalog = vec![
            Course::new("MAT111", "Calculus <I>", 3).with_description("Limits & derivatives"),
            Course::new("CSE221", "Algorithms", 3).with_prerequisite("CSE014"),
        ]
        .into();
        let profile = StudentProfile::new(2.5, "Fall", Vec::<&str>::new(), Vec::new());
        let result = RecommendationEngine::default().evaluate(&catalog, &profile);
        let ctx = ReportContext::new(&catalog, &profile, &result, "Computer Engineering");

        let html = HtmlReporter::new().render(&ctx).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Calculus &lt;I&gt;"));
        assert!(html.contains("Limits &amp; derivatives"));
        assert!(html.contains("Missing prerequisites: CSE014"));
        assert!(html.contains("missing_prerequisites"));
        assert!(html.contains("<span class=\"stat-value\">3</span>"));
        assert!(html.contains("<span class=\"stat-value\">15</span>"));
        assert!(html.contains("<span class=\"stat-value\">12</span>"));
    }
}
