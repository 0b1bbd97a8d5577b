//! JSON report

use crate::core::advisor::AdvisingResult;
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;

/// Profile summary written next to the result
#[derive(Serialize)]
struct ProfileSummary<'a> {
    program: &'a str,
    cgpa: f64,
    semester: &'a str,
    passed_courses: &'a BTreeSet<String>,
    failed_courses: &'a BTreeSet<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    profile: ProfileSummary<'a>,
    remaining_credits: u32,
    #[serde(flatten)]
    result: &'a AdvisingResult,
}

/// Pretty-printed JSON report
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            profile: ProfileSummary {
                program: ctx.track_label,
                cgpa: ctx.profile.cgpa,
                semester: &ctx.profile.semester,
                passed_courses: &ctx.profile.passed_courses,
                failed_courses: &ctx.profile.failed_courses,
            },
            remaining_credits: ctx.result.remaining_credits(),
            result: ctx.result,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
