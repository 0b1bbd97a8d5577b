//! Integration tests for report rendering

use course_advisor::core::advisor::RecommendationEngine;
use course_advisor::core::loader::parse_catalog_csv;
use course_advisor::core::models::{CourseCatalog, StudentProfile};
use course_advisor::core::report::{ReportContext, ReportFormat, ReportGenerator};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample() -> (CourseCatalog, StudentProfile) {
    let catalog =
        parse_catalog_csv(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/catalog.csv"))
            .unwrap();
    let profile = StudentProfile::new(1.8, "Spring", ["MAT111", "CSE014", "CSE014L"], ["PHY101"]);
    (catalog, profile)
}

#[test]
fn test_every_format_mentions_every_course() {
    let (catalog, profile) = sample();
    let result = RecommendationEngine::default().evaluate(&catalog, &profile);
    let ctx = ReportContext::new(&catalog, &profile, &result, "Computer Engineering");

    for format in [ReportFormat::Text, ReportFormat::Html, ReportFormat::Json] {
        let content = format.reporter(false).render(&ctx).unwrap();
        for course in &catalog {
            assert!(
                content.contains(&course.code),
                "{format} report is missing {}",
                course.code
            );
        }
    }
}

#[test]
fn test_text_report_on_sample() {
    let (catalog, profile) = sample();
    let result = RecommendationEngine::default().evaluate(&catalog, &profile);
    let ctx = ReportContext::new(&catalog, &profile, &result, "Computer Engineering");

    let text = ReportFormat::Text.reporter(false).render(&ctx).unwrap();
    assert!(text.contains("Passed Courses: CSE014, CSE014L, MAT111"));
    assert!(text.contains("Maximum credit hours allowed: 12"));
    assert!(text.contains("• MAT112 - Calculus II (3 credits)"));
    assert!(text.contains("• PHY101 - Physics I\n  Reason: Course previously failed - may need retaking"));
    assert!(text.contains("• EEE141 - Electrical Circuits I\n  Reason: Track mismatch - Electrical Engineering"));
    assert!(text.contains("Reason: Not offered in Spring semester"));
}

#[test]
fn test_generate_writes_report_file() {
    let (catalog, profile) = sample();
    let result = RecommendationEngine::default().evaluate(&catalog, &profile);
    let ctx = ReportContext::new(&catalog, &profile, &result, "Computer Engineering");

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reports/advising.json");
    ReportFormat::Json
        .reporter(false)
        .generate(&ctx, &path)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["max_credits"], 12);
    assert_eq!(value["profile"]["failed_courses"][0], "PHY101");
    assert_eq!(
        value["explanations"].as_array().unwrap().len(),
        catalog.len()
    );
}
