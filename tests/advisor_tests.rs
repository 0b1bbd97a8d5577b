//! Integration tests for the recommendation engine

use course_advisor::core::advisor::{
    max_credits, Gate, Outcome, RecommendationEngine, Restriction, TrackPolicy,
};
use course_advisor::core::loader::parse_catalog_csv;
use course_advisor::core::models::{Course, CourseCatalog, StudentProfile};
use std::path::PathBuf;

fn sample_catalog() -> CourseCatalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/catalog.csv");
    parse_catalog_csv(path).expect("sample catalog should load")
}

fn profile(cgpa: f64, semester: &str, passed: &[&str], failed: &[&str]) -> StudentProfile {
    StudentProfile::new(cgpa, semester, passed.to_vec(), failed.to_vec())
}

fn codes(result: &course_advisor::core::advisor::AdvisingResult) -> Vec<&str> {
    result.recommended.iter().map(|r| r.code.as_str()).collect()
}

#[test]
fn test_single_course_recommended() {
    let catalog: CourseCatalog = vec![Course::new("MAT111", "Calculus I", 3).offered_in("Fall")].into();
    let result = RecommendationEngine::default().evaluate(&catalog, &profile(3.2, "Fall", &[], &[]));

    assert_eq!(codes(&result), vec!["MAT111"]);
    assert_eq!(result.total_credits, 3);
    assert_eq!(result.max_credits, 18);
    assert!(result.skipped.is_empty());
}

#[test]
fn test_passed_course_is_skipped() {
    let catalog: CourseCatalog = vec![Course::new("MAT111", "Calculus I", 3).offered_in("Fall")].into();
    let result =
        RecommendationEngine::default().evaluate(&catalog, &profile(3.2, "Fall", &["MAT111"], &[]));

    assert!(result.recommended.is_empty());
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].code, "MAT111");
    assert!(result.skipped[0].reason.contains("already"));
    assert_eq!(result.skipped[0].gate, Gate::AlreadyPassed);
}

#[test]
fn test_missing_prerequisite_is_explained() {
    let catalog: CourseCatalog =
        vec![Course::new("CSE221", "Algorithms", 3).with_prerequisite("CSE014")].into();
    let result = RecommendationEngine::default().evaluate(&catalog, &profile(3.2, "Fall", &[], &[]));

    let explanation = result.explanation("CSE221").unwrap();
    let restriction = explanation.restriction().unwrap();
    assert_eq!(restriction.reason(), "missing_prerequisites");
    assert_eq!(restriction.missing_courses(), ["CSE014"]);
    assert_eq!(result.skipped[0].reason, "Missing prerequisites: CSE014");
}

#[test]
fn test_credit_cap_stops_at_twelve() {
    let catalog: CourseCatalog = (1..=10)
        .map(|i| Course::new(format!("GEN{i:03}"), format!("General {i}"), 3))
        .collect();
    let result = RecommendationEngine::default().evaluate(&catalog, &profile(1.5, "Fall", &[], &[]));

    assert_eq!(result.max_credits, 12);
    assert_eq!(result.recommended.len(), 4);
    assert_eq!(result.total_credits, 12);
    assert_eq!(result.skipped.len(), 6);
    assert!(result.skipped.iter().all(|s| s.gate == Gate::CreditLimit));
    assert_eq!(result.skipped[0].reason, "Would exceed credit limit (15 > 12)");
}

#[test]
fn test_other_track_is_always_skipped() {
    let variants = [
        Course::new("EEE141", "Circuits", 3).on_track("Electrical Engineering"),
        Course::new("EEE141", "Circuits", 0)
            .on_track("Electrical Engineering")
            .offered_in("Fall"),
        Course::new("EEE241", "Signals", 3)
            .on_track("Electrical Engineering")
            .with_prerequisite("EEE141")
            .with_corequisite("EEE241L"),
    ];

    for course in variants {
        let catalog: CourseCatalog = vec![course].into();
        let result =
            RecommendationEngine::default().evaluate(&catalog, &profile(4.0, "Fall", &[], &[]));
        let restriction = result.explanations[0].restriction().unwrap();
        assert_eq!(restriction.reason(), "track_mismatch");
        assert!(matches!(
            restriction,
            Restriction::TrackMismatch { current_track, course_track }
                if current_track == "Computer Engineering" && course_track == "Electrical Engineering"
        ));
    }
}

#[test]
fn test_corequisite_order_asymmetry() {
    let lab = Course::new("CSE014L", "Programming Lab", 1);
    let lecture = Course::new("CSE014", "Programming", 3).with_corequisite("CSE014L");
    let student = profile(3.0, "Fall", &[], &[]);
    let engine = RecommendationEngine::default();

    // Lab first: the lecture sees it as accepted
    let lab_first: CourseCatalog = vec![lab.clone(), lecture.clone()].into();
    let result = engine.evaluate(&lab_first, &student);
    assert_eq!(codes(&result), vec!["CSE014L", "CSE014"]);
    let details = result.explanation("CSE014").unwrap().details().unwrap();
    assert_eq!(details.corequisites_concurrent, vec!["CSE014L"]);

    // Lecture first: rejected even though the lab is accepted afterwards
    let lecture_first: CourseCatalog = vec![lecture, lab].into();
    let result = engine.evaluate(&lecture_first, &student);
    assert_eq!(codes(&result), vec!["CSE014L"]);
    let restriction = result.explanation("CSE014").unwrap().restriction().unwrap();
    assert_eq!(restriction.gate(), Gate::Corequisites);
    assert_eq!(restriction.missing_courses(), ["CSE014L"]);
}

#[test]
fn test_gate_order_first_failure_wins() {
    // Failed, off-track, wrong term and missing prerequisites at once
    let course = Course::new("EEE241", "Signals", 3)
        .on_track("Electrical Engineering")
        .offered_in("Spring")
        .with_prerequisite("EEE141");
    let catalog: CourseCatalog = vec![course].into();
    let engine = RecommendationEngine::default();

    let failed = engine.evaluate(&catalog, &profile(3.0, "Fall", &[], &["EEE241"]));
    assert_eq!(failed.skipped[0].gate, Gate::PreviouslyFailed);
    assert_eq!(
        failed.skipped[0].reason,
        "Course previously failed - may need retaking"
    );

    let both = engine.evaluate(&catalog, &profile(3.0, "Fall", &["EEE241"], &["EEE241"]));
    assert_eq!(both.skipped[0].gate, Gate::AlreadyPassed);

    let clean = engine.evaluate(&catalog, &profile(3.0, "Fall", &[], &[]));
    assert_eq!(clean.skipped[0].gate, Gate::Track);
}

#[test]
fn test_partition_and_credit_invariants_on_sample() {
    let catalog = sample_catalog();
    let engine = RecommendationEngine::default();

    for cgpa in [0.0, 1.99, 2.0, 2.5, 3.0, 3.01, 4.0] {
        for semester in ["Fall", "Spring", "Summer"] {
            for passed in [&[][..], &["MAT111", "CSE014", "CSE014L", "PHY101", "PHY101L"][..]] {
                let student = profile(cgpa, semester, passed, &["ENG101"]);
                let result = engine.evaluate(&catalog, &student);

                assert_eq!(result.recommended.len() + result.skipped.len(), catalog.len());
                assert_eq!(result.explanations.len(), catalog.len());
                let sum: u32 = result.recommended.iter().map(|r| r.credit_hours).sum();
                assert_eq!(result.total_credits, sum);
                assert!(result.total_credits <= result.max_credits);
                assert_eq!(result.max_credits, max_credits(cgpa));

                for (course, explanation) in catalog.iter().zip(&result.explanations) {
                    assert_eq!(course.code, explanation.code);
                    assert_eq!(
                        explanation.is_recommended(),
                        result.is_recommended(&course.code)
                    );
                }
            }
        }
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    let catalog = sample_catalog();
    let engine = RecommendationEngine::default();
    let student = profile(2.7, "Fall", &["MAT111", "PHY101", "PHY101L"], &["CSE121"]);

    let first = engine.evaluate(&catalog, &student);
    let second = engine.evaluate(&catalog, &student);
    assert_eq!(first, second);
}

#[test]
fn test_sample_fall_plan() {
    let catalog = sample_catalog();
    let result = RecommendationEngine::default().evaluate(&catalog, &profile(3.5, "Fall", &[], &[]));

    assert_eq!(codes(&result), vec!["MAT111", "PHY101L", "ENG101", "HUM103"]);
    assert_eq!(result.total_credits, 10);
    assert_eq!(result.remaining_credits(), 8);

    let gate_of = |code: &str| {
        result
            .explanation(code)
            .and_then(|e| e.restriction())
            .map(Restriction::gate)
    };
    assert_eq!(gate_of("PHY101"), Some(Gate::Corequisites));
    assert_eq!(gate_of("CSE014"), Some(Gate::Corequisites));
    assert_eq!(gate_of("CSE014L"), Some(Gate::Corequisites));
    assert_eq!(gate_of("MAT112"), Some(Gate::Semester));
    assert_eq!(gate_of("CSE121"), Some(Gate::Prerequisites));
    assert_eq!(gate_of("CSE299"), Some(Gate::Semester));
    assert_eq!(gate_of("EEE141"), Some(Gate::Track));
    assert_eq!(gate_of("STA201"), Some(Gate::Prerequisites));
}

#[test]
fn test_custom_track_policy() {
    let catalog = sample_catalog();
    let engine = RecommendationEngine::new(TrackPolicy::new(
        "Electrical Engineering",
        ["All", "Electrical Engineering"],
    ));
    let result = engine.evaluate(&catalog, &profile(3.5, "Fall", &["PHY101"], &[]));

    assert!(result.is_recommended("EEE141"));
    let cse = result.explanation("CSE014").unwrap();
    assert!(matches!(
        &cse.outcome,
        Outcome::Restricted(Restriction::TrackMismatch { current_track, .. })
            if current_track == "Electrical Engineering"
    ));
}
