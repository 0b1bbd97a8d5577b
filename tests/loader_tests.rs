//! Integration tests for catalog loading

use course_advisor::core::loader::{parse_catalog_csv, CatalogLoadError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "Course Code,Course Name,Description,Prerequisites,Co-requisites,Credit Hours,Semester Offered,Program/Track\n";

fn write_catalog(body: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.csv");
    fs::write(&path, format!("{HEADER}{body}")).expect("Failed to write catalog");
    (temp_dir, path)
}

#[test]
fn test_load_sample_catalog() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/catalog.csv");
    let catalog = parse_catalog_csv(path).expect("sample catalog should load");

    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog.courses()[0].code, "MAT111");

    let physics = catalog.get("PHY102").unwrap();
    assert_eq!(physics.prerequisites, vec!["PHY101", "MAT111"]);
    assert!(physics.corequisites.is_empty());

    let ethics = catalog.get("HUM103").unwrap();
    assert_eq!(ethics.credit_hours, 3);
    assert_eq!(ethics.semester_offered, "Both");
}

#[test]
fn test_load_drops_unusable_rows() {
    let (_dir, path) = write_catalog(concat!(
        "MAT111,Calculus I,,None,None,3,Fall,All\n",
        "MAT112,Calculus II,,MAT111,None,three,Spring,All\n",
        "MAT111,Calculus I,,None,None,3,Fall,All\n",
        "CSE014,Programming,,None,CSE014L,4,Both,Computer Engineering\n",
    ));
    let catalog = parse_catalog_csv(&path).unwrap();

    let codes: Vec<&str> = catalog.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["MAT111", "CSE014"]);
    assert_eq!(catalog.total_credit_hours(), 7);
}

#[test]
fn test_load_keeps_same_code_with_different_rows() {
    let (_dir, path) = write_catalog(concat!(
        "CSE299,Project,,None,None,3,Fall,Computer Engineering\n",
        "CSE299,Project,,None,None,3,Summer,Computer Engineering\n",
    ));
    let catalog = parse_catalog_csv(&path).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.codes(), vec!["CSE299"]);
    assert_eq!(catalog.get("CSE299").unwrap().semester_offered, "Fall");
}

#[test]
fn test_load_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("absent.csv");
    assert!(matches!(
        parse_catalog_csv(&missing),
        Err(CatalogLoadError::NotFound(p)) if p == missing
    ));

    let no_column = temp_dir.path().join("short.csv");
    fs::write(&no_column, "Course Code,Course Name,Credit Hours\nMAT111,Calc,3\n").unwrap();
    let err = parse_catalog_csv(&no_column).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Catalog is missing required column 'Description'"
    );

    let (_dir, header_only) = write_catalog("");
    assert!(matches!(
        parse_catalog_csv(&header_only),
        Err(CatalogLoadError::Empty)
    ));
}
