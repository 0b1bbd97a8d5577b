//! CSV parser for course catalogs
//!
//! Expected header (column order is free, names are matched case-insensitively
//! after trimming):
//!
//! ```csv
//! Course Code,Course Name,Description,Prerequisites,Co-requisites,Credit Hours,Semester Offered,Program/Track
//! ```

use crate::core::models::{Course, CourseCatalog};
use crate::{debug, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog column names
pub mod columns {
    /// Course code column
    pub const CODE: &str = "Course Code";
    /// Course name column
    pub const NAME: &str = "Course Name";
    /// Description column
    pub const DESCRIPTION: &str = "Description";
    /// Prerequisites column
    pub const PREREQUISITES: &str = "Prerequisites";
    /// Co-requisites column
    pub const COREQUISITES: &str = "Co-requisites";
    /// Credit hours column
    pub const CREDIT_HOURS: &str = "Credit Hours";
    /// Offering term column
    pub const SEMESTER_OFFERED: &str = "Semester Offered";
    /// Program/track column
    pub const PROGRAM_TRACK: &str = "Program/Track";

    /// Every column a catalog must carry
    pub const REQUIRED: [&str; 8] = [
        CODE,
        NAME,
        DESCRIPTION,
        PREREQUISITES,
        COREQUISITES,
        CREDIT_HOURS,
        SEMESTER_OFFERED,
        PROGRAM_TRACK,
    ];
}

/// Failures while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog path does not exist
    #[error("Catalog file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV is malformed
    #[error("Malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header
    #[error("Catalog is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// No row survived cleaning
    #[error("The catalog contains no usable courses")]
    Empty,
}

/// Column positions resolved from the header row
struct HeaderIndex {
    positions: [usize; 8],
}

impl HeaderIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, CatalogLoadError> {
        let mut positions = [0; 8];
        for (slot, name) in positions.iter_mut().zip(columns::REQUIRED) {
            *slot = headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or(CatalogLoadError::MissingColumn(name))?;
        }
        Ok(Self { positions })
    }

    fn field<'r>(&self, record: &'r csv::StringRecord, column: &str) -> &'r str {
        columns::REQUIRED
            .iter()
            .position(|c| *c == column)
            .and_then(|idx| record.get(self.positions[idx]))
            .map_or("", str::trim)
    }
}

/// Parse a catalog CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns [`CatalogLoadError`] when the file is missing or unreadable, the
/// CSV is malformed or lacks a required column, or no row is usable.
pub fn parse_catalog_csv<P: AsRef<Path>>(path: P) -> Result<CourseCatalog, CatalogLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogLoadError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let catalog = parse_catalog_reader(file)?;
    debug!("Loaded {} courses from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse a catalog from any reader.
///
/// Rows are kept in file order. Rows are dropped (with a warning) when the
/// course code is blank, the credit hours are not a non-negative number, or
/// the row exactly repeats an earlier one.
///
/// # Errors
/// See [`parse_catalog_csv`].
pub fn parse_catalog_reader<R: Read>(reader: R) -> Result<CourseCatalog, CatalogLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let index = HeaderIndex::resolve(reader.headers()?)?;
    let mut catalog = CourseCatalog::new();
    let mut seen: HashSet<Course> = HashSet::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let code = index.field(&record, columns::CODE);
        if code.is_empty() {
            warn!("Catalog line {line}: missing course code, row dropped");
            continue;
        }

        let raw_credits = index.field(&record, columns::CREDIT_HOURS);
        let Some(credit_hours) = parse_credit_hours(raw_credits) else {
            warn!("Catalog line {line}: {code} has invalid credit hours '{raw_credits}', row dropped");
            continue;
        };

        let course = Course {
            code: code.to_string(),
            name: index.field(&record, columns::NAME).to_string(),
            description: index.field(&record, columns::DESCRIPTION).to_string(),
            prerequisites: parse_course_list(index.field(&record, columns::PREREQUISITES)),
            corequisites: parse_course_list(index.field(&record, columns::COREQUISITES)),
            credit_hours,
            semester_offered: index.field(&record, columns::SEMESTER_OFFERED).to_string(),
            program_track: index.field(&record, columns::PROGRAM_TRACK).to_string(),
        };

        if !seen.insert(course.clone()) {
            warn!("Catalog line {line}: duplicate row for {code}, row dropped");
            continue;
        }
        catalog.push(course);
    }

    if catalog.is_empty() {
        return Err(CatalogLoadError::Empty);
    }
    Ok(catalog)
}

/// Split a comma-separated list of course codes.
///
/// Blank input and `none` (any case) yield an empty list; codes are trimmed
/// and empty entries removed.
#[must_use]
pub fn parse_course_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Coerce a credit-hours cell to a non-negative integer.
///
/// Integers parse directly; finite non-negative reals are truncated
/// (`"3.0"` gives 3). Anything else yields `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_credit_hours(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(hours) = raw.parse::<u32>() {
        return Some(hours);
    }
    let value: f64 = raw.parse().ok()?;
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) {
        Some(value.trunc() as u32)
    } else {
        None
    }
}
