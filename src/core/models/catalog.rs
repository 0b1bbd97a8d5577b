//! Ordered course catalog

use super::Course;
use serde::{Deserialize, Serialize};

/// The courses available in one evaluation, in file order.
///
/// Order is significant: the advisor walks the catalog front to back, and
/// both corequisite satisfaction and the credit cap depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    /// Append a course at the end of the catalog
    pub fn push(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Iterate courses in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// First course with the given code
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Distinct course codes in first-seen order
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.courses
            .iter()
            .map(|c| c.code.as_str())
            .filter(|code| seen.insert(*code))
            .collect()
    }

    /// Sum of credit hours over the whole catalog
    #[must_use]
    pub fn total_credit_hours(&self) -> u32 {
        self.courses.iter().map(|c| c.credit_hours).sum()
    }
}

impl From<Vec<Course>> for CourseCatalog {
    fn from(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

impl FromIterator<Course> for CourseCatalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CourseCatalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CourseCatalog {
        vec![
            Course::new("MAT111", "Calculus I", 3),
            Course::new("CSE014", "Programming I", 4),
            Course::new("MAT111", "Calculus I (duplicate)", 3),
        ]
        .into()
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = sample();
        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Calculus I", "Programming I", "Calculus I (duplicate)"]
        );
    }

    #[test]
    fn test_get_returns_first_match() {
        let catalog = sample();
        assert_eq!(catalog.get("MAT111").map(|c| c.name.as_str()), Some("Calculus I"));
        assert!(catalog.get("PHY101").is_none());
    }

    #[test]
    fn test_codes_are_distinct() {
        assert_eq!(sample().codes(), vec!["MAT111", "CSE014"]);
    }

    #[test]
    fn test_total_credit_hours() {
        assert_eq!(sample().total_credit_hours(), 10);
        assert_eq!(CourseCatalog::new().total_credit_hours(), 0);
    }
}
