//! Course model

use serde::{Deserialize, Serialize};

/// A single catalog course record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    /// Catalog code (e.g., "CSE014")
    pub code: String,

    /// Display name (e.g., "Data Structures")
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Prerequisite course codes, in catalog order
    pub prerequisites: Vec<String>,

    /// Co-requisite course codes, in catalog order
    pub corequisites: Vec<String>,

    /// Credit hours
    pub credit_hours: u32,

    /// Offering term (`Fall`, `Spring`, `Summer` or `Both`)
    pub semester_offered: String,

    /// Program or track the course belongs to (e.g., "All", "Computer Engineering")
    pub program_track: String,
}

impl Course {
    /// Create a course with no requisites, no description, offered in `Both`
    /// terms and open to `All` tracks.
    ///
    /// # Arguments
    /// * `code` - Catalog code
    /// * `name` - Display name
    /// * `credit_hours` - Credit hours
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, credit_hours: u32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: String::new(),
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            credit_hours,
            semester_offered: "Both".to_string(),
            program_track: "All".to_string(),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the offering term
    #[must_use]
    pub fn offered_in(mut self, semester: impl Into<String>) -> Self {
        self.semester_offered = semester.into();
        self
    }

    /// Set the program track
    #[must_use]
    pub fn on_track(mut self, track: impl Into<String>) -> Self {
        self.program_track = track.into();
        self
    }

    /// Add a prerequisite by course code
    pub fn add_prerequisite(&mut self, code: impl Into<String>) {
        let code = code.into();
        if !self.prerequisites.contains(&code) {
            self.prerequisites.push(code);
        }
    }

    /// Add a co-requisite by course code
    pub fn add_corequisite(&mut self, code: impl Into<String>) {
        let code = code.into();
        if !self.corequisites.contains(&code) {
            self.corequisites.push(code);
        }
    }

    /// Builder form of [`add_prerequisite`](Self::add_prerequisite)
    #[must_use]
    pub fn with_prerequisite(mut self, code: impl Into<String>) -> Self {
        self.add_prerequisite(code);
        self
    }

    /// Builder form of [`add_corequisite`](Self::add_corequisite)
    #[must_use]
    pub fn with_corequisite(mut self, code: impl Into<String>) -> Self {
        self.add_corequisite(code);
        self
    }

    /// Requisite list rendered the way the catalog file stores it
    /// (`"A, B"`, or `"None"` when empty)
    #[must_use]
    pub fn requisite_cell(codes: &[String]) -> String {
        if codes.is_empty() {
            "None".to_string()
        } else {
            codes.join(", ")
        }
    }
}
