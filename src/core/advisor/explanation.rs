//! Outcome records produced for every catalog course
//!
//! Each gate of the rule chain has exactly one [`Restriction`] variant, and
//! acceptance has [`RecommendationDetails`]. An [`Explanation`] always carries
//! one of the two, so a renderer can justify any decision without re-running
//! the rules.
//!
//! Serialized explanation shape:
//!
//! ```json
//! { "code": "CSE221", "name": "Algorithms", "type": "restricted",
//!   "details": { "reason": "missing_prerequisites",
//!                "missing_courses": ["CSE014"], "required_courses": ["CSE014"] } }
//! ```

use super::rules::Gate;
use crate::core::models::Course;
use serde::Serialize;
use std::fmt;

/// Why a course was rejected, with the context needed to explain it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Restriction {
    /// The student already passed the course
    AlreadyPassed {
        /// Always "Previously completed"
        semester_passed: String,
    },
    /// The student failed the course before
    PreviouslyFailed {
        /// Always "high"
        priority: String,
        /// Always "Consider retaking"
        action_needed: String,
    },
    /// The course belongs to a track the student is not on
    TrackMismatch {
        /// The student's program label
        current_track: String,
        /// The course's track string
        course_track: String,
    },
    /// The course is not offered in the target term
    SemesterMismatch {
        /// Term the student is registering for
        current_semester: String,
        /// Term(s) the course is offered in
        offered_semester: String,
    },
    /// Some prerequisites are not passed
    MissingPrerequisites {
        /// Prerequisites not yet passed, in catalog order
        missing_courses: Vec<String>,
        /// Every prerequisite of the course
        required_courses: Vec<String>,
    },
    /// Some corequisites are neither passed nor recommended earlier in the pass
    MissingCorequisites {
        /// Corequisites still unsatisfied, in catalog order
        missing_courses: Vec<String>,
        /// Every corequisite of the course
        required_courses: Vec<String>,
    },
    /// Taking the course would push the term over the credit cap
    CreditLimit {
        /// Credits recommended so far
        current_credits: u32,
        /// Credits of this course
        course_credits: u32,
        /// The student's cap
        max_credits: u32,
    },
}

impl Restriction {
    /// `already_passed` restriction
    #[must_use]
    pub fn already_passed() -> Self {
        Self::AlreadyPassed {
            semester_passed: "Previously completed".to_string(),
        }
    }

    /// `previously_failed` restriction
    #[must_use]
    pub fn previously_failed() -> Self {
        Self::PreviouslyFailed {
            priority: "high".to_string(),
            action_needed: "Consider retaking".to_string(),
        }
    }

    /// The gate that produced this restriction
    #[must_use]
    pub const fn gate(&self) -> Gate {
        match self {
            Self::AlreadyPassed { .. } => Gate::AlreadyPassed,
            Self::PreviouslyFailed { .. } => Gate::PreviouslyFailed,
            Self::TrackMismatch { .. } => Gate::Track,
            Self::SemesterMismatch { .. } => Gate::Semester,
            Self::MissingPrerequisites { .. } => Gate::Prerequisites,
            Self::MissingCorequisites { .. } => Gate::Corequisites,
            Self::CreditLimit { .. } => Gate::CreditLimit,
        }
    }

    /// Machine-readable reason tag (e.g. `missing_prerequisites`)
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        self.gate().reason()
    }

    /// Missing course codes for requisite restrictions, empty otherwise
    #[must_use]
    pub fn missing_courses(&self) -> &[String] {
        match self {
            Self::MissingPrerequisites {
                missing_courses, ..
            }
            | Self::MissingCorequisites {
                missing_courses, ..
            } => missing_courses,
            _ => &[],
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPassed { .. } => write!(f, "Course already passed"),
            Self::PreviouslyFailed { .. } => {
                write!(f, "Course previously failed - may need retaking")
            }
            Self::TrackMismatch { course_track, .. } => {
                write!(f, "Track mismatch - {course_track}")
            }
            Self::SemesterMismatch {
                current_semester, ..
            } => write!(f, "Not offered in {current_semester} semester"),
            Self::MissingPrerequisites {
                missing_courses, ..
            } => write!(f, "Missing prerequisites: {}", missing_courses.join(", ")),
            Self::MissingCorequisites {
                missing_courses, ..
            } => write!(f, "Missing corequisites: {}", missing_courses.join(", ")),
            Self::CreditLimit {
                current_credits,
                course_credits,
                max_credits,
            } => write!(
                f,
                "Would exceed credit limit ({} > {max_credits})",
                current_credits.saturating_add(*course_credits)
            ),
        }
    }
}

/// Why a recommended course passed every gate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationDetails {
    /// Prerequisites the student passed (all of them, for a recommended course)
    pub prerequisites_met: Vec<String>,
    /// Corequisites the student passed
    pub corequisites_met: Vec<String>,
    /// Corequisites satisfied by a course recommended earlier in the same pass
    pub corequisites_concurrent: Vec<String>,
    /// The course's offering term
    pub semester_match: String,
    /// The course's track string
    pub track_match: String,
}

/// Tagged outcome of one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum Outcome {
    /// Passed every gate
    Recommended(RecommendationDetails),
    /// Rejected by one gate
    Restricted(Restriction),
}

/// Justification attached to one catalog course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// Course code
    pub code: String,
    /// Course name
    pub name: String,
    /// What happened and why
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Explanation {
    /// Explanation for a recommended course
    #[must_use]
    pub fn recommended(course: &Course, details: RecommendationDetails) -> Self {
        Self {
            code: course.code.clone(),
            name: course.name.clone(),
            outcome: Outcome::Recommended(details),
        }
    }

    /// Explanation for a rejected course
    #[must_use]
    pub fn restricted(course: &Course, restriction: Restriction) -> Self {
        Self {
            code: course.code.clone(),
            name: course.name.clone(),
            outcome: Outcome::Restricted(restriction),
        }
    }

    /// Whether the course was recommended
    #[must_use]
    pub const fn is_recommended(&self) -> bool {
        matches!(self.outcome, Outcome::Recommended(_))
    }

    /// The restriction, for rejected courses
    #[must_use]
    pub const fn restriction(&self) -> Option<&Restriction> {
        match &self.outcome {
            Outcome::Restricted(r) => Some(r),
            Outcome::Recommended(_) => None,
        }
    }

    /// The acceptance details, for recommended courses
    #[must_use]
    pub const fn details(&self) -> Option<&RecommendationDetails> {
        match &self.outcome {
            Outcome::Recommended(d) => Some(d),
            Outcome::Restricted(_) => None,
        }
    }

    /// `"recommended"` or `"restricted"`
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self.outcome {
            Outcome::Recommended(_) => "recommended",
            Outcome::Restricted(_) => "restricted",
        }
    }
}

/// One accepted course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Course code
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit hours
    pub credit_hours: u32,
}

impl From<&Course> for Recommendation {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code.clone(),
            name: course.name.clone(),
            credit_hours: course.credit_hours,
        }
    }
}

/// One rejected course with a human-readable reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipRecord {
    /// Course code
    pub code: String,
    /// Course name
    pub name: String,
    /// Gate that rejected the course
    pub gate: Gate,
    /// Rendered reason (e.g. "Missing prerequisites: CSE014")
    pub reason: String,
}

impl SkipRecord {
    /// Skip record for `course` rejected by `restriction`
    #[must_use]
    pub fn new(course: &Course, restriction: &Restriction) -> Self {
        Self {
            code: course.code.clone(),
            name: course.name.clone(),
            gate: restriction.gate(),
            reason: restriction.to_string(),
        }
    }
}
