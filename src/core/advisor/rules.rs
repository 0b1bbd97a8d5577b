//! Eligibility gates and the per-run evaluation context
//!
//! A gate is a pure function of a course and the [`EvaluationContext`]. The
//! chain order is fixed by [`Gate::ALL`]; the first gate returning
//! [`Verdict::Reject`] decides the course.

use super::explanation::{Recommendation, RecommendationDetails, Restriction};
use crate::core::models::{Course, StudentProfile};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Offering value that matches every term
pub const ANY_SEMESTER: &str = "both";

/// One rule of the eligibility chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    /// Reject courses the student already passed
    AlreadyPassed,
    /// Reject courses the student failed
    PreviouslyFailed,
    /// Reject courses outside the eligible tracks
    Track,
    /// Reject courses not offered in the target term
    Semester,
    /// Reject courses with unpassed prerequisites
    Prerequisites,
    /// Reject courses with unsatisfied corequisites
    Corequisites,
    /// Reject courses that would exceed the credit cap
    CreditLimit,
}

impl Gate {
    /// Every gate, in evaluation order
    pub const ALL: [Self; 7] = [
        Self::AlreadyPassed,
        Self::PreviouslyFailed,
        Self::Track,
        Self::Semester,
        Self::Prerequisites,
        Self::Corequisites,
        Self::CreditLimit,
    ];

    /// Reason tag used in explanations
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::AlreadyPassed => "already_passed",
            Self::PreviouslyFailed => "previously_failed",
            Self::Track => "track_mismatch",
            Self::Semester => "semester_mismatch",
            Self::Prerequisites => "missing_prerequisites",
            Self::Corequisites => "missing_corequisites",
            Self::CreditLimit => "credit_limit",
        }
    }

    /// Apply this gate to `course`
    #[must_use]
    pub fn check(self, course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
        match self {
            Self::AlreadyPassed => already_passed(course, ctx),
            Self::PreviouslyFailed => previously_failed(course, ctx),
            Self::Track => track_eligible(course, ctx),
            Self::Semester => semester_eligible(course, ctx),
            Self::Prerequisites => prerequisites_met(course, ctx),
            Self::Corequisites => corequisites_met(course, ctx),
            Self::CreditLimit => within_credit_limit(course, ctx),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Result of one gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The course passes this gate
    Accept,
    /// The course is rejected, with the reason
    Reject(Restriction),
}

impl Verdict {
    /// Whether the gate passed
    #[must_use]
    pub const fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Program tracks a student may take courses from.
///
/// A course track is eligible when it contains (case-insensitively) any of
/// the configured substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPolicy {
    label: String,
    eligible: Vec<String>,
}

impl TrackPolicy {
    /// Build a policy.
    ///
    /// # Arguments
    /// * `label` - The student's program name, reported in `track_mismatch` details
    /// * `eligible` - Substrings that make a course track eligible; blank entries are ignored
    #[must_use]
    pub fn new<I, S>(label: impl Into<String>, eligible: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            label: label.into(),
            eligible: eligible
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Computer Engineering students: tracks mentioning "all" or "computer engineering"
    #[must_use]
    pub fn computer_engineering() -> Self {
        Self::new("Computer Engineering", ["all", "computer engineering"])
    }

    /// The student's program label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lowercased eligible substrings
    #[must_use]
    pub fn eligible_tracks(&self) -> &[String] {
        &self.eligible
    }

    /// Whether a course with `program_track` may be taken.
    /// An empty allow-list admits no track.
    #[must_use]
    pub fn is_eligible(&self, program_track: &str) -> bool {
        let track = program_track.to_lowercase();
        self.eligible.iter().any(|allowed| track.contains(allowed))
    }
}

impl Default for TrackPolicy {
    fn default() -> Self {
        Self::computer_engineering()
    }
}

/// Running state of one evaluation pass.
///
/// Created fresh for every run; the corequisite and credit gates read the
/// courses accepted so far, which is what makes results depend on catalog order.
#[derive(Debug, Clone)]
pub struct EvaluationContext<'a> {
    profile: &'a StudentProfile,
    tracks: &'a TrackPolicy,
    max_credits: u32,
    total_credits: u32,
    accepted: Vec<Recommendation>,
    accepted_codes: HashSet<String>,
}

impl<'a> EvaluationContext<'a> {
    /// Start a pass with nothing accepted
    #[must_use]
    pub fn new(profile: &'a StudentProfile, tracks: &'a TrackPolicy, max_credits: u32) -> Self {
        Self {
            profile,
            tracks,
            max_credits,
            total_credits: 0,
            accepted: Vec::new(),
            accepted_codes: HashSet::new(),
        }
    }

    /// The student being evaluated
    #[must_use]
    pub const fn profile(&self) -> &StudentProfile {
        self.profile
    }

    /// Track policy in force
    #[must_use]
    pub const fn tracks(&self) -> &TrackPolicy {
        self.tracks
    }

    /// Credit cap for this run
    #[must_use]
    pub const fn max_credits(&self) -> u32 {
        self.max_credits
    }

    /// Credits accepted so far
    #[must_use]
    pub const fn total_credits(&self) -> u32 {
        self.total_credits
    }

    /// Courses accepted so far, in catalog order
    #[must_use]
    pub fn accepted(&self) -> &[Recommendation] {
        &self.accepted
    }

    /// Whether `code` was accepted earlier in this pass
    #[must_use]
    pub fn is_accepted(&self, code: &str) -> bool {
        self.accepted_codes.contains(code)
    }

    /// Whether `code` is passed or accepted earlier in this pass
    #[must_use]
    pub fn is_satisfied(&self, code: &str) -> bool {
        self.profile.has_passed(code) || self.is_accepted(code)
    }

    /// Acceptance details for `course`, computed against the current state
    #[must_use]
    pub fn recommendation_details(&self, course: &Course) -> RecommendationDetails {
        let passed = |code: &&String| self.profile.has_passed(code);
        RecommendationDetails {
            prerequisites_met: course.prerequisites.iter().filter(passed).cloned().collect(),
            corequisites_met: course.corequisites.iter().filter(passed).cloned().collect(),
            corequisites_concurrent: course
                .corequisites
                .iter()
                .filter(|code| !self.profile.has_passed(code) && self.is_accepted(code))
                .cloned()
                .collect(),
            semester_match: course.semester_offered.clone(),
            track_match: course.program_track.clone(),
        }
    }

    /// Record `course` as accepted and add its credits
    pub fn accept(&mut self, course: &Course) {
        self.total_credits = self.total_credits.saturating_add(course.credit_hours);
        self.accepted_codes.insert(course.code.clone());
        self.accepted.push(Recommendation::from(course));
    }

    /// Give up the accepted list
    #[must_use]
    pub fn into_accepted(self) -> Vec<Recommendation> {
        self.accepted
    }
}

fn already_passed(course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
    if ctx.profile.has_passed(&course.code) {
        Verdict::Reject(Restriction::already_passed())
    } else {
        Verdict::Accept
    }
}

fn previously_failed(course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
    if ctx.profile.has_failed(&course.code) {
        Verdict::Reject(Restriction::previously_failed())
    } else {
        Verdict::Accept
    }
}

fn track_eligible(course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
    if ctx.tracks.is_eligible(&course.program_track) {
        Verdict::Accept
    } else {
        Verdict::Reject(Restriction::TrackMismatch {
            current_track: ctx.tracks.label().to_string(),
            course_track: course.program_track.clone(),
        })
    }
}

fn semester_eligible(course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
    let offered = course.semester_offered.as_str();
    if offered.eq_ignore_ascii_case(&ctx.profile.semester)
        || offered.eq_ignore_ascii_case(ANY_SEMESTER)
    {
        Verdict::Accept
    } else {
        Verdict::Reject(Restriction::SemesterMismatch {
            current_semester: ctx.profile.semester.clone(),
            offered_semester: course.semester_offered.clone(),
        })
    }
}

fn prerequisites_met(course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
    let missing: Vec<String> = course
        .prerequisites
        .iter()
        .filter(|code| !ctx.profile.has_passed(code))
        .cloned()
        .collect();
    if missing.is_empty() {
        Verdict::Accept
    } else {
        Verdict::Reject(Restriction::MissingPrerequisites {
            missing_courses: missing,
            required_courses: course.prerequisites.clone(),
        })
    }
}

fn corequisites_met(course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
    let missing: Vec<String> = course
        .corequisites
        .iter()
        .filter(|code| !ctx.is_satisfied(code))
        .cloned()
        .collect();
    if missing.is_empty() {
        Verdict::Accept
    } else {
        Verdict::Reject(Restriction::MissingCorequisites {
            missing_courses: missing,
            required_courses: course.corequisites.clone(),
        })
    }
}

fn within_credit_limit(course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
    if ctx.total_credits.saturating_add(course.credit_hours) <= ctx.max_credits {
        Verdict::Accept
    } else {
        Verdict::Reject(Restriction::CreditLimit {
            current_credits: ctx.total_credits,
            course_credits: course.credit_hours,
            max_credits: ctx.max_credits,
        })
    }
}
