//! Single-pass recommendation engine

use super::credit_policy::CreditPolicy;
use super::explanation::{Explanation, Recommendation, SkipRecord};
use super::rules::{EvaluationContext, Gate, TrackPolicy, Verdict};
use crate::core::models::{Course, CourseCatalog, StudentProfile};
use crate::{debug, info};
use serde::Serialize;

/// Everything one evaluation run produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisingResult {
    /// Accepted courses, in catalog order
    pub recommended: Vec<Recommendation>,
    /// Rejected courses, in catalog order
    pub skipped: Vec<SkipRecord>,
    /// Sum of recommended credit hours
    pub total_credits: u32,
    /// The student's credit cap
    pub max_credits: u32,
    /// One explanation per catalog course, in catalog order
    pub explanations: Vec<Explanation>,
}

impl AdvisingResult {
    /// Credits left under the cap
    #[must_use]
    pub const fn remaining_credits(&self) -> u32 {
        self.max_credits.saturating_sub(self.total_credits)
    }

    /// Whether `code` was recommended
    #[must_use]
    pub fn is_recommended(&self, code: &str) -> bool {
        self.recommended.iter().any(|r| r.code == code)
    }

    /// Explanation of the first catalog course with `code`
    #[must_use]
    pub fn explanation(&self, code: &str) -> Option<&Explanation> {
        self.explanations.iter().find(|e| e.code == code)
    }

    /// Explanations of recommended courses
    pub fn recommended_explanations(&self) -> impl Iterator<Item = &Explanation> {
        self.explanations.iter().filter(|e| e.is_recommended())
    }

    /// Explanations of rejected courses
    pub fn restricted_explanations(&self) -> impl Iterator<Item = &Explanation> {
        self.explanations.iter().filter(|e| !e.is_recommended())
    }

    /// Split into `(recommended, skipped, total_credits, max_credits, explanations)`
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        Vec<Recommendation>,
        Vec<SkipRecord>,
        u32,
        u32,
        Vec<Explanation>,
    ) {
        (
            self.recommended,
            self.skipped,
            self.total_credits,
            self.max_credits,
            self.explanations,
        )
    }
}

/// Classifies catalog courses into recommended and skipped for one student.
///
/// The engine keeps only configuration; every call to
/// [`evaluate`](Self::evaluate) starts from an empty [`EvaluationContext`], so
/// one engine can serve any number of independent queries.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    tracks: TrackPolicy,
    credit_policy: CreditPolicy,
}

impl RecommendationEngine {
    /// Engine restricted to the given tracks
    #[must_use]
    pub fn new(tracks: TrackPolicy) -> Self {
        Self {
            tracks,
            credit_policy: CreditPolicy,
        }
    }

    /// Track policy in force
    #[must_use]
    pub const fn track_policy(&self) -> &TrackPolicy {
        &self.tracks
    }

    /// Evaluate every catalog course, in order, for `profile`.
    ///
    /// Each course is rejected by the first failing gate of [`Gate::ALL`] or
    /// accepted when all pass. A corequisite counts as satisfied only when it
    /// is passed or was accepted earlier in this pass, and the credit cap is
    /// filled greedily, so later smaller courses may still fit after a large
    /// one is skipped.
    #[must_use]
    pub fn evaluate(&self, catalog: &CourseCatalog, profile: &StudentProfile) -> AdvisingResult {
        let max_credits = self.credit_policy.max_credits(profile.cgpa);
        let mut ctx = EvaluationContext::new(profile, &self.tracks, max_credits);
        let mut skipped = Vec::new();
        let mut explanations = Vec::with_capacity(catalog.len());

        for course in catalog {
            match Self::run_gates(course, &ctx) {
                Verdict::Accept => {
                    debug!("{}: recommended ({} credits)", course.code, course.credit_hours);
                    let details = ctx.recommendation_details(course);
                    ctx.accept(course);
                    explanations.push(Explanation::recommended(course, details));
                }
                Verdict::Reject(restriction) => {
                    debug!("{}: {} ({restriction})", course.code, restriction.reason());
                    skipped.push(SkipRecord::new(course, &restriction));
                    explanations.push(Explanation::restricted(course, restriction));
                }
            }
        }

        let total_credits = ctx.total_credits();
        let recommended = ctx.into_accepted();
        info!(
            "Advised {} courses: {} recommended, {} skipped, {total_credits}/{max_credits} credits",
            catalog.len(),
            recommended.len(),
            skipped.len()
        );

        AdvisingResult {
            recommended,
            skipped,
            total_credits,
            max_credits,
            explanations,
        }
    }

    /// Run the chain for one course, stopping at the first rejection
    #[must_use]
    pub fn run_gates(course: &Course, ctx: &EvaluationContext<'_>) -> Verdict {
        Gate::ALL
            .iter()
            .map(|gate| gate.check(course, ctx))
            .find(|verdict| !verdict.is_accept())
            .unwrap_or(Verdict::Accept)
    }
}
