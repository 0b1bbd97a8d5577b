//! Course eligibility advisor
//!
//! Given a [`CourseCatalog`](crate::core::models::CourseCatalog) and a
//! [`StudentProfile`](crate::core::models::StudentProfile), the
//! [`RecommendationEngine`] walks the catalog once, in order, and sorts each
//! course into recommended or skipped while recording an [`Explanation`].
//!
//! The gate chain, in order:
//! 1. already passed
//! 2. previously failed
//! 3. track eligibility ([`TrackPolicy`])
//! 4. semester offering
//! 5. prerequisites passed
//! 6. corequisites passed or recommended earlier in the pass
//! 7. credit cap ([`CreditPolicy`])
//!
//! The advisor performs no I/O and never fails.

pub mod credit_policy;
pub mod engine;
pub mod explanation;
pub mod rules;

pub use credit_policy::{max_credits, CreditPolicy};
pub use engine::{AdvisingResult, RecommendationEngine};
pub use explanation::{
    Explanation, Outcome, Recommendation, RecommendationDetails, Restriction, SkipRecord,
};
pub use rules::{EvaluationContext, Gate, TrackPolicy, Verdict};
