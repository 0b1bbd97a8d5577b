//! CGPA-based credit-hour cap

/// Cap for students below 2.0
pub const PROBATION_CREDITS: u32 = 12;

/// Cap for students in `[2.0, 3.0]`
pub const STANDARD_CREDITS: u32 = 15;

/// Cap for students above 3.0
pub const HONORS_CREDITS: u32 = 18;

/// Maps a CGPA to the maximum credit hours a student may register for.
///
/// Three bands, with both 2.0 and 3.0 falling in the middle band:
///
/// | CGPA            | Cap |
/// |-----------------|-----|
/// | `< 2.0`         | 12  |
/// | `2.0 ..= 3.0`   | 15  |
/// | `> 3.0`         | 18  |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreditPolicy;

impl CreditPolicy {
    /// Maximum total credit hours for `cgpa`.
    ///
    /// Total over `f64`; a NaN CGPA compares false against both thresholds
    /// and lands in the top band. Range checks belong to profile validation.
    #[must_use]
    pub fn max_credits(self, cgpa: f64) -> u32 {
        if cgpa < 2.0 {
            PROBATION_CREDITS
        } else if cgpa <= 3.0 {
            STANDARD_CREDITS
        } else {
            HONORS_CREDITS
        }
    }
}

/// Shorthand for [`CreditPolicy::max_credits`]
#[must_use]
pub fn max_credits(cgpa: f64) -> u32 {
    CreditPolicy.max_credits(cgpa)
}
