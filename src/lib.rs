//! Course eligibility advising
//!
//! Loads a course catalog, runs every course through a fixed chain of
//! eligibility gates for one student, and caps the term load by CGPA.
//! The CLI in `src/cli` is a thin shell over this library.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
