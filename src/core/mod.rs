//! Core advising functionality

pub mod advisor;
pub mod config;
pub mod export;
pub mod loader;
pub mod models;
pub mod report;

/// Returns the current version of the `course-advisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
