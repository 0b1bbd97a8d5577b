//! CLI command handlers for `courseadvisor`.
//!
//! Each command is implemented in its own submodule.

pub mod advise;
pub mod catalog;
pub mod config;

use course_advisor::config::Config;
use course_advisor::core::loader::parse_catalog_csv;
use course_advisor::core::models::CourseCatalog;
use course_advisor::error;

/// Load the catalog named by `advising.catalog`
fn load_catalog(config: &Config) -> Result<CourseCatalog, String> {
    let path = &config.advising.catalog;
    if path.trim().is_empty() {
        return Err("✗ No catalog configured; pass --catalog FILE or set `catalog`".to_string());
    }
    parse_catalog_csv(path).map_err(|e| {
        error!("Failed to load catalog {path}: {e}");
        format!("✗ {e}")
    })
}
