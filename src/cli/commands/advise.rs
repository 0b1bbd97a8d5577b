//! Advise command handler
//!
//! Builds the student profile from flags, evaluates the configured catalog
//! and prints or writes the report (and optionally the CSV export).

use super::load_catalog;
use crate::args::AdviseArgs;
use course_advisor::config::Config;
use course_advisor::core::{
    advisor::{AdvisingResult, RecommendationEngine},
    export::{default_export_file_name, export_recommendations_csv},
    models::{CourseCatalog, StudentProfile},
    report::{ReportContext, ReportFormat, ReportGenerator},
};
use course_advisor::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Run the advise command. Returns `false` when the run failed.
pub fn run(args: &AdviseArgs, config: &Config, verbose: bool) -> bool {
    match advise(args, config, verbose) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

fn advise(args: &AdviseArgs, config: &Config, verbose: bool) -> Result<(), String> {
    let profile = StudentProfile::new(
        args.cgpa,
        args.semester.as_str(),
        &args.passed,
        &args.failed,
    );
    profile.validate().map_err(|e| {
        error!("Invalid student profile: {e}");
        format!("✗ {e}")
    })?;

    let catalog = load_catalog(config)?;
    info!(
        "Catalog loaded: {} ({} courses)",
        config.advising.catalog,
        catalog.len()
    );

    let tracks = config.track_policy();
    let engine = RecommendationEngine::new(tracks);
    let result = engine.evaluate(&catalog, &profile);
    verbose!(
        "Evaluated {} courses: {} recommended, {} skipped",
        catalog.len(),
        result.recommended.len(),
        result.skipped.len()
    );

    let ctx = ReportContext::new(&catalog, &profile, &result, engine.track_policy().label());
    write_report(&ctx, args, config, verbose)?;

    if let Some(export) = &args.export {
        let path = export.clone().unwrap_or_else(|| {
            PathBuf::from(&config.paths.exports_dir).join(default_export_file_name(&profile))
        });
        export_csv(&catalog, &profile, &result, &path)?;
        println!("✓ Recommendations exported to: {}", path.display());
    }
    Ok(())
}

fn write_report(
    ctx: &ReportContext,
    args: &AdviseArgs,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let reporter = args.format.reporter(args.explain || verbose);

    let output = match (&args.output, args.format) {
        (Some(path), _) => Some(path.clone()),
        (None, ReportFormat::Text) => None,
        (None, format) => Some(
            PathBuf::from(&config.paths.reports_dir).join(
                Path::new(&default_export_file_name(ctx.profile)).with_extension(format.extension()),
            ),
        ),
    };

    match output {
        Some(path) => {
            reporter.generate(ctx, &path).map_err(|e| {
                error!("Report generation failed for {}: {e}", path.display());
                format!("✗ Failed to write report {}: {e}", path.display())
            })?;
            println!("✓ Report generated: {}", path.display());
        }
        None => {
            let text = reporter
                .render(ctx)
                .map_err(|e| format!("✗ Failed to render report: {e}"))?;
            print!("{text}");
        }
    }
    Ok(())
}

fn export_csv(
    catalog: &CourseCatalog,
    profile: &StudentProfile,
    result: &AdvisingResult,
    path: &Path,
) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create exports directory {}: {e}", parent.display())
            })?;
        }
    }
    export_recommendations_csv(catalog, profile, result, path).map_err(|e| {
        error!("Export failed for {}: {e}", path.display());
        format!("✗ {e}")
    })
}
