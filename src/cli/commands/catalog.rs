//! Catalog command handler

use super::load_catalog;
use course_advisor::config::Config;
use course_advisor::core::models::Course;

/// Run the catalog command. Returns `false` when the catalog failed to load.
pub fn run(track: Option<&str>, config: &Config) -> bool {
    let catalog = match load_catalog(config) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("{err}");
            return false;
        }
    };

    let needle = track.map(str::to_lowercase);
    let courses: Vec<&Course> = catalog
        .iter()
        .filter(|c| {
            needle
                .as_deref()
                .map_or(true, |t| c.program_track.to_lowercase().contains(t))
        })
        .collect();

    println!(
        "{:<10} {:<36} {:>7}  {:<9} {:<22} Prerequisites",
        "Code", "Name", "Credits", "Semester", "Track"
    );
    for course in &courses {
        println!(
            "{:<10} {:<36} {:>7}  {:<9} {:<22} {}",
            course.code,
            course.name,
            course.credit_hours,
            course.semester_offered,
            course.program_track,
            Course::requisite_cell(&course.prerequisites)
        );
    }

    let credits: u32 = courses.iter().map(|c| c.credit_hours).sum();
    println!(
        "\n{} of {} courses, {credits} credit hours",
        courses.len(),
        catalog.len()
    );
    true
}
