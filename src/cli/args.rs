//! CLI argument definitions for `courseadvisor`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_advisor::config::ConfigOverrides;
use course_advisor::core::report::ReportFormat;
use course_advisor::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `exports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Student profile and output options for `advise`
#[derive(Debug, Args)]
pub struct AdviseArgs {
    /// Cumulative GPA on the 0.0-4.0 scale
    #[arg(long, value_name = "CGPA", allow_negative_numbers = true)]
    pub cgpa: f64,

    /// Semester being registered for (Fall, Spring or Summer)
    #[arg(long, value_name = "SEMESTER")]
    pub semester: String,

    /// Course codes already passed (comma-separated)
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    pub passed: Vec<String>,

    /// Course codes previously failed (comma-separated)
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    pub failed: Vec<String>,

    /// Report format: text, html or json
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    pub format: ReportFormat,

    /// Report output path (text prints to stdout when omitted; other
    /// formats default to the configured `reports_dir`)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the recommendation CSV, optionally to FILE
    /// (defaults to the configured `exports_dir`)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Show the explanation lines under every course
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Recommend courses for one student and one semester.
    ///
    /// Every catalog course is either recommended or listed with the reason
    /// it was not.
    Advise(AdviseArgs),
    /// List the loaded course catalog.
    Catalog {
        /// Only list courses whose track contains TRACK (case-insensitive)
        #[arg(long, value_name = "TRACK")]
        track: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseadvisor",
    about = "Course eligibility advisor",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog path
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config catalog path (short form)
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalog`) take precedence over long-form
    /// flags (e.g., `--config-catalog`) when both are provided. `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            catalog: path_string(self.catalog.as_ref().or(self.config_catalog.as_ref())),
            exports_dir: path_string(
                self.exports_dir
                    .as_ref()
                    .or(self.config_exports_dir.as_ref()),
            ),
            reports_dir: path_string(
                self.reports_dir
                    .as_ref()
                    .or(self.config_reports_dir.as_ref()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_catalog: None,
            catalog: None,
            config_exports_dir: None,
            exports_dir: None,
            config_reports_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.catalog.is_none());
        assert!(overrides.exports_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.catalog = Some(PathBuf::from("data/catalog.csv"));
        cli.exports_dir = Some(PathBuf::from("/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.catalog, Some("data/catalog.csv".to_string()));
        assert_eq!(overrides.exports_dir, Some("/exports".to_string()));
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_catalog = Some(PathBuf::from("long.csv"));
        cli.catalog = Some(PathBuf::from("short.csv"));
        cli.config_exports_dir = Some(PathBuf::from("/long/out"));
        cli.exports_dir = Some(PathBuf::from("/short/out"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.catalog, Some("short.csv".to_string()));
        assert_eq!(overrides.exports_dir, Some("/short/out".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_catalog = Some(PathBuf::from("long.csv"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.catalog, Some("long.csv".to_string()));
        assert_eq!(overrides.reports_dir, Some("/long/reports".to_string()));
    }

    #[test]
    fn test_parse_advise_command() {
        let cli = Cli::try_parse_from([
            "courseadvisor",
            "--catalog",
            "samples/catalog.csv",
            "advise",
            "--cgpa",
            "3.2",
            "--semester",
            "Fall",
            "--passed",
            "MAT111,PHY101",
            "--format",
            "json",
            "--export",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("samples/catalog.csv")));
        let Command::Advise(advise) = cli.command else {
            panic!("expected advise command");
        };
        assert!((advise.cgpa - 3.2).abs() < f64::EPSILON);
        assert_eq!(advise.semester, "Fall");
        assert_eq!(advise.passed, vec!["MAT111", "PHY101"]);
        assert!(advise.failed.is_empty());
        assert_eq!(advise.format, ReportFormat::Json);
        assert_eq!(advise.export, Some(None));
        assert!(advise.output.is_none());
    }

    #[test]
    fn test_parse_advise_export_path() {
        let cli = Cli::try_parse_from([
            "courseadvisor",
            "advise",
            "--cgpa",
            "1.5",
            "--semester",
            "Spring",
            "--export",
            "out.csv",
        ])
        .unwrap();
        let Command::Advise(advise) = cli.command else {
            panic!("expected advise command");
        };
        assert_eq!(advise.export, Some(Some(PathBuf::from("out.csv"))));
        assert_eq!(advise.format, ReportFormat::Text);
    }
}
