//! Configuration module for `course_advisor`

use crate::core::advisor::TrackPolicy;
use crate::core::loader::parse_course_list;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the configuration directory
const DIR_VARIABLE: &str = "$COURSE_ADVISOR";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Advising rules configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisingConfig {
    /// Default catalog CSV
    #[serde(default)]
    pub catalog: String,
    /// The student's program, shown in track mismatch explanations
    #[serde(default)]
    pub track_label: String,
    /// Substrings marking a course track as eligible (case-insensitive)
    #[serde(default)]
    pub eligible_tracks: Vec<String>,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for recommendation CSV exports
    #[serde(default)]
    pub exports_dir: String,
    /// Directory for rendered advising reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Advising settings
    #[serde(default)]
    pub advising: AdvisingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override default catalog path
    pub catalog: Option<String>,
    /// Override exports directory
    pub exports_dir: Option<String>,
    /// Override reports directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseadvisor`
    /// - macOS: `~/Library/Application Support/courseadvisor`
    /// - Windows: `%APPDATA%\courseadvisor`
    #[must_use]
    pub fn get_advisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseadvisor")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Fields that are empty here and non-empty in `defaults` are copied, so
    /// upgrading the tool fills in newly added settings without touching
    /// existing ones.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.advising.catalog.is_empty() && !defaults.advising.catalog.is_empty() {
            self.advising.catalog.clone_from(&defaults.advising.catalog);
            changed = true;
        }
        if self.advising.track_label.is_empty() && !defaults.advising.track_label.is_empty() {
            self.advising
                .track_label
                .clone_from(&defaults.advising.track_label);
            changed = true;
        }
        if self.advising.eligible_tracks.is_empty() && !defaults.advising.eligible_tracks.is_empty()
        {
            self.advising
                .eligible_tracks
                .clone_from(&defaults.advising.eligible_tracks);
            changed = true;
        }

        if self.paths.exports_dir.is_empty() && !defaults.paths.exports_dir.is_empty() {
            self.paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file is not
    /// modified.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     catalog: Some("spring_catalog.csv".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(catalog) = &overrides.catalog {
            self.advising.catalog.clone_from(catalog);
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Track policy described by the `[advising]` section.
    ///
    /// Falls back to the Computer Engineering policy when no eligible track
    /// is configured.
    #[must_use]
    pub fn track_policy(&self) -> TrackPolicy {
        let standard = TrackPolicy::computer_engineering();
        let label = if self.advising.track_label.trim().is_empty() {
            standard.label().to_string()
        } else {
            self.advising.track_label.trim().to_string()
        };
        let policy = TrackPolicy::new(label, &self.advising.eligible_tracks);
        if policy.eligible_tracks().is_empty() {
            TrackPolicy::new(policy.label(), standard.eligible_tracks())
        } else {
            policy
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_advisor_dir`](Self::get_advisor_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_advisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_ADVISOR` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_advisor_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$COURSE_ADVISOR` is
    /// expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [logging]
    /// level = "info"
    /// file = "$COURSE_ADVISOR/advisor.log"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.advising.catalog = Self::expand_variables(&config.advising.catalog);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from
    ///   defaults and save when anything was added.
    /// - On first run: create the config directory and save the defaults.
    ///
    /// Falls back to defaults if anything fails along the way.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `track_label`,
    /// `eligible_tracks` (comma-separated), `exports_dir`, `reports_dir`.
    /// Dashed spellings (`exports-dir`) are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" => Some(self.advising.catalog.clone()),
            "track_label" | "track-label" => Some(self.advising.track_label.clone()),
            "eligible_tracks" | "eligible-tracks" => Some(self.advising.eligible_tracks.join(", ")),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value does not
    /// parse (e.g. a non-boolean `verbose`, an unknown `level`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                if crate::logger::Level::parse(value).is_none() {
                    return Err(format!("Invalid log level: '{value}'"));
                }
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog" => self.advising.catalog = value.to_string(),
            "track_label" | "track-label" => self.advising.track_label = value.to_string(),
            "eligible_tracks" | "eligible-tracks" => {
                let tracks = parse_course_list(value);
                if tracks.is_empty() {
                    return Err("eligible_tracks needs at least one track".to_string());
                }
                self.advising.eligible_tracks = tracks;
            }
            "exports_dir" | "exports-dir" => self.paths.exports_dir = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" => self.advising.catalog.clone_from(&defaults.advising.catalog),
            "track_label" | "track-label" => self
                .advising
                .track_label
                .clone_from(&defaults.advising.track_label),
            "eligible_tracks" | "eligible-tracks" => self
                .advising
                .eligible_tracks
                .clone_from(&defaults.advising.eligible_tracks),
            "exports_dir" | "exports-dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[advising]")?;
        writeln!(f, "  catalog = \"{}\"", self.advising.catalog)?;
        writeln!(f, "  track_label = \"{}\"", self.advising.track_label)?;
        let tracks: Vec<String> = self
            .advising
            .eligible_tracks
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect();
        writeln!(f, "  eligible_tracks = [{}]", tracks.join(", "))?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
