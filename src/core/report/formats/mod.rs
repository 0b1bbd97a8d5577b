//! Report format implementations
//!
//! Provides renderers for terminal text, HTML and JSON.

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use text::TextReporter;

use super::ReportGenerator;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text, as printed in a terminal
    #[default]
    Text,
    /// Self-contained HTML page
    Html,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Renderer for this format
    #[must_use]
    pub fn reporter(self, detailed: bool) -> Box<dyn ReportGenerator> {
        match self {
            Self::Text => Box::new(TextReporter::new(detailed)),
            Self::Html => Box::new(HtmlReporter::new()),
            Self::Json => Box::new(JsonReporter::new()),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}
