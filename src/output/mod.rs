mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::{FileReport, PovFileReport};
use crate::error::Result;

/// Trait for rendering aggregated scan results.
pub trait OutputFormatter {
    /// Render a style-blacklist report across all scanned documents.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;

    /// Render a POV validation report across all validated chapters.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_pov(&self, reports: &[PovFileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
