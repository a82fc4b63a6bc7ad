use serde::Serialize;

use crate::checker::{FileReport, PovFileReport, PovScanOutcome};
use crate::error::Result;

use super::OutputFormatter;

/// Machine-readable output for automation; the text report stays the primary
/// surface.
pub struct JsonFormatter;

#[derive(Serialize)]
struct StyleDocument<'a> {
    reports: &'a [FileReport],
    total_issues: usize,
}

#[derive(Serialize)]
struct PovDocument<'a> {
    reports: &'a [PovFileReport],
    total_issues: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let total_issues = reports.iter().map(FileReport::entry_count).sum();
        let document = StyleDocument {
            reports,
            total_issues,
        };
        let json = serde_json::to_string_pretty(&document)?;
        Ok(format!("{json}\n"))
    }

    fn format_pov(&self, reports: &[PovFileReport]) -> Result<String> {
        let total_issues = reports
            .iter()
            .map(|r| match &r.outcome {
                PovScanOutcome::Validated(outcome) => outcome.total_issues(),
                PovScanOutcome::Unreadable { .. } => 1,
            })
            .sum();
        let document = PovDocument {
            reports,
            total_issues,
        };
        let json = serde_json::to_string_pretty(&document)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
