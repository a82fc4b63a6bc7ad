mod issue;
mod pov;
mod style;

pub use issue::{Issue, IssueCategory, excerpt};
pub use pov::{PovChecker, PovFileReport, PovOutcome, PovScanOutcome};
pub use style::StyleChecker;

use std::path::PathBuf;

use serde::Serialize;

/// Outcome of scanning one document. An unreadable document is a distinguished
/// error entry, never silently treated as clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    Scanned { issues: Vec<Issue> },
    Unreadable { message: String },
}

/// One document's scan result, consumed read-only by the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: ScanOutcome,
}

impl FileReport {
    #[must_use]
    pub fn scanned(path: PathBuf, issues: Vec<Issue>) -> Self {
        Self {
            path,
            outcome: ScanOutcome::Scanned { issues },
        }
    }

    #[must_use]
    pub fn unreadable(path: PathBuf, message: String) -> Self {
        Self {
            path,
            outcome: ScanOutcome::Unreadable { message },
        }
    }

    /// Number of report entries this document contributes to the grand total.
    /// An unreadable document counts as one entry.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        match &self.outcome {
            ScanOutcome::Scanned { issues } => issues.len(),
            ScanOutcome::Unreadable { .. } => 1,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        matches!(&self.outcome, ScanOutcome::Scanned { issues } if issues.is_empty())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
