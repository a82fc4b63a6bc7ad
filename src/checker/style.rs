use crate::rules::RuleSet;

use super::issue::{Issue, IssueCategory, excerpt};

/// Display bound for style-report excerpts, matching the report's compact
/// line width.
pub const STYLE_EXCERPT_LIMIT: usize = 50;

/// Line scanner for the formulaic-phrasing blacklist. Owns its compiled rule
/// set; the set is injected rather than read from a global so the scan logic
/// is testable in isolation.
pub struct StyleChecker {
    rules: RuleSet,
}

impl StyleChecker {
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Scan a document line by line against every rule, in family order.
    ///
    /// Issues are ordered by ascending line number, then rule declaration
    /// order. A line matching several rules yields one issue per rule; a line
    /// matching one rule several times yields only the first occurrence.
    #[must_use]
    pub fn check(&self, content: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            for rule in &self.rules {
                if let Some(matched) = rule.first_match(line) {
                    issues.push(Issue {
                        line_number: idx + 1,
                        matched_text: matched.to_string(),
                        excerpt: excerpt(line, STYLE_EXCERPT_LIMIT),
                        description: rule.description().to_string(),
                        category: IssueCategory::Style,
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
