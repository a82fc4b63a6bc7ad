use std::path::PathBuf;

use regex::Regex;
use serde::Serialize;

use crate::error::{ProseGuardError, Result};
use crate::rules::RuleSet;

use super::issue::{Issue, IssueCategory};

/// Display bound for POV-report excerpts.
pub const POV_EXCERPT_LIMIT: usize = 60;

// Unlike the style excerpt, no truncation marker here; the text renderer
// appends its own trailing ellipsis.
fn preview(line: &str) -> String {
    line.trim().chars().take(POV_EXCERPT_LIMIT).collect()
}

/// Point-of-view validator: extracts declared POV names from in-text markers
/// and flags interior-thought and omniscient-knowledge leaks.
pub struct PovChecker {
    markers: Vec<Regex>,
    inner_thought: RuleSet,
    knowledge: RuleSet,
    characters: Vec<String>,
}

/// Everything the POV report renders for one readable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PovOutcome {
    /// Declared POV names in marker order. Duplicates are not removed.
    pub declared_povs: Vec<String>,
    pub pov_issues: Vec<Issue>,
    pub knowledge_issues: Vec<Issue>,
}

impl PovOutcome {
    #[must_use]
    pub fn total_issues(&self) -> usize {
        self.pov_issues.len() + self.knowledge_issues.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.pov_issues.is_empty() && self.knowledge_issues.is_empty()
    }
}

/// Per-document POV result, mirroring `FileReport` for the style checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PovFileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: PovScanOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PovScanOutcome {
    Validated(PovOutcome),
    Unreadable { message: String },
}

impl PovChecker {
    /// Build a checker from marker patterns, the two POV rule families, and
    /// the character registry.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if a marker pattern fails to compile.
    pub fn new(
        marker_patterns: &[String],
        inner_thought: RuleSet,
        knowledge: RuleSet,
        characters: Vec<String>,
    ) -> Result<Self> {
        let markers = marker_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ProseGuardError::InvalidPattern {
                    pattern: pattern.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            markers,
            inner_thought,
            knowledge,
            characters,
        })
    }

    /// Collect declared POV names from every marker style, over the whole
    /// document text. One declaration matched by several marker styles is
    /// collected once per style.
    #[must_use]
    pub fn extract_declarations(&self, content: &str) -> Vec<String> {
        let mut povs = Vec::new();
        for marker in &self.markers {
            for captures in marker.captures_iter(content) {
                if let Some(name) = captures.get(1) {
                    povs.push(name.as_str().to_string());
                }
            }
        }
        povs
    }

    /// Run both POV passes over a document.
    #[must_use]
    pub fn check(&self, content: &str) -> PovOutcome {
        let declared_povs = self.extract_declarations(content);
        let pov_issues = self.check_pov_violations(content, &declared_povs);
        let knowledge_issues = self.check_knowledge_boundary(content);

        PovOutcome {
            declared_povs,
            pov_issues,
            knowledge_issues,
        }
    }

    /// Interior-thought pass: a line matching an interior-thought construct is
    /// a violation when it also names a registry character whose name is not
    /// a substring of the concatenated declared-POV string.
    ///
    /// The substring containment is deliberately conservative; overlapping
    /// names can misfire in both directions.
    fn check_pov_violations(&self, content: &str, declared_povs: &[String]) -> Vec<Issue> {
        let declared = declared_povs.join(" ");
        let mut issues = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            for rule in &self.inner_thought {
                let Some(matched) = rule.first_match(line) else {
                    continue;
                };

                // First undeclared registry character on the line wins.
                let offender = self
                    .characters
                    .iter()
                    .find(|name| line.contains(name.as_str()) && !declared.contains(name.as_str()));

                if let Some(name) = offender {
                    issues.push(Issue {
                        line_number: idx + 1,
                        matched_text: matched.to_string(),
                        excerpt: preview(line),
                        description: format!("非POV角色'{name}'的内心描写"),
                        category: IssueCategory::PovViolation,
                    });
                }
            }
        }

        issues
    }

    /// Knowledge-boundary pass: omniscient-narration markers, independent of
    /// any declaration.
    fn check_knowledge_boundary(&self, content: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            for rule in &self.knowledge {
                if let Some(matched) = rule.first_match(line) {
                    issues.push(Issue {
                        line_number: idx + 1,
                        matched_text: matched.to_string(),
                        excerpt: preview(line),
                        description: rule.description().to_string(),
                        category: IssueCategory::KnowledgeBoundary,
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
#[path = "pov_tests.rs"]
mod tests;
