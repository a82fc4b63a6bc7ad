use serde::Serialize;

/// Which rule family produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Formulaic phrasing blacklist hit.
    Style,
    /// Interior-thought description attributed to a non-POV character.
    PovViolation,
    /// Omniscient narration revealing what the POV character cannot know.
    KnowledgeBoundary,
}

impl IssueCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Style => "句式黑名单",
            Self::PovViolation => "POV越界",
            Self::KnowledgeBoundary => "知识边界",
        }
    }
}

/// One detected rule violation at one line of one document. Created only by
/// the checkers, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// 1-based line number within the scanned document.
    pub line_number: usize,
    /// The first matching substring on the line. Later matches of the same
    /// rule on the same line are not recorded.
    pub matched_text: String,
    /// Trimmed, length-bounded preview of the offending line, for human
    /// review only. Matching always runs against the raw line.
    pub excerpt: String,
    /// User-facing description of the rule that fired.
    pub description: String,
    pub category: IssueCategory,
}

/// Bound a line to `limit` characters for display, trimming surrounding
/// whitespace and appending a marker when content was cut.
#[must_use]
pub fn excerpt(line: &str, limit: usize) -> String {
    let trimmed = line.trim();
    if trimmed.chars().count() <= limit {
        trimmed.to_string()
    } else {
        let mut cut: String = trimmed.chars().take(limit).collect();
        cut.push_str("...");
        cut
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
