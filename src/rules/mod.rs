mod builtin;

pub use builtin::{
    default_inner_thought_rules, default_knowledge_rules, default_known_characters,
    default_pov_markers, default_style_rules,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ProseGuardError, Result};

/// A single lint rule as declared in configuration: a regular-expression
/// pattern paired with a user-facing description of what fired.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleDef {
    pub pattern: String,
    pub description: String,
}

impl RuleDef {
    #[must_use]
    pub fn new(pattern: &str, description: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            description: description.to_string(),
        }
    }
}

/// A rule with its pattern compiled. Rules never mutate after compilation.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    description: String,
}

impl Rule {
    /// Compile a rule definition, failing fast on a malformed pattern.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the pattern is not a valid regex.
    pub fn compile(def: &RuleDef) -> Result<Self> {
        let regex = Regex::new(&def.pattern).map_err(|e| ProseGuardError::InvalidPattern {
            pattern: def.pattern.clone(),
            source: e,
        })?;
        Ok(Self {
            regex,
            description: def.description.clone(),
        })
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First match of this rule on a line, if any. Later matches on the same
    /// line are intentionally not reported.
    #[must_use]
    pub fn first_match<'t>(&self, line: &'t str) -> Option<&'t str> {
        self.regex.find(line).map(|m| m.as_str())
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// An ordered, immutable collection of compiled rules. Order is the family's
/// declaration order and governs issue ordering within a line.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile every definition in order. Any malformed pattern aborts the
    /// whole set.
    ///
    /// # Errors
    /// Returns `InvalidPattern` for the first pattern that fails to compile.
    pub fn compile(defs: &[RuleDef]) -> Result<Self> {
        let rules = defs.iter().map(Rule::compile).collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
