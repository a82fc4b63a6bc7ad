use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{ProseGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Selects manuscript documents by extension (case-insensitive) and drops
/// anything matching a user exclude glob. An empty extension list means every
/// file qualifies.
pub struct GlobFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl GlobFilter {
    /// # Errors
    /// Returns `InvalidGlob` for an exclude pattern that fails to parse.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            builder.add(Glob::new(pattern).map_err(|e| ProseGuardError::InvalidGlob {
                pattern: pattern.clone(),
                source: e,
            })?);
        }
        let excludes = builder.build().map_err(|e| ProseGuardError::InvalidGlob {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        let extensions = extensions.into_iter().map(|e| e.to_lowercase()).collect();

        Ok(Self {
            extensions,
            excludes,
        })
    }

    fn extension_matches(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            })
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.extension_matches(path) && !self.excludes.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
