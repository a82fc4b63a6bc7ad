use regex::Regex;

use crate::error::{ProseGuardError, Result};
use crate::rules::RuleDef;

use super::Config;

/// Fail-fast semantic validation of a loaded configuration: every rule
/// pattern, marker, and exclude glob must compile before any scanning starts.
///
/// # Errors
/// Returns the first invalid pattern found.
pub fn validate_semantics(config: &Config) -> Result<()> {
    validate_rule_patterns(&config.style.rules)?;
    validate_rule_patterns(&config.pov.inner_thought)?;
    validate_rule_patterns(&config.pov.knowledge)?;

    for pattern in &config.pov.markers {
        compile_pattern(pattern)?;
    }

    for pattern in &config.scan.exclude {
        globset::Glob::new(pattern).map_err(|e| ProseGuardError::InvalidGlob {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    if config.progress.target_min > config.progress.target_max {
        return Err(ProseGuardError::Config(format!(
            "progress.target_min ({}) exceeds progress.target_max ({})",
            config.progress.target_min, config.progress.target_max
        )));
    }

    for (i, volume) in config.progress.volumes.iter().enumerate() {
        if volume.path.is_empty() {
            return Err(ProseGuardError::Config(format!(
                "progress.volumes[{i}].path cannot be empty"
            )));
        }
    }

    Ok(())
}

fn validate_rule_patterns(defs: &[RuleDef]) -> Result<()> {
    for def in defs {
        compile_pattern(&def.pattern)?;
    }
    Ok(())
}

fn compile_pattern(pattern: &str) -> Result<()> {
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| ProseGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
