use std::path::Path;

use crate::error::{ProseGuardError, Result};

use super::{Config, validate_semantics};

const LOCAL_CONFIG_NAME: &str = ".prose-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to the
    /// builtin defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read, parsed, or fails
    /// semantic validation.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails
    /// semantic validation.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let local = Path::new(LOCAL_CONFIG_NAME);
        if local.exists() {
            self.load_from_path(local)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(ProseGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        validate_semantics(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
