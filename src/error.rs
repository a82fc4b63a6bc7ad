use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProseGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Target not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProseGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
