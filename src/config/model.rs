use serde::{Deserialize, Serialize};

use crate::rules::{
    RuleDef, default_inner_thought_rules, default_knowledge_rules, default_known_characters,
    default_pov_markers, default_style_rules,
};

/// Complete tool configuration. Every section defaults to the builtin tables,
/// so an absent config file is equivalent to an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub pov: PovConfig,

    #[serde(default)]
    pub progress: ProgressConfig,
}

/// Document discovery settings for the corpus walker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Manuscript file extensions.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Exclude patterns (glob syntax).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// Formulaic-phrasing blacklist rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleConfig {
    #[serde(default = "default_style_rules")]
    pub rules: Vec<RuleDef>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            rules: default_style_rules(),
        }
    }
}

/// POV rule families, declaration markers, and the character registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PovConfig {
    /// Declaration marker patterns, name in capture group 1.
    #[serde(default = "default_pov_markers")]
    pub markers: Vec<String>,

    /// Curated character registry. Never inferred from the text.
    #[serde(default = "default_known_characters")]
    pub characters: Vec<String>,

    /// Interior-thought constructs.
    #[serde(default = "default_inner_thought_rules")]
    pub inner_thought: Vec<RuleDef>,

    /// Omniscient-narration markers.
    #[serde(default = "default_knowledge_rules")]
    pub knowledge: Vec<RuleDef>,
}

impl Default for PovConfig {
    fn default() -> Self {
        Self {
            markers: default_pov_markers(),
            characters: default_known_characters(),
            inner_thought: default_inner_thought_rules(),
            knowledge: default_knowledge_rules(),
        }
    }
}

/// Word-count targets and volume layout for the progress tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Minimum target word count (ideographic characters).
    #[serde(default = "default_target_min")]
    pub target_min: u64,

    /// Maximum target word count.
    #[serde(default = "default_target_max")]
    pub target_max: u64,

    /// Volume directories [[progress.volumes]]. Empty means: use the base
    /// directory's immediate subdirectories.
    #[serde(default)]
    pub volumes: Vec<VolumeConfig>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            target_min: default_target_min(),
            target_max: default_target_max(),
            volumes: Vec::new(),
        }
    }
}

/// One tracked volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeConfig {
    pub name: String,

    /// Directory holding the volume's chapter files, relative to the base dir.
    pub path: String,

    /// Expected chapter count, used for the DONE/WIP status.
    #[serde(default)]
    pub expected: Option<usize>,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "txt".to_string()]
}

const fn default_target_min() -> u64 {
    350_000
}

const fn default_target_max() -> u64 {
    450_000
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
