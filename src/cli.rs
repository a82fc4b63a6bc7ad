use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "prose-guard")]
#[command(author, version, about = "Manuscript guard - lint fiction for formulaic phrasing and POV integrity")]
#[command(long_about = "A tool to lint fiction manuscripts against a formulaic-phrasing blacklist\n\
    and point-of-view integrity rules.\n\n\
    Exit codes:\n  \
    0 - Run completed (issues, if any, are in the report)\n  \
    1 - Target file or directory not found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check manuscripts against the formulaic-phrasing blacklist
    Check(CheckArgs),

    /// Validate chapters for POV and knowledge-boundary violations
    Pov(PovArgs),

    /// Split a concatenated manuscript into per-chapter files
    Split(SplitArgs),

    /// Report writing progress across volumes
    Progress(ProgressArgs),

    /// Generate a chapter briefing template
    Brief(BriefArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File extensions to check (comma-separated, e.g., md,txt)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PovArgs {
    /// Chapter files to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// Concatenated manuscript file
    pub input: PathBuf,

    /// Directory to write per-chapter files into
    pub output_dir: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ProgressArgs {
    /// Project base directory
    #[arg(default_value = ".")]
    pub base_dir: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct BriefArgs {
    /// Volume number
    #[arg(long)]
    pub volume: u32,

    /// Chapter number
    #[arg(long)]
    pub chapter: u32,

    /// Output directory (default: the volume's briefing directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".prose-guard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        config: PathBuf,
    },
    /// Show the effective configuration
    Show {
        /// Path to the configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
