use clap::Parser;

use crate::output::OutputFormat;

use super::*;

#[test]
fn check_defaults_to_current_directory() {
    let cli = Cli::parse_from(["prose-guard", "check"]);
    let Commands::Check(args) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.paths, vec![std::path::PathBuf::from(".")]);
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn check_accepts_extensions_and_excludes() {
    let cli = Cli::parse_from([
        "prose-guard",
        "check",
        "03_正文",
        "--ext",
        "md,txt",
        "-x",
        "**/_*.md",
        "--format",
        "json",
    ]);
    let Commands::Check(args) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.ext, Some(vec!["md".to_string(), "txt".to_string()]));
    assert_eq!(args.exclude, vec!["**/_*.md"]);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn pov_requires_at_least_one_path() {
    assert!(Cli::try_parse_from(["prose-guard", "pov"]).is_err());
}

#[test]
fn brief_parses_volume_and_chapter() {
    let cli = Cli::parse_from(["prose-guard", "brief", "--volume", "2", "--chapter", "20"]);
    let Commands::Brief(args) = cli.command else {
        panic!("expected brief command");
    };
    assert_eq!(args.volume, 2);
    assert_eq!(args.chapter, 20);
}

#[test]
fn global_flags_parse_after_subcommand() {
    let cli = Cli::parse_from(["prose-guard", "check", ".", "--quiet", "--color", "never"]);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
}

#[test]
fn config_validate_takes_a_path() {
    let cli = Cli::parse_from(["prose-guard", "config", "validate", "rules.toml"]);
    let Commands::Config(args) = cli.command else {
        panic!("expected config command");
    };
    assert!(matches!(args.action, ConfigAction::Validate { .. }));
}
