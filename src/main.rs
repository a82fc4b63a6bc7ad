use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use prose_guard::briefing;
use prose_guard::checker::{
    FileReport, PovChecker, PovFileReport, PovScanOutcome, StyleChecker,
};
use prose_guard::cli::{
    BriefArgs, CheckArgs, Cli, ColorChoice, Commands, ConfigAction, ConfigArgs, InitArgs, PovArgs,
    ProgressArgs, SplitArgs,
};
use prose_guard::config::{Config, ConfigLoader, FileConfigLoader};
use prose_guard::error::ProseGuardError;
use prose_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use prose_guard::progress::ProgressTracker;
use prose_guard::rules::RuleSet;
use prose_guard::scanner::{DirectoryScanner, GlobFilter};
use prose_guard::splitter::ChapterSplitter;
use prose_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_TARGET_ERROR};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

const fn exit_code_for(error: &ProseGuardError) -> i32 {
    match error {
        ProseGuardError::TargetNotFound(_) => EXIT_TARGET_ERROR,
        _ => EXIT_CONFIG_ERROR,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Pov(args) => run_pov(args, &cli),
        Commands::Split(args) => run_split(args, &cli),
        Commands::Progress(args) => run_progress(args, &cli),
        Commands::Brief(args) => run_brief(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("错误: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> prose_guard::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.scan.extensions.clone());
    let mut exclude_patterns = config.scan.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = GlobFilter::new(extensions, &exclude_patterns)?;

    // Target resolution is fatal on a missing path, before any scanning.
    let scanner = DirectoryScanner::new(filter);
    let mut documents = Vec::new();
    for path in &args.paths {
        documents.extend(scanner.resolve(path)?);
    }

    let checker = StyleChecker::new(RuleSet::compile(&config.style.rules)?);

    // Documents are independent; scan in parallel and re-sort for
    // deterministic per-file report order.
    let mut reports: Vec<FileReport> = documents
        .par_iter()
        .map(|path| scan_document(path, &checker))
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    let output = format_reports(args.format, cli.color, &reports)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

fn scan_document(path: &Path, checker: &StyleChecker) -> FileReport {
    match fs::read_to_string(path) {
        Ok(content) => FileReport::scanned(path.to_path_buf(), checker.check(&content)),
        Err(e) => FileReport::unreadable(path.to_path_buf(), e.to_string()),
    }
}

fn format_reports(
    format: OutputFormat,
    color: ColorChoice,
    reports: &[FileReport],
) -> prose_guard::Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(color)).format(reports)
        }
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn run_pov(args: &PovArgs, cli: &Cli) -> i32 {
    match run_pov_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("错误: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_pov_impl(args: &PovArgs, cli: &Cli) -> prose_guard::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let checker = PovChecker::new(
        &config.pov.markers,
        RuleSet::compile(&config.pov.inner_thought)?,
        RuleSet::compile(&config.pov.knowledge)?,
        config.pov.characters.clone(),
    )?;

    // Existence is checked for every chapter up front; a missing one is
    // fatal before any validation output.
    for path in &args.paths {
        if !path.exists() {
            return Err(ProseGuardError::TargetNotFound(path.clone()));
        }
    }

    let reports: Vec<PovFileReport> = args
        .paths
        .iter()
        .map(|path| validate_chapter(path, &checker))
        .collect();

    let output = match args.format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(cli.color)).format_pov(&reports)
        }
        OutputFormat::Json => JsonFormatter.format_pov(&reports),
    }?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

fn validate_chapter(path: &Path, checker: &PovChecker) -> PovFileReport {
    match fs::read_to_string(path) {
        Ok(content) => PovFileReport {
            path: path.to_path_buf(),
            outcome: PovScanOutcome::Validated(checker.check(&content)),
        },
        Err(e) => PovFileReport {
            path: path.to_path_buf(),
            outcome: PovScanOutcome::Unreadable {
                message: e.to_string(),
            },
        },
    }
}

fn run_split(args: &SplitArgs, cli: &Cli) -> i32 {
    match run_split_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("错误: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_split_impl(args: &SplitArgs, cli: &Cli) -> prose_guard::Result<i32> {
    if !args.input.is_file() {
        return Err(ProseGuardError::TargetNotFound(args.input.clone()));
    }

    let content = fs::read_to_string(&args.input).map_err(|e| ProseGuardError::FileRead {
        path: args.input.clone(),
        source: e,
    })?;

    let chapters = ChapterSplitter::new().split(&content);
    fs::create_dir_all(&args.output_dir)?;

    if !cli.quiet {
        println!("发现 {} 个章节", chapters.len());
    }

    for chapter in &chapters {
        let output_path = args.output_dir.join(&chapter.filename);
        match fs::write(&output_path, &chapter.content) {
            Ok(()) => {
                if !cli.quiet {
                    println!("  [OK] Created: {}", chapter.filename);
                }
            }
            // One failed chapter does not abort the rest.
            Err(e) => eprintln!("  [FAIL] {}: {e}", chapter.filename),
        }
    }

    if !cli.quiet {
        println!("\n完成! 章节已保存到: {}", args.output_dir.display());
    }

    Ok(EXIT_SUCCESS)
}

fn run_progress(args: &ProgressArgs, cli: &Cli) -> i32 {
    match run_progress_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("错误: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_progress_impl(args: &ProgressArgs, cli: &Cli) -> prose_guard::Result<i32> {
    if !args.base_dir.is_dir() {
        return Err(ProseGuardError::TargetNotFound(args.base_dir.clone()));
    }

    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let tracker = ProgressTracker::new(&config.progress);
    let volumes = tracker.measure_all(&args.base_dir, &config.progress)?;

    if !cli.quiet {
        print!("{}", tracker.render_report(&volumes));
    }

    Ok(EXIT_SUCCESS)
}

fn run_brief(args: &BriefArgs, cli: &Cli) -> i32 {
    match run_brief_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("错误: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_brief_impl(args: &BriefArgs, cli: &Cli) -> prose_guard::Result<i32> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => PathBuf::from(briefing::volume_dir(args.volume)?),
    };

    fs::create_dir_all(&output_dir)?;
    let output_path = output_dir.join(briefing::output_filename(args.chapter));
    fs::write(&output_path, briefing::generate(args.chapter))?;

    if !cli.quiet {
        println!("✓ 简报已生成: {}", output_path.display());
        println!("\n请根据实际需求修改简报内容后，再让 AI 生成章节草稿。");
    }

    Ok(EXIT_SUCCESS)
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("错误: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> prose_guard::Result<()> {
    if args.output.exists() && !args.force {
        return Err(ProseGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            args.output.display()
        )));
    }

    fs::write(&args.output, config_template())?;

    println!("Created configuration file: {}", args.output.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# prose-guard configuration file
# Every section is optional; absent sections fall back to the builtin
# rule tables and defaults.

[scan]
# Manuscript file extensions to check
extensions = ["md", "txt"]

# Exclude patterns (glob syntax)
# exclude = ["**/_*.md", "**/归档/**"]

# Formulaic-phrasing blacklist. Declaring any rule here replaces the
# builtin table entirely.
# [style]
# rules = [
#     { pattern = "没有.{1,20}，没有.{1,20}。", description = "禁用句式：'没有XX，没有XX。'" },
#     { pattern = "这体现了", description = "总结性废话：'这体现了'" },
# ]

# POV validation: declaration markers, interior-thought constructs,
# omniscient-narration markers, and the character registry.
# [pov]
# markers = ["【POV[：:]\\s*(.+?)】"]
# characters = ["悟空", "贝吉塔"]
# inner_thought = [
#     { pattern = "他(?:心中|心里|内心|心想|暗想|暗道)", description = "内心描写" },
# ]
# knowledge = [
#     { pattern = "他不知道的是", description = "全知视角泄露" },
# ]

[progress]
# Word-count targets (ideographic characters)
target_min = 350000
target_max = 450000

# Tracked volumes; without any, each subdirectory of the base dir is a volume.
# [[progress.volumes]]
# name = "卷一"
# path = "03_正文/卷一_裂痕与回响"
# expected = 21
"#
}

fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match FileConfigLoader::new().load_from_path(config_path) {
        Ok(_) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("错误: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(
    config_path: Option<&Path>,
    format: &str,
) -> prose_guard::Result<String> {
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => toml::to_string_pretty(&config)
            .map_err(|e| ProseGuardError::Config(format!("failed to render config: {e}"))),
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> prose_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> prose_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
