use std::fmt::Write;

use crate::checker::{FileReport, PovFileReport, PovScanOutcome, ScanOutcome};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

const BANNER: &str = "============================================================";
const RULE: &str = "----------------------------------------";

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn green(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::GREEN, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn red(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::RED, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_file_section(output: &mut String, report: &FileReport) {
        let _ = writeln!(output, "\n文件: {}", report.path.display());
        output.push_str(RULE);
        output.push('\n');

        match &report.outcome {
            ScanOutcome::Scanned { issues } => {
                for issue in issues {
                    let _ = writeln!(
                        output,
                        "  [第{}行] {}",
                        issue.line_number, issue.description
                    );
                    let _ = writeln!(output, "    内容: {}", issue.excerpt);
                }
            }
            ScanOutcome::Unreadable { message } => {
                let _ = writeln!(output, "  无法读取文件: {message}");
            }
        }
    }

    fn format_pov_section(output: &mut String, report: &PovFileReport) {
        let _ = writeln!(output, "文件: {}", report.path.display());

        match &report.outcome {
            PovScanOutcome::Unreadable { message } => {
                let _ = writeln!(output, "错误: {message}");
            }
            PovScanOutcome::Validated(outcome) => {
                let declared = if outcome.declared_povs.is_empty() {
                    "未声明".to_string()
                } else {
                    outcome.declared_povs.join(", ")
                };
                let _ = writeln!(output, "声明的POV: {declared}");
                output.push_str(RULE);
                output.push('\n');

                if !outcome.pov_issues.is_empty() {
                    output.push_str("\n[POV越界问题]\n");
                    for issue in &outcome.pov_issues {
                        let _ =
                            writeln!(output, "  第{}行: {}", issue.line_number, issue.description);
                        let _ = writeln!(output, "    内容: {}...", issue.excerpt);
                    }
                }

                if !outcome.knowledge_issues.is_empty() {
                    output.push_str("\n[知识边界问题]\n");
                    for issue in &outcome.knowledge_issues {
                        let _ =
                            writeln!(output, "  第{}行: {}", issue.line_number, issue.description);
                        let _ = writeln!(output, "    内容: {}...", issue.excerpt);
                    }
                }
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let total: usize = reports.iter().map(FileReport::entry_count).sum();

        if total == 0 {
            return Ok(format!("{}\n", self.green("✓ 未发现反AI味句式")));
        }

        let mut output = String::new();
        let _ = writeln!(output, "\n{BANNER}");
        output.push_str("反AI味检测报告\n");
        let _ = writeln!(output, "{BANNER}");

        for report in reports.iter().filter(|r| !r.is_clean()) {
            Self::format_file_section(&mut output, report);
        }

        let _ = writeln!(output, "\n{BANNER}");
        let total_line = format!("总计: {total} 处问题");
        let _ = writeln!(output, "{}", self.red(&total_line));
        let _ = writeln!(output, "{BANNER}");

        Ok(output)
    }

    fn format_pov(&self, reports: &[PovFileReport]) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "\n{BANNER}");
        output.push_str("POV验证报告\n");
        let _ = writeln!(output, "{BANNER}");

        let mut total = 0usize;
        for report in reports {
            Self::format_pov_section(&mut output, report);
            total += match &report.outcome {
                PovScanOutcome::Validated(outcome) => outcome.total_issues(),
                PovScanOutcome::Unreadable { .. } => 1,
            };
        }

        let _ = writeln!(output, "\n{BANNER}");
        let total_line = format!("总计: {total} 处潜在问题");
        if total == 0 {
            let _ = writeln!(output, "{total_line}");
            let _ = writeln!(output, "{BANNER}");
            let _ = writeln!(output, "{}", self.green("[OK] 未发现POV问题"));
        } else {
            let _ = writeln!(output, "{}", self.red(&total_line));
            let _ = writeln!(output, "{BANNER}");
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
