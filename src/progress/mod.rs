use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::config::ProgressConfig;
use crate::error::Result;

const BANNER: &str = "============================================================";
const RULE: &str = "----------------------------------------";
const BAR_LENGTH: usize = 40;

/// Count ideographic characters, excluding punctuation, whitespace and latin
/// text. This is the "word count" for CJK manuscripts.
#[must_use]
pub fn count_cjk_chars(text: &str) -> usize {
    text.chars()
        .filter(|c| ('\u{4e00}'..='\u{9fff}').contains(c))
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeStatus {
    Done,
    Wip,
    Todo,
}

impl VolumeStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Done => "[DONE]",
            Self::Wip => "[WIP]",
            Self::Todo => "[TODO]",
        }
    }
}

/// Chapter and word tallies for one volume directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeProgress {
    pub name: String,
    pub chapters: usize,
    pub words: u64,
    pub expected: Option<usize>,
}

impl VolumeProgress {
    #[must_use]
    pub const fn status(&self) -> VolumeStatus {
        match self.expected {
            Some(expected) if self.chapters >= expected => VolumeStatus::Done,
            _ if self.chapters > 0 => VolumeStatus::Wip,
            _ => VolumeStatus::Todo,
        }
    }
}

pub struct ProgressTracker {
    target_min: u64,
    target_max: u64,
}

impl ProgressTracker {
    #[must_use]
    pub const fn new(config: &ProgressConfig) -> Self {
        Self {
            target_min: config.target_min,
            target_max: config.target_max,
        }
    }

    /// Tally one volume directory: `.md` chapter files directly inside it,
    /// skipping underscore-prefixed support files. A missing directory is a
    /// zero tally, not an error. Unreadable chapters count zero words.
    #[must_use]
    pub fn measure_volume(name: &str, dir: &Path, expected: Option<usize>) -> VolumeProgress {
        let mut chapters = 0usize;
        let mut words = 0u64;

        if let Ok(entries) = fs::read_dir(dir) {
            let mut names: Vec<_> = entries
                .filter_map(std::result::Result::ok)
                .map(|e| e.path())
                .collect();
            names.sort();

            for path in names {
                let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !file_name.ends_with(".md") || file_name.starts_with('_') {
                    continue;
                }
                chapters += 1;
                if let Ok(content) = fs::read_to_string(&path) {
                    words += count_cjk_chars(&content) as u64;
                }
            }
        }

        VolumeProgress {
            name: name.to_string(),
            chapters,
            words,
            expected,
        }
    }

    /// Measure every configured volume relative to the base directory. With
    /// no volumes configured, each immediate subdirectory becomes a volume.
    ///
    /// # Errors
    /// Returns an error if the fallback subdirectory enumeration fails.
    pub fn measure_all(
        &self,
        base_dir: &Path,
        config: &ProgressConfig,
    ) -> Result<Vec<VolumeProgress>> {
        if config.volumes.is_empty() {
            return Self::measure_subdirectories(base_dir);
        }

        Ok(config
            .volumes
            .iter()
            .map(|v| Self::measure_volume(&v.name, &base_dir.join(&v.path), v.expected))
            .collect())
    }

    fn measure_subdirectories(base_dir: &Path) -> Result<Vec<VolumeProgress>> {
        let mut dirs: Vec<_> = fs::read_dir(base_dir)?
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();

        Ok(dirs
            .iter()
            .map(|dir| {
                let name = dir
                    .file_name()
                    .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().into_owned());
                Self::measure_volume(&name, dir, None)
            })
            .collect())
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render_report(&self, volumes: &[VolumeProgress]) -> String {
        let total_words: u64 = volumes.iter().map(|v| v.words).sum();
        let total_chapters: usize = volumes.iter().map(|v| v.chapters).sum();
        let completion = if self.target_min > 0 {
            (total_words as f64 / self.target_min as f64) * 100.0
        } else {
            0.0
        };

        let mut output = String::new();
        let _ = writeln!(output, "\n{BANNER}");
        output.push_str("创作进度报告\n");
        let _ = writeln!(output, "{BANNER}");

        output.push_str("\n各卷进度:\n");
        let _ = writeln!(output, "{RULE}");
        for volume in volumes {
            let expected = volume
                .expected
                .map_or_else(|| "/?".to_string(), |e| format!("/{e}"));
            let _ = writeln!(
                output,
                "  {}: {}{expected}章 {} ({}字)",
                volume.name,
                volume.chapters,
                volume.status().label(),
                group_thousands(volume.words)
            );
        }
        let _ = writeln!(output, "{RULE}");

        let _ = writeln!(
            output,
            "\n总字数: {} / 目标 {}-{}",
            group_thousands(total_words),
            group_thousands(self.target_min),
            group_thousands(self.target_max)
        );
        let _ = writeln!(output, "完成度: {completion:.1}%");
        let _ = writeln!(output, "总章节: {total_chapters}章");

        let filled = (BAR_LENGTH as f64 * completion.min(100.0) / 100.0) as usize;
        let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_LENGTH - filled));
        let _ = writeln!(output, "\n[{bar}] {completion:.1}%");

        let _ = writeln!(output, "\n{BANNER}");
        output
    }
}

/// Format an integer with thousands separators (`45678` → `45,678`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
