use regex::Regex;

/// One chapter extracted from a concatenated manuscript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub filename: String,
    pub content: String,
}

/// Splits a concatenated manuscript into chapters at heading boundaries
/// (序章, 第N章, 【第N章】, optionally preceded by a `---` separator line).
pub struct ChapterSplitter {
    boundary: Regex,
    title: Regex,
    illegal: Regex,
}

impl Default for ChapterSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChapterSplitter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(r"(?m)^(?:---\n)?(?:序章|【?第[0-9]+章】?)")
                .expect("Invalid regex"),
            title: Regex::new(r"(?:序章[①②③]?|【?第([0-9]+)章】?)[：:]?[ \t]*(.+?)(?:\n|$)")
                .expect("Invalid regex"),
            illegal: Regex::new(r#"[<>:"/\\|?*]"#).expect("Invalid regex"),
        }
    }

    /// Split at heading boundaries. Text before the first heading becomes its
    /// own chapter; blank segments are dropped.
    #[must_use]
    pub fn split(&self, content: &str) -> Vec<Chapter> {
        let mut offsets: Vec<usize> = self.boundary.find_iter(content).map(|m| m.start()).collect();
        if offsets.first() != Some(&0) {
            offsets.insert(0, 0);
        }
        offsets.push(content.len());

        let mut chapters = Vec::new();
        for (idx, window) in offsets.windows(2).enumerate() {
            let segment = content[window[0]..window[1]].trim();
            if segment.is_empty() {
                continue;
            }
            chapters.push(Chapter {
                filename: self.filename_for(idx, segment),
                content: segment.to_string(),
            });
        }
        chapters
    }

    fn filename_for(&self, index: usize, chapter: &str) -> String {
        let head: String = chapter.chars().take(20).collect();
        if head.contains("序章") {
            return "序章.md".to_string();
        }

        let filename = self.title.captures(chapter).map_or_else(
            || format!("章节_{index:02}.md"),
            |caps| {
                let number = caps
                    .get(1)
                    .map_or_else(|| index.to_string(), |m| m.as_str().to_string());
                let title: String = caps
                    .get(2)
                    .map_or("", |m| m.as_str())
                    .chars()
                    .take(10)
                    .collect();
                format!("第{number:0>2}章_{title}.md")
            },
        );

        self.illegal.replace_all(&filename, "").into_owned()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
