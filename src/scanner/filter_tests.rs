use std::path::Path;

use super::*;

fn manuscript_filter() -> GlobFilter {
    GlobFilter::new(vec!["md".to_string(), "txt".to_string()], &[]).unwrap()
}

#[test]
fn filter_accepts_manuscript_extensions() {
    let filter = manuscript_filter();

    assert!(filter.should_include(Path::new("03_正文/第05章_孤独狼嗥.md")));
    assert!(filter.should_include(Path::new("草稿.txt")));
    assert!(!filter.should_include(Path::new("notes.docx")));
    assert!(!filter.should_include(Path::new("cover.png")));
}

#[test]
fn filter_extension_matching_is_case_insensitive() {
    let filter = manuscript_filter();
    assert!(filter.should_include(Path::new("第01章.MD")));
    assert!(filter.should_include(Path::new("草稿.TXT")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("README")));
    assert!(filter.should_include(Path::new("chapter.md")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        vec!["md".to_string()],
        &["**/_*.md".to_string(), "**/归档/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("卷一/第01章.md")));
    assert!(!filter.should_include(Path::new("卷一/_大纲.md")));
    assert!(!filter.should_include(Path::new("归档/旧稿.md")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(ProseGuardError::InvalidGlob { .. })
    ));
}

#[test]
fn filter_file_without_extension_rejected_when_extensions_set() {
    let filter = manuscript_filter();
    assert!(!filter.should_include(Path::new("Makefile")));
}
