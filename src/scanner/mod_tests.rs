use std::fs;

use tempfile::TempDir;

use super::*;

fn scanner() -> DirectoryScanner<GlobFilter> {
    let filter = GlobFilter::new(vec!["md".to_string(), "txt".to_string()], &[]).unwrap();
    DirectoryScanner::new(filter)
}

#[test]
fn scan_finds_nested_manuscripts_sorted() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("卷一")).unwrap();
    fs::write(temp.path().join("卷一/第02章.md"), "正文").unwrap();
    fs::write(temp.path().join("卷一/第01章.md"), "正文").unwrap();
    fs::write(temp.path().join("notes.json"), "{}").unwrap();

    let files = scanner().scan(temp.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("卷一/第01章.md"));
    assert!(files[1].ends_with("卷一/第02章.md"));
}

#[test]
fn scan_empty_directory_is_clean_not_an_error() {
    let temp = TempDir::new().unwrap();
    let files = scanner().scan(temp.path()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn resolve_single_file_returns_it_unfiltered() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("chapter.md");
    fs::write(&path, "正文").unwrap();

    let files = scanner().resolve(&path).unwrap();
    assert_eq!(files, vec![path]);
}

#[test]
fn resolve_directory_scans_recursively() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.md"), "正文").unwrap();
    fs::write(temp.path().join("b.txt"), "正文").unwrap();

    let files = scanner().resolve(temp.path()).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn resolve_missing_target_is_fatal() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("不存在.md");

    let result = scanner().resolve(&missing);
    assert!(matches!(result, Err(ProseGuardError::TargetNotFound(_))));
}
