//! Integration tests for the manuscript tooling commands:
//! `split`, `progress`, `brief`, `init` and `config`.

mod common;

use common::TestFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn split_creates_per_chapter_files() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "正文.txt",
        "序章：厄日\n天空裂开了。\n\n第1章：裂痕\n正文一。\n\n第2章：回响\n正文二。\n",
    );
    let out_dir = fixture.path().join("章节");

    prose_guard!()
        .arg("split")
        .arg(fixture.path().join("正文.txt"))
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("发现 3 个章节"))
        .stdout(predicate::str::contains("[OK] Created: 序章.md"));

    assert!(out_dir.join("序章.md").exists());
    assert!(out_dir.join("第01章_裂痕.md").exists());
    assert!(out_dir.join("第02章_回响.md").exists());
    let first = fs::read_to_string(out_dir.join("第01章_裂痕.md")).unwrap();
    assert!(first.contains("正文一。"));
}

#[test]
fn split_missing_input_exits_one() {
    let fixture = TestFixture::new();

    prose_guard!()
        .arg("split")
        .arg(fixture.path().join("不存在.txt"))
        .arg(fixture.path().join("out"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("错误"));
}

#[test]
fn split_quiet_suppresses_progress_lines() {
    let fixture = TestFixture::new();
    fixture.create_file("正文.txt", "第1章：裂痕\n正文。\n");
    let out_dir = fixture.path().join("章节");

    prose_guard!()
        .arg("split")
        .arg(fixture.path().join("正文.txt"))
        .arg(&out_dir)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(out_dir.join("第01章_裂痕.md").exists());
}

#[test]
fn progress_reports_volume_tallies() {
    let fixture = TestFixture::new();
    fixture.create_file("卷一/第01章.md", "十个汉字十个汉字加二");

    prose_guard!()
        .arg("progress")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("创作进度报告"))
        .stdout(predicate::str::contains("卷一: 1/?章 [WIP]"))
        .stdout(predicate::str::contains("总章节: 1章"));
}

#[test]
fn progress_missing_base_dir_exits_one() {
    prose_guard!()
        .arg("progress")
        .arg("不存在的项目目录")
        .arg("--no-config")
        .assert()
        .code(1);
}

#[test]
fn progress_skips_underscore_prefixed_support_files() {
    let fixture = TestFixture::new();
    fixture.create_file("卷一/第01章.md", "正文内容十个汉字整");
    fixture.create_file("卷一/_大纲.md", "大纲不计入字数统计");

    prose_guard!()
        .arg("progress")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("卷一: 1/?章"));
}

#[test]
fn brief_writes_template() {
    let fixture = TestFixture::new();
    let out_dir = fixture.path().join("简报");

    prose_guard!()
        .arg("brief")
        .arg("--volume")
        .arg("2")
        .arg("--chapter")
        .arg("20")
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("简报已生成"));

    let briefing = fs::read_to_string(out_dir.join("简报_第20章.md")).unwrap();
    assert!(briefing.contains("# 章节创作简报"));
    assert!(briefing.contains("第 20 章"));
}

#[test]
fn brief_rejects_out_of_range_volume() {
    prose_guard!()
        .arg("brief")
        .arg("--volume")
        .arg("9")
        .arg("--chapter")
        .arg("1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("volume"));
}

#[test]
fn init_then_validate_round_trips() {
    let fixture = TestFixture::new();
    let config_path = fixture.path().join(".prose-guard.toml");

    prose_guard!()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    prose_guard!()
        .arg("config")
        .arg("validate")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn init_refuses_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing\n");
    let config_path = fixture.path().join(".prose-guard.toml");

    prose_guard!()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    prose_guard!()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn config_validate_rejects_bad_pattern() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "bad.toml",
        r#"
[pov]
markers = ["[unclosed"]
"#,
    );

    prose_guard!()
        .arg("config")
        .arg("validate")
        .arg(fixture.path().join("bad.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_show_json_is_parseable() {
    let output = prose_guard!()
        .arg("config")
        .arg("show")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["progress"]["target_min"], 350_000);
}
