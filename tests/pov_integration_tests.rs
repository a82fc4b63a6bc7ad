//! Integration tests for the `pov` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn pov_missing_chapter_exits_one() {
    prose_guard!()
        .arg("pov")
        .arg("不存在的章节.md")
        .arg("--no-config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("错误"));
}

#[test]
fn pov_reports_declarations_and_both_subsections() {
    let fixture = TestFixture::new();
    fixture.create_chapter(
        "第05章.md",
        "悟空",
        "贝吉塔心中暗想，不能输。\n他不知道的是，援军已到。\n",
    );

    prose_guard!()
        .arg("pov")
        .arg(fixture.path().join("第05章.md"))
        .arg("--no-config")
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("POV验证报告"))
        .stdout(predicate::str::contains("声明的POV: 悟空"))
        .stdout(predicate::str::contains("[POV越界问题]"))
        .stdout(predicate::str::contains("非POV角色'贝吉塔'的内心描写"))
        .stdout(predicate::str::contains("[知识边界问题]"))
        .stdout(predicate::str::contains("全知视角泄露"));
}

#[test]
fn pov_clean_chapter_confirms() {
    let fixture = TestFixture::new();
    fixture.create_chapter("第01章.md", "悟空", "悟空落在沙地上。\n");

    prose_guard!()
        .arg("pov")
        .arg(fixture.path().join("第01章.md"))
        .arg("--no-config")
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("总计: 0 处潜在问题"))
        .stdout(predicate::str::contains("[OK] 未发现POV问题"));
}

#[test]
fn pov_undeclared_chapter_says_so() {
    let fixture = TestFixture::new();
    fixture.create_file("第02章.md", "没有任何声明的正文。\n");

    prose_guard!()
        .arg("pov")
        .arg(fixture.path().join("第02章.md"))
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("声明的POV: 未声明"));
}

#[test]
fn pov_validates_multiple_chapters_in_order() {
    let fixture = TestFixture::new();
    fixture.create_chapter("第01章.md", "悟空", "悟空抬起头。\n");
    fixture.create_chapter("第02章.md", "贝吉塔", "贝吉塔冷笑。\n");

    prose_guard!()
        .arg("pov")
        .arg(fixture.path().join("第01章.md"))
        .arg(fixture.path().join("第02章.md"))
        .arg("--no-config")
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("声明的POV: 悟空"))
        .stdout(predicate::str::contains("声明的POV: 贝吉塔"));
}

#[test]
fn pov_json_output_is_parseable() {
    let fixture = TestFixture::new();
    fixture.create_chapter("第05章.md", "悟空", "他不知道的是，真相早已大白\n");

    let output = prose_guard!()
        .arg("pov")
        .arg(fixture.path().join("第05章.md"))
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["total_issues"], 1);
    assert_eq!(value["reports"][0]["declared_povs"][0], "悟空");
    assert_eq!(
        value["reports"][0]["knowledge_issues"][0]["description"],
        "全知视角泄露"
    );
}
