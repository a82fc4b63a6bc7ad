use super::*;

#[test]
fn template_names_the_chapter() {
    let briefing = generate(20);
    assert!(briefing.starts_with("# 章节创作简报"));
    assert!(briefing.contains("第 20 章"));
    assert!(briefing.contains("主要 POV 与顺序"));
    assert!(briefing.contains("本章禁止项"));
}

#[test]
fn output_filename_zero_pads() {
    assert_eq!(output_filename(5), "简报_第05章.md");
    assert_eq!(output_filename(20), "简报_第20章.md");
}

#[test]
fn volume_dir_maps_numerals() {
    assert_eq!(volume_dir(1).unwrap(), "04_创作简报/卷一");
    assert_eq!(volume_dir(4).unwrap(), "04_创作简报/卷四");
}

#[test]
fn out_of_range_volume_is_an_error() {
    assert!(volume_dir(0).is_err());
    assert!(volume_dir(5).is_err());
}
