//! Builtin rule tables. These are the compiled-in defaults; a config file can
//! replace any of them without recompilation.

use super::RuleDef;

/// Formulaic phrasing blacklist, in declaration order.
const STYLE_RULES: &[(&str, &str)] = &[
    // Structural boilerplate
    ("没有.{1,20}，没有.{1,20}。", "禁用句式：'没有XX，没有XX。'"),
    ("没有.{1,20}，只有.{1,20}。", "禁用句式：'没有XX，只有XX。'"),
    ("不是.{1,20}，而是.{1,20}。", "禁用句式：'不是XX，而是XX。'"),
    ("仿佛.{1,20}一般", "限量使用：'仿佛XX一般'"),
    ("仿佛.{1,20}一样", "限量使用：'仿佛XX一样'"),
    ("世界仿佛被按下了.{1,10}键", "禁用比喻：'世界仿佛被按下了XX键'"),
    // Summarizing filler
    ("这体现了", "总结性废话：'这体现了'"),
    ("他心中充满了", "直接情绪描写：'他心中充满了'"),
    ("她心中充满了", "直接情绪描写：'她心中充满了'"),
    ("他感到一阵", "直接情绪描写：'他感到一阵'"),
    ("她感到一阵", "直接情绪描写：'她感到一阵'"),
    ("这让他更加", "总结性废话：'这让他更加'"),
    ("这让她更加", "总结性废话：'这让她更加'"),
    // Named emotions that should be physiological reactions instead
    ("他很害怕", "直接情绪：'他很害怕' -> 改用生理反应"),
    ("她很害怕", "直接情绪：'她很害怕' -> 改用生理反应"),
    ("他非常绝望", "直接情绪：'他非常绝望' -> 改用生理反应"),
    ("她非常绝望", "直接情绪：'她非常绝望' -> 改用生理反应"),
    ("他感到恐惧", "直接情绪：'他感到恐惧' -> 改用生理反应"),
    ("她感到恐惧", "直接情绪：'她感到恐惧' -> 改用生理反应"),
];

/// Interior-thought constructs. The reported reason names the offending
/// character, so the description here is the family label.
const INNER_THOUGHT_RULES: &[(&str, &str)] = &[
    ("他(?:心中|心里|内心|心想|暗想|暗道)", "内心描写"),
    ("她(?:心中|心里|内心|心想|暗想|暗道)", "内心描写"),
    ("(?:心中|心里)(?:暗想|想到|明白|清楚|知道)", "内心描写"),
    ("他(?:感到|觉得|意识到|明白|知道)", "内心描写"),
    ("她(?:感到|觉得|意识到|明白|知道)", "内心描写"),
];

/// Omniscient-narration markers.
const KNOWLEDGE_RULES: &[(&str, &str)] = &[
    ("他不知道的是", "全知视角泄露"),
    ("她不知道的是", "全知视角泄露"),
    ("与此同时.*另一边", "可能的视角跳跃"),
    ("此刻.*正在", "可能的全知描写"),
];

/// POV declaration markers, each with the character name in capture group 1.
/// Applied over the whole document, not line by line.
const POV_MARKERS: &[&str] = &[
    "【POV[：:]\\s*(.+?)】",
    "POV[：:]\\s*(.+?)(?:\n|$)",
    "\\[POV[：:]\\s*(.+?)\\]",
];

/// Curated character registry. Candidate subjects for interior-thought
/// attribution; never inferred from the text.
const KNOWN_CHARACTERS: &[&str] = &[
    "悟空",
    "卡卡罗特",
    "贝吉塔",
    "悟饭",
    "比克",
    "克林",
    "大特",
    "特兰克斯",
    "小特",
    "布尔玛",
    "雅木茶",
    "18号",
    "门德里",
    "比鲁斯",
    "维斯",
    "萨尔佐",
    "萨玛埃尔",
];

fn to_defs(table: &[(&str, &str)]) -> Vec<RuleDef> {
    table
        .iter()
        .map(|(pattern, description)| RuleDef::new(pattern, description))
        .collect()
}

#[must_use]
pub fn default_style_rules() -> Vec<RuleDef> {
    to_defs(STYLE_RULES)
}

#[must_use]
pub fn default_inner_thought_rules() -> Vec<RuleDef> {
    to_defs(INNER_THOUGHT_RULES)
}

#[must_use]
pub fn default_knowledge_rules() -> Vec<RuleDef> {
    to_defs(KNOWLEDGE_RULES)
}

#[must_use]
pub fn default_pov_markers() -> Vec<String> {
    POV_MARKERS.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn default_known_characters() -> Vec<String> {
    KNOWN_CHARACTERS.iter().map(ToString::to_string).collect()
}
