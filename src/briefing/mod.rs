use crate::error::{ProseGuardError, Result};

const VOLUME_NUMERALS: &[&str] = &["一", "二", "三", "四"];

/// Default output directory for a volume's briefings, e.g. `04_创作简报/卷二`.
///
/// # Errors
/// Returns a config error for a volume number outside the planned range.
pub fn volume_dir(volume: u32) -> Result<String> {
    let idx = volume
        .checked_sub(1)
        .map(|v| v as usize)
        .filter(|v| *v < VOLUME_NUMERALS.len())
        .ok_or_else(|| {
            ProseGuardError::Config(format!(
                "volume must be between 1 and {}, got {volume}",
                VOLUME_NUMERALS.len()
            ))
        })?;
    Ok(format!("04_创作简报/卷{}", VOLUME_NUMERALS[idx]))
}

#[must_use]
pub fn output_filename(chapter: u32) -> String {
    format!("简报_第{chapter:02}章.md")
}

/// Render the fixed-structure chapter briefing template.
#[must_use]
pub fn generate(chapter: u32) -> String {
    TEMPLATE.replace("{chapter}", &chapter.to_string())
}

const TEMPLATE: &str = r#"# 章节创作简报

---

## 一、章节基本信息

### 1. 章节编号
第 {chapter} 章

### 2. 章节名（暂定）
[待填写]

### 3. 本章关键词
- [关键词1]
- [关键词2]
- [关键词3]

### 4. 主要 POV 与顺序
- POV1：[角色名]
- POV2：[无/角色名]

---

## 二、上下文与本章任务

### 1. 上文简要承接
[上一章的结尾是什么]

### 2. 下文简要预告
[本章结束后，大方向要走向哪里]

### 3. 本章核心任务（逻辑层）
- [任务1]
- [任务2]
- [任务3]

### 4. 本章核心事件列表
1. [事件1]
2. [事件2]
3. [事件3]

---

## 三、场景与镜头（骨架级）

### 场景一
- **场景名**：[名称]
- **场景功能**：[功能描述]
- **氛围标签**：[压抑/紧张/温馨/...]

### 场景二
- **场景名**：[名称]
- **场景功能**：[功能描述]
- **氛围标签**：[氛围]

---

## 四、角色弧光与语言要求

### 1. 本章关键角色弧光
- [角色名]：从 [起点] → [终点]

### 2. 语言风格 / 句式指纹使用提示
- 参考 `02_人物设定/[阵营]/[角色].md` 中的句式指纹
- 本章是否需要刻意打破：[是/否]

### 3. 预期高光句（可选）
- "[高光台词]"

---

## 五、反 AI 味 & 约束提示

### 1. 本章禁止项
- 禁止使用"没有 XX，没有 XX"句式
- 禁止使用"世界仿佛被按下XX键"比喻
- 禁止出现赛博朋克、新生人、芯片等后传词汇

### 2. 信息量约束
- [本章的信息密度要求]

### 3. 长度与节奏提示
- [长度建议]
- [节奏建议]

---

## 六、给 AI 的执行指令

### 执行 1
按本简报生成章节草稿时：
- 优先完成「本章核心任务」中的要点
- 其余细节与过渡由模型自行填充，但不得违反禁止项

### 执行 2
生成后自动进行一次自查：
1. 是否有视角越界？
2. 是否出现解释型总结句？
3. 是否使用了被列入黑名单的比喻/句式？

### 执行 3
如需补足信息，请优先从以下文档中抽取：
- `00_核心文档/创作圣经.md`
- `00_核心文档/附录_进度蒸馏.md`
- `02_人物设定/[相关角色].md`

---

*请根据实际需求修改上述内容后，再让 AI 生成章节草稿*
"#;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
