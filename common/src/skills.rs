//! スキル語彙モジュール
//!
//! 要約プロンプトに埋め込む固定スキル一覧（15件、順序固定）。
//! AIの出力がこの語彙に収まることは保証されないため、
//! 語彙外ラベルの検出のみを行い、値の書き換えはしない。

/// 固定スキル語彙
pub const SKILL_SET: &[&str] = &[
    "Communication Skills",
    "Leadership",
    "Resilience",
    "English Proficiency",
    "Discipline",
    "Diligence",
    "Task Management",
    "Adaptability",
    "Problem-solving",
    "Creativity",
    "Consistency",
    "Punctuality",
    "Respectfulness",
    "Self-motivation",
    "Maturity",
];

/// 該当スキルなしを表すセンチネル
pub const NO_SKILLS: &str = "None";

/// スキル文字列をラベルに分割
///
/// 空文字列と "None" は空のVecになる
pub fn split_skills(skills: &str) -> Vec<&str> {
    let trimmed = skills.trim();
    if trimmed.is_empty() || trimmed == NO_SKILLS {
        return Vec::new();
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// 語彙に含まれないラベルを抽出（大文字小文字は区別する）
pub fn unknown_skills(skills: &str) -> Vec<&str> {
    split_skills(skills)
        .into_iter()
        .filter(|label| !SKILL_SET.contains(label))
        .collect()
}
