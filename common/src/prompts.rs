//! プロンプト生成モジュール
//!
//! 生徒1人分の連結コメントから要約・スキル抽出用プロンプトを組み立てる

use crate::parser::{SKILLS_PREFIX, SUMMARY_PREFIX};
use crate::skills::{NO_SKILLS, SKILL_SET};

/// 要約プロンプト生成
///
/// # Arguments
/// * `comments` - 生徒の全コメントを連結した文字列
///
/// # Returns
/// AIに渡すプロンプト文字列（出力は2行固定フォーマットを指示）
pub fn build_summary_prompt(comments: &str) -> String {
    let skills = SKILL_SET.join(", ");

    format!(
        r#"You are an assistant that summarizes students' academic progress for their mentors. You will receive the comments mentors wrote about one student over several months.

## Tasks
1. Write a summary of 150-200 words describing the student's progress, strengths and areas for improvement, based on all of the comments.
2. From the skill list below, pick only the skills that are clearly evident in the comments:
{skills}

## Rules
- Only choose skills that are stated or directly implied by the comments. Do not infer or guess.
- Never output a skill that is not in the list above.
- If no skill from the list is clearly reflected, answer: {SKILLS_PREFIX} {NO_SKILLS}

## Mentor Comments
{comments}

## Output Format (exactly these two lines)
{SUMMARY_PREFIX} <your 150-200 word summary>
{SKILLS_PREFIX} <comma-separated skills from the list, or {NO_SKILLS}>"#
    )
}
