//! AIレスポンスパーサー
//!
//! 要約レスポンスから `Summarized Note:` / `Student Skills:` の2行を抽出する。
//! 出力形式はモデル側で保証されないため、見つからない項目は空文字列とし
//! エラーにはしない。

use crate::types::SummaryResult;

/// 要約行のプレフィックス
pub const SUMMARY_PREFIX: &str = "Summarized Note:";
/// スキル行のプレフィックス
pub const SKILLS_PREFIX: &str = "Student Skills:";

/// 要約レスポンスをパース
///
/// 各プレフィックスについて最初に一致した行を採用する（大文字小文字を区別）。
/// どちらにも一致しない行は無視する。
///
/// # Arguments
/// * `response` - AIの応答テキスト
///
/// # Returns
/// `SummaryResult`（欠落項目は空文字列）
///
/// # Examples
/// ```
/// use student_notes_common::parse_summary_response;
///
/// let result = parse_summary_response("Summarized Note: Good.\nStudent Skills: None");
/// assert_eq!(result.summary, "Good.");
/// assert_eq!(result.skills, "None");
/// ```
pub fn parse_summary_response(response: &str) -> SummaryResult {
    let mut summary: Option<&str> = None;
    let mut skills: Option<&str> = None;

    for line in response.lines() {
        if summary.is_none() {
            if let Some(rest) = line.strip_prefix(SUMMARY_PREFIX) {
                summary = Some(rest.trim());
                continue;
            }
        }
        if skills.is_none() {
            if let Some(rest) = line.strip_prefix(SKILLS_PREFIX) {
                skills = Some(rest.trim());
            }
        }
    }

    SummaryResult::new(summary.unwrap_or_default(), skills.unwrap_or_default())
}
