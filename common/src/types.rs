//! 型定義
//!
//! - CellValue: スプレッドシートのセル値
//! - StudentRecord: 1行分の生徒データ（ID・氏名・月次コメント）
//! - SummaryResult: AI要約の出力（要約文・スキル）

use serde::{Deserialize, Serialize};
use std::fmt;

/// スプレッドシートのセル値
///
/// 空文字列は `Empty` に正規化される（`CellValue::text` 経由）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 文字列からセル値を生成（空文字列はEmpty）
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 空でなければ表示用文字列を返す
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            // 整数値は小数点なしで表示（IDが "1001.0" にならないように）
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::text(value)
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map(CellValue::text).unwrap_or_default()
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// 生徒1人分のレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// 出願ID（一意性はチェックしない）
    pub application_id: String,
    pub full_name: String,
    /// 月次コメント（列順、空セルはNone）
    pub comments: Vec<Option<String>>,
}

impl StudentRecord {
    /// 空でないコメントを列順に半角スペースで連結
    ///
    /// # Examples
    /// ```
    /// use student_notes_common::StudentRecord;
    ///
    /// let record = StudentRecord {
    ///     comments: vec![Some("hi".into()), None, Some("bye".into())],
    ///     ..Default::default()
    /// };
    /// assert_eq!(record.combined_comments(), "hi bye");
    /// ```
    pub fn combined_comments(&self) -> String {
        self.comments
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// AI要約結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// 要約文（`Summarized Note:` 行が無ければ空）
    pub summary: String,
    /// スキル（カンマ区切り、または "None"。`Student Skills:` 行が無ければ空）
    pub skills: String,
}

impl SummaryResult {
    pub fn new(summary: impl Into<String>, skills: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            skills: skills.into(),
        }
    }

    /// どちらかのフィールドが欠落しているか
    pub fn is_incomplete(&self) -> bool {
        self.summary.is_empty() || self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_normalizes_empty() {
        assert_eq!(CellValue::text(""), CellValue::Empty);
        assert_eq!(CellValue::text("abc"), CellValue::Text("abc".to_string()));
    }

    #[test]
    fn test_cell_display_number() {
        assert_eq!(CellValue::Number(1001.0).to_string(), "1001");
        assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
        assert_eq!(CellValue::Number(-2.0).to_string(), "-2");
    }

    #[test]
    fn test_cell_display_bool_and_empty() {
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Empty.as_text(), None);
    }

    #[test]
    fn test_combined_comments_skips_none() {
        let record = StudentRecord {
            application_id: "1".into(),
            full_name: "Test".into(),
            comments: vec![Some("hi".into()), None, Some("bye".into())],
        };
        assert_eq!(record.combined_comments(), "hi bye");
    }

    #[test]
    fn test_combined_comments_empty() {
        let record = StudentRecord::default();
        assert_eq!(record.combined_comments(), "");
    }

    #[test]
    fn test_summary_result_incomplete() {
        assert!(SummaryResult::new("summary", "").is_incomplete());
        assert!(SummaryResult::new("", "None").is_incomplete());
        assert!(!SummaryResult::new("summary", "None").is_incomplete());
    }
}
