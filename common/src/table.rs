//! コメント表モジュール
//!
//! スプレッドシート1シート分を列名＋行データで保持する。
//! ID列・氏名列以外はすべて月次コメント列として扱う。

use crate::error::{Error, Result};
use crate::types::{CellValue, StudentRecord, SummaryResult};

/// 出願ID列
pub const ID_COLUMN: &str = "ADEK Application ID";
/// 氏名列
pub const NAME_COLUMN: &str = "Student Full Name";
/// 出力: 要約列
pub const SUMMARY_COLUMN: &str = "Summarized Note";
/// 出力: スキル列
pub const SKILLS_COLUMN: &str = "Student Skills";

const REQUIRED_COLUMNS: [&str; 2] = [ID_COLUMN, NAME_COLUMN];

/// コメント表
///
/// データ行は空行も含めてシート上の順序・位置のまま保持する
#[derive(Debug, Clone, PartialEq)]
pub struct CommentTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    /// ヘッダー行のシート上の行番号（1始まり）
    header_row: usize,
}

impl Default for CommentTable {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl CommentTable {
    /// 表を作成（各行は列数に合わせて切り詰め／Empty埋めする）
    ///
    /// ヘッダーはシートの1行目とみなす。別の位置の場合は `with_header_row` を使う
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { columns, rows, header_row: 1 }
    }

    /// ヘッダーのシート上の行番号（1始まり）を設定
    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row.max(1);
        self
    }

    pub fn header_row(&self) -> usize {
        self.header_row
    }

    /// データ行インデックス → シート上の行番号
    pub fn sheet_row(&self, index: usize) -> usize {
        self.header_row + 1 + index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 先頭n行
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// 必須列（ID・氏名）の存在チェック
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingColumns(missing))
        }
    }

    /// コメント列のインデックス（ID・氏名以外、列順）
    pub fn comment_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, name)| !REQUIRED_COLUMNS.contains(&name.as_str()))
            .map(|(i, _)| i)
            .collect()
    }

    /// 指定行の生徒レコード
    pub fn record(&self, row: usize) -> Option<StudentRecord> {
        let cells = self.rows.get(row)?;
        let cell_text = |name: &str| {
            self.column_index(name)
                .and_then(|i| cells[i].as_text())
                .unwrap_or_default()
        };

        Some(StudentRecord {
            application_id: cell_text(ID_COLUMN),
            full_name: cell_text(NAME_COLUMN),
            comments: self
                .comment_columns()
                .into_iter()
                .map(|i| cells[i].as_text())
                .collect(),
        })
    }

    /// 全行の生徒レコード（行順）
    pub fn records(&self) -> Vec<StudentRecord> {
        (0..self.rows.len()).filter_map(|i| self.record(i)).collect()
    }

    /// 要約結果を列として付与した新しい表を返す
    ///
    /// 既に出力列がある場合はその列を上書きし、無ければ末尾に追加する。
    /// 結果数が行数と一致しない場合はエラー。
    pub fn with_summaries(&self, results: &[SummaryResult]) -> Result<CommentTable> {
        if results.len() != self.rows.len() {
            return Err(Error::Parse(format!(
                "result count does not match row count: {} results / {} rows",
                results.len(),
                self.rows.len()
            )));
        }

        let mut table = self.clone();
        let summary_idx = table.ensure_column(SUMMARY_COLUMN);
        let skills_idx = table.ensure_column(SKILLS_COLUMN);

        for (row, result) in table.rows.iter_mut().zip(results) {
            row[summary_idx] = CellValue::text(result.summary.as_str());
            row[skills_idx] = CellValue::text(result.skills.as_str());
        }

        Ok(table)
    }

    fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(CellValue::Empty);
        }
        self.columns.len() - 1
    }
}
