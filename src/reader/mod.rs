//! スプレッドシート読み込みモジュール
//!
//! 先頭シートの1行目をヘッダー、2行目以降をデータ行として
//! `CommentTable` に変換する（xlsx / xlsm / xls / ods）

use crate::error::{NotesAiError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Xlsx};
use std::io::Cursor;
use std::path::Path;
use student_notes_common::{CellValue, CommentTable};

/// ファイルから表を読み込み
pub fn read_table(path: &Path) -> Result<CommentTable> {
    if !path.exists() {
        return Err(NotesAiError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| NotesAiError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| NotesAiError::ExcelRead(format!("{}: シートがありません", path.display())))?
        .map_err(|e| NotesAiError::ExcelRead(e.to_string()))?;

    Ok(range_to_table(&range))
}

/// xlsxバイト列から表を読み込み
pub fn read_table_from_bytes(data: &[u8]) -> Result<CommentTable> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| NotesAiError::ExcelRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| NotesAiError::ExcelRead("シートがありません".into()))?
        .map_err(|e| NotesAiError::ExcelRead(e.to_string()))?;

    Ok(range_to_table(&range))
}

/// 先頭シート名を取得
pub fn first_sheet_name(data: &[u8]) -> Result<Option<String>> {
    let workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| NotesAiError::ExcelRead(e.to_string()))?;
    Ok(workbook.sheet_names().first().cloned())
}

/// Rangeを表に変換
///
/// Rangeは最初に使われているセルから始まるため、その行をヘッダーとし
/// シート上の行番号を表に記録する。途中の空行もそのまま1行として残す。
fn range_to_table(range: &Range<Data>) -> CommentTable {
    let mut rows = range.rows();

    // ヘッダー名は加工しない（前後の空白も列名の一部）
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| to_cell_value(c).to_string()).collect(),
        None => return CommentTable::default(),
    };

    let rows = rows
        .map(|row| row.iter().map(to_cell_value).collect::<Vec<_>>())
        .collect();

    let header_row = range
        .start()
        .map(|(row, _)| row as usize + 1)
        .unwrap_or(1);

    CommentTable::new(columns, rows).with_header_row(header_row)
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // 日付・エラー値は表示文字列として扱う
        other => CellValue::text(other.to_string()),
    }
}
