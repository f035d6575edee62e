//! Excel生成（共通ライブラリ）
//!
//! 要約済みのコメント表を1シートのExcelとしてバッファに書き出す

use crate::table::{CommentTable, SKILLS_COLUMN, SUMMARY_COLUMN};
use crate::types::CellValue;
use rust_xlsxwriter::*;

/// 出力シート名
pub const SHEET_NAME: &str = "Student Summary";

const DEFAULT_COL_WIDTH: f64 = 24.0;
const WIDE_COL_WIDTH: f64 = 80.0;

/// Excelをバッファに生成
///
/// 1行目にヘッダー、2行目以降に各行の値を書き込む。
/// 数値・真偽値はそのままの型で、空セルは書き込まない。
///
/// # Arguments
/// * `table` - 出力する表（要約列付き）
pub fn generate_excel_buffer(table: &CommentTable) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let wrap_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    // 要約列は折り返し表示用に広めに取る
    let wide_cols: Vec<u16> = [SUMMARY_COLUMN, SKILLS_COLUMN]
        .iter()
        .filter_map(|name| table.column_index(name))
        .map(|i| i as u16)
        .collect();

    for (col, name) in table.columns().iter().enumerate() {
        let col = col as u16;
        let width = if wide_cols.contains(&col) { WIDE_COL_WIDTH } else { DEFAULT_COL_WIDTH };
        worksheet.set_column_width(col, width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet.write_string_with_format(0, col, name, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let excel_row = row_idx as u32 + 1;

        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                CellValue::Empty => {}
                CellValue::Text(s) if wide_cols.contains(&col) => {
                    worksheet.write_string_with_format(excel_row, col, s, &wrap_format)
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(excel_row, col, s)
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(excel_row, col, *n)
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(excel_row, col, *b)
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ID_COLUMN, NAME_COLUMN};

    #[test]
    fn test_generate_excel_buffer() {
        let table = CommentTable::new(
            vec![ID_COLUMN.into(), NAME_COLUMN.into(), SUMMARY_COLUMN.into()],
            vec![vec![CellValue::Number(1.0), "Sara".into(), "Doing well.".into()]],
        );
        let buffer = generate_excel_buffer(&table).unwrap();
        // xlsxはZIP形式
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_excel_buffer_empty_table() {
        let table = CommentTable::new(vec![ID_COLUMN.into(), NAME_COLUMN.into()], vec![]);
        assert!(generate_excel_buffer(&table).is_ok());
    }
}
