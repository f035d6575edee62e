//! Excel出力（CLI版）
//!
//! common の excel_core でバッファを生成しファイルに書き出す

use crate::error::{NotesAiError, Result};
use std::path::Path;
use student_notes_common::export::excel_core::generate_excel_buffer;
use student_notes_common::CommentTable;

pub fn generate_excel(table: &CommentTable, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(table).map_err(NotesAiError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;

    Ok(())
}
