//! 一括要約モジュール
//!
//! 表の各行を順番に1件ずつ要約する（並列化なし）。
//! 失敗時の扱いは `FailurePolicy` で切り替える。

use crate::error::{NotesAiError, Result};
use crate::summarizer::Summarizer;
use indicatif::{ProgressBar, ProgressStyle};
use student_notes_common::{unknown_skills, CommentTable, SummaryResult};
use tracing::{info, warn};

/// 行単位の失敗時の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// 最初の失敗で全体を中断（何も出力しない）
    #[default]
    Abort,
    /// 失敗行は空欄にして続行
    Continue,
}

/// 失敗した行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// シート上の行番号（ヘッダー位置を考慮）
    pub row: usize,
    pub name: String,
    pub message: String,
}

/// 一括要約の結果
#[derive(Debug, Clone, Default)]
pub struct SummaryRun {
    /// 要約列を付与した表
    pub table: CommentTable,
    pub results: Vec<SummaryResult>,
    pub failures: Vec<RowFailure>,
    /// `Summarized Note:` / `Student Skills:` 行が欠けていた行
    pub incomplete_rows: Vec<usize>,
    /// 語彙外スキルを含む行
    pub unknown_skill_rows: Vec<(usize, Vec<String>)>,
}

impl SummaryRun {
    pub fn succeeded(&self) -> usize {
        self.results.len() - self.failures.len()
    }
}

/// 表全体を要約
///
/// # Arguments
/// * `table` - 検証済みでなくてもよい（ここで必須列を検証する）
/// * `summarizer` - 1行分の要約器
/// * `policy` - 失敗時の扱い
/// * `show_progress` - プログレスバー表示
pub async fn summarize_table(
    table: &CommentTable,
    summarizer: &dyn Summarizer,
    policy: FailurePolicy,
    show_progress: bool,
) -> Result<SummaryRun> {
    table.validate()?;

    let records = table.records();
    let progress = if show_progress {
        let bar = ProgressBar::new(records.len() as u64);
        let style = ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map(|s| s.progress_chars("=> "))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut run = SummaryRun::default();

    for (index, record) in records.iter().enumerate() {
        let row = table.sheet_row(index);
        progress.set_message(record.full_name.clone());

        let comments = record.combined_comments();
        let result = match summarizer.summarize(&comments).await {
            Ok(result) => result,
            Err(e) => match policy {
                FailurePolicy::Abort => {
                    progress.abandon();
                    return Err(NotesAiError::RowFailed {
                        row,
                        name: record.full_name.clone(),
                        source: Box::new(e),
                    });
                }
                FailurePolicy::Continue => {
                    warn!("row {} ({}) failed: {}", row, record.full_name, e);
                    run.failures.push(RowFailure {
                        row,
                        name: record.full_name.clone(),
                        message: e.to_string(),
                    });
                    run.results.push(SummaryResult::default());
                    progress.inc(1);
                    continue;
                }
            },
        };

        if result.is_incomplete() {
            warn!(
                "row {} ({}): response is missing a labeled line (summary: {}, skills: {})",
                row,
                record.full_name,
                !result.summary.is_empty(),
                !result.skills.is_empty()
            );
            run.incomplete_rows.push(row);
        }

        let unknown: Vec<String> = unknown_skills(&result.skills)
            .into_iter()
            .map(str::to_string)
            .collect();
        if !unknown.is_empty() {
            warn!("row {} ({}): skills outside vocabulary: {:?}", row, record.full_name, unknown);
            run.unknown_skill_rows.push((row, unknown));
        }

        run.results.push(result);
        progress.inc(1);
    }

    progress.finish_and_clear();
    info!(
        "summarized {} rows ({} failed)",
        run.results.len(),
        run.failures.len()
    );

    run.table = table.with_summaries(&run.results)?;
    Ok(run)
}

/// 先頭行のプレビューを文字列で生成
pub fn format_preview(table: &CommentTable, rows: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  columns ({}): {}\n",
        table.columns().len(),
        table.columns().join(" | ")
    ));
    out.push_str(&format!(
        "  comment columns: {}\n",
        table.comment_columns().len()
    ));

    for (index, record) in table.records().iter().take(rows).enumerate() {
        let comments = record.combined_comments();
        let preview: String = comments.chars().take(60).collect();
        let ellipsis = if comments.chars().count() > 60 { "..." } else { "" };
        out.push_str(&format!(
            "  [{}] {} / {} ({} chars) {}{}\n",
            table.sheet_row(index),
            record.application_id,
            record.full_name,
            comments.chars().count(),
            preview,
            ellipsis
        ));
    }

    if table.len() > rows {
        out.push_str(&format!("  ... {} more rows\n", table.len() - rows));
    }
    out
}
