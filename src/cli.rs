use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "student-notes")]
#[command(about = "Mentor comment summarizer and skill extractor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// コメント表を要約してExcelを出力
    Summarize {
        /// 入力Excelファイル（ADEK Application ID / Student Full Name 列必須）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル/ディレクトリ（デフォルト: 入力と同じフォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// モデル名（設定を上書き）
        #[arg(short, long)]
        model: Option<String>,

        /// サンプリング温度（設定を上書き）
        #[arg(long)]
        temperature: Option<f32>,

        /// 最大出力トークン数（設定を上書き）
        #[arg(long)]
        max_tokens: Option<u32>,

        /// 失敗した行は空欄にして処理を続行
        #[arg(long)]
        keep_going: bool,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,

        /// プレビュー行数
        #[arg(long, default_value = "5")]
        preview_rows: usize,
    },

    /// 入力ファイルを検証して先頭行を表示
    Preview {
        /// 入力Excelファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 表示行数
        #[arg(short = 'n', long, default_value = "5")]
        rows: usize,
    },

    /// スキル語彙を表示
    Skills,

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
