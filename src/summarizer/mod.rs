//! 生徒1人分の要約モジュール
//!
//! 連結コメント → プロンプト生成 → AI呼び出し → 2行パース

mod openai;

pub use openai::OpenAiClient;

use crate::error::Result;
use async_trait::async_trait;
use student_notes_common::{build_summary_prompt, parse_summary_response, SummaryResult};
use tracing::debug;

/// 1行分の要約処理
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, comments: &str) -> Result<SummaryResult>;
}

/// chat completions APIを使う要約器
#[derive(Debug, Clone)]
pub struct ChatSummarizer {
    client: OpenAiClient,
}

impl ChatSummarizer {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, comments: &str) -> Result<SummaryResult> {
        let prompt = build_summary_prompt(comments);
        debug!("prompt length: {} chars", prompt.len());

        let response = self.client.complete(&prompt).await?;
        debug!("response length: {} chars", response.len());

        Ok(parse_summary_response(&response))
    }
}
