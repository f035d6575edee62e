//! OpenAI互換 chat completions クライアント
//!
//! 1回の呼び出しで1リクエスト。`max_retries` が1以上の場合のみ
//! 429・5xx・通信エラーを指数バックオフで再試行する。

use crate::config::Config;
use crate::error::{NotesAiError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// 再試行の待ち時間の上限
const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// chat completions クライアント
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiClient {
    pub fn new(api_key: String, config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| NotesAiError::ApiCall(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            url: config.completions_url(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            max_retries: config.max_retries,
            retry_base_delay: Duration::from_millis(1000),
        })
    }

    /// 設定からAPIキーを解決して生成
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.get_api_key()?, config)
    }

    /// 再試行の初期待ち時間を変更（テスト用）
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// プロンプトを1つのuserメッセージとして送信し、応答テキストを返す
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let mut attempt = 0;
        loop {
            match self.send(&request).await {
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    let delay = backoff_delay(self.retry_base_delay, attempt);
                    attempt += 1;
                    warn!(
                        "API call failed ({}), retry {}/{} after {}ms",
                        e,
                        attempt,
                        self.max_retries,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                other => return other,
            }
        }
    }

    async fn send(&self, request: &ChatRequest<'_>) -> Result<String> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| NotesAiError::ApiCall(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NotesAiError::ApiCall(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = extract_error_message(&body).unwrap_or_else(|| {
                if !body.trim().is_empty() {
                    body.clone()
                } else if status.as_u16() == 429 {
                    "Rate limited".to_string()
                } else {
                    "request failed".to_string()
                }
            });
            return Err(NotesAiError::ApiStatus {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| NotesAiError::ApiParse(format!("invalid response JSON: {}", e)))?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "API call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| NotesAiError::ApiParse("response contained no message content".into()))
    }
}

/// 指数バックオフの待ち時間（1s, 2s, 4s... 上限60s）
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(1u32 << attempt.min(6)).min(MAX_RETRY_DELAY)
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Incorrect API key provided")
        );
        assert_eq!(extract_error_message("plain text"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn test_backoff_delay() {
        let base = Duration::from_secs(1);
        assert_eq!(backoff_delay(base, 0), Duration::from_secs(1));
        assert_eq!(backoff_delay(base, 1), Duration::from_secs(2));
        assert_eq!(backoff_delay(base, 2), Duration::from_secs(4));
        assert_eq!(backoff_delay(base, 6), MAX_RETRY_DELAY);
        // 大きな試行回数でもオーバーフローしない
        assert_eq!(backoff_delay(base, 40), MAX_RETRY_DELAY);
        assert_eq!(backoff_delay(base, u32::MAX), MAX_RETRY_DELAY);
        assert_eq!(
            backoff_delay(Duration::from_millis(1), 40),
            Duration::from_millis(64)
        );
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4-turbo",
            messages: vec![ChatMessage { role: "user", content: "hello" }],
            temperature: 0.4,
            max_tokens: 1000,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["max_tokens"], 1000);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = OpenAiClient::new("sk-secret".into(), &Config::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
