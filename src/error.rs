use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesAiError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API key is not set. Run `student-notes config --set-api-key YOUR_KEY` or set OPENAI_API_KEY")]
    MissingApiKey,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read spreadsheet: {0}")]
    ExcelRead(String),

    #[error("Failed to generate Excel: {0}")]
    ExcelGeneration(String),

    #[error("API call failed: {0}")]
    ApiCall(String),

    #[error("API error (status {status}): {message}")]
    ApiStatus { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    ApiParse(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] student_notes_common::Error),

    #[error("Row {row} ({name}) failed: {source}")]
    RowFailed {
        row: usize,
        name: String,
        #[source]
        source: Box<NotesAiError>,
    },

    #[error("Cancelled by user")]
    Cancelled,
}

impl NotesAiError {
    /// リトライ対象か（429・5xx・通信エラー）
    pub fn is_retryable(&self) -> bool {
        match self {
            NotesAiError::ApiStatus { status, .. } => *status == 429 || *status >= 500,
            NotesAiError::ApiCall(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesAiError>;
