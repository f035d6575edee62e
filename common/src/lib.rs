//! Student Notes Common Library
//!
//! CLIと将来のフロントエンドで共有される型とユーティリティ

pub mod types;
pub mod skills;
pub mod table;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod export;

pub use types::{CellValue, StudentRecord, SummaryResult};
pub use skills::{SKILL_SET, NO_SKILLS, split_skills, unknown_skills};
pub use table::{CommentTable, ID_COLUMN, NAME_COLUMN, SUMMARY_COLUMN, SKILLS_COLUMN};
pub use error::{Error, Result};
pub use prompts::build_summary_prompt;
pub use parser::{parse_summary_response, SUMMARY_PREFIX, SKILLS_PREFIX};
