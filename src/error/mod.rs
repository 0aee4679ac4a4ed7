//! Crate-wide error type

use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for quiztime
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config { code: u16, message: String },

    #[error("[E{:04}] Failed to read question bank {}: {source}", ErrorCode::LOAD_IO_ERROR, .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[E{:04}] Record on line {line} has {fields} fields, expected 2 (question,answer)", ErrorCode::LOAD_INVALID_RECORD)]
    Format { line: u64, fields: usize },

    #[error("[E{:04}] Invalid CSV: {}", ErrorCode::LOAD_CSV_ERROR, .0)]
    Csv(#[from] csv::Error),

    #[error("[E{:04}] Failed to write quiz output: {}", ErrorCode::SESSION_DISPLAY_ERROR, .0)]
    Output(#[source] std::io::Error),
}

impl QuizError {
    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. } => *code,
            Self::Io { .. } => ErrorCode::LOAD_IO_ERROR,
            Self::Format { .. } => ErrorCode::LOAD_INVALID_RECORD,
            Self::Csv(_) => ErrorCode::LOAD_CSV_ERROR,
            Self::Output(_) => ErrorCode::SESSION_DISPLAY_ERROR,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } | Self::Format { .. } | Self::Csv(_) => 3,
            Self::Output(_) => 4,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Io { path, source } => {
                format!("Cannot read question bank '{}': {}", path.display(), source)
            }
            Self::Format { line, fields } => format!(
                "Question bank line {} has {} fields; each line must have two fields",
                line, fields
            ),
            Self::Csv(err) => format!("Question bank is not valid CSV: {}", err),
            Self::Output(err) => format!("Could not write to the terminal: {}", err),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = StdError::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }

    /// True for failures raised while loading the question bank
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Format { .. } | Self::Csv(_))
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
