//! Input validation for CLI arguments
//!
//! All problems are collected before reporting, so the user sees every mistake
//! in one run.

use crate::error::{ErrorCode, QuizError};
use std::path::{Path, PathBuf};

/// Longest session accepted, in seconds
pub const MAX_TIME_LIMIT_SECS: u64 = 86_400;

/// CLI validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliValidationError {
    NotCsvFile(PathBuf),
    TimeLimitZero,
    TimeLimitTooLarge(u64),
}

impl CliValidationError {
    pub fn code(&self) -> u16 {
        match self {
            Self::NotCsvFile(_) => ErrorCode::CONFIG_INVALID_EXTENSION,
            Self::TimeLimitZero | Self::TimeLimitTooLarge(_) => {
                ErrorCode::CONFIG_INVALID_TIME_LIMIT
            }
        }
    }
}

impl std::fmt::Display for CliValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotCsvFile(p) => {
                write!(f, "filename '{}' must have .csv extension", p.display())
            }
            Self::TimeLimitZero => write!(f, "time limit must be greater than 0"),
            Self::TimeLimitTooLarge(secs) => write!(
                f,
                "time limit of {} seconds is unreasonably large (max: {})",
                secs, MAX_TIME_LIMIT_SECS
            ),
        }
    }
}

impl std::error::Error for CliValidationError {}

/// Validate the question bank path and time limit
pub fn validate_args(file: &Path, limit_secs: u64) -> Result<(), QuizError> {
    let errors: Vec<CliValidationError> = validate_file_name(file)
        .into_iter()
        .chain(validate_time_limit(limit_secs))
        .collect();

    match errors.first() {
        None => Ok(()),
        Some(first) => Err(QuizError::config_with_code(
            first.code(),
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        )),
    }
}

fn validate_file_name(file: &Path) -> Option<CliValidationError> {
    if file.to_string_lossy().ends_with(".csv") {
        None
    } else {
        Some(CliValidationError::NotCsvFile(file.to_path_buf()))
    }
}

fn validate_time_limit(secs: u64) -> Option<CliValidationError> {
    match secs {
        0 => Some(CliValidationError::TimeLimitZero),
        s if s > MAX_TIME_LIMIT_SECS => Some(CliValidationError::TimeLimitTooLarge(s)),
        _ => None,
    }
}
