//! Error handling utilities

use crate::error::{describe_error_code, QuizError};
use tracing::error;

/// Report a fatal error and exit with the matching status code.
///
/// `QuizError`s show their user message, plus the full cause chain at `-v`.
/// Anything else exits with status 1.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    std::process::exit(report_error(&error, verbose))
}

/// Print the error to stderr and return the exit code to use
pub fn report_error(error: &anyhow::Error, verbose: u8) -> i32 {
    if let Some(quiz_err) = error.downcast_ref::<QuizError>() {
        eprintln!("Error: {}", quiz_err.user_message());
        if verbose >= 1 {
            let code = quiz_err.code();
            eprintln!("\nE{:04}: {}", code, describe_error_code(code));
            eprintln!("Context Chain:\n{}", quiz_err.developer_message());
        }
        quiz_err.exit_code()
    } else {
        eprintln!("Error: {error}");
        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }
        1
    }
}
