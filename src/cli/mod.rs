//! Command-line interface
//!
//! Argument definitions and their validation.

pub mod args;
pub mod validation;

pub use args::{Cli, QuizSettings};
pub use validation::{validate_args, CliValidationError};
