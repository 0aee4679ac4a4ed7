//! # quiztime
//!
//! A timed command-line quiz over a CSV question bank.
//!
//! ## Usage
//!
//! ```bash
//! quiztime [-f questions.csv] [-l 30] [-s true|false] [--seed N]
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging, fatal error reporting and run orchestration
//! - `cli` - Command-line arguments and their validation
//! - `error` - The crate-wide error type and error codes
//! - `quiz` - Problems, question bank loading, shuffling and the timed session engine
pub mod app;
pub mod cli;
pub mod error;
pub mod quiz;

pub use error::{QuizError, Result};
