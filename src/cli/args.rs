//! CLI argument structures

use crate::cli::validation::validate_args;
use crate::error::QuizError;
use crate::quiz::SessionConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Answer as many questions as you can before time runs out
#[derive(Parser, Debug)]
#[command(name = "quiztime")]
#[command(about = "quiztime - Timed quiz over a CSV question bank", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// CSV file in the format of 'question,answer'
    #[arg(short = 'f', long = "file", default_value = "questions.csv")]
    pub file: PathBuf,

    /// Time limit for the whole quiz, in seconds
    #[arg(short = 'l', long = "limit", default_value_t = 30)]
    pub limit: u64,

    /// Shuffle problems before starting
    #[arg(short = 's', long = "shuffle", default_value_t = true, action = ArgAction::Set)]
    pub shuffle: bool,

    /// Fixed shuffle seed for a reproducible question order
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Everything the quiz needs, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub bank: PathBuf,
    pub session: SessionConfig,
}

impl Cli {
    /// Validate arguments and resolve them into quiz settings
    pub fn into_settings(self) -> Result<QuizSettings, QuizError> {
        validate_args(&self.file, self.limit)?;

        Ok(QuizSettings {
            bank: self.file,
            session: SessionConfig {
                time_limit: Duration::from_secs(self.limit),
                shuffle: self.shuffle,
                seed: self.seed,
            },
        })
    }
}
