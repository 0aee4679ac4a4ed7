//! Quiz run orchestration
//!
//! Everything fallible (settings, loading) happens before the clock starts.

use crate::cli::QuizSettings;
use crate::quiz::{load_problems, prepare_problems, AnswerSource, QuizSession, SessionResult};
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// Load the question bank, order it, and run one timed session
pub async fn run_quiz<W, S>(settings: &QuizSettings, out: W, source: S) -> Result<SessionResult>
where
    W: Write,
    S: AnswerSource,
{
    let problems = load_problems(&settings.bank)?;
    info!(
        "Loaded {} problems from {}",
        problems.len(),
        settings.bank.display()
    );

    let problems = prepare_problems(problems, &settings.session);

    let mut session = QuizSession::new(out, settings.session.time_limit);
    let result = session.run(problems, source).await?;
    Ok(result)
}
