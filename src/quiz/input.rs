//! Sources of user answers
//!
//! Reads are blocking; the session engine runs each one on its own thread so the
//! deadline can fire while a read is still pending.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A blocking, line-at-a-time source of raw answers
pub trait AnswerSource: Send + 'static {
    /// Read one line of raw input.
    ///
    /// Returns `Ok(None)` at end-of-stream.
    fn read_answer(&mut self) -> io::Result<Option<String>>;
}

/// Answers typed on standard input
#[derive(Debug, Default)]
pub struct StdinAnswers;

impl StdinAnswers {
    pub fn new() -> Self {
        Self
    }
}

impl AnswerSource for StdinAnswers {
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Pre-recorded answers, replayed in order, then end-of-stream
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    lines: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
