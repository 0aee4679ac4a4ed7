//! Timed quiz session engine
//!
//! One deadline is armed when the session starts and shared by every question.
//! Each question's answer is read on a fresh thread and raced against that
//! deadline; whichever finishes first decides what happens next.

use crate::error::{QuizError, Result};
use crate::quiz::input::AnswerSource;
use crate::quiz::problem::Problem;
use std::fmt;
use std::io::Write;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

/// Default session length when none is configured
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Settings fixed before a session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Total time allowed for the whole session
    pub time_limit: Duration,
    /// Shuffle problems before presenting them
    pub shuffle: bool,
    /// Fixed shuffle seed; a time-derived seed is used when `None`
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            shuffle: true,
            seed: None,
        }
    }
}

/// Outcome of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    /// Correct answers
    pub score: usize,
    /// Problems in the set
    pub total: usize,
    /// Answers received before the session ended
    pub answered: usize,
    /// The deadline (or a lost input source) cut the session short
    pub terminated_early: bool,
}

impl SessionResult {
    pub fn incorrect(&self) -> usize {
        self.answered - self.score
    }
}

impl fmt::Display for SessionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.score, self.total)
    }
}

/// Runs one timed quiz, writing progress to `out`
pub struct QuizSession<W: Write> {
    out: W,
    time_limit: Duration,
}

impl<W: Write> QuizSession<W> {
    pub fn new(out: W, time_limit: Duration) -> Self {
        Self { out, time_limit }
    }

    /// Consume the session and return the display sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Present `problems` in order until they run out or the deadline passes.
    ///
    /// Display failures are the only errors; input trouble counts as an empty answer.
    pub async fn run<S: AnswerSource>(
        &mut self,
        problems: Vec<Problem>,
        source: S,
    ) -> Result<SessionResult> {
        let total = problems.len();
        self.intro(total)?;

        info!(
            "Starting quiz session: {} problems, {:?} time limit",
            total, self.time_limit
        );

        let deadline = tokio::time::sleep(self.time_limit);
        tokio::pin!(deadline);

        let mut source = source;
        let mut score = 0;
        let mut answered = 0;
        let mut terminated_early = false;

        for (index, problem) in problems.iter().enumerate() {
            self.prompt(index + 1, problem)?;
            let pending = spawn_read(source);

            tokio::select! {
                biased;
                _ = &mut deadline => {
                    info!("Time limit reached after {} of {} problems", answered, total);
                    self.line("\nYou ran out of time!")?;
                    terminated_early = true;
                    break;
                }
                received = pending => {
                    match received {
                        Ok((returned, answer)) => {
                            source = returned;
                            answered += 1;
                            if problem.is_correct(&answer) {
                                score += 1;
                                debug!("Problem #{} answered correctly", index + 1);
                            } else {
                                debug!("Problem #{} answered incorrectly", index + 1);
                            }
                        }
                        Err(_) => {
                            error!("Answer reader exited without replying; ending session");
                            self.line("")?;
                            terminated_early = true;
                            break;
                        }
                    }
                }
            }
        }

        let result = SessionResult {
            score,
            total,
            answered,
            terminated_early,
        };
        self.line(&result.to_string())?;
        info!(
            "Quiz session finished: {}/{} correct, terminated early: {}",
            score, total, terminated_early
        );

        Ok(result)
    }

    fn intro(&mut self, total: usize) -> Result<()> {
        self.line("Welcome to the quiz!")?;
        self.line(&format!(
            "You will be presented with {} questions.",
            total
        ))?;
        self.line(&format!(
            "Try to answer as much as possible in {} seconds",
            self.time_limit.as_secs()
        ))
    }

    fn prompt(&mut self, number: usize, problem: &Problem) -> Result<()> {
        write!(self.out, "Problem #{}: {} = ", number, problem.question())
            .and_then(|_| self.out.flush())
            .map_err(QuizError::Output)
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)
            .and_then(|_| self.out.flush())
            .map_err(QuizError::Output)
    }
}

/// Read one answer on a detached thread.
///
/// The source travels to the thread and back with the answer. If the receiver is
/// gone by then (the deadline won), both are dropped. A plain thread is used so a
/// read still blocked on the terminal never holds up runtime shutdown.
fn spawn_read<S: AnswerSource>(mut source: S) -> oneshot::Receiver<(S, String)> {
    let (tx, rx) = oneshot::channel();

    std::thread::spawn(move || {
        let answer = match source.read_answer() {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("Input reached end-of-stream, using empty answer");
                String::new()
            }
            Err(e) => {
                warn!("Failed to read answer: {}, using empty answer", e);
                String::new()
            }
        };

        if tx.send((source, answer)).is_err() {
            debug!("Discarding answer that arrived after the session ended");
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::input::ScriptedAnswers;
    use std::io;

    /// Never answers
    struct Silent;

    impl AnswerSource for Silent {
        fn read_answer(&mut self) -> io::Result<Option<String>> {
            std::thread::sleep(Duration::from_secs(3600));
            Ok(None)
        }
    }

    /// Fails every read
    struct Broken;

    impl AnswerSource for Broken {
        fn read_answer(&mut self) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::Other, "terminal gone"))
        }
    }

    fn sample() -> Vec<Problem> {
        vec![
            Problem::new("2+2", "4"),
            Problem::new("capital of France", "Paris"),
        ]
    }

    fn output(session: QuizSession<Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_all_correct_within_limit() {
        let mut session = QuizSession::new(Vec::new(), Duration::from_secs(60));
        let result = session
            .run(sample(), ScriptedAnswers::new(["4\n", "paris\n"]))
            .await
            .unwrap();

        assert_eq!(
            result,
            SessionResult {
                score: 2,
                total: 2,
                answered: 2,
                terminated_early: false,
            }
        );

        let text = output(session);
        assert!(text.contains("You will be presented with 2 questions."));
        assert!(text.contains("Try to answer as much as possible in 60 seconds"));
        assert!(text.contains("Problem #1: 2+2 = "));
        assert!(text.contains("Problem #2: capital of France = "));
        assert!(text.ends_with("You scored 2 out of 2.\n"));
        assert!(!text.contains("ran out of time"));
    }

    #[tokio::test]
    async fn test_wrong_answers_count_as_incorrect() {
        let mut session = QuizSession::new(Vec::new(), Duration::from_secs(60));
        let result = session
            .run(sample(), ScriptedAnswers::new(["5", "  PARIS "]))
            .await
            .unwrap();

        assert_eq!(result.score, 1);
        assert_eq!(result.incorrect(), 1);
        assert_eq!(result.score + result.incorrect(), result.total);
        assert!(!result.terminated_early);
    }

    #[tokio::test]
    async fn test_end_of_stream_scores_as_empty_answer() {
        let mut session = QuizSession::new(Vec::new(), Duration::from_secs(60));
        let result = session
            .run(sample(), ScriptedAnswers::new(["4"]))
            .await
            .unwrap();

        assert_eq!(result.score, 1);
        assert_eq!(result.answered, 2);
        assert!(!result.terminated_early);
    }

    #[tokio::test]
    async fn test_read_errors_score_as_empty_answer() {
        let mut session = QuizSession::new(Vec::new(), Duration::from_secs(60));
        let result = session.run(sample(), Broken).await.unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.answered, 2);
        assert!(!result.terminated_early);
    }

    #[tokio::test]
    async fn test_deadline_ends_session_early() {
        let mut session = QuizSession::new(Vec::new(), Duration::from_millis(50));
        let result = session.run(sample(), Silent).await.unwrap();

        assert_eq!(
            result,
            SessionResult {
                score: 0,
                total: 2,
                answered: 0,
                terminated_early: true,
            }
        );

        let text = output(session);
        assert!(text.contains("Problem #1: 2+2 = "));
        assert!(!text.contains("Problem #2"));
        assert!(text.contains("\nYou ran out of time!\n"));
        assert!(text.ends_with("You scored 0 out of 2.\n"));
    }

    #[tokio::test]
    async fn test_zero_limit_times_out_at_first_question() {
        let mut session = QuizSession::new(Vec::new(), Duration::ZERO);
        let result = session.run(sample(), Silent).await.unwrap();

        assert!(result.terminated_early);
        assert_eq!(result.score, 0);
        assert_eq!(result.answered, 0);
    }

    #[tokio::test]
    async fn test_empty_problem_set() {
        let mut session = QuizSession::new(Vec::new(), Duration::from_secs(5));
        let result = session
            .run(Vec::new(), ScriptedAnswers::default())
            .await
            .unwrap();

        assert_eq!(
            result,
            SessionResult {
                score: 0,
                total: 0,
                answered: 0,
                terminated_early: false,
            }
        );
        assert!(!output(session).contains("Problem #"));
    }

    #[test]
    fn test_result_display() {
        let result = SessionResult {
            score: 3,
            total: 5,
            answered: 4,
            terminated_early: true,
        };
        assert_eq!(result.to_string(), "You scored 3 out of 5.");
        assert_eq!(result.incorrect(), 1);
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(30));
        assert!(config.shuffle);
        assert_eq!(config.seed, None);
    }
}
