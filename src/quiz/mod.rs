//! Quiz domain: problems, loading, ordering, and the timed session engine

pub mod input;
pub mod loader;
pub mod problem;
pub mod session;
pub mod shuffle;

pub use input::{AnswerSource, ScriptedAnswers, StdinAnswers};
pub use loader::{load_problems, parse_problems};
pub use problem::{normalize, Problem};
pub use session::{QuizSession, SessionConfig, SessionResult, DEFAULT_TIME_LIMIT};
pub use shuffle::{seeded_rng, shuffle_problems, time_seed};

use tracing::debug;

/// Apply the configured ordering to a freshly loaded problem set
pub fn prepare_problems(mut problems: Vec<Problem>, config: &SessionConfig) -> Vec<Problem> {
    if config.shuffle {
        let seed = config.seed.unwrap_or_else(time_seed);
        debug!("Shuffling {} problems with seed {}", problems.len(), seed);
        shuffle_problems(&mut problems, &mut seeded_rng(seed));
    }
    problems
}
